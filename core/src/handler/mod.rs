pub mod answers;
pub mod health;
pub mod judge;
pub mod questions;


use actix_web::web;

use crate::JudgeApiError;

/// Malformed or incomplete bodies come back as a 400 with the usual
/// `{"error": ..}` shape instead of actix's plain-text default.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| JudgeApiError::JsonPayload(err.to_string()).into())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/health", web::get().to(health::health))
        .route("/similarity", web::post().to(judge::similarity))
        .route("/reasonableness", web::post().to(judge::reasonableness))
        .route(
            "/multi_similarity_reasonableness",
            web::post().to(judge::multi_similarity_reasonableness),
        )
        .route("/gen_ai_answers", web::post().to(answers::gen_ai_answers))
        .route("/questions", web::post().to(questions::create_question));
}
