use actix_web::{web, HttpResponse};
use tracing_futures::Instrument;

use crate::executor::answers::generate_answers;
use crate::executor::ExecutorContext;
use crate::types::judge::GenerateAnswersRequest;
use crate::JudgeApiError;

pub async fn gen_ai_answers(
    request: web::Json<GenerateAnswersRequest>,
    ctx: web::Data<ExecutorContext>,
) -> Result<HttpResponse, JudgeApiError> {
    let request = request.into_inner();
    let span = tracing::info_span!(
        target: "answer_judge::handler",
        "gen_ai_answers",
        question_id = ?request.question_id,
        category_name = ?request.category_name,
    );

    let response = generate_answers(&ctx, &request).instrument(span).await?;
    Ok(HttpResponse::Ok().json(response))
}
