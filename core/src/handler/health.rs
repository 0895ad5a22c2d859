use actix_web::HttpResponse;

use crate::types::judge::HealthResponse;

pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::default())
}
