use actix_web::{web, HttpResponse};
use tracing_futures::Instrument;

use crate::executor::questions::find_or_create_question;
use crate::executor::ExecutorContext;
use crate::types::judge::CreateQuestionRequest;
use crate::JudgeApiError;

pub async fn create_question(
    request: web::Json<CreateQuestionRequest>,
    ctx: web::Data<ExecutorContext>,
) -> Result<HttpResponse, JudgeApiError> {
    let request = request.into_inner();
    let span = tracing::info_span!(
        target: "answer_judge::handler",
        "create_question",
        title = %request.title,
    );

    let response = find_or_create_question(&ctx, &request)
        .instrument(span)
        .await?;
    Ok(HttpResponse::Ok().json(response))
}
