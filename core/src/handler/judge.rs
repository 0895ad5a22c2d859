use actix_web::{web, HttpResponse};
use tracing_futures::Instrument;

use crate::executor::multi_similarity::judge_multi_similarity;
use crate::executor::reasonableness::judge_reasonableness;
use crate::executor::similarity::judge_similarity;
use crate::executor::ExecutorContext;
use crate::types::judge::{MultiSimilarityRequest, ReasonablenessRequest, SimilarityRequest};
use crate::JudgeApiError;

pub async fn similarity(
    request: web::Json<SimilarityRequest>,
    ctx: web::Data<ExecutorContext>,
) -> Result<HttpResponse, JudgeApiError> {
    let request = request.into_inner();
    let span = tracing::info_span!(
        target: "answer_judge::handler",
        "similarity",
        question_id = %request.question_id,
        model = %request.model,
    );

    let response = judge_similarity(&ctx, &request).instrument(span).await?;
    Ok(HttpResponse::Ok().json(response))
}

pub async fn reasonableness(
    request: web::Json<ReasonablenessRequest>,
    ctx: web::Data<ExecutorContext>,
) -> Result<HttpResponse, JudgeApiError> {
    let request = request.into_inner();
    let span = tracing::info_span!(
        target: "answer_judge::handler",
        "reasonableness",
        question_id = %request.question_id,
    );

    let response = judge_reasonableness(&ctx, &request)
        .instrument(span)
        .await?;
    Ok(HttpResponse::Ok().json(response))
}

pub async fn multi_similarity_reasonableness(
    request: web::Json<MultiSimilarityRequest>,
    ctx: web::Data<ExecutorContext>,
) -> Result<HttpResponse, JudgeApiError> {
    let request = request.into_inner();
    let span = tracing::info_span!(
        target: "answer_judge::handler",
        "multi_similarity_reasonableness",
        question_id = %request.question_id,
        sim_model = %request.sim_model,
    );

    let response = judge_multi_similarity(&ctx, &request)
        .instrument(span)
        .await?;
    Ok(HttpResponse::Ok().json(response))
}
