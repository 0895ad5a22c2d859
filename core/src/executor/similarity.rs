use crate::error::JudgeError;
use crate::types::judge::{SimilarityRequest, SimilarityResponse};

use super::context::ExecutorContext;
use super::prompts::{similarity_prompt, SIMILARITY_SYSTEM_PROMPT};

/// Scores `user_text` against the first AI answer stored for the question.
pub async fn judge_similarity(
    ctx: &ExecutorContext,
    request: &SimilarityRequest,
) -> Result<SimilarityResponse, JudgeError> {
    let model = ctx.providers.get(&request.model)?;

    let reference = ctx
        .store
        .ai_answers(&request.question_id)
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| {
            JudgeError::NotFound(format!(
                "AI answer not found for question {}",
                request.question_id
            ))
        })?;

    let prompt = similarity_prompt(&reference.content, &request.user_text)?;
    let score = ctx
        .score(model.as_ref(), SIMILARITY_SYSTEM_PROMPT, &prompt)
        .await
        .ok_or_else(|| {
            JudgeError::NoValidScore(format!(
                "{} did not return a valid score",
                model.display_name()
            ))
        })?;

    tracing::info!(
        target: "answer_judge::executor::similarity",
        "{} similarity for question {}: {score}",
        model.display_name(),
        request.question_id
    );

    Ok(SimilarityResponse {
        similarity: request.score_type.present(score),
    })
}
