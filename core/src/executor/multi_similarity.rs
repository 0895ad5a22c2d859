use crate::error::JudgeError;
use crate::types::judge::{
    MultiSimilarityRequest, MultiSimilarityResponse, ReasonablenessEntry, SimilarityEntry,
};

use super::context::ExecutorContext;
use super::prompts::{similarity_prompt, SIMILARITY_SYSTEM_PROMPT};
use super::reasonableness::score_reasonableness;

/// Similarity against every stored AI answer plus one reasonableness score
/// per provider. Provider failures show up as `null` entries.
pub async fn judge_multi_similarity(
    ctx: &ExecutorContext,
    request: &MultiSimilarityRequest,
) -> Result<MultiSimilarityResponse, JudgeError> {
    let sim_model = ctx.providers.get(&request.sim_model)?;

    let answers = ctx.store.ai_answers(&request.question_id).await?;
    if answers.is_empty() {
        return Err(JudgeError::NotFound(format!(
            "AI answers not found for question {}",
            request.question_id
        )));
    }

    let question = ctx
        .store
        .question_by_id(&request.question_id)
        .await?
        .ok_or_else(|| {
            JudgeError::NotFound(format!("Question {} not found", request.question_id))
        })?;

    let mut similarities = Vec::with_capacity(answers.len());
    for answer in &answers {
        let prompt = similarity_prompt(&answer.content, &request.user_text)?;
        let score = ctx
            .score(sim_model.as_ref(), SIMILARITY_SYSTEM_PROMPT, &prompt)
            .await;
        similarities.push(SimilarityEntry {
            ai_name: answer.ai_name.clone(),
            similarity: request.score_type.present_opt(score),
        });
    }

    let reasonableness = score_reasonableness(ctx, &question.body, &request.user_text)
        .await?
        .into_iter()
        .map(|(model, score)| ReasonablenessEntry {
            model,
            score: request.score_type.present_opt(score),
        })
        .collect();

    Ok(MultiSimilarityResponse {
        similarities,
        reasonableness,
    })
}
