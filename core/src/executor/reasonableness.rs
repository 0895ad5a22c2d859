use indexmap::IndexMap;

use crate::error::JudgeError;
use crate::score::{mean, ScoreType};
use crate::types::judge::{ReasonablenessRequest, ReasonablenessResponse};

use super::context::ExecutorContext;
use super::prompts::{reasonableness_prompt, REASONABLENESS_SYSTEM_PROMPT};

/// Raw score of every provider, in registry order.
pub(crate) async fn score_reasonableness(
    ctx: &ExecutorContext,
    question: &str,
    user_text: &str,
) -> Result<Vec<(String, Option<f64>)>, JudgeError> {
    let prompt = reasonableness_prompt(question, user_text)?;

    let mut scores = Vec::with_capacity(ctx.providers.all().len());
    for model in ctx.providers.all() {
        let score = ctx
            .score(model.as_ref(), REASONABLENESS_SYSTEM_PROMPT, &prompt)
            .await;
        scores.push((model.name().to_string(), score));
    }
    Ok(scores)
}

/// Asks every provider how reasonable the answer is and averages the valid
/// scores. Fails only when no provider produced a score.
pub async fn judge_reasonableness(
    ctx: &ExecutorContext,
    request: &ReasonablenessRequest,
) -> Result<ReasonablenessResponse, JudgeError> {
    let question = ctx
        .store
        .question_by_id(&request.question_id)
        .await?
        .ok_or_else(|| {
            JudgeError::NotFound(format!("Question {} not found", request.question_id))
        })?;

    let scores = score_reasonableness(ctx, &question.body, &request.user_text).await?;
    let values = scores.iter().map(|(_, s)| *s).collect::<Vec<_>>();
    let average = mean(&values).ok_or_else(|| {
        JudgeError::NoValidScore("No model returned a valid score".to_string())
    })?;

    tracing::info!(
        target: "answer_judge::executor::reasonableness",
        "Reasonableness for question {}: {scores:?}, average {average}",
        request.question_id
    );

    Ok(build_response(scores, average, request.score_type))
}

fn build_response(
    scores: Vec<(String, Option<f64>)>,
    average: f64,
    score_type: ScoreType,
) -> ReasonablenessResponse {
    let scores: IndexMap<String, _> = scores
        .into_iter()
        .map(|(name, score)| (format!("{name}_score"), score_type.present_opt(score)))
        .collect();

    ReasonablenessResponse {
        scores,
        average: score_type.present(average),
    }
}
