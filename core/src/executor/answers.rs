use crate::database::{NewAiAnswer, Question};
use crate::error::JudgeError;
use crate::types::judge::{GenerateAnswersRequest, GenerateAnswersResponse, GeneratedAnswer};

use super::context::ExecutorContext;

macro_rules! target {
    () => {
        "answer_judge::executor::answers"
    };
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

async fn resolve_question(
    ctx: &ExecutorContext,
    request: &GenerateAnswersRequest,
) -> Result<Question, JudgeError> {
    match (
        non_empty(&request.question_id),
        non_empty(&request.category_name),
    ) {
        (Some(id), _) => ctx
            .store
            .question_by_id(id)
            .await?
            .ok_or_else(|| JudgeError::NotFound(format!("Question {id} not found"))),
        (None, Some(category)) => ctx
            .store
            .questions_by_category(category)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| {
                JudgeError::NotFound(format!("No questions in category {category}"))
            }),
        (None, None) => Err(JudgeError::InvalidArgument(
            "question_id or category_name must be provided".to_string(),
        )),
    }
}

/// Has every provider answer the question in its persona and stores each
/// reply as an AI answer. A provider that fails is skipped as long as at
/// least one answer gets stored; repeated calls store new answers every time.
pub async fn generate_answers(
    ctx: &ExecutorContext,
    request: &GenerateAnswersRequest,
) -> Result<GenerateAnswersResponse, JudgeError> {
    let question = resolve_question(ctx, request).await?;

    let mut answers = Vec::new();
    let mut failures = Vec::new();
    for model in ctx.providers.all() {
        let content = match ctx.answer(model.as_ref(), &question.body).await {
            Ok(content) => content,
            Err(e) => {
                tracing::error!(target: target!(), "{} failed to answer {}: {e}", model.display_name(), question.id);
                failures.push(format!("{}: {e}", model.display_name()));
                continue;
            }
        };

        let new_answer = NewAiAnswer {
            question_id: question.id.clone(),
            content,
            ai_name: model.display_name().to_string(),
        };
        match ctx.store.create_ai_answer(&new_answer).await {
            Ok(answer_id) => {
                tracing::info!(target: target!(), "Stored {} answer {answer_id} for {}", model.display_name(), question.id);
                answers.push(GeneratedAnswer {
                    ai_name: new_answer.ai_name,
                    answer_id,
                });
            }
            Err(e) => {
                tracing::error!(target: target!(), "Failed to store {} answer for {}: {e}", model.display_name(), question.id);
                failures.push(format!("{}: {e}", model.display_name()));
            }
        }
    }

    if answers.is_empty() {
        return Err(JudgeError::GenerationFailed(format!(
            "No AI answer stored for question {}: {}",
            question.id,
            failures.join("; ")
        )));
    }

    Ok(GenerateAnswersResponse {
        msg: "AI answers generated and stored".to_string(),
        question_id: question.id,
        answers,
    })
}
