use crate::database::NewQuestion;
use crate::error::JudgeError;
use crate::types::judge::{CreateQuestionRequest, CreateQuestionResponse};

use super::context::ExecutorContext;

/// Returns the id of a stored question with the same title and body, creating
/// the question when there is none.
pub async fn find_or_create_question(
    ctx: &ExecutorContext,
    request: &CreateQuestionRequest,
) -> Result<CreateQuestionResponse, JudgeError> {
    if request.title.trim().is_empty() || request.body.trim().is_empty() {
        return Err(JudgeError::InvalidArgument(
            "title and body must not be empty".to_string(),
        ));
    }

    let existing = ctx
        .store
        .search_questions(&request.title)
        .await?
        .into_iter()
        .find(|q| q.title == request.title && q.body == request.body);

    if let Some(question) = existing {
        tracing::debug!(target: "answer_judge::executor::questions", "Reusing question {}", question.id);
        return Ok(CreateQuestionResponse {
            question_id: question.id,
            created: false,
        });
    }

    let question_id = ctx
        .store
        .create_question(&NewQuestion {
            title: request.title.clone(),
            body: request.body.clone(),
            main_category: request.main_category.clone(),
            sub_category: request.sub_category.clone(),
            user_id: request.user_id.clone().filter(|id| !id.is_empty()),
        })
        .await?;

    tracing::info!(target: "answer_judge::executor::questions", "Created question {question_id}");
    Ok(CreateQuestionResponse {
        question_id,
        created: true,
    })
}
