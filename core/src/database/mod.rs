pub mod convex;
pub mod error;

use async_trait::async_trait;
use error::StoreError;
use serde::{Deserialize, Serialize};

pub type StoreResult<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub body: String,
    pub main_category: String,
    pub sub_category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiAnswer {
    #[serde(rename = "_id")]
    pub id: String,
    pub question_id: String,
    pub content: String,
    #[serde(default = "unknown_ai_name")]
    pub ai_name: String,
}

fn unknown_ai_name() -> String {
    "unknown".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewQuestion {
    pub title: String,
    pub body: String,
    pub main_category: String,
    pub sub_category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAiAnswer {
    pub question_id: String,
    pub content: String,
    pub ai_name: String,
}

/// The document store holding questions and AI answers.
///
/// One method per remote function so that the procedure names live in a
/// single place (see [`convex::ConvexStore`]).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn question_by_id(&self, id: &str) -> StoreResult<Option<Question>>;

    async fn questions_by_category(&self, category_name: &str) -> StoreResult<Vec<Question>>;

    /// Keyword search over titles and bodies.
    async fn search_questions(&self, keyword: &str) -> StoreResult<Vec<Question>>;

    async fn ai_answers(&self, question_id: &str) -> StoreResult<Vec<AiAnswer>>;

    /// Returns the id of the new question.
    async fn create_question(&self, question: &NewQuestion) -> StoreResult<String>;

    /// Returns the id of the new answer.
    async fn create_ai_answer(&self, answer: &NewAiAnswer) -> StoreResult<String>;
}
