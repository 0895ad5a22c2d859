use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::score::{ScoreType, ScoreValue};

fn default_model() -> String {
    "kimi".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "healthy".to_string(),
            message: "API is running".to_string(),
        }
    }
}

/// The id is the question the reference answers belong to; older clients
/// send it as `ai_ans_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarityRequest {
    #[serde(alias = "ai_ans_id")]
    pub question_id: String,
    pub user_text: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default)]
    pub score_type: ScoreType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityResponse {
    pub similarity: ScoreValue,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReasonablenessRequest {
    pub question_id: String,
    pub user_text: String,
    #[serde(default)]
    pub score_type: ScoreType,
}

/// Serialized as `{"<provider>_score": .., "average": ..}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReasonablenessResponse {
    #[serde(flatten)]
    pub scores: IndexMap<String, Option<ScoreValue>>,
    pub average: ScoreValue,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultiSimilarityRequest {
    pub question_id: String,
    pub user_text: String,
    #[serde(default = "default_model")]
    pub sim_model: String,
    /// Kept for older clients; every provider judges reasonableness.
    #[serde(default = "default_model")]
    pub reason_model: String,
    #[serde(default)]
    pub score_type: ScoreType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityEntry {
    pub ai_name: String,
    pub similarity: Option<ScoreValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReasonablenessEntry {
    pub model: String,
    pub score: Option<ScoreValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiSimilarityResponse {
    pub similarities: Vec<SimilarityEntry>,
    pub reasonableness: Vec<ReasonablenessEntry>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateAnswersRequest {
    #[serde(default)]
    pub question_id: Option<String>,
    #[serde(default)]
    pub category_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedAnswer {
    pub ai_name: String,
    pub answer_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateAnswersResponse {
    pub msg: String,
    pub question_id: String,
    pub answers: Vec<GeneratedAnswer>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateQuestionRequest {
    pub title: String,
    pub body: String,
    pub main_category: String,
    pub sub_category: String,
    #[serde(default)]
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateQuestionResponse {
    pub question_id: String,
    pub created: bool,
}
