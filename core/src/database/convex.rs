use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::error::StoreError;
use super::{AiAnswer, DocumentStore, NewAiAnswer, NewQuestion, Question, StoreResult};

const GET_QUESTION_BY_ID: &str = "question:getQuestionById";
const GET_QUESTIONS_BY_CATEGORY: &str = "question:getQuestionsByCategoryName";
const SEARCH_QUESTIONS: &str = "question:searchQuestions";
const GET_AI_ANSWERS: &str = "question:getAIAnswer";
const CREATE_QUESTION: &str = "question:createQuestion";
const CREATE_AI_ANSWER: &str = "question:createSampleAIAnswer";

#[derive(Clone, Copy, Debug)]
enum FunctionKind {
    Query,
    Mutation,
}

impl FunctionKind {
    fn endpoint(&self) -> &'static str {
        match self {
            FunctionKind::Query => "api/query",
            FunctionKind::Mutation => "api/mutation",
        }
    }
}

#[derive(Serialize)]
struct FunctionCall<'a> {
    path: &'a str,
    args: Value,
    format: &'static str,
}

#[derive(Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
enum FunctionResult {
    Success {
        value: Value,
    },
    Error {
        #[serde(rename = "errorMessage")]
        error_message: String,
    },
}

/// Convex deployment reached through its HTTP function API.
#[derive(Clone, Debug)]
pub struct ConvexStore {
    url: String,
    client: reqwest::Client,
}

impl ConvexStore {
    pub fn new(url: impl Into<String>, client: reqwest::Client) -> Self {
        let url = url.into();
        let url = url
            .trim_end_matches('/')
            .trim_end_matches("/api")
            .to_string();
        Self { url, client }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn call<T: DeserializeOwned>(
        &self,
        kind: FunctionKind,
        path: &str,
        args: Value,
    ) -> StoreResult<T> {
        let url = format!("{}/{}", self.url, kind.endpoint());
        tracing::debug!(target: "answer_judge::store", "Calling {path} with args {args}");

        let resp = self
            .client
            .post(url)
            .json(&FunctionCall {
                path,
                args,
                format: "json",
            })
            .send()
            .await?;

        let status = resp.status();
        let text = resp.text().await?;

        let result = match serde_json::from_str::<FunctionResult>(&text) {
            Ok(result) => result,
            Err(e) if status.is_success() => {
                tracing::error!(target: "answer_judge::store", "Response deserialize failed. Response: {text}");
                return Err(StoreError::Decode {
                    path: path.to_string(),
                    source: e,
                });
            }
            Err(_) => {
                return Err(StoreError::StatusError {
                    path: path.to_string(),
                    status: status.as_u16(),
                    body: text,
                })
            }
        };

        match result {
            FunctionResult::Success { value } => {
                serde_json::from_value(value).map_err(|e| StoreError::Decode {
                    path: path.to_string(),
                    source: e,
                })
            }
            FunctionResult::Error { error_message } => {
                tracing::error!(target: "answer_judge::store", "{path} failed: {error_message}");
                if error_message.contains("ArgumentValidationError") {
                    Err(StoreError::InvalidArgument {
                        path: path.to_string(),
                        message: error_message,
                    })
                } else {
                    Err(StoreError::FunctionError {
                        path: path.to_string(),
                        message: error_message,
                    })
                }
            }
        }
    }
}

#[async_trait]
impl DocumentStore for ConvexStore {
    async fn question_by_id(&self, id: &str) -> StoreResult<Option<Question>> {
        self.call(FunctionKind::Query, GET_QUESTION_BY_ID, json!({ "id": id }))
            .await
    }

    async fn questions_by_category(&self, category_name: &str) -> StoreResult<Vec<Question>> {
        self.call(
            FunctionKind::Query,
            GET_QUESTIONS_BY_CATEGORY,
            json!({ "categoryName": category_name }),
        )
        .await
    }

    async fn search_questions(&self, keyword: &str) -> StoreResult<Vec<Question>> {
        self.call(
            FunctionKind::Query,
            SEARCH_QUESTIONS,
            json!({ "keyword": keyword }),
        )
        .await
    }

    async fn ai_answers(&self, question_id: &str) -> StoreResult<Vec<AiAnswer>> {
        let answers: Option<Vec<AiAnswer>> = self
            .call(
                FunctionKind::Query,
                GET_AI_ANSWERS,
                json!({ "questionId": question_id }),
            )
            .await?;
        Ok(answers.unwrap_or_default())
    }

    async fn create_question(&self, question: &NewQuestion) -> StoreResult<String> {
        let args = serde_json::to_value(question).map_err(|e| StoreError::Decode {
            path: CREATE_QUESTION.to_string(),
            source: e,
        })?;
        self.call(FunctionKind::Mutation, CREATE_QUESTION, args).await
    }

    async fn create_ai_answer(&self, answer: &NewAiAnswer) -> StoreResult<String> {
        let args = serde_json::to_value(answer).map_err(|e| StoreError::Decode {
            path: CREATE_AI_ANSWER.to_string(),
            source: e,
        })?;
        self.call(FunctionKind::Mutation, CREATE_AI_ANSWER, args).await
    }
}
