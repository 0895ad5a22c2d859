use async_openai::error::OpenAIError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Credentials for '{0}' are invalid or missing")]
    CredentialsError(String),

    #[error("Model {0} not found, expected one of: {1}")]
    ModelNotFound(String, String),

    #[error("{provider} request failed with status {status}: {body}")]
    StatusError {
        provider: String,
        status: u16,
        body: String,
    },

    #[error("{provider} returned an error: {message}")]
    ProviderError { provider: String, message: String },

    #[error("{0} returned an empty reply")]
    EmptyReply(String),

    #[error("{0} did not answer within {1}s")]
    Timeout(String, u64),

    #[error(transparent)]
    OpenAIApi(#[from] OpenAIError),

    #[error(transparent)]
    ReqwestError(#[from] reqwest::Error),

    #[error(transparent)]
    SerdeError(#[from] serde_json::Error),
}
