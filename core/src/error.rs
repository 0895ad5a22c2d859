use crate::database::error::StoreError;
use crate::model::error::ModelError;
use thiserror::Error;

/// Failure classes reported to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    InvalidArgument,
    UpstreamUnavailable,
    NoValidScore,
    Internal,
}

#[derive(Error, Debug)]
pub enum JudgeError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    InvalidArgument(String),
    #[error("{0}")]
    NoValidScore(String),
    #[error("{0}")]
    GenerationFailed(String),
    #[error(transparent)]
    StoreError(#[from] StoreError),
    #[error(transparent)]
    ModelError(#[from] ModelError),
    #[error("Failed to render prompt: {0}")]
    TemplateError(#[from] minijinja::Error),
}

impl JudgeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            JudgeError::NotFound(_) => ErrorKind::NotFound,
            JudgeError::InvalidArgument(_)
            | JudgeError::StoreError(StoreError::InvalidArgument { .. })
            | JudgeError::ModelError(ModelError::ModelNotFound(_, _)) => ErrorKind::InvalidArgument,
            JudgeError::NoValidScore(_) => ErrorKind::NoValidScore,
            JudgeError::GenerationFailed(_)
            | JudgeError::StoreError(_)
            | JudgeError::ModelError(_) => ErrorKind::UpstreamUnavailable,
            JudgeError::TemplateError(_) => ErrorKind::Internal,
        }
    }
}
