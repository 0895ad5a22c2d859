use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store rejected arguments for {path}: {message}")]
    InvalidArgument { path: String, message: String },
    #[error("Store function {path} failed: {message}")]
    FunctionError { path: String, message: String },
    #[error("Store request {path} failed with status {status}: {body}")]
    StatusError {
        path: String,
        status: u16,
        body: String,
    },
    #[error("Unexpected store response for {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("RequestError: {0}")]
    RequestError(#[from] reqwest::Error),
}
