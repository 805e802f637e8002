use thiserror::Error;

#[derive(Debug, Error)]
pub enum LogbookError {
    #[error("Required element not found: {0}")]
    MissingElement(String),
    #[error("JavaScript error: {0}")]
    Js(String),
    #[error("Invalid page config: {0}")]
    Config(#[from] serde_json::Error),
}
