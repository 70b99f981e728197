use thiserror::Error;

#[derive(Error, Debug)]
pub enum PulseError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid transition: {0}")]
    InvalidTransition(String),

    #[error("Classifier error: {0}")]
    Classifier(String),

    #[error("Classifier unavailable: {0}")]
    ClassifierUnavailable(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, PulseError>;
