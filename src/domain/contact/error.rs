use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum ContactServiceError {
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("relay error: {0}")]
    Relay(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<ContactServiceError> for AppError {
    fn from(err: ContactServiceError) -> Self {
        match err {
            ContactServiceError::Invalid(msg) => AppError::BadRequest(msg),
            ContactServiceError::Relay(msg) => AppError::ExternalService(msg),
            ContactServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
