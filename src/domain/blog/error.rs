use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum BlogServiceError {
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error("post not found")]
    NotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<AppError> for BlogServiceError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::NotFound(_) => BlogServiceError::NotFound,
            _ => BlogServiceError::Dependency(err.to_string()),
        }
    }
}

impl From<BlogServiceError> for AppError {
    fn from(err: BlogServiceError) -> Self {
        match err {
            BlogServiceError::NotFound => AppError::NotFound("Post not found".to_string()),
            BlogServiceError::Dependency(msg) => AppError::UpstreamFetch(msg),
            BlogServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
