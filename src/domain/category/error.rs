use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum CategoryServiceError {
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error("category not found")]
    NotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<AppError> for CategoryServiceError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::NotFound(_) => CategoryServiceError::NotFound,
            _ => CategoryServiceError::Dependency(err.to_string()),
        }
    }
}

impl From<CategoryServiceError> for AppError {
    fn from(err: CategoryServiceError) -> Self {
        match err {
            CategoryServiceError::NotFound => {
                AppError::NotFound("Category not found".to_string())
            }
            CategoryServiceError::Dependency(msg) => AppError::UpstreamFetch(msg),
            CategoryServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
