use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum PagesServiceError {
    #[error("page not found")]
    NotFound,
}

impl From<PagesServiceError> for AppError {
    fn from(err: PagesServiceError) -> Self {
        match err {
            PagesServiceError::NotFound => AppError::NotFound("Page not found".to_string()),
        }
    }
}
