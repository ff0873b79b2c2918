pub mod error;
pub mod service;

pub use error::ContactServiceError;
pub use service::{ContactService, ContactServiceApi};

use serde::{Deserialize, Serialize};

/// A contact-form submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ContactResponse {
    pub status: String,
}

impl ContactResponse {
    pub fn sent() -> Self {
        Self {
            status: "sent".to_string(),
        }
    }
}
