use super::error::ContactServiceError;
use crate::domain::contact::ContactRequest;
use crate::infrastructure::email::EmailRelay;
use async_trait::async_trait;
use std::sync::Arc;

pub struct ContactService {
    relay: Arc<dyn EmailRelay>,
}

impl ContactService {
    pub fn new(relay: Arc<dyn EmailRelay>) -> Self {
        Self { relay }
    }
}

#[async_trait]
pub trait ContactServiceApi: Send + Sync {
    /// Validate a submission and forward it to the email relay.
    /// A single attempt; relay failures surface to the caller unchanged.
    async fn send(&self, request: ContactRequest) -> Result<(), ContactServiceError>;
}

#[async_trait]
impl ContactServiceApi for ContactService {
    async fn send(&self, request: ContactRequest) -> Result<(), ContactServiceError> {
        self.validate(&request)?;

        self.relay
            .send(&request.name, &request.email, &request.message)
            .await
            .map_err(|e| ContactServiceError::Relay(e.to_string()))?;

        Ok(())
    }
}

impl ContactService {
    fn validate(&self, request: &ContactRequest) -> Result<(), ContactServiceError> {
        if request.name.trim().is_empty() {
            return Err(ContactServiceError::Invalid("Name is required".to_string()));
        }
        if !request.email.contains('@') {
            return Err(ContactServiceError::Invalid(
                "Invalid email address".to_string(),
            ));
        }
        if request.message.trim().is_empty() {
            return Err(ContactServiceError::Invalid(
                "Message is required".to_string(),
            ));
        }
        Ok(())
    }
}
