//! Client for the third-party email relay behind the contact form.

use crate::error::{AppError, AppResult};
use async_trait::async_trait;
use serde_json::json;

/// Boundary to the email relay. One attempt per submission.
#[async_trait]
pub trait EmailRelay: Send + Sync {
    async fn send(&self, name: &str, email: &str, message: &str) -> AppResult<()>;
}

/// EmailJS-style relay: a service id, a template id, and a public key,
/// with the form fields passed through as template parameters.
pub struct EmailJsRelay {
    api_url: String,
    service_id: String,
    template_id: String,
    public_key: String,
    http_client: reqwest::Client,
}

impl EmailJsRelay {
    pub fn new(
        api_url: String,
        service_id: String,
        template_id: String,
        public_key: String,
    ) -> Self {
        Self {
            api_url,
            service_id,
            template_id,
            public_key,
            http_client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl EmailRelay for EmailJsRelay {
    async fn send(&self, name: &str, email: &str, message: &str) -> AppResult<()> {
        let payload = json!({
            "service_id": self.service_id,
            "template_id": self.template_id,
            "user_id": self.public_key,
            "template_params": {
                "name": name,
                "email": email,
                "message": message,
            },
        });

        let response = self
            .http_client
            .post(format!("{}/api/v1.0/email/send", self.api_url))
            .json(&payload)
            .send()
            .await
            .map_err(|e| AppError::ExternalService(format!("email relay unreachable: {}", e)))?;

        if !response.status().is_success() {
            let detail = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(AppError::ExternalService(format!(
                "email relay rejected the message: {}",
                detail
            )));
        }

        Ok(())
    }
}
