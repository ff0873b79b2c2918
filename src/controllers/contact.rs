use axum::{extract::State, Json};
use std::sync::Arc;

use crate::{
    domain::contact::{ContactRequest, ContactResponse, ContactService, ContactServiceApi},
    error::AppResult,
};

pub struct ContactController {
    contact_service: Arc<ContactService>,
}

impl ContactController {
    pub fn new(contact_service: Arc<ContactService>) -> Self {
        Self { contact_service }
    }

    /// POST /api/contact - relay a contact-form submission
    pub async fn submit(
        State(controller): State<Arc<ContactController>>,
        Json(request): Json<ContactRequest>,
    ) -> AppResult<Json<ContactResponse>> {
        controller.contact_service.send(request).await?;
        Ok(Json(ContactResponse::sent()))
    }
}
