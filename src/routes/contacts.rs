use axum::{extract::State, Json};
use serde::Deserialize;

use crate::db::models::Contact;
use crate::error::AppError;
use crate::validation::{require_email, require_non_empty, FieldError, Validate, ValidatedJson};
use crate::AppState;

#[derive(Deserialize)]
pub struct CreateContactRequest {
    pub name: String,
    pub email: String,
    // Unlike donations, the contact form requires a message.
    pub message: String,
}

impl Validate for CreateContactRequest {
    fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        require_non_empty("name", &self.name, &mut errors);
        require_email("email", &self.email, &mut errors);
        require_non_empty("message", &self.message, &mut errors);
        errors
    }
}

pub async fn create_contact(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateContactRequest>,
) -> Result<Json<Contact>, AppError> {
    let contact = state.contacts.submit(req.name, req.email, req.message).await?;
    Ok(Json(contact))
}

pub async fn list_contacts(State(state): State<AppState>) -> Result<Json<Vec<Contact>>, AppError> {
    Ok(Json(state.contacts.list().await?))
}
