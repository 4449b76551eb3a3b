use axum::{extract::State, Json};
use serde::Deserialize;

use crate::db::models::Donation;
use crate::error::AppError;
use crate::validation::{require_email, require_non_empty, FieldError, Validate, ValidatedJson};
use crate::AppState;

#[derive(Deserialize)]
pub struct CreateDonationRequest {
    pub amount: f64,
    pub donor_name: String,
    pub donor_email: String,
    pub message: Option<String>,
}

impl Validate for CreateDonationRequest {
    fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        // Amount stays unchecked beyond being a number; negative and zero
        // donations are accepted.
        require_non_empty("donor_name", &self.donor_name, &mut errors);
        require_email("donor_email", &self.donor_email, &mut errors);
        errors
    }
}

pub async fn create_donation(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateDonationRequest>,
) -> Result<Json<Donation>, AppError> {
    let donation = state
        .donations
        .submit(req.amount, req.donor_name, req.donor_email, req.message)
        .await?;
    Ok(Json(donation))
}

pub async fn list_donations(
    State(state): State<AppState>,
) -> Result<Json<Vec<Donation>>, AppError> {
    Ok(Json(state.donations.list().await?))
}
