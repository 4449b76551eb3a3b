use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::AppError;

#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

pub trait Validate {
    fn validate(&self) -> Vec<FieldError>;
}

/// Json extractor that runs payload validation before the handler body, so
/// no document is written for a request that fails validation. Decode
/// failures (malformed JSON, missing or mistyped fields) and field-level
/// failures both map to 422.
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::MalformedBody(rejection.body_text()))?;

        let errors = payload.validate();
        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }
        Ok(Self(payload))
    }
}

pub fn require_non_empty(field: &'static str, value: &str, errors: &mut Vec<FieldError>) {
    if value.is_empty() {
        errors.push(FieldError {
            field,
            message: "must not be empty".to_string(),
        });
    }
}

pub fn require_email(field: &'static str, value: &str, errors: &mut Vec<FieldError>) {
    if !is_valid_email(value) {
        errors.push(FieldError {
            field,
            message: "is not a valid email address".to_string(),
        });
    }
}

// Syntax check only: one local part, one domain with at least one dot and no
// empty labels. Deliverability is out of scope.
pub fn is_valid_email(value: &str) -> bool {
    if value.is_empty() || value.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = value.splitn(2, '@');
    let (Some(local), Some(domain)) = (parts.next(), parts.next()) else {
        return false;
    };

    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.split('.').any(str::is_empty)
}
