use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::db::models::Donation;
use crate::db::{RecordStore, StoreError, DONATIONS};
use crate::error::AppError;

// Every donation is recorded as completed; there is no payment lifecycle.
pub const STATUS_COMPLETED: &str = "completed";

const CREATE_CONTEXT: &str = "Error creating donation";
const FETCH_CONTEXT: &str = "Error fetching donations";

#[derive(Clone)]
pub struct DonationService {
    store: Arc<dyn RecordStore>,
}

impl DonationService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub async fn submit(
        &self,
        amount: f64,
        donor_name: String,
        donor_email: String,
        message: Option<String>,
    ) -> Result<Donation, AppError> {
        let donation = Donation {
            id: Uuid::new_v4().to_string(),
            amount,
            donor_name,
            donor_email,
            message: message.unwrap_or_default(),
            created_at: Utc::now(),
            status: STATUS_COMPLETED.to_string(),
        };

        let document = serde_json::to_value(&donation)
            .map_err(|e| StoreError(e.to_string()))
            .map_err(AppError::storage(CREATE_CONTEXT))?;
        self.store
            .insert(DONATIONS, document)
            .await
            .map_err(AppError::storage(CREATE_CONTEXT))?;

        Ok(donation)
    }

    pub async fn list(&self) -> Result<Vec<Donation>, AppError> {
        let documents = self
            .store
            .find_all(DONATIONS)
            .await
            .map_err(AppError::storage(FETCH_CONTEXT))?;

        documents
            .into_iter()
            .map(|doc| {
                serde_json::from_value(doc)
                    .map_err(|e| StoreError(e.to_string()))
                    .map_err(AppError::storage(FETCH_CONTEXT))
            })
            .collect()
    }
}
