use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::db::models::Contact;
use crate::db::{RecordStore, StoreError, CONTACTS};
use crate::error::AppError;

const CREATE_CONTEXT: &str = "Error creating contact";
const FETCH_CONTEXT: &str = "Error fetching contacts";

#[derive(Clone)]
pub struct ContactService {
    store: Arc<dyn RecordStore>,
}

impl ContactService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub async fn submit(
        &self,
        name: String,
        email: String,
        message: String,
    ) -> Result<Contact, AppError> {
        let contact = Contact {
            id: Uuid::new_v4().to_string(),
            name,
            email,
            message,
            created_at: Utc::now(),
        };

        let document = serde_json::to_value(&contact)
            .map_err(|e| StoreError(e.to_string()))
            .map_err(AppError::storage(CREATE_CONTEXT))?;
        self.store
            .insert(CONTACTS, document)
            .await
            .map_err(AppError::storage(CREATE_CONTEXT))?;

        Ok(contact)
    }

    pub async fn list(&self) -> Result<Vec<Contact>, AppError> {
        let documents = self
            .store
            .find_all(CONTACTS)
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
