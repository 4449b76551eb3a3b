use std::sync::Arc;

use serde::Serialize;

use crate::db::{RecordStore, CONTACTS, DONATIONS};
use crate::error::AppError;

const STATS_CONTEXT: &str = "Error fetching stats";

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct StatsSummary {
    pub total_donations: u64,
    pub total_amount: f64,
    pub total_contacts: u64,
}

#[derive(Clone)]
pub struct StatsService {
    store: Arc<dyn RecordStore>,
}

impl StatsService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub async fn summary(&self) -> Result<StatsSummary, AppError> {
        let total_donations = self
            .store
            .count(DONATIONS)
            .await
            .map_err(AppError::storage(STATS_CONTEXT))?;
        let total_amount = self
            .store
            .sum_field(DONATIONS, "amount")
            .await
            .map_err(AppError::storage(STATS_CONTEXT))?;
        let total_contacts = self
            .store
            .count(CONTACTS)
            .await
            .map_err(AppError::storage(STATS_CONTEXT))?;

        Ok(StatsSummary {
            total_donations,
            total_amount,
            total_contacts,
        })
    }
}
