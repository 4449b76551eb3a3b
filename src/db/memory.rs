use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Mutex;

use super::{RecordStore, StoreError};

/// In-memory store used in tests in place of a running MongoDB. Keeps the
/// same contract: append-only collections, `find_all` ordered by
/// `created_at` descending.
#[derive(Default)]
pub struct MemoryStore {
    collections: Mutex<HashMap<String, Vec<Value>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn insert(&self, collection: &str, document: Value) -> Result<(), StoreError> {
        self.collections
            .lock()
            .await
            .entry(collection.to_string())
            .or_default()
            .push(document);
        Ok(())
    }

    async fn find_all(&self, collection: &str) -> Result<Vec<Value>, StoreError> {
        let collections = self.collections.lock().await;
        let mut documents = collections.get(collection).cloned().unwrap_or_default();
        // created_at is stored in a fixed-width RFC 3339 form, so the string
        // order is the chronological order.
        documents.sort_by(|a, b| {
            let a_key = a.get("created_at").and_then(Value::as_str).unwrap_or("");
            let b_key = b.get("created_at").and_then(Value::as_str).unwrap_or("");
            b_key.cmp(a_key)
        });
        Ok(documents)
    }

    async fn count(&self, collection: &str) -> Result<u64, StoreError> {
        let collections = self.collections.lock().await;
        Ok(collections.get(collection).map_or(0, |docs| docs.len() as u64))
    }

    async fn sum_field(&self, collection: &str, field: &str) -> Result<f64, StoreError> {
        let collections = self.collections.lock().await;
        Ok(collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .filter_map(|doc| doc.get(field).and_then(Value::as_f64))
                    .sum()
            })
            .unwrap_or(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn find_all_orders_newest_first() {
        let store = MemoryStore::new();
        for (id, stamp) in [
            ("a", "2026-01-01T00:00:00.000000Z"),
            ("c", "2026-01-03T00:00:00.000000Z"),
            ("b", "2026-01-02T00:00:00.000000Z"),
        ] {
            store
                .insert("donations", json!({ "id": id, "created_at": stamp }))
                .await
                .expect("insert");
        }

        let docs = store.find_all("donations").await.expect("find_all");
        let ids: Vec<&str> = docs
            .iter()
            .map(|d| d["id"].as_str().expect("id"))
            .collect();
        assert_eq!(ids, vec!["c", "b", "a"]);
    }

    #[tokio::test]
    async fn empty_collection_counts_and_sums_to_zero() {
        let store = MemoryStore::new();
        assert_eq!(store.count("donations").await.expect("count"), 0);
        assert_eq!(
            store.sum_field("donations", "amount").await.expect("sum"),
            0.0
        );
    }

    #[tokio::test]
    async fn sum_skips_missing_and_non_numeric_fields() {
        let store = MemoryStore::new();
        store
            .insert("donations", json!({ "id": "1", "amount": 100.0 }))
            .await
            .expect("insert");
        store
            .insert("donations", json!({ "id": "2", "amount": 50.5 }))
            .await
            .expect("insert");
        store
            .insert("donations", json!({ "id": "3", "amount": "oops" }))
            .await
            .expect("insert");
        store
            .insert("donations", json!({ "id": "4" }))
            .await
            .expect("insert");

        assert_eq!(store.count("donations").await.expect("count"), 4);
        assert_eq!(
            store.sum_field("donations", "amount").await.expect("sum"),
            150.5
        );
    }
}
