use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

pub mod memory;
pub mod models;
pub mod mongo;

pub use memory::MemoryStore;
pub use mongo::MongoStore;

pub const DONATIONS: &str = "donations";
pub const CONTACTS: &str = "contacts";

#[derive(Debug, Error)]
#[error("{0}")]
pub struct StoreError(pub String);

/// Append-only document store over named collections. Writes are atomic per
/// document and attempted exactly once; any backend failure surfaces as a
/// `StoreError` for the caller to wrap.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn insert(&self, collection: &str, document: Value) -> Result<(), StoreError>;

    /// All documents in the collection, ordered by `created_at` descending.
    async fn find_all(&self, collection: &str) -> Result<Vec<Value>, StoreError>;

    async fn count(&self, collection: &str) -> Result<u64, StoreError>;

    /// Sum of a numeric field across the collection. Documents where the
    /// field is missing or non-numeric contribute nothing; an empty
    /// collection sums to 0.
    async fn sum_field(&self, collection: &str, field: &str) -> Result<f64, StoreError>;
}
