use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, to_document, Bson, Document},
    Client, Database,
};
use serde_json::Value;

use super::{RecordStore, StoreError};

/// MongoDB-backed store. One client is created at startup and shared for the
/// process lifetime; the driver connects lazily, so construction succeeds
/// even when the backend is unreachable.
#[derive(Clone)]
pub struct MongoStore {
    db: Database,
}

impl MongoStore {
    pub async fn connect(url: &str, database: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(url)
            .await
            .map_err(|e| StoreError(e.to_string()))?;
        Ok(Self {
            db: client.database(database),
        })
    }
}

#[async_trait]
impl RecordStore for MongoStore {
    async fn insert(&self, collection: &str, document: Value) -> Result<(), StoreError> {
        let doc = to_document(&document).map_err(|e| StoreError(e.to_string()))?;
        self.db
            .collection::<Document>(collection)
            .insert_one(doc)
            .await
            .map_err(|e| StoreError(e.to_string()))?;
        Ok(())
    }

    async fn find_all(&self, collection: &str) -> Result<Vec<Value>, StoreError> {
        let mut cursor = self
            .db
            .collection::<Document>(collection)
            .find(doc! {})
            .sort(doc! { "created_at": -1 })
            .await
            .map_err(|e| StoreError(e.to_string()))?;

        let mut documents = Vec::new();
        while let Some(mut doc) = cursor
            .try_next()
            .await
            .map_err(|e| StoreError(e.to_string()))?
        {
            // The driver injects an ObjectId that is not part of the record.
            doc.remove("_id");
            let value = serde_json::to_value(&doc).map_err(|e| StoreError(e.to_string()))?;
            documents.push(value);
        }
        Ok(documents)
    }

    async fn count(&self, collection: &str) -> Result<u64, StoreError> {
        self.db
            .collection::<Document>(collection)
            .count_documents(doc! {})
            .await
            .map_err(|e| StoreError(e.to_string()))
    }

    async fn sum_field(&self, collection: &str, field: &str) -> Result<f64, StoreError> {
        let pipeline = vec![doc! {
            "$group": { "_id": null, "total": { "$sum": format!("${field}") } }
        }];

        let mut cursor = self
            .db
            .collection::<Document>(collection)
            .aggregate(pipeline)
            .await
            .map_err(|e| StoreError(e.to_string()))?;

        // The group stage emits no row for an empty collection.
        match cursor
            .try_next()
            .await
            .map_err(|e| StoreError(e.to_string()))?
        {
            Some(doc) => Ok(match doc.get("total") {
                Some(Bson::Double(v)) => *v,
                Some(Bson::Int32(v)) => f64::from(*v),
                Some(Bson::Int64(v)) => *v as f64,
                _ => 0.0,
            }),
            None => Ok(0.0),
        }
    }
}
