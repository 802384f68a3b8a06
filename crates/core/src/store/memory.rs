use super::DocumentStore;
use crate::constants::ID_FIELD;
use crate::error::{StoreError, StoreResult};
use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Bson, Document};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-process store keeping each collection as an insertion-ordered vector.
///
/// Clones share the same collections. Unique fields are checked under the same write lock as
/// the insert, so concurrent inserts of one value cannot both succeed.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Collections>>,
}

#[derive(Debug, Default)]
struct Collections {
    documents: HashMap<String, Vec<Document>>,
    unique_fields: HashMap<String, Vec<String>>,
}

impl Collections {
    fn violates_unique(&self, collection: &str, document: &Document) -> bool {
        let Some(fields) = self.unique_fields.get(collection) else {
            return false;
        };
        let existing = self.documents.get(collection).map(Vec::as_slice).unwrap_or(&[]);
        fields.iter().any(|field| {
            document.get(field).is_some_and(|value| {
                existing
                    .iter()
                    .any(|other| other.get(field) == Some(value))
            })
        })
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn matches(document: &Document, filter: &Document) -> bool {
    filter
        .iter()
        .all(|(key, expected)| document.get(key) == Some(expected))
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn find(&self, collection: &str, filter: Document) -> StoreResult<Vec<Document>> {
        let inner = self.inner.read().await;
        Ok(inner
            .documents
            .get(collection)
            .map(|documents| {
                documents
                    .iter()
                    .filter(|document| matches(document, &filter))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn find_one(&self, collection: &str, filter: Document) -> StoreResult<Option<Document>> {
        let inner = self.inner.read().await;
        Ok(inner.documents.get(collection).and_then(|documents| {
            documents
                .iter()
                .find(|document| matches(document, &filter))
                .cloned()
        }))
    }

    async fn insert_one(&self, collection: &str, document: Document) -> StoreResult<Bson> {
        let id = document
            .get(ID_FIELD)
            .cloned()
            .unwrap_or_else(|| Bson::ObjectId(ObjectId::new()));

        // Keep `_id` first, as the server does.
        let mut stored = Document::new();
        stored.insert(ID_FIELD, id.clone());
        for (key, value) in document {
            if key != ID_FIELD {
                stored.insert(key, value);
            }
        }

        let mut inner = self.inner.write().await;
        if inner.violates_unique(collection, &stored) {
            return Err(StoreError::DuplicateKey {
                collection: collection.to_string(),
            });
        }
        inner
            .documents
            .entry(collection.to_string())
            .or_default()
            .push(stored);
        Ok(id)
    }

    async fn ensure_unique_index(&self, collection: &str, field: &str) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        let fields = inner.unique_fields.entry(collection.to_string()).or_default();
        if !fields.iter().any(|f| f == field) {
            fields.push(field.to_string());
        }
        Ok(())
    }
}
