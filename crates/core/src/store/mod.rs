//! Document store capability.
//!
//! Repositories only ever talk to a [`DocumentStore`]: collection-level `find`, `find_one` and
//! `insert_one` with equality filters on top-level fields. [`MongoStore`] is the production
//! backend; [`MemoryStore`] keeps everything in process and backs tests and local development.

mod memory;
mod mongo;

pub use memory::MemoryStore;
pub use mongo::MongoStore;

use crate::config::{CoreConfig, StoreBackend};
use crate::constants::{USER_COLLECTION, USER_EMAIL_FIELD};
use crate::error::{MenuResult, StoreResult};
use async_trait::async_trait;
use mongodb::bson::{Bson, Document};
use std::sync::Arc;

/// Store handle shared by every repository for the lifetime of the process.
pub type SharedStore = Arc<dyn DocumentStore>;

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Returns every document in `collection` matching `filter`, in natural order.
    ///
    /// An empty filter matches everything.
    async fn find(&self, collection: &str, filter: Document) -> StoreResult<Vec<Document>>;

    async fn find_one(&self, collection: &str, filter: Document) -> StoreResult<Option<Document>>;

    /// Inserts `document` and returns its `_id`, assigning one if the document has none.
    ///
    /// Fails with [`StoreError::DuplicateKey`](crate::error::StoreError::DuplicateKey) if the
    /// document repeats a value held by another document under a unique index.
    async fn insert_one(&self, collection: &str, document: Document) -> StoreResult<Bson>;

    /// Makes `field` unique across `collection`. Idempotent.
    async fn ensure_unique_index(&self, collection: &str, field: &str) -> StoreResult<()>;
}

/// Opens the configured store backend and creates the indexes the repositories rely on.
///
/// Called once at startup; the returned handle is cloned into each request handler.
pub async fn open_store(cfg: &CoreConfig) -> MenuResult<SharedStore> {
    let store: SharedStore = match cfg.store_backend() {
        StoreBackend::Mongo => Arc::new(MongoStore::connect(cfg).await?),
        StoreBackend::Memory => {
            tracing::warn!("using in-memory store; data is lost on shutdown");
            Arc::new(MemoryStore::new())
        }
    };
    store
        .ensure_unique_index(USER_COLLECTION, USER_EMAIL_FIELD)
        .await?;
    Ok(store)
}
