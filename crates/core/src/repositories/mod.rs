//! Repository services.
//!
//! Each service wraps the shared store handle and owns the reads and writes for one area of the
//! application: the food catalog, reservations and bookings, food orders, and user accounts.

pub mod catalog;
pub mod food_orders;
pub mod reservations;
pub mod users;

#[cfg(test)]
pub(crate) mod test_support {
    use crate::error::{StoreError, StoreResult};
    use crate::store::DocumentStore;
    use async_trait::async_trait;
    use mongodb::bson::{Bson, Document};

    /// Store whose every operation fails, for exercising error propagation.
    pub(crate) struct UnavailableStore;

    #[async_trait]
    impl DocumentStore for UnavailableStore {
        async fn find(&self, _collection: &str, _filter: Document) -> StoreResult<Vec<Document>> {
            Err(StoreError::Unavailable("connection refused".into()))
        }

        async fn find_one(
            &self,
            _collection: &str,
            _filter: Document,
        ) -> StoreResult<Option<Document>> {
            Err(StoreError::Unavailable("connection refused".into()))
        }

        async fn insert_one(&self, _collection: &str, _document: Document) -> StoreResult<Bson> {
            Err(StoreError::Unavailable("connection refused".into()))
        }

        async fn ensure_unique_index(&self, _collection: &str, _field: &str) -> StoreResult<()> {
            Err(StoreError::Unavailable("connection refused".into()))
        }
    }
}
