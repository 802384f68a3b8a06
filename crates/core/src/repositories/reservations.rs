//! Reservation places and saved table bookings.
//!
//! Bookings are stored exactly as submitted in the `orders` collection; the reservation places
//! in `reservations` are maintained elsewhere and only read here.

use crate::constants::{BOOKINGS_COLLECTION, RESERVATIONS_COLLECTION};
use crate::error::MenuResult;
use crate::store::SharedStore;
use mongodb::bson::{Bson, Document};

#[derive(Clone)]
pub struct ReservationService {
    store: SharedStore,
}

impl ReservationService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub async fn list_reservations(&self) -> MenuResult<Vec<Document>> {
        Ok(self
            .store
            .find(RESERVATIONS_COLLECTION, Document::new())
            .await?)
    }

    /// Saves a booking verbatim and returns its store-assigned id.
    pub async fn save_booking(&self, booking: Document) -> MenuResult<Bson> {
        let id = self.store.insert_one(BOOKINGS_COLLECTION, booking).await?;
        tracing::debug!("saved booking {}", id);
        Ok(id)
    }

    pub async fn list_bookings(&self) -> MenuResult<Vec<Document>> {
        Ok(self.store.find(BOOKINGS_COLLECTION, Document::new()).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MenuError;
    use crate::repositories::test_support::UnavailableStore;
    use crate::store::MemoryStore;
    use mongodb::bson::doc;
    use std::sync::Arc;

    #[tokio::test]
    async fn saved_bookings_are_listed_unchanged() {
        let service = ReservationService::new(Arc::new(MemoryStore::new()));
        let id = service
            .save_booking(doc! { "guest": "alice", "table": 4, "time": "19:30" })
            .await
            .unwrap();

        let bookings = service.list_bookings().await.unwrap();
        assert_eq!(bookings.len(), 1);
        assert_eq!(bookings[0].get("_id"), Some(&id));
        assert_eq!(bookings[0].get_str("guest").unwrap(), "alice");
        assert_eq!(bookings[0].get_i32("table").unwrap(), 4);
        assert!(service.list_reservations().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn failed_save_reports_store_unavailable() {
        let service = ReservationService::new(Arc::new(UnavailableStore));
        assert!(matches!(
            service.save_booking(doc! { "guest": "alice" }).await,
            Err(MenuError::StoreUnavailable(_))
        ));
    }
}
