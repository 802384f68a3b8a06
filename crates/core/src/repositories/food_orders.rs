//! Food order placement and the order report.

use crate::constants::FOOD_ORDER_COLLECTION;
use crate::error::{MenuError, MenuResult};
use crate::models::{EnrichedOrder, FoodOrder};
use crate::pricing::enrich_order;
use crate::repositories::catalog::CatalogService;
use crate::store::SharedStore;
use chrono::{DateTime, Utc};
use mongodb::bson::{Bson, Document};

#[derive(Clone)]
pub struct FoodOrderService {
    store: SharedStore,
    catalog: CatalogService,
}

impl FoodOrderService {
    pub fn new(store: SharedStore) -> Self {
        Self {
            catalog: CatalogService::new(store.clone()),
            store,
        }
    }

    /// Records a food order as `{username, items, placedAt}`.
    ///
    /// `items` is stored as submitted once it has been checked to be an array of line items with
    /// numeric quantities. Item names are not checked against the catalog.
    ///
    /// # Errors
    ///
    /// - [`MenuError::InvalidOrder`] if `items` is missing or malformed.
    /// - [`MenuError::StoreUnavailable`] if the insert fails.
    pub async fn place_order(
        &self,
        username: Option<String>,
        items: Option<Bson>,
        placed_at: DateTime<Utc>,
    ) -> MenuResult<Bson> {
        let order = FoodOrder::place(username, items, placed_at)?;
        let id = self
            .store
            .insert_one(FOOD_ORDER_COLLECTION, order.into_document())
            .await?;
        tracing::info!("placed food order {}", id);
        Ok(id)
    }

    /// Lists every stored food order with its `totalPrice`, in natural store order.
    ///
    /// Prices come from a catalog snapshot read at the start of the call; nothing is cached
    /// between calls.
    ///
    /// # Errors
    ///
    /// - [`MenuError::StoreUnavailable`] if either read fails.
    /// - [`MenuError::CorruptRecord`] if a stored order has no usable `items`.
    ///
    /// No partial report is returned on error.
    pub async fn list_food_orders_with_totals(&self) -> MenuResult<Vec<EnrichedOrder>> {
        let index = self.catalog.price_index().await?;
        let documents = self
            .store
            .find(FOOD_ORDER_COLLECTION, Document::new())
            .await?;

        documents
            .into_iter()
            .map(|document| -> MenuResult<EnrichedOrder> {
                let order = FoodOrder::from_document(document).map_err(|source| {
                    MenuError::CorruptRecord {
                        collection: FOOD_ORDER_COLLECTION.to_string(),
                        source,
                    }
                })?;
                Ok(enrich_order(&order, &index))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::FOOD_COLLECTION;
    use crate::error::OrderError;
    use crate::repositories::test_support::UnavailableStore;
    use crate::store::{DocumentStore, MemoryStore};
    use mongodb::bson::doc;
    use std::sync::Arc;

    async fn seeded_store() -> MemoryStore {
        let store = MemoryStore::new();
        store
            .insert_one(FOOD_COLLECTION, doc! { "name": "Pizza", "price": 10 })
            .await
            .unwrap();
        store
            .insert_one(FOOD_COLLECTION, doc! { "name": "Soup", "price": 4.5 })
            .await
            .unwrap();
        store
    }

    fn items(entries: Vec<Document>) -> Option<Bson> {
        Some(Bson::Array(entries.into_iter().map(Bson::Document).collect()))
    }

    #[tokio::test]
    async fn placed_orders_are_reported_with_totals() {
        let service = FoodOrderService::new(Arc::new(seeded_store().await));
        service
            .place_order(
                Some("alice".into()),
                items(vec![
                    doc! { "name": "Pizza", "quantity": 2 },
                    doc! { "name": "Soup", "quantity": 1 },
                ]),
                Utc::now(),
            )
            .await
            .unwrap();
        service
            .place_order(
                Some("bob".into()),
                items(vec![doc! { "name": "Ghost", "quantity": 3 }]),
                Utc::now(),
            )
            .await
            .unwrap();

        let report = service.list_food_orders_with_totals().await.unwrap();
        assert_eq!(report.len(), 2);
        assert_eq!(report[0].username(), Some("alice"));
        assert_eq!(report[0].total_price(), 24.5);
        assert_eq!(report[1].username(), Some("bob"));
        assert_eq!(report[1].total_price(), 0.0);
    }

    #[tokio::test]
    async fn report_is_idempotent_without_writes() {
        let service = FoodOrderService::new(Arc::new(seeded_store().await));
        service
            .place_order(
                Some("alice".into()),
                items(vec![doc! { "name": "Pizza", "quantity": 1 }]),
                Utc::now(),
            )
            .await
            .unwrap();

        let first = service.list_food_orders_with_totals().await.unwrap();
        let second = service.list_food_orders_with_totals().await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn report_reflects_current_catalog_prices() {
        let store = MemoryStore::new();
        let service = FoodOrderService::new(Arc::new(store.clone()));
        service
            .place_order(
                Some("alice".into()),
                items(vec![doc! { "name": "Pizza", "quantity": 2 }]),
                Utc::now(),
            )
            .await
            .unwrap();
        assert_eq!(
            service.list_food_orders_with_totals().await.unwrap()[0].total_price(),
            0.0
        );

        store
            .insert_one(FOOD_COLLECTION, doc! { "name": "Pizza", "price": 11 })
            .await
            .unwrap();
        assert_eq!(
            service.list_food_orders_with_totals().await.unwrap()[0].total_price(),
            22.0
        );
    }

    #[tokio::test]
    async fn order_without_items_is_rejected_and_not_stored() {
        let store = MemoryStore::new();
        let service = FoodOrderService::new(Arc::new(store.clone()));

        let result = service
            .place_order(Some("alice".into()), None, Utc::now())
            .await;
        assert!(matches!(
            result,
            Err(MenuError::InvalidOrder(OrderError::MissingItems))
        ));
        assert!(store
            .find(FOOD_ORDER_COLLECTION, Document::new())
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn corrupt_stored_order_aborts_report() {
        let store = seeded_store().await;
        store
            .insert_one(FOOD_ORDER_COLLECTION, doc! { "username": "mallory" })
            .await
            .unwrap();
        let service = FoodOrderService::new(Arc::new(store));

        assert!(matches!(
            service.list_food_orders_with_totals().await,
            Err(MenuError::CorruptRecord {
                source: OrderError::MissingItems,
                ..
            })
        ));
    }

    #[tokio::test]
    async fn store_failure_aborts_report() {
        let service = FoodOrderService::new(Arc::new(UnavailableStore));
        assert!(matches!(
            service.list_food_orders_with_totals().await,
            Err(MenuError::StoreUnavailable(_))
        ));
    }
}
