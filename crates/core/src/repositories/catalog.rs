//! Food catalog reads.
//!
//! The catalog is maintained outside this application; it is only ever read here.

use crate::constants::FOOD_COLLECTION;
use crate::error::MenuResult;
use crate::models::FoodItem;
use crate::pricing::{build_price_index, PriceIndex};
use crate::store::SharedStore;
use mongodb::bson::Document;

#[derive(Clone)]
pub struct CatalogService {
    store: SharedStore,
}

impl CatalogService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Returns the raw catalog documents, every field included.
    pub async fn list_food(&self) -> MenuResult<Vec<Document>> {
        Ok(self.store.find(FOOD_COLLECTION, Document::new()).await?)
    }

    /// Returns the catalog decoded as [`FoodItem`]s, in store order.
    ///
    /// An entry with a missing or non-numeric `price` is priced at 0 and still overrides any
    /// earlier entry of the same name. Entries without a string `name` are logged and skipped.
    pub async fn load_catalog(&self) -> MenuResult<Vec<FoodItem>> {
        let documents = self.list_food().await?;

        let mut items = Vec::with_capacity(documents.len());
        for document in &documents {
            match FoodItem::from_document(document) {
                Some(item) => items.push(item),
                None => tracing::warn!("skipping unnamed catalog entry {:?}", document),
            }
        }
        Ok(items)
    }

    /// Snapshot of current prices, built from a fresh catalog read.
    pub async fn price_index(&self) -> MenuResult<PriceIndex> {
        let catalog = self.load_catalog().await?;
        Ok(build_price_index(&catalog))
    }
}
