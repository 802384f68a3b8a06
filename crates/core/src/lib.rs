//! # Menu Core
//!
//! Core business logic for the restaurant ordering and reservation backend.
//!
//! This crate contains the data operations:
//! - Catalog, reservation, booking, food order and user repositories over a document store
//! - The order report: a per-request price index and order totals
//! - Salted password hashing for user accounts
//!
//! **No API concerns**: HTTP servers, routing and response formatting belong in `api-rest`.

pub mod config;
pub mod constants;
pub mod error;
pub mod json;
pub mod models;
pub mod password;
pub mod pricing;
pub mod repositories;
pub mod store;

pub use config::{CoreConfig, StoreBackend};
pub use error::{MenuError, MenuResult, OrderError, PasswordError, StoreError, StoreResult};
pub use models::{EnrichedOrder, FoodItem, FoodOrder, LineItem};
pub use pricing::{build_price_index, enrich_order, PriceIndex};
pub use repositories::{
    catalog::CatalogService, food_orders::FoodOrderService, reservations::ReservationService,
    users::UserService,
};
pub use store::{open_store, DocumentStore, MemoryStore, MongoStore, SharedStore};

/// Re-exported so callers build documents and filters with the same BSON types as the store.
pub use mongodb::bson;
