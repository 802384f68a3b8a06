//! Constants used throughout the menu core crate.
//!
//! Collection names, document field names and configuration defaults live here so the
//! repositories, the HTTP layer and the CLI agree on them.

/// Collection holding the food catalog.
pub const FOOD_COLLECTION: &str = "food";

/// Collection holding reservation places.
pub const RESERVATIONS_COLLECTION: &str = "reservations";

/// Collection holding saved table bookings (reservation orders).
pub const BOOKINGS_COLLECTION: &str = "orders";

/// Collection holding placed food orders.
pub const FOOD_ORDER_COLLECTION: &str = "food_order";

/// Collection holding registered users.
pub const USER_COLLECTION: &str = "user";

/// Store-assigned identifier field.
pub const ID_FIELD: &str = "_id";

pub const USERNAME_FIELD: &str = "username";
pub const ITEMS_FIELD: &str = "items";
pub const PLACED_AT_FIELD: &str = "placedAt";
pub const TOTAL_PRICE_FIELD: &str = "totalPrice";

pub const USER_NAME_FIELD: &str = "name";
pub const USER_EMAIL_FIELD: &str = "email";
pub const PASSWORD_HASH_FIELD: &str = "passwordHash";

/// Default MongoDB connection string when no explicit URI is configured.
pub const DEFAULT_MONGO_URI: &str = "mongodb://localhost:27017/";

/// Default database name.
pub const DEFAULT_DATABASE_NAME: &str = "menu";

/// Default upper bound on pooled store connections.
pub const DEFAULT_MAX_POOL_SIZE: u32 = 10;

/// Default REST bind address.
pub const DEFAULT_REST_ADDR: &str = "0.0.0.0:3003";

/// Application name reported to the database server.
pub const APP_NAME: &str = "menu-run";
