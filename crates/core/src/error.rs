use mongodb::error::Error as MongoError;

/// Failures raised by a [`DocumentStore`](crate::store::DocumentStore) implementation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to connect to document store: {0}")]
    Connect(MongoError),
    #[error("failed to query collection {collection}: {source}")]
    Query {
        collection: String,
        #[source]
        source: MongoError,
    },
    #[error("failed to insert into collection {collection}: {source}")]
    Insert {
        collection: String,
        #[source]
        source: MongoError,
    },
    #[error("duplicate key in collection {collection}")]
    DuplicateKey { collection: String },
    #[error("failed to create index on collection {collection}: {source}")]
    Index {
        collection: String,
        #[source]
        source: MongoError,
    },
    #[error("document store unavailable: {0}")]
    Unavailable(String),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Shape problems in a food order document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrderError {
    #[error("order has no items")]
    MissingItems,
    #[error("order items must be an array")]
    ItemsNotArray,
    #[error("line item {index} is not an object")]
    LineItemNotObject { index: usize },
    #[error("line item {index} has no numeric quantity")]
    MissingQuantity { index: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PasswordError {
    #[error("malformed password hash")]
    MalformedHash,
    #[error("failed to hash password: {0}")]
    Hash(argon2::password_hash::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum MenuError {
    #[error("document store unavailable: {0}")]
    StoreUnavailable(#[from] StoreError),
    #[error("a user with this email already exists")]
    Conflict,
    #[error("invalid email or password")]
    Unauthorized,
    #[error("password hashing failed: {0}")]
    Password(#[from] PasswordError),
    #[error("invalid order: {0}")]
    InvalidOrder(#[from] OrderError),
    #[error("invalid document: {0}")]
    InvalidDocument(String),
    #[error("stored record in {collection} is corrupt: {source}")]
    CorruptRecord {
        collection: String,
        #[source]
        source: OrderError,
    },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type MenuResult<T> = std::result::Result<T, MenuError>;
