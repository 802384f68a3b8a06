use super::DocumentStore;
use crate::config::CoreConfig;
use crate::constants::APP_NAME;
use crate::error::{StoreError, StoreResult};
use async_trait::async_trait;
use mongodb::bson::{doc, Bson, Document};
use mongodb::error::{Error as MongoError, ErrorKind, WriteError, WriteFailure};
use mongodb::options::{ClientOptions, IndexOptions};
use mongodb::{Client, Database, IndexModel};

/// Server error code for a unique index violation.
const DUPLICATE_KEY_CODE: i32 = 11000;

fn is_duplicate_key(error: &MongoError) -> bool {
    matches!(
        error.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(WriteError {
            code: DUPLICATE_KEY_CODE,
            ..
        }))
    )
}

/// MongoDB-backed store.
///
/// The driver keeps its own connection pool, sized from [`CoreConfig::max_pool_size`]; each
/// operation checks a connection out for its own duration only.
#[derive(Clone, Debug)]
pub struct MongoStore {
    database: Database,
}

impl MongoStore {
    /// Connects to the configured server and verifies it answers a `ping`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Connect`] if the URI cannot be parsed or the server is unreachable.
    pub async fn connect(cfg: &CoreConfig) -> StoreResult<Self> {
        let mut options = ClientOptions::parse(cfg.mongo_uri())
            .await
            .map_err(StoreError::Connect)?;
        options.app_name = Some(APP_NAME.to_string());
        options.max_pool_size = Some(cfg.max_pool_size());

        let client = Client::with_options(options).map_err(StoreError::Connect)?;
        let database = client.database(cfg.database_name());
        database
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(StoreError::Connect)?;

        tracing::info!("connected to MongoDB database {}", cfg.database_name());
        Ok(Self { database })
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn find(&self, collection: &str, filter: Document) -> StoreResult<Vec<Document>> {
        let query_error = |source: MongoError| StoreError::Query {
            collection: collection.to_string(),
            source,
        };

        let mut cursor = self
            .database
            .collection::<Document>(collection)
            .find(filter, None)
            .await
            .map_err(query_error)?;

        let mut documents = Vec::new();
        while cursor.advance().await.map_err(query_error)? {
            documents.push(cursor.deserialize_current().map_err(query_error)?);
        }
        Ok(documents)
    }

    async fn find_one(&self, collection: &str, filter: Document) -> StoreResult<Option<Document>> {
        self.database
            .collection::<Document>(collection)
            .find_one(filter, None)
            .await
            .map_err(|source| StoreError::Query {
                collection: collection.to_string(),
                source,
            })
    }

    async fn insert_one(&self, collection: &str, document: Document) -> StoreResult<Bson> {
        let result = self
            .database
            .collection::<Document>(collection)
            .insert_one(document, None)
            .await
            .map_err(|source| {
                if is_duplicate_key(&source) {
                    StoreError::DuplicateKey {
                        collection: collection.to_string(),
                    }
                } else {
                    StoreError::Insert {
                        collection: collection.to_string(),
                        source,
                    }
                }
            })?;
        Ok(result.inserted_id)
    }

    async fn ensure_unique_index(&self, collection: &str, field: &str) -> StoreResult<()> {
        let index = IndexModel::builder()
            .keys(doc! { field: 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        self.database
            .collection::<Document>(collection)
            .create_index(index, None)
            .await
            .map_err(|source| StoreError::Index {
                collection: collection.to_string(),
                source,
            })?;
        tracing::debug!("unique index on {}.{} in place", collection, field);
        Ok(())
    }
}
