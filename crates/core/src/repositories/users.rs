//! User signup and login.
//!
//! Passwords are stored as Argon2id hashes (see [`crate::password`]), never in clear text.
//! Login failures never say whether the email or the password was wrong. Email uniqueness is
//! enforced by the store's unique index on `user.email` (created by
//! [`open_store`](crate::store::open_store)); the lookup before insert only saves hashing work.

use crate::constants::{PASSWORD_HASH_FIELD, USER_COLLECTION, USER_EMAIL_FIELD, USER_NAME_FIELD};
use crate::error::{MenuError, MenuResult, StoreError};
use crate::password::{hash_password, verify_password};
use crate::store::SharedStore;
use mongodb::bson::doc;

#[derive(Clone)]
pub struct UserService {
    store: SharedStore,
}

impl UserService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Registers a new user.
    ///
    /// # Errors
    ///
    /// - [`MenuError::Conflict`] if a user with `email` already exists, including one inserted
    ///   concurrently after the lookup; nothing is written.
    /// - [`MenuError::Password`] if the password cannot be hashed.
    /// - [`MenuError::StoreUnavailable`] if the lookup or insert fails.
    pub async fn signup(&self, name: &str, email: &str, password: &str) -> MenuResult<()> {
        let existing = self
            .store
            .find_one(USER_COLLECTION, doc! { USER_EMAIL_FIELD: email })
            .await?;
        if existing.is_some() {
            return Err(MenuError::Conflict);
        }

        let user = doc! {
            USER_NAME_FIELD: name,
            USER_EMAIL_FIELD: email,
            PASSWORD_HASH_FIELD: hash_password(password)?,
        };
        match self.store.insert_one(USER_COLLECTION, user).await {
            Ok(_) => {
                tracing::info!("registered user {}", email);
                Ok(())
            }
            Err(StoreError::DuplicateKey { .. }) => Err(MenuError::Conflict),
            Err(e) => Err(e.into()),
        }
    }

    /// Checks credentials and returns the stored user name.
    ///
    /// # Errors
    ///
    /// - [`MenuError::Unauthorized`] for an unknown email or a wrong password.
    /// - [`MenuError::StoreUnavailable`] if the lookup fails.
    pub async fn login(&self, email: &str, password: &str) -> MenuResult<String> {
        let user = self
            .store
            .find_one(USER_COLLECTION, doc! { USER_EMAIL_FIELD: email })
            .await?
            .ok_or(MenuError::Unauthorized)?;

        let stored_hash = user
            .get_str(PASSWORD_HASH_FIELD)
            .map_err(|_| MenuError::Unauthorized)?;
        match verify_password(password, stored_hash) {
            Ok(true) => {}
            Ok(false) => return Err(MenuError::Unauthorized),
            Err(e) => {
                tracing::warn!("user {} has an unreadable password hash: {}", email, e);
                return Err(MenuError::Unauthorized);
            }
        }

        Ok(user
            .get_str(USER_NAME_FIELD)
            .map(str::to_owned)
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::test_support::UnavailableStore;
    use crate::error::StoreResult;
    use crate::store::{DocumentStore, MemoryStore};
    use async_trait::async_trait;
    use mongodb::bson::{Bson, Document};
    use std::sync::Arc;

    /// Wraps a store so lookups never see existing users, as when two signups for one email
    /// both read before either writes.
    struct StaleReads(MemoryStore);

    #[async_trait]
    impl DocumentStore for StaleReads {
        async fn find(&self, collection: &str, filter: Document) -> StoreResult<Vec<Document>> {
            self.0.find(collection, filter).await
        }

        async fn find_one(
            &self,
            _collection: &str,
            _filter: Document,
        ) -> StoreResult<Option<Document>> {
            Ok(None)
        }

        async fn insert_one(&self, collection: &str, document: Document) -> StoreResult<Bson> {
            self.0.insert_one(collection, document).await
        }

        async fn ensure_unique_index(&self, collection: &str, field: &str) -> StoreResult<()> {
            self.0.ensure_unique_index(collection, field).await
        }
    }

    #[tokio::test]
    async fn signup_then_login_returns_username() {
        let service = UserService::new(Arc::new(MemoryStore::new()));
        service
            .signup("Alice", "alice@example.com", "hunter2")
            .await
            .unwrap();

        let username = service.login("alice@example.com", "hunter2").await.unwrap();
        assert_eq!(username, "Alice");
    }

    #[tokio::test]
    async fn duplicate_email_conflicts_without_new_record() {
        let store = MemoryStore::new();
        let service = UserService::new(Arc::new(store.clone()));
        service
            .signup("Alice", "alice@example.com", "hunter2")
            .await
            .unwrap();

        let result = service
            .signup("Impostor", "alice@example.com", "other")
            .await;
        assert!(matches!(result, Err(MenuError::Conflict)));

        let users = store.find(USER_COLLECTION, Document::new()).await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].get_str(USER_NAME_FIELD).unwrap(), "Alice");
    }

    #[tokio::test]
    async fn password_is_not_stored_in_clear() {
        let store = MemoryStore::new();
        let service = UserService::new(Arc::new(store.clone()));
        service
            .signup("Alice", "alice@example.com", "hunter2")
            .await
            .unwrap();

        let user = store
            .find_one(USER_COLLECTION, Document::new())
            .await
            .unwrap()
            .unwrap();
        assert!(user.get("password").is_none());
        assert_ne!(user.get_str(PASSWORD_HASH_FIELD).unwrap(), "hunter2");
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_email_are_indistinguishable() {
        let service = UserService::new(Arc::new(MemoryStore::new()));
        service
            .signup("Alice", "alice@example.com", "hunter2")
            .await
            .unwrap();

        let wrong_password = service.login("alice@example.com", "nope").await;
        let unknown_email = service.login("bob@example.com", "hunter2").await;
        assert!(matches!(wrong_password, Err(MenuError::Unauthorized)));
        assert!(matches!(unknown_email, Err(MenuError::Unauthorized)));
    }

    #[tokio::test]
    async fn store_failure_is_not_reported_as_bad_credentials() {
        let service = UserService::new(Arc::new(UnavailableStore));
        assert!(matches!(
            service.login("alice@example.com", "hunter2").await,
            Err(MenuError::StoreUnavailable(_))
        ));
    }

    #[tokio::test]
    async fn racing_signup_is_a_conflict_not_a_second_account() {
        let store = MemoryStore::new();
        store
            .ensure_unique_index(USER_COLLECTION, USER_EMAIL_FIELD)
            .await
            .unwrap();
        let service = UserService::new(Arc::new(StaleReads(store.clone())));

        service
            .signup("Alice", "alice@example.com", "hunter2")
            .await
            .unwrap();
        let result = service
            .signup("Impostor", "alice@example.com", "other")
            .await;
        assert!(matches!(result, Err(MenuError::Conflict)));

        let users = store.find(USER_COLLECTION, Document::new()).await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].get_str(USER_NAME_FIELD).unwrap(), "Alice");
    }

    #[tokio::test]
    async fn stored_hash_is_argon2() {
        let store = MemoryStore::new();
        let service = UserService::new(Arc::new(store.clone()));
        service
            .signup("Alice", "alice@example.com", "hunter2")
            .await
            .unwrap();

        let user = store
            .find_one(USER_COLLECTION, Document::new())
            .await
            .unwrap()
            .unwrap();
        assert!(user
            .get_str(PASSWORD_HASH_FIELD)
            .unwrap()
            .starts_with("$argon2id$"));
    }
}
