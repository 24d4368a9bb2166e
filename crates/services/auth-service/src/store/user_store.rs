//! User store with an in-memory implementation.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use common::{AppError, AppResult};
use domain::{User, UserId};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User store trait for dependency injection.
///
/// Records are append-only: there is no update or delete.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Append a new user and assign the next sequential id.
    ///
    /// Fails with `UserExists` if the email is already taken, even when the
    /// caller checked beforehand.
    async fn add(&self, name: String, email: String, password_hash: String) -> AppResult<User>;

    /// Find user by email address
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Number of stored users
    async fn count(&self) -> AppResult<usize>;
}

#[derive(Default)]
struct Users {
    records: Vec<User>,
    by_email: HashMap<String, usize>,
}

/// Volatile user store; contents are lost on restart.
#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<Users>,
}

impl InMemoryUserStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn add(&self, name: String, email: String, password_hash: String) -> AppResult<User> {
        let mut users = self.users.write().await;

        if users.by_email.contains_key(&email) {
            return Err(AppError::UserExists);
        }

        let index = users.records.len();
        let id = index as UserId + 1;
        let user = User::new(id, name, email, password_hash);

        users.by_email.insert(user.email.clone(), index);
        users.records.push(user.clone());
        debug!(user_id = id, "User stored");

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let users = self.users.read().await;

        Ok(users
            .by_email
            .get(email)
            .and_then(|&index| users.records.get(index))
            .cloned())
    }

    async fn count(&self) -> AppResult<usize> {
        Ok(self.users.read().await.records.len())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[tokio::test]
    async fn test_add_assigns_sequential_ids() {
        let store = InMemoryUserStore::new();

        let alice = store
            .add("Alice".into(), "a@x.com".into(), "h1".into())
            .await
            .unwrap();
        let bob = store
            .add("Bob".into(), "b@x.com".into(), "h2".into())
            .await
            .unwrap();

        assert_eq!(alice.id, 1);
        assert_eq!(bob.id, 2);
        assert_eq!(store.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_find_by_email() {
        let store = InMemoryUserStore::new();
        store
            .add("Alice".into(), "a@x.com".into(), "h1".into())
            .await
            .unwrap();

        let found = store.find_by_email("a@x.com").await.unwrap().unwrap();
        assert_eq!(found.name, "Alice");
        assert_eq!(found.password_hash, "h1");

        assert!(store.find_by_email("missing@x.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let store = InMemoryUserStore::new();
        store
            .add("Alice".into(), "a@x.com".into(), "h1".into())
            .await
            .unwrap();

        let result = store
            .add("Impostor".into(), "a@x.com".into(), "h2".into())
            .await;

        assert!(matches!(result, Err(AppError::UserExists)));
        assert_eq!(store.count().await.unwrap(), 1);
        assert_eq!(
            store.find_by_email("a@x.com").await.unwrap().unwrap().name,
            "Alice"
        );
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_duplicates_keep_one_record() {
        let store = Arc::new(InMemoryUserStore::new());

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move {
                    store
                        .add(format!("User {}", i), "same@x.com".into(), "h".into())
                        .await
                })
            })
            .collect();

        let mut created = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                created += 1;
            }
        }

        assert_eq!(created, 1);
        assert_eq!(store.count().await.unwrap(), 1);
    }
}
