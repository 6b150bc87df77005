//! In-memory adapter for UserRepository

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::{SaveUser, User, UserId};
use crate::domain::ports::UserRepository;
use crate::error::DomainError;

#[derive(Default)]
struct Store {
    users: BTreeMap<UserId, User>,
    /// Highest id handed out or upserted so far
    last_id: i64,
}

/// In-memory implementation of UserRepository.
///
/// Users are kept in id order; new ids are allocated sequentially from 1.
#[derive(Default)]
pub struct InMemoryUserRepository {
    store: RwLock<Store>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        let store = self.store.read().await;
        Ok(store.users.values().cloned().collect())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError> {
        let store = self.store.read().await;
        Ok(store.users.get(&id).cloned())
    }

    async fn save(&self, user: &SaveUser) -> Result<User, DomainError> {
        let mut store = self.store.write().await;

        let id = match user.id {
            Some(id) => {
                store.last_id = store.last_id.max(id.0);
                id
            }
            None => {
                let next = store
                    .last_id
                    .checked_add(1)
                    .ok_or_else(|| DomainError::Internal("User id space exhausted".to_string()))?;
                store.last_id = next;
                UserId(next)
            }
        };

        let saved = user.clone().into_user(id);
        store.users.insert(id, saved.clone());
        Ok(saved)
    }

    async fn delete_by_id(&self, id: UserId) -> Result<(), DomainError> {
        let mut store = self.store.write().await;
        if store.users.remove(&id).is_none() {
            tracing::debug!(user_id = %id, "Delete matched no user");
        }
        Ok(())
    }
}
