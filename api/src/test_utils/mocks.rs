//! Mock implementations of port traits
//!
//! `StubUserRepository` returns canned answers configured by the test and
//! records every call it receives so tests can verify delegation.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::entities::{SaveUser, User, UserId};
use crate::domain::ports::UserRepository;
use crate::error::DomainError;

/// A call received by the stub repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryCall {
    FindAll,
    FindById(UserId),
    Save(SaveUser),
    DeleteById(UserId),
}

// ============================================================================
// Stub User Repository
// ============================================================================

#[derive(Default)]
pub struct StubUserRepository {
    all: Vec<User>,
    by_id: HashMap<UserId, User>,
    saves: Vec<(SaveUser, User)>,
    failure: Option<String>,
    calls: Mutex<Vec<RepositoryCall>>,
}

impl StubUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Users returned by `find_all`
    pub fn with_find_all(mut self, users: Vec<User>) -> Self {
        self.all = users;
        self
    }

    /// A user returned by `find_by_id` for its own id
    pub fn with_find_by_id(mut self, user: User) -> Self {
        self.by_id.insert(user.id, user);
        self
    }

    /// When `save` receives `request`, answer with `saved`
    pub fn with_save(mut self, request: SaveUser, saved: User) -> Self {
        self.saves.push((request, saved));
        self
    }

    /// Make every operation fail with a database error
    pub fn failing(mut self, message: &str) -> Self {
        self.failure = Some(message.to_string());
        self
    }

    /// Calls received so far, in order
    pub fn calls(&self) -> Vec<RepositoryCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: RepositoryCall) -> Result<(), DomainError> {
        self.calls.lock().unwrap().push(call);
        match &self.failure {
            Some(message) => Err(DomainError::Database(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl UserRepository for StubUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        self.record(RepositoryCall::FindAll)?;
        Ok(self.all.clone())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError> {
        self.record(RepositoryCall::FindById(id))?;
        Ok(self.by_id.get(&id).cloned())
    }

    async fn save(&self, user: &SaveUser) -> Result<User, DomainError> {
        self.record(RepositoryCall::Save(user.clone()))?;
        self.saves
            .iter()
            .find(|(request, _)| request == user)
            .map(|(_, saved)| saved.clone())
            .ok_or_else(|| DomainError::Internal(format!("Unexpected save: {:?}", user)))
    }

    async fn delete_by_id(&self, id: UserId) -> Result<(), DomainError> {
        self.record(RepositoryCall::DeleteById(id))
    }
}
