//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (PostgreSQL, in-memory).

use async_trait::async_trait;

use crate::domain::entities::{SaveUser, User, UserId};
use crate::error::DomainError;

/// Repository for User entities
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All users, in whatever order the store yields them
    async fn find_all(&self) -> Result<Vec<User>, DomainError>;

    /// Find a user by ID
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError>;

    /// Insert (no id) or upsert (with id) a user, returning the stored record
    async fn save(&self, user: &SaveUser) -> Result<User, DomainError>;

    /// Delete a user by ID. Deleting a missing user is not an error.
    async fn delete_by_id(&self, id: UserId) -> Result<(), DomainError>;
}
