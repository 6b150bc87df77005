//! User domain entity
//!
//! The single resource managed by the API: a person with a name and a phone number.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Unique identifier for a user, assigned by the repository
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl TryFrom<i64> for UserId {
    type Error = DomainError;

    /// Ids handed out by repositories start at 1
    fn try_from(id: i64) -> Result<Self, Self::Error> {
        if id > 0 {
            Ok(Self(id))
        } else {
            Err(DomainError::Validation(format!(
                "User id must be a positive integer, got {}",
                id
            )))
        }
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted user. The id is always present once the repository owns the record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    /// Free-form, may contain symbols and spaces (e.g. "+44 9999-99999")
    pub phone: String,
}

/// Data handed to the repository's `save`
///
/// `id: None` inserts a new record and lets the repository assign the id.
/// `id: Some(_)` upserts the record with that id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveUser {
    pub id: Option<UserId>,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}

impl SaveUser {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone: phone.into(),
        }
    }

    /// Target an existing id (upsert)
    pub fn with_id(mut self, id: UserId) -> Self {
        self.id = Some(id);
        self
    }

    /// Materialize the record once the repository has settled on an id
    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            phone: self.phone,
        }
    }
}

impl From<User> for SaveUser {
    fn from(user: User) -> Self {
        Self {
            id: Some(user.id),
            first_name: user.first_name,
            last_name: user.last_name,
            phone: user.phone,
        }
    }
}
