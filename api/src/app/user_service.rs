//! User service
//!
//! Handles listing, lookup, creation and deletion of users.

use std::sync::Arc;

use crate::domain::entities::{SaveUser, User, UserId};
use crate::domain::ports::UserRepository;
use crate::error::{AppError, DomainError};

/// Maximum length of a first or last name, in characters
pub const MAX_NAME_LEN: usize = 100;

/// Maximum length of a phone number, in characters
pub const MAX_PHONE_LEN: usize = 32;

/// Service for managing users
pub struct UserService<UR>
where
    UR: UserRepository,
{
    users: Arc<UR>,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    pub fn new(users: Arc<UR>) -> Self {
        Self { users }
    }

    /// List every user the repository holds
    pub async fn list(&self) -> Result<Vec<User>, AppError> {
        let users = self.users.find_all().await?;
        tracing::debug!(count = users.len(), "Listed users");
        Ok(users)
    }

    /// Find a user by ID
    pub async fn get(&self, id: UserId) -> Result<Option<User>, AppError> {
        Ok(self.users.find_by_id(id).await?)
    }

    /// Create a new user
    ///
    /// The id is assigned by the repository; requests that carry one are rejected.
    pub async fn create(&self, user: SaveUser) -> Result<User, AppError> {
        validate_new_user(&user)?;

        let saved = self.users.save(&user).await?;
        tracing::info!(user_id = %saved.id, "Created user");
        Ok(saved)
    }

    /// Delete a user by ID. Succeeds whether or not the user existed.
    pub async fn delete(&self, id: UserId) -> Result<(), AppError> {
        self.users.delete_by_id(id).await?;
        tracing::info!(user_id = %id, "Deleted user");
        Ok(())
    }
}

fn validate_new_user(user: &SaveUser) -> Result<(), DomainError> {
    if user.id.is_some() {
        return Err(DomainError::Validation(
            "id is assigned by the server and must not be supplied".to_string(),
        ));
    }

    validate_name("first_name", &user.first_name)?;
    validate_name("last_name", &user.last_name)?;

    if user.phone.chars().count() > MAX_PHONE_LEN {
        return Err(DomainError::Validation(format!(
            "phone must be at most {} characters",
            MAX_PHONE_LEN
        )));
    }

    Ok(())
}

fn validate_name(field: &str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::Validation(format!("{} must not be blank", field)));
    }
    if value.chars().count() > MAX_NAME_LEN {
        return Err(DomainError::Validation(format!(
            "{} must be at most {} characters",
            field, MAX_NAME_LEN
        )));
    }
    Ok(())
}
