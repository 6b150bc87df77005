//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::domain::entities::{SaveUser, User, UserId};

/// Create a persisted test user
pub fn test_user(id: i64, first_name: &str, last_name: &str, phone: &str) -> User {
    User {
        id: UserId(id),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        phone: phone.to_string(),
    }
}

/// Bilbo Baggins, stored under id 10
pub fn bilbo() -> User {
    test_user(10, "Bilbo", "Baggins", "+44 9999-99999")
}

/// Create request for Frodo Baggins (no id)
pub fn frodo_request() -> SaveUser {
    SaveUser::new("Frodo", "Baggins", "+44 7777-7777")
}

/// Frodo Baggins as stored by the repository under id 11
pub fn frodo() -> User {
    frodo_request().into_user(UserId(11))
}
