//! In-memory adapters
//!
//! Process-local implementations of repository traits, used when no database is configured.

pub mod user_repo;

pub use user_repo::InMemoryUserRepository;
