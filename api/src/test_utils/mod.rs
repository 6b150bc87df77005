//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! Why manual mocks instead of mockall?
//! - Manual mocks are more explicit and easier to debug
//! - We control exactly what they return without macro magic
//! - Recorded calls are plain values that tests compare with `assert_eq!`

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
