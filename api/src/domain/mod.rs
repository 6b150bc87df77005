//! Domain layer
//!
//! The user model and the persistence port it is stored through.
//! - `entities`: `User`, `UserId` and the `SaveUser` write model
//! - `ports`: `UserRepository`, implemented by the adapters
//!
//! Nothing here knows about HTTP or a particular database.

pub mod entities;
pub mod ports;
