//! Signed-in user domain.

pub mod model;

pub use model::{User, UserId, UserRole};
