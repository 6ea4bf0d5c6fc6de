//! Spawn domain — blueprints кораблей и их валидация

pub mod blueprint;
pub mod error;

pub use blueprint::*;
pub use error::*;
