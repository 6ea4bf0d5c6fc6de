//! Combat systems (FixedUpdate)

pub mod binding;
pub mod damage;
pub mod feedback;

#[cfg(test)]
mod damage_tests;

pub use binding::*;
pub use damage::*;
pub use feedback::*;
