//! ECS Components для кораблей
//!
//! - bounds: положение относительно экрана (BoundsCheck)
//! - ship: корабль и его физические части (EnemyShip, PartObject, Deactivated, DamageFlash)

pub mod bounds;
pub mod ship;

pub use bounds::*;
pub use ship::*;
