//! Movement domain — траектории вражеских кораблей
//!
//! Содержит:
//! - curve: чистые функции u → позиция (lerp, ease-out, Bezier)
//! - spawn_geometry: случайные точки траекторий в пределах экрана
//! - pattern: MovementPattern (config) + MovementState (state machine)
//! - events: ShipExited
//!
//! Порядок систем:
//! 1. start_movement — инициализация траектории новых кораблей
//! 2. advance_movement — тик state machine → Transform
//! 3. update_bounds_check — пересчёт флагов экрана
//! 4. despawn_below_screen — despawn boundary

use bevy::prelude::*;

pub mod curve;
pub mod events;
pub mod pattern;
pub mod spawn_geometry;
pub mod systems;

pub use curve::*;
pub use events::*;
pub use pattern::*;
pub use spawn_geometry::*;

use crate::components::bounds::update_bounds_check;
use crate::config::ScreenExtents;
use crate::SimulationSet;

/// Movement Plugin
pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<ShipExited>()
            .init_resource::<ScreenExtents>();

        app.add_systems(
            FixedUpdate,
            (
                systems::start_movement,
                systems::advance_movement,
                update_bounds_check,
                systems::despawn_below_screen,
            )
                .chain()
                .in_set(SimulationSet::Movement),
        );
    }
}
