//! Combat system module (localized damage)
//!
//! ECS ответственность:
//! - Game state: PartRegistry (health частей), PartBindings
//! - Combat rules: protection dependencies, off-screen invulnerability
//! - Events: ShipPartHit (in), PartDamaged, ShipDestroyed (out)
//!
//! Внешний runtime:
//! - Physics: collision detection → ShipPartHit
//! - Визуал: DamageFlash / Deactivated на объектах частей
//! - Fleet manager: слушает ShipDestroyed (очки, счётчик кораблей)

use bevy::prelude::*;

pub mod damage;
pub mod destruction;
pub mod events;
pub mod parts;
pub mod systems;
pub mod weapon;

// Re-export основных типов
pub use damage::{route_hit, HitOutcome};
pub use destruction::{all_destroyed, condition, ShipCondition};
pub use events::{PartDamaged, ShipDestroyed, ShipPartHit};
pub use parts::{Part, PartBindings, PartDef, PartKey, PartRegistry};
pub use weapon::{WeaponCatalog, WeaponDefinition, WeaponKind};

use crate::config::DamageFeedback;
use crate::SimulationSet;

/// Combat Plugin
///
/// Регистрирует combat системы в FixedUpdate (60Hz).
///
/// Порядок выполнения:
/// 1. bind_ship_parts — binding table для новых кораблей (один раз)
/// 2. resolve_part_hits — ShipPartHit → урон → PartDamaged / ShipDestroyed
/// 3. expire_damage_flash — снятие подсветки урона
pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<ShipPartHit>()
            .add_event::<PartDamaged>()
            .add_event::<ShipDestroyed>()
            .init_resource::<WeaponCatalog>()
            .init_resource::<DamageFeedback>();

        app.add_systems(
            FixedUpdate,
            (
                systems::bind_ship_parts,
                systems::resolve_part_hits,
                systems::expire_damage_flash,
            )
                .chain()
                .in_set(SimulationSet::Combat),
        );
    }
}
