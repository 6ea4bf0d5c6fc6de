//! STARFALL Simulation Core
//!
//! ECS-симуляция вражеских кораблей на Bevy 0.16 (headless)
//!
//! Слои:
//! - movement: траектории (curve evaluators, spawn geometry, state machines)
//! - combat: localized damage (parts, protection, destruction)
//! - spawn: blueprints кораблей
//!
//! Рендер, input, physics и fleet manager — внешние. Связь через
//! компоненты (Transform, BoundsCheck, PartObject) и события
//! (ShipPartHit → симуляция → PartDamaged / ShipDestroyed / ShipExited).

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Публичные модули
pub mod combat;
pub mod components;
pub mod config;
pub mod logger;
pub mod movement;
pub mod spawn;

// Re-export для удобства
pub use combat::{
    CombatPlugin, HitOutcome, PartBindings, PartDamaged, PartDef, PartKey, PartRegistry,
    ShipCondition, ShipDestroyed, ShipPartHit, WeaponCatalog, WeaponDefinition, WeaponKind,
};
pub use components::*;
pub use config::{DamageFeedback, ScreenExtents};
pub use logger::{init_logger, log, log_error, log_info, log_warning};
pub use movement::{ExitReason, MovementPattern, MovementPlugin, MovementState, ShipExited};
pub use spawn::{spawn_ship, BlueprintError, ShipBlueprint};

/// Фазы тика симуляции (выполняются последовательно)
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    /// Траектории + bounds check
    Movement,
    /// Binding частей, попадания, feedback
    Combat,
}

/// Главный plugin симуляции (объединяет все подсистемы)
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        // Seed из create_headless_app не перетираем
        if !app.world().contains_resource::<DeterministicRng>() {
            app.insert_resource(DeterministicRng::new(42));
        }

        app
            .insert_resource(Time::<Fixed>::from_hz(SIMULATION_HZ))
            .configure_sets(
                FixedUpdate,
                (SimulationSet::Movement, SimulationSet::Combat).chain(),
            )
            .add_plugins((MovementPlugin, CombatPlugin));
    }
}

/// Seeded RNG всей симуляции
///
/// Единственный источник случайности: концы side-to-side пролёта,
/// точки swoop'а, wander waypoints. Один seed + один порядок систем
/// → одни и те же траектории.
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Headless App без рендера: MinimalPlugins + seeded RNG + console logger
///
/// SimulationPlugin и TimeUpdateStrategy добавляет вызывающий код
/// (main, integration tests).
pub fn create_headless_app(seed: u64) -> App {
    init_logger();

    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(Time::<Fixed>::from_hz(SIMULATION_HZ));
    app
}

/// Частота FixedUpdate тика
pub const SIMULATION_HZ: f64 = 60.0;

/// Байтовый снимок всех компонентов `T` (Debug) в порядке Entity
///
/// Для сравнения прогонов с одинаковым seed: MovementState, PartRegistry.
pub fn world_snapshot<T: Component + std::fmt::Debug>(world: &mut World) -> Vec<u8> {
    let mut query = world.query::<(Entity, &T)>();
    let mut rows: Vec<(Entity, String)> = query
        .iter(world)
        .map(|(entity, component)| (entity, format!("{component:?}")))
        .collect();
    rows.sort_by_key(|(entity, _)| *entity);

    rows.into_iter()
        .flat_map(|(entity, text)| {
            entity
                .to_bits()
                .to_le_bytes()
                .into_iter()
                .chain(text.into_bytes())
        })
        .collect()
}
