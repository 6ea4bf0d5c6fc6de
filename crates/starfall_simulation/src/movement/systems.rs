//! Movement systems (FixedUpdate)

use bevy::prelude::*;

use super::events::{ExitReason, ShipExited};
use super::pattern::{MoveStep, MovementPattern, MovementState};
use crate::components::BoundsCheck;
use crate::config::ScreenExtents;
use crate::DeterministicRng;

/// System: создать MovementState для новых кораблей
///
/// Стартовая позиция — Transform, выставленный spawner'ом.
pub fn start_movement(
    mut commands: Commands,
    time: Res<Time>,
    extents: Res<ScreenExtents>,
    mut rng: ResMut<DeterministicRng>,
    ships: Query<(Entity, &MovementPattern, &Transform, &BoundsCheck), Without<MovementState>>,
) {
    let now = time.elapsed_secs();

    for (entity, pattern, transform, bounds) in ships.iter() {
        let state = MovementState::start(
            pattern,
            transform.translation.truncate(),
            &bounds.screen(&extents),
            now,
            &mut rng.rng,
        );

        crate::logger::log(&format!("Ship {:?} starts {:?}", entity, state));
        commands.entity(entity).insert(state);
    }
}

/// System: тик движения → Transform (z не трогаем)
pub fn advance_movement(
    mut commands: Commands,
    time: Res<Time>,
    extents: Res<ScreenExtents>,
    mut rng: ResMut<DeterministicRng>,
    mut ships: Query<(Entity, &mut MovementState, &mut Transform, &BoundsCheck)>,
    mut exits: EventWriter<ShipExited>,
) {
    let now = time.elapsed_secs();

    for (entity, mut state, mut transform, bounds) in ships.iter_mut() {
        match state.advance(now, &bounds.screen(&extents), &mut rng.rng) {
            MoveStep::At(position) => {
                transform.translation.x = position.x;
                transform.translation.y = position.y;
            }
            MoveStep::Expired => {
                crate::logger::log(&format!("Ship {:?} finished its path", entity));
                commands.entity(entity).despawn();
                exits.write(ShipExited {
                    ship: entity,
                    reason: ExitReason::Expired,
                });
            }
        }
    }
}

/// System: удалить корабли, целиком ушедшие за нижний край
pub fn despawn_below_screen(
    mut commands: Commands,
    ships: Query<(Entity, &BoundsCheck), With<MovementState>>,
    mut exits: EventWriter<ShipExited>,
) {
    for (entity, bounds) in ships.iter() {
        if !bounds.below_screen {
            continue;
        }

        crate::logger::log(&format!("Ship {:?} left through the bottom", entity));
        commands.entity(entity).despawn();
        exits.write(ShipExited {
            ship: entity,
            reason: ExitReason::BelowScreen,
        });
    }
}
