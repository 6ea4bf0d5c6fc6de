//! Damage flash expiry

use bevy::prelude::*;

use crate::components::DamageFlash;

/// System: снять DamageFlash после истечения
pub fn expire_damage_flash(
    mut commands: Commands,
    time: Res<Time>,
    flashes: Query<(Entity, &DamageFlash)>,
) {
    let now = time.elapsed_secs();

    for (entity, flash) in flashes.iter() {
        if now >= flash.until {
            commands.entity(entity).remove::<DamageFlash>();
        }
    }
}
