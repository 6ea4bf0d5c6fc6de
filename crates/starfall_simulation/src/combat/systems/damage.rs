//! Hit resolution system: ShipPartHit → damage router → side effects

use bevy::prelude::*;

use crate::combat::damage::{route_hit, HitOutcome};
use crate::combat::destruction::condition;
use crate::combat::events::{PartDamaged, ShipDestroyed, ShipPartHit};
use crate::combat::parts::{PartBindings, PartRegistry};
use crate::combat::weapon::WeaponCatalog;
use crate::components::{BoundsCheck, DamageFlash, Deactivated};
use crate::config::DamageFeedback;

/// System: обработка попаданий по кораблям
///
/// 1. Урон из WeaponCatalog по типу снаряда
/// 2. route_hit (правила — в combat::damage)
/// 3. Side effects: flash, deactivate части, PartDamaged, ShipDestroyed + despawn
/// 4. Снаряд despawn'ится при любом исходе
pub fn resolve_part_hits(
    mut commands: Commands,
    time: Res<Time>,
    catalog: Res<WeaponCatalog>,
    feedback: Res<DamageFeedback>,
    mut hits: EventReader<ShipPartHit>,
    mut ships: Query<(&mut PartRegistry, &PartBindings, &BoundsCheck, &Transform)>,
    mut damaged_events: EventWriter<PartDamaged>,
    mut destroyed_events: EventWriter<ShipDestroyed>,
) {
    let now = time.elapsed_secs();

    for hit in hits.read() {
        consume_projectile(&mut commands, hit.projectile);

        let Ok((mut registry, bindings, bounds, transform)) = ships.get_mut(hit.ship) else {
            crate::logger::log_warning(&format!(
                "ShipPartHit: ship {:?} is not a bound multi-part ship",
                hit.ship
            ));
            continue;
        };

        let damage_on_hit = catalog.definition(hit.weapon).damage_on_hit;
        let outcome = route_hit(
            &mut registry,
            bindings,
            bounds.is_on_screen,
            hit.struck,
            damage_on_hit,
        );

        match outcome {
            HitOutcome::AlreadyDestroyed => {}
            HitOutcome::OffScreen => {
                crate::logger::log(&format!(
                    "Ship {:?} is off screen, projectile {:?} discarded",
                    hit.ship, hit.projectile
                ));
            }
            HitOutcome::Unresolved => {
                crate::logger::log_warning(&format!(
                    "Ship {:?}: struck objects {:?} match no part, hit ignored",
                    hit.ship, hit.struck
                ));
            }
            HitOutcome::Inactive { part } => {
                let name = registry.part(part).map(|p| p.name.as_str()).unwrap_or("?");
                crate::logger::log(&format!(
                    "Ship {:?}: '{}' is already destroyed, hit ignored",
                    hit.ship, name
                ));
            }
            HitOutcome::Absorbed { part, protector } => {
                let name = registry.part(part).map(|p| p.name.as_str()).unwrap_or("?");
                crate::logger::log(&format!(
                    "🛡️ Ship {:?}: '{}' is protected by '{}'",
                    hit.ship, name, protector
                ));
            }
            HitOutcome::Damaged {
                part,
                damage,
                part_destroyed,
                ship_destroyed,
            } => {
                let Some(struck_part) = registry.part(part) else {
                    continue;
                };

                if let Some(object) = bindings.object(part) {
                    if let Ok(mut object_commands) = commands.get_entity(object) {
                        object_commands.insert(DamageFlash {
                            until: now + feedback.show_damage_duration,
                        });
                        if part_destroyed {
                            object_commands.insert(Deactivated);
                        }
                    }
                }

                crate::logger::log(&format!(
                    "💥 Ship {:?}: '{}' took {} damage (health: {})",
                    hit.ship, struck_part.name, damage, struck_part.health
                ));

                damaged_events.write(PartDamaged {
                    ship: hit.ship,
                    part: struck_part.name.clone(),
                    damage,
                    health: struck_part.health,
                    destroyed: part_destroyed,
                    condition: condition(&registry),
                });

                if ship_destroyed {
                    crate::logger::log_info(&format!("☠️ Ship {:?} destroyed", hit.ship));
                    destroyed_events.write(ShipDestroyed {
                        ship: hit.ship,
                        position: transform.translation.truncate(),
                    });
                    commands.entity(hit.ship).despawn();
                }
            }
        }
    }
}

fn consume_projectile(commands: &mut Commands, projectile: Entity) {
    if let Ok(mut projectile_commands) = commands.get_entity(projectile) {
        projectile_commands.despawn();
    }
}
