//! Start-of-life: привязка частей к физическим объектам

use bevy::prelude::*;

use crate::combat::parts::{PartBindings, PartRegistry};
use crate::components::PartObject;

/// System: построить PartBindings для кораблей без binding table
///
/// Каждое имя части ищется среди PartObject этого корабля один раз.
/// Не найденный объект → binding None + warning (часть всё равно
/// участвует в проверке уничтожения по health).
pub fn bind_ship_parts(
    mut commands: Commands,
    ships: Query<(Entity, &PartRegistry), Without<PartBindings>>,
    objects: Query<(Entity, &PartObject)>,
) {
    for (ship, registry) in ships.iter() {
        let bound: Vec<Option<Entity>> = registry
            .parts()
            .iter()
            .map(|part| {
                let object = objects
                    .iter()
                    .find(|(_, po)| po.ship == ship && po.name == part.name)
                    .map(|(entity, _)| entity);

                if object.is_none() {
                    crate::logger::log_warning(&format!(
                        "Ship {:?}: part '{}' has no physical object",
                        ship, part.name
                    ));
                }
                object
            })
            .collect();

        crate::logger::log(&format!(
            "Ship {:?}: bound {}/{} parts",
            ship,
            bound.iter().filter(|b| b.is_some()).count(),
            bound.len()
        ));
        commands.entity(ship).insert(PartBindings::new(bound));
    }
}
