//! Damage router: попадание → часть корабля → урон
//!
//! Порядок правил:
//! 1. Уже уничтоженный корабль урон не получает
//! 2. Корабль за экраном неуязвим (снаряд просто поглощается)
//! 3. Struck object → часть (сначала первый кандидат, потом второй)
//! 4. Уничтоженная часть больше не принимает попаданий
//! 5. Хотя бы один живой защитник → урон полностью поглощён
//! 6. health -= damage_on_hit, затем проверка уничтожения корабля
//!
//! Снаряд поглощается при любом исходе — это делает вызывающая система.

use bevy::prelude::*;

use super::destruction::all_destroyed;
use super::parts::{PartBindings, PartKey, PartRegistry};

/// Результат обработки одного попадания
#[derive(Debug, Clone, PartialEq)]
pub enum HitOutcome {
    /// Корабль уже уничтожен этим же тиком (ждёт despawn)
    AlreadyDestroyed,
    /// Корабль за пределами экрана — неуязвим
    OffScreen,
    /// Ни один из struck объектов не принадлежит частям корабля
    Unresolved,
    /// Часть уже уничтожена (попадание из очереди того же тика)
    Inactive { part: usize },
    /// Часть защищена живым защитником, урона нет
    Absorbed { part: usize, protector: String },
    Damaged {
        part: usize,
        damage: f32,
        /// health части стал ≤ 0 этим попаданием
        part_destroyed: bool,
        /// Все части уничтожены
        ship_destroyed: bool,
    },
}

/// Применить попадание к кораблю
///
/// `struck` — пара collider'ов из contact'а (свой и чужой), порядок важен.
pub fn route_hit(
    registry: &mut PartRegistry,
    bindings: &PartBindings,
    on_screen: bool,
    struck: [Entity; 2],
    damage_on_hit: f32,
) -> HitOutcome {
    if all_destroyed(registry) {
        return HitOutcome::AlreadyDestroyed;
    }

    if !on_screen {
        return HitOutcome::OffScreen;
    }

    let Some(index) = struck
        .iter()
        .find_map(|&object| registry.resolve(bindings, PartKey::ByObject(object)))
    else {
        return HitOutcome::Unresolved;
    };

    if registry.part(index).is_some_and(|part| part.is_destroyed()) {
        return HitOutcome::Inactive { part: index };
    }

    if let Some(protector) = registry.living_protector(bindings, index) {
        return HitOutcome::Absorbed {
            part: index,
            protector: protector.to_string(),
        };
    }

    let Some(part) = registry.part_mut(index) else {
        return HitOutcome::Unresolved;
    };
    part.health -= damage_on_hit;
    let part_destroyed = part.is_destroyed();

    HitOutcome::Damaged {
        part: index,
        damage: damage_on_hit,
        part_destroyed,
        ship_destroyed: all_destroyed(registry),
    }
}
