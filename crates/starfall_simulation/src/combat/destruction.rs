//! Destruction aggregator: состояние корабля целиком

use super::parts::PartRegistry;

/// Состояние корабля по совокупности частей
///
/// Intact → Damaged → Destroyed (терминальное).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShipCondition {
    /// Все части живы
    Intact,
    /// Часть частей уничтожена, корабль летает дальше
    Damaged,
    Destroyed,
}

/// true если уничтожена каждая часть
pub fn all_destroyed(registry: &PartRegistry) -> bool {
    registry.parts().iter().all(|part| part.is_destroyed())
}

pub fn condition(registry: &PartRegistry) -> ShipCondition {
    let destroyed = registry
        .parts()
        .iter()
        .filter(|part| part.is_destroyed())
        .count();

    if destroyed == 0 {
        ShipCondition::Intact
    } else if destroyed < registry.len() {
        ShipCondition::Damaged
    } else {
        ShipCondition::Destroyed
    }
}
