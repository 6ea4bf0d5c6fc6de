//! Combat events

use bevy::prelude::*;

use super::destruction::ShipCondition;
use super::weapon::WeaponKind;

/// Event: снаряд игрока столкнулся с кораблём (physics → симуляция)
///
/// `struck` — оба collider'а контакта в порядке physics engine
/// (this collider, other collider). Который из них часть корабля —
/// решает router.
#[derive(Event, Debug, Clone)]
pub struct ShipPartHit {
    pub ship: Entity,
    pub projectile: Entity,
    pub weapon: WeaponKind,
    pub struck: [Entity; 2],
}

/// Event: часть получила урон (для VFX, звуков, UI)
#[derive(Event, Debug, Clone)]
pub struct PartDamaged {
    pub ship: Entity,
    pub part: String,
    pub damage: f32,
    /// health после попадания
    pub health: f32,
    /// Часть уничтожена этим попаданием (объект получил Deactivated)
    pub destroyed: bool,
    /// Состояние корабля после попадания
    pub condition: ShipCondition,
}

/// Event: корабль полностью уничтожен (симуляция → fleet manager)
///
/// Отправляется ровно один раз, затем корабль despawn'ится.
/// Fleet manager использует его для очков и счётчика кораблей.
#[derive(Event, Debug, Clone)]
pub struct ShipDestroyed {
    pub ship: Entity,
    /// Позиция в момент уничтожения (для power-up drop)
    pub position: Vec2,
}
