//! Компоненты корабля и его физических частей

use bevy::prelude::*;

/// Маркер вражеского корабля
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
pub struct EnemyShip {
    /// Имя blueprint'а (для логов и scoring)
    pub blueprint: String,
}

/// Физический sub-object части корабля
///
/// Висит на child entity корабля. Collider/визуал принадлежат
/// внешнему runtime; здесь только связь "объект → имя части".
#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
pub struct PartObject {
    pub ship: Entity,
    pub name: String,
}

/// Маркер: часть уничтожена, объект выключен (невидим, без коллизий)
///
/// Entity не удаляется — часть остаётся в registry для lookup.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct Deactivated;

/// Подсветка урона на части (red flash)
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct DamageFlash {
    /// Время окончания подсветки (секунды от старта)
    pub until: f32,
}
