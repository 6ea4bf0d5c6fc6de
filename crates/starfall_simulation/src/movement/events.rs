//! Movement events

use bevy::prelude::*;

/// Почему корабль покинул симуляцию без уничтожения
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// Траектория завершилась (u > 1)
    Expired,
    /// Ушёл за нижний край экрана
    BelowScreen,
}

/// Event: корабль удалён движением (не уроном)
///
/// Для fleet bookkeeping (счётчик живых кораблей) без начисления очков.
/// Уничтожение уроном — `combat::ShipDestroyed`.
#[derive(Event, Debug, Clone)]
pub struct ShipExited {
    pub ship: Entity,
    pub reason: ExitReason,
}
