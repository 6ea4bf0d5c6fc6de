//! Curve evaluators: normalized time u → position
//!
//! Все функции чистые. Clamp НЕ делается: владелец state machine
//! гарантирует что u ∈ [0, 1] (завершает/сбрасывает движение раньше).

use bevy::math::Vec2;
use std::f32::consts::TAU;

/// Амплитуда time-warp для swoop кривой
pub const SWOOP_WARP: f32 = 0.2;

/// Линейная интерполяция: (1-u)·p0 + u·p1
pub fn lerp(p0: Vec2, p1: Vec2, u: f32) -> Vec2 {
    (1.0 - u) * p0 + u * p1
}

/// Ease-out (торможение к концу сегмента): 1 - (1-u)²
pub fn ease_out(u: f32) -> f32 {
    1.0 - (1.0 - u).powi(2)
}

/// Несимметричный time-warp: u - 0.2·sin(2πu)
///
/// warp(0) = 0, warp(1) = 1. В первой половине корабль "догоняет",
/// во второй — замедляется у нижней точки кривой.
pub fn swoop_warp(u: f32) -> f32 {
    u - SWOOP_WARP * (u * TAU).sin()
}

/// Синусоидальное покачивание вдоль прямой: u + e·sin(2πu)
///
/// e = 0 → обычный линейный пролёт.
pub fn sine_wobble(u: f32, eccentricity: f32) -> f32 {
    u + eccentricity * (u * TAU).sin()
}

/// Quadratic Bezier по трём точкам с `swoop_warp`
///
/// Двухступенчатый blend: lerp(p0,p1) и lerp(p1,p2), затем между ними.
pub fn quadratic_bezier(p0: Vec2, p1: Vec2, p2: Vec2, u: f32) -> Vec2 {
    let u = swoop_warp(u);
    let p01 = lerp(p0, p1, u);
    let p12 = lerp(p1, p2, u);
    lerp(p01, p12, u)
}
