//! Movement patterns вражеских кораблей
//!
//! `MovementPattern` — конфигурация (задаётся в blueprint).
//! `MovementState` — runtime state machine, создаётся один раз при старте.
//!
//! Паттерны:
//! - SideToSide: пролёт от края до края, затем Expired
//! - Swoop: нырок по Bezier под экран и обратно, затем Expired
//! - Wander: бесконечная цепочка случайных waypoints (только урон убивает)

use bevy::prelude::*;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::curve::{ease_out, lerp, quadratic_bezier, sine_wobble};
use super::spawn_geometry::{random_waypoint, side_to_side_endpoints, swoop_points, ScreenBounds};

/// Конфигурация движения корабля
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MovementPattern {
    SideToSide {
        /// Время пролёта через экран (секунды)
        life_time: f32,
        /// Амплитуда синусоидального покачивания (0 = прямая)
        sin_eccentricity: f32,
    },
    Swoop {
        life_time: f32,
    },
    Wander {
        /// Время перелёта между waypoints (секунды)
        duration: f32,
    },
}

impl MovementPattern {
    pub fn side_to_side() -> Self {
        Self::SideToSide {
            life_time: 10.0,
            sin_eccentricity: 0.0,
        }
    }

    pub fn swoop() -> Self {
        Self::Swoop { life_time: 5.0 }
    }

    pub fn wander() -> Self {
        Self::Wander { duration: 4.0 }
    }
}

/// Результат одного тика движения
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MoveStep {
    /// Новая позиция корабля
    At(Vec2),
    /// Траектория завершена — корабль покидает симуляцию
    Expired,
}

/// Runtime состояние движения
#[derive(Component, Debug, Clone, PartialEq)]
pub enum MovementState {
    SideToSide {
        p0: Vec2,
        p1: Vec2,
        birth_time: f32,
        life_time: f32,
        sin_eccentricity: f32,
    },
    Swoop {
        points: [Vec2; 3],
        birth_time: f32,
        life_time: f32,
    },
    Wander {
        p0: Vec2,
        p1: Vec2,
        time_start: f32,
        duration: f32,
    },
}

impl MovementState {
    /// Инициализация траектории (аналог start-of-life)
    ///
    /// `position` — позиция, выбранная внешним spawner'ом.
    pub fn start<R: Rng + ?Sized>(
        pattern: &MovementPattern,
        position: Vec2,
        bounds: &ScreenBounds,
        now: f32,
        rng: &mut R,
    ) -> Self {
        match *pattern {
            MovementPattern::SideToSide {
                life_time,
                sin_eccentricity,
            } => {
                let ends = side_to_side_endpoints(bounds, rng);
                Self::SideToSide {
                    p0: ends.p0,
                    p1: ends.p1,
                    birth_time: now,
                    life_time,
                    sin_eccentricity,
                }
            }
            MovementPattern::Swoop { life_time } => Self::Swoop {
                points: swoop_points(bounds, position, rng),
                birth_time: now,
                life_time,
            },
            MovementPattern::Wander { duration } => {
                let (mut p0, mut p1, mut time_start) = (position, position, now);
                next_waypoint(&mut p0, &mut p1, &mut time_start, bounds, now, rng);
                Self::Wander {
                    p0,
                    p1,
                    time_start,
                    duration,
                }
            }
        }
    }

    /// Один тик: пересчитать u и вернуть позицию (или Expired)
    pub fn advance<R: Rng + ?Sized>(
        &mut self,
        now: f32,
        bounds: &ScreenBounds,
        rng: &mut R,
    ) -> MoveStep {
        match self {
            Self::SideToSide {
                p0,
                p1,
                birth_time,
                life_time,
                sin_eccentricity,
            } => {
                let u = (now - *birth_time) / *life_time;
                if u > 1.0 {
                    return MoveStep::Expired;
                }
                MoveStep::At(lerp(*p0, *p1, sine_wobble(u, *sin_eccentricity)))
            }
            Self::Swoop {
                points,
                birth_time,
                life_time,
            } => {
                let u = (now - *birth_time) / *life_time;
                if u > 1.0 {
                    return MoveStep::Expired;
                }
                MoveStep::At(quadratic_bezier(points[0], points[1], points[2], u))
            }
            Self::Wander {
                p0,
                p1,
                time_start,
                duration,
            } => {
                let mut u = (now - *time_start) / *duration;
                if u >= 1.0 {
                    next_waypoint(p0, p1, time_start, bounds, now, rng);
                    u = 0.0;
                }
                MoveStep::At(lerp(*p0, *p1, ease_out(u)))
            }
        }
    }

    /// Текущая пара (p0, p1) для Wander
    pub fn wander_segment(&self) -> Option<(Vec2, Vec2)> {
        match *self {
            Self::Wander { p0, p1, .. } => Some((p0, p1)),
            _ => None,
        }
    }
}

/// Wander: p1 → p0, новая случайная p1, сброс таймера
fn next_waypoint<R: Rng + ?Sized>(
    p0: &mut Vec2,
    p1: &mut Vec2,
    time_start: &mut f32,
    bounds: &ScreenBounds,
    now: f32,
    rng: &mut R,
) {
    *p0 = *p1;
    *p1 = random_waypoint(bounds, rng);
    *time_start = now;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn bounds() -> ScreenBounds {
        ScreenBounds::new(30.0, 40.0, 4.0)
    }

    #[test]
    fn test_side_to_side_starts_at_edge_and_expires() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let b = bounds();
        let mut state =
            MovementState::start(&MovementPattern::side_to_side(), Vec2::ZERO, &b, 2.0, &mut rng);

        let MoveStep::At(first) = state.advance(2.0, &b, &mut rng) else {
            panic!("side-to-side must move at u = 0");
        };
        assert_eq!(first.x.abs(), b.cam_width + b.radius);

        // u == 1 ещё движется (терминальное условие строго u > 1)
        assert!(matches!(state.advance(12.0, &b, &mut rng), MoveStep::At(_)));
        assert_eq!(state.advance(12.5, &b, &mut rng), MoveStep::Expired);
    }

    #[test]
    fn test_swoop_returns_to_start_height() {
        let mut rng = ChaCha8Rng::seed_from_u64(12);
        let b = bounds();
        let start = Vec2::new(3.0, 44.0);
        let mut state = MovementState::start(&MovementPattern::swoop(), start, &b, 0.0, &mut rng);

        let MoveStep::At(at_start) = state.advance(0.0, &b, &mut rng) else {
            panic!("swoop must move at u = 0");
        };
        assert!(at_start.distance(start) < 1e-4);

        let MoveStep::At(at_end) = state.advance(5.0, &b, &mut rng) else {
            panic!("swoop must move at u = 1");
        };
        assert!((at_end.y - start.y).abs() < 1e-3);

        assert_eq!(state.advance(5.01, &b, &mut rng), MoveStep::Expired);
    }

    #[test]
    fn test_wander_retargets_forever() {
        let mut rng = ChaCha8Rng::seed_from_u64(13);
        let b = bounds();
        let spawn = Vec2::new(0.0, 44.0);
        let mut state = MovementState::start(&MovementPattern::wander(), spawn, &b, 0.0, &mut rng);

        let (p0, mut previous_p1) = state.wander_segment().unwrap();
        assert_eq!(p0, spawn);

        // 200 сегментов по 4 секунды: ни одного Expired
        for segment in 1..=200 {
            let now = segment as f32 * 4.0;
            let step = state.advance(now, &b, &mut rng);

            let (p0, p1) = state.wander_segment().unwrap();
            assert_eq!(p0, previous_p1, "segment {}: p0 must be prior p1", segment);
            assert!(p1.x.abs() <= b.inner_width() && p1.y.abs() <= b.inner_height());

            // После сброса u = 0 → позиция в начале нового сегмента
            assert_eq!(step, MoveStep::At(p0));
            previous_p1 = p1;

            // Середина сегмента тоже движение
            let mid = state.advance(now + 2.0, &b, &mut rng);
            assert!(matches!(mid, MoveStep::At(_)));
        }
    }

    #[test]
    fn test_wander_eases_into_target() {
        let mut rng = ChaCha8Rng::seed_from_u64(14);
        let b = bounds();
        let mut state =
            MovementState::start(&MovementPattern::wander(), Vec2::ZERO, &b, 0.0, &mut rng);
        let (p0, p1) = state.wander_segment().unwrap();

        // u = 0.5 → ease_out = 0.75
        let MoveStep::At(pos) = state.advance(2.0, &b, &mut rng) else {
            panic!("wander never expires");
        };
        assert!(pos.distance(p0 + (p1 - p0) * 0.75) < 1e-4);
    }
}
