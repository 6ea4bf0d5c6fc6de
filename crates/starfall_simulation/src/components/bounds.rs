//! Bounds check: где корабль относительно видимой области

use bevy::prelude::*;

use crate::config::ScreenExtents;
use crate::movement::ScreenBounds;

/// Bounding-check компонент корабля
///
/// Флаги пересчитываются каждый тик системой `update_bounds_check`.
/// Корабль считается "на экране" только когда он виден целиком
/// (центр дальше `radius` от каждого края).
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct BoundsCheck {
    /// Collision radius корабля
    pub radius: f32,
    pub is_on_screen: bool,
    pub off_left: bool,
    pub off_right: bool,
    pub off_up: bool,
    pub off_down: bool,
    /// Корабль целиком ушёл за нижний край (despawn boundary)
    pub below_screen: bool,
}

impl Default for BoundsCheck {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl BoundsCheck {
    /// Новый check; до первого тика корабль считается за экраном
    pub fn new(radius: f32) -> Self {
        Self {
            radius,
            is_on_screen: false,
            off_left: false,
            off_right: false,
            off_up: false,
            off_down: false,
            below_screen: false,
        }
    }

    /// Пересчитать флаги для позиции
    pub fn evaluate(&mut self, position: Vec2, extents: &ScreenExtents) {
        let w = extents.cam_width - self.radius;
        let h = extents.cam_height - self.radius;

        self.off_right = position.x > w;
        self.off_left = position.x < -w;
        self.off_up = position.y > h;
        self.off_down = position.y < -h;

        self.is_on_screen = !(self.off_left || self.off_right || self.off_up || self.off_down);
        self.below_screen = position.y < -(extents.cam_height + self.radius);
    }

    /// Геометрия экрана для spawn geometry этого корабля
    pub fn screen(&self, extents: &ScreenExtents) -> ScreenBounds {
        ScreenBounds::new(extents.cam_width, extents.cam_height, self.radius)
    }
}

/// System: пересчёт BoundsCheck по Transform
pub fn update_bounds_check(
    extents: Res<ScreenExtents>,
    mut ships: Query<(&Transform, &mut BoundsCheck)>,
) {
    for (transform, mut bounds) in ships.iter_mut() {
        bounds.evaluate(transform.translation.truncate(), &extents);
    }
}
