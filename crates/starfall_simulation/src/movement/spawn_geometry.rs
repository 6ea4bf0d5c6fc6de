//! Spawn geometry: случайные точки траекторий в пределах экрана
//!
//! Все координаты — относительно центра экрана.
//! `cam_width` / `cam_height` — половины размеров видимой области.

use bevy::math::Vec2;
use rand::Rng;

/// Множитель глубины нижней точки swoop (в высотах экрана ниже центра)
pub const SWOOP_DEPTH_MIN: f32 = 2.0;
pub const SWOOP_DEPTH_MAX: f32 = 2.75;

/// Геометрия экрана с точки зрения конкретного корабля
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenBounds {
    pub cam_width: f32,
    pub cam_height: f32,
    /// Радиус корабля (collision radius)
    pub radius: f32,
}

impl ScreenBounds {
    pub fn new(cam_width: f32, cam_height: f32, radius: f32) -> Self {
        Self {
            cam_width,
            cam_height,
            radius,
        }
    }

    /// Половина ширины за вычетом радиуса (корабль целиком на экране)
    pub fn inner_width(&self) -> f32 {
        self.cam_width - self.radius
    }

    pub fn inner_height(&self) -> f32 {
        self.cam_height - self.radius
    }
}

/// Концы side-to-side пролёта
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SideToSideEndpoints {
    pub p0: Vec2,
    pub p1: Vec2,
    /// true → корабль летит справа налево
    pub flipped: bool,
}

/// Uniform sample в [a, b] независимо от порядка аргументов
///
/// Пустой интервал (a == b) возвращает границу.
pub fn sample_range<R: Rng + ?Sized>(rng: &mut R, a: f32, b: f32) -> f32 {
    let (low, high) = if a <= b { (a, b) } else { (b, a) };
    if low == high {
        return low;
    }
    rng.gen_range(low..=high)
}

/// Старт за левым краем, финиш за правым (50% — наоборот)
pub fn side_to_side_endpoints<R: Rng + ?Sized>(
    bounds: &ScreenBounds,
    rng: &mut R,
) -> SideToSideEndpoints {
    let edge = bounds.cam_width + bounds.radius;

    let mut p0 = Vec2::new(
        -edge,
        sample_range(rng, -bounds.cam_height, bounds.cam_height),
    );
    let mut p1 = Vec2::new(
        edge,
        sample_range(rng, -bounds.cam_height, bounds.cam_height),
    );

    // Смена знака x переносит обе точки на противоположные края
    let flipped = rng.gen::<f32>() > 0.5;
    if flipped {
        p0.x = -p0.x;
        p1.x = -p1.x;
    }

    SideToSideEndpoints { p0, p1, flipped }
}

/// Три точки swoop: текущая позиция → глубоко под экраном → обратно на высоту старта
pub fn swoop_points<R: Rng + ?Sized>(
    bounds: &ScreenBounds,
    start: Vec2,
    rng: &mut R,
) -> [Vec2; 3] {
    let x_max = bounds.inner_width();

    let depth = sample_range(rng, SWOOP_DEPTH_MAX, SWOOP_DEPTH_MIN);
    let bottom = Vec2::new(
        sample_range(rng, -x_max, x_max),
        -bounds.cam_height * depth,
    );
    let end = Vec2::new(sample_range(rng, -x_max, x_max), start.y);

    [start, bottom, end]
}

/// Случайная точка, в которой корабль целиком виден
pub fn random_waypoint<R: Rng + ?Sized>(bounds: &ScreenBounds, rng: &mut R) -> Vec2 {
    let w = bounds.inner_width();
    let h = bounds.inner_height();
    Vec2::new(sample_range(rng, -w, w), sample_range(rng, -h, h))
}
