//! Tunables симуляции (Bevy resources)
//!
//! Все значения имеют Default и serde derive, чтобы host-приложение
//! могло загрузить их из файла и вставить через `insert_resource`.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Размеры видимой области (половины ширины/высоты, world units)
///
/// Центр экрана — (0, 0). Orthographic camera: cam_height = ortho size,
/// cam_width = cam_height × aspect.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenExtents {
    pub cam_width: f32,
    pub cam_height: f32,
}

impl Default for ScreenExtents {
    fn default() -> Self {
        // 3:4 portrait
        Self {
            cam_width: 30.0,
            cam_height: 40.0,
        }
    }
}

/// Обратная связь при попадании
#[derive(Resource, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DamageFeedback {
    /// Сколько секунд часть "мигает" после урона
    pub show_damage_duration: f32,
}

impl Default for DamageFeedback {
    fn default() -> Self {
        Self {
            show_damage_duration: 0.1,
        }
    }
}
