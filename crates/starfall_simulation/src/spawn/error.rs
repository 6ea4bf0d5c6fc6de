//! Ошибки конфигурации кораблей

use std::fmt;

/// Blueprint не прошёл валидацию
#[derive(Debug, Clone, PartialEq)]
pub enum BlueprintError {
    /// Корабль без частей никогда не будет уничтожен уроном
    NoParts,
    EmptyPartName,
    DuplicatePart(String),
    NonPositiveHealth { part: String, health: f32 },
    /// Часть в собственном protected_by — неуязвима навсегда
    SelfProtected(String),
    NonPositiveRadius(f32),
}

impl fmt::Display for BlueprintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoParts => write!(f, "ship blueprint has no parts"),
            Self::EmptyPartName => write!(f, "part name is empty"),
            Self::DuplicatePart(name) => write!(f, "part '{}' is declared twice", name),
            Self::NonPositiveHealth { part, health } => {
                write!(f, "part '{}' starts with non-positive health {}", part, health)
            }
            Self::SelfProtected(name) => write!(f, "part '{}' is protected by itself", name),
            Self::NonPositiveRadius(radius) => {
                write!(f, "ship radius must be positive, got {}", radius)
            }
        }
    }
}

impl std::error::Error for BlueprintError {}
