//! Weapon catalog — характеристики оружия игрока по типу
//!
//! Снаряд несёт только WeaponKind; урон берётся из каталога в момент попадания.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Тип оружия (тип снаряда)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize)]
pub enum WeaponKind {
    /// Одиночный выстрел вперёд
    Blaster,
    /// Веер из нескольких снарядов
    Spread,
}

/// Характеристики оружия
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeaponDefinition {
    pub kind: WeaponKind,
    /// Урон одного снаряда при попадании
    pub damage_on_hit: f32,
}

impl WeaponDefinition {
    /// Пустое определение (для типа, которого нет в каталоге)
    pub fn empty(kind: WeaponKind) -> Self {
        Self {
            kind,
            damage_on_hit: 0.0,
        }
    }
}

/// Каталог оружия (read-only resource)
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct WeaponCatalog {
    definitions: HashMap<WeaponKind, WeaponDefinition>,
}

impl Default for WeaponCatalog {
    fn default() -> Self {
        Self::from_definitions([
            WeaponDefinition {
                kind: WeaponKind::Blaster,
                damage_on_hit: 1.0,
            },
            WeaponDefinition {
                kind: WeaponKind::Spread,
                damage_on_hit: 1.0,
            },
        ])
    }
}

impl WeaponCatalog {
    /// Последнее определение для типа выигрывает
    pub fn from_definitions(definitions: impl IntoIterator<Item = WeaponDefinition>) -> Self {
        Self {
            definitions: definitions.into_iter().map(|d| (d.kind, d)).collect(),
        }
    }

    pub fn insert(&mut self, definition: WeaponDefinition) {
        self.definitions.insert(definition.kind, definition);
    }

    /// Определение оружия; неизвестный тип → нулевой урон + warning
    pub fn definition(&self, kind: WeaponKind) -> WeaponDefinition {
        match self.definitions.get(&kind) {
            Some(definition) => *definition,
            None => {
                crate::logger::log_warning(&format!(
                    "WeaponCatalog: no definition for {:?}, hit deals no damage",
                    kind
                ));
                WeaponDefinition::empty(kind)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog() {
        let catalog = WeaponCatalog::default();
        assert_eq!(catalog.definition(WeaponKind::Blaster).damage_on_hit, 1.0);
        assert_eq!(catalog.definition(WeaponKind::Spread).damage_on_hit, 1.0);
    }

    #[test]
    fn test_missing_weapon_deals_no_damage() {
        let catalog = WeaponCatalog::from_definitions([WeaponDefinition {
            kind: WeaponKind::Blaster,
            damage_on_hit: 3.5,
        }]);

        assert_eq!(catalog.definition(WeaponKind::Blaster).damage_on_hit, 3.5);
        assert_eq!(
            catalog.definition(WeaponKind::Spread),
            WeaponDefinition::empty(WeaponKind::Spread)
        );
    }

    #[test]
    fn test_insert_overrides() {
        let mut catalog = WeaponCatalog::default();
        catalog.insert(WeaponDefinition {
            kind: WeaponKind::Spread,
            damage_on_hit: 0.5,
        });
        assert_eq!(catalog.definition(WeaponKind::Spread).damage_on_hit, 0.5);
    }
}
