//! Part registry: логические части корабля и их lookup
//!
//! Корабль состоит из фиксированного набора частей (крылья, фюзеляж,
//! кабина...). У каждой части своё здоровье и список защитников —
//! частей, которые должны быть уничтожены прежде, чем эта начнёт получать урон.
//!
//! Lookup идёт в порядке объявления, первый match выигрывает.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::spawn::BlueprintError;

/// Описание части (из blueprint)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartDef {
    pub name: String,
    pub health: f32,
    /// Имена частей, защищающих эту (могут отсутствовать в корабле)
    #[serde(default)]
    pub protected_by: Vec<String>,
}

impl PartDef {
    pub fn new(name: impl Into<String>, health: f32) -> Self {
        Self {
            name: name.into(),
            health,
            protected_by: Vec::new(),
        }
    }

    pub fn protected_by<I, S>(mut self, protectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.protected_by = protectors.into_iter().map(Into::into).collect();
        self
    }
}

/// Часть корабля в runtime
#[derive(Debug, Clone, PartialEq)]
pub struct Part {
    pub name: String,
    pub health: f32,
    pub protected_by: Vec<String>,
}

impl Part {
    /// health ≤ 0 → часть уничтожена (навсегда)
    pub fn is_destroyed(&self) -> bool {
        self.health <= 0.0
    }
}

/// Ключ lookup'а части
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartKey<'a> {
    ByName(&'a str),
    ByObject(Entity),
}

/// Binding table: индекс части → физический объект
///
/// Строится один раз при старте корабля (`bind_ship_parts`)
/// и дальше не меняется.
#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct PartBindings {
    objects: Vec<Option<Entity>>,
}

impl PartBindings {
    pub fn new(objects: Vec<Option<Entity>>) -> Self {
        Self { objects }
    }

    /// Физический объект части (None — объект не найден при binding)
    pub fn object(&self, part: usize) -> Option<Entity> {
        self.objects.get(part).copied().flatten()
    }

    /// Первая часть, привязанная к объекту
    pub fn part_for_object(&self, object: Entity) -> Option<usize> {
        self.objects.iter().position(|bound| *bound == Some(object))
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

/// Все части корабля
///
/// Состав фиксирован после создания; меняется только health.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct PartRegistry {
    parts: Vec<Part>,
}

impl PartRegistry {
    /// Создать registry из blueprint'а с валидацией
    pub fn new(defs: &[PartDef]) -> Result<Self, BlueprintError> {
        if defs.is_empty() {
            return Err(BlueprintError::NoParts);
        }

        let mut parts: Vec<Part> = Vec::with_capacity(defs.len());
        for def in defs {
            if def.name.is_empty() {
                return Err(BlueprintError::EmptyPartName);
            }
            if parts.iter().any(|p| p.name == def.name) {
                return Err(BlueprintError::DuplicatePart(def.name.clone()));
            }
            if !(def.health > 0.0) {
                return Err(BlueprintError::NonPositiveHealth {
                    part: def.name.clone(),
                    health: def.health,
                });
            }
            if def.protected_by.contains(&def.name) {
                return Err(BlueprintError::SelfProtected(def.name.clone()));
            }

            parts.push(Part {
                name: def.name.clone(),
                health: def.health,
                protected_by: def.protected_by.clone(),
            });
        }

        Ok(Self { parts })
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    pub fn part(&self, index: usize) -> Option<&Part> {
        self.parts.get(index)
    }

    pub fn part_mut(&mut self, index: usize) -> Option<&mut Part> {
        self.parts.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Единый resolver: имя или физический объект → индекс части
    pub fn resolve(&self, bindings: &PartBindings, key: PartKey<'_>) -> Option<usize> {
        match key {
            PartKey::ByName(name) => self.parts.iter().position(|p| p.name == name),
            PartKey::ByObject(object) => bindings
                .part_for_object(object)
                .filter(|&index| index < self.parts.len()),
        }
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Part> {
        self.resolve(&PartBindings::default(), PartKey::ByName(name))
            .and_then(|index| self.part(index))
    }

    pub fn find_by_object(&self, bindings: &PartBindings, object: Entity) -> Option<&Part> {
        self.resolve(bindings, PartKey::ByObject(object))
            .and_then(|index| self.part(index))
    }

    /// Уничтожена ли часть
    ///
    /// Не найдена → true: висячая ссылка в protected_by не должна
    /// блокировать урон навсегда.
    pub fn is_destroyed(&self, bindings: &PartBindings, key: PartKey<'_>) -> bool {
        match self.resolve(bindings, key).and_then(|index| self.part(index)) {
            Some(part) => part.is_destroyed(),
            None => true,
        }
    }

    /// Первый живой защитник части (None — часть открыта для урона)
    pub fn living_protector(&self, bindings: &PartBindings, part: usize) -> Option<&str> {
        let part = self.part(part)?;
        part.protected_by
            .iter()
            .find(|name| !self.is_destroyed(bindings, PartKey::ByName(name)))
            .map(String::as_str)
    }
}
