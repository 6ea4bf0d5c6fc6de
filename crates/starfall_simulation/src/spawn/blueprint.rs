//! Ship blueprints (data-driven) и spawn helper

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::error::BlueprintError;
use crate::combat::{PartDef, PartRegistry};
use crate::components::{BoundsCheck, EnemyShip, PartObject};
use crate::movement::MovementPattern;

/// Описание корабля
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipBlueprint {
    pub name: String,
    /// Collision radius (для bounds check и spawn geometry)
    pub radius: f32,
    pub parts: Vec<PartDef>,
    /// None — корабль стоит на месте (движением управляет кто-то другой)
    #[serde(default)]
    pub movement: Option<MovementPattern>,
}

impl ShipBlueprint {
    /// Четыре части: крылья прикрывают фюзеляж, фюзеляж — кабину
    pub fn gunship() -> Self {
        Self {
            name: "gunship".to_string(),
            radius: 3.5,
            parts: vec![
                PartDef::new("Wing_L", 10.0),
                PartDef::new("Wing_R", 10.0),
                PartDef::new("Fuselage", 20.0).protected_by(["Wing_L", "Wing_R"]),
                PartDef::new("Cockpit", 10.0).protected_by(["Fuselage"]),
            ],
            movement: Some(MovementPattern::wander()),
        }
    }

    /// Одна часть, пролёт от края до края
    pub fn fighter() -> Self {
        Self {
            name: "fighter".to_string(),
            radius: 2.5,
            parts: vec![PartDef::new("Hull", 4.0)],
            movement: Some(MovementPattern::side_to_side()),
        }
    }

    /// Одна часть, нырок по Bezier
    pub fn swooper() -> Self {
        Self {
            name: "swooper".to_string(),
            radius: 2.5,
            parts: vec![PartDef::new("Hull", 4.0)],
            movement: Some(MovementPattern::swoop()),
        }
    }

    pub fn validate(&self) -> Result<PartRegistry, BlueprintError> {
        if !(self.radius > 0.0) {
            return Err(BlueprintError::NonPositiveRadius(self.radius));
        }
        PartRegistry::new(&self.parts)
    }
}

/// Spawn корабля и child entity на каждую часть
///
/// Позиция — стартовая точка от spawner'а (обычно над верхним краем).
/// Binding частей произойдёт в ближайшем тике (`bind_ship_parts`).
pub fn spawn_ship(
    commands: &mut Commands,
    blueprint: &ShipBlueprint,
    position: Vec2,
) -> Result<Entity, BlueprintError> {
    let registry = blueprint.validate()?;

    let mut ship = commands.spawn((
        EnemyShip {
            blueprint: blueprint.name.clone(),
        },
        Transform::from_translation(position.extend(0.0)),
        BoundsCheck::new(blueprint.radius),
        registry,
    ));
    if let Some(pattern) = blueprint.movement {
        ship.insert(pattern);
    }

    let ship_id = ship.id();
    ship.with_children(|parent| {
        for part in &blueprint.parts {
            parent.spawn((
                PartObject {
                    ship: ship_id,
                    name: part.name.clone(),
                },
                Transform::default(),
            ));
        }
    });

    crate::logger::log(&format!(
        "Spawned '{}' {:?} at {:?}",
        blueprint.name, ship_id, position
    ));

    Ok(ship_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_blueprints_are_valid() {
        for blueprint in [
            ShipBlueprint::gunship(),
            ShipBlueprint::fighter(),
            ShipBlueprint::swooper(),
        ] {
            assert!(blueprint.validate().is_ok(), "{} is invalid", blueprint.name);
        }
    }

    #[test]
    fn test_radius_must_be_positive() {
        let mut blueprint = ShipBlueprint::fighter();
        blueprint.radius = 0.0;
        assert_eq!(
            blueprint.validate(),
            Err(BlueprintError::NonPositiveRadius(0.0))
        );
    }

    #[test]
    fn test_blueprint_from_json() {
        let json = r#"{
            "name": "turret",
            "radius": 2.0,
            "parts": [
                { "name": "Base", "health": 3.0 },
                { "name": "Gun", "health": 1.5, "protected_by": ["Base"] }
            ],
            "movement": { "Wander": { "duration": 2.5 } }
        }"#;

        let blueprint: ShipBlueprint = serde_json::from_str(json).unwrap();
        assert_eq!(blueprint.parts.len(), 2);
        assert!(blueprint.parts[0].protected_by.is_empty());
        assert_eq!(blueprint.parts[1].protected_by, vec!["Base".to_string()]);
        assert_eq!(
            blueprint.movement,
            Some(MovementPattern::Wander { duration: 2.5 })
        );

        let registry = blueprint.validate().unwrap();
        assert_eq!(registry.len(), 2);
    }
}
