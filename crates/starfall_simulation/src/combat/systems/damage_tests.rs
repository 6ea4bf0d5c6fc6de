//! Tests for damage routing rules.

#[cfg(test)]
mod tests {
    use bevy::prelude::*;
    use crate::combat::{route_hit, HitOutcome, PartBindings, PartDef, PartRegistry};

    const NOWHERE: Entity = Entity::PLACEHOLDER;

    fn object(index: u32) -> Entity {
        Entity::from_raw(10 + index)
    }

    fn bound(registry: &PartRegistry) -> PartBindings {
        PartBindings::new((0..registry.len() as u32).map(|i| Some(object(i))).collect())
    }

    /// A защищена B
    fn shielded_pair() -> PartRegistry {
        PartRegistry::new(&[
            PartDef::new("A", 5.0).protected_by(["B"]),
            PartDef::new("B", 1.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_protected_part_takes_no_damage_while_protector_alive() {
        let mut registry = shielded_pair();
        let bindings = bound(&registry);

        for _ in 0..10 {
            let outcome = route_hit(&mut registry, &bindings, true, [object(0), NOWHERE], 2.0);
            assert_eq!(
                outcome,
                HitOutcome::Absorbed {
                    part: 0,
                    protector: "B".to_string()
                }
            );
        }
        assert_eq!(registry.part(0).unwrap().health, 5.0);

        // Убиваем защитника
        let outcome = route_hit(&mut registry, &bindings, true, [object(1), NOWHERE], 2.0);
        assert!(matches!(
            outcome,
            HitOutcome::Damaged { part: 1, part_destroyed: true, ship_destroyed: false, .. }
        ));

        // Следующее попадание снимает ровно damage_on_hit
        route_hit(&mut registry, &bindings, true, [object(0), NOWHERE], 2.0);
        assert_eq!(registry.part(0).unwrap().health, 3.0);
    }

    #[test]
    fn test_all_protectors_must_be_destroyed() {
        let mut registry = PartRegistry::new(&[
            PartDef::new("Core", 3.0).protected_by(["Left", "Right"]),
            PartDef::new("Left", 1.0),
            PartDef::new("Right", 1.0),
        ])
        .unwrap();
        let bindings = bound(&registry);

        route_hit(&mut registry, &bindings, true, [object(1), NOWHERE], 1.0);
        let outcome = route_hit(&mut registry, &bindings, true, [object(0), NOWHERE], 1.0);
        assert_eq!(
            outcome,
            HitOutcome::Absorbed {
                part: 0,
                protector: "Right".to_string()
            }
        );

        route_hit(&mut registry, &bindings, true, [object(2), NOWHERE], 1.0);
        route_hit(&mut registry, &bindings, true, [object(0), NOWHERE], 1.0);
        assert_eq!(registry.part(0).unwrap().health, 2.0);
    }

    #[test]
    fn test_missing_protector_never_blocks() {
        let mut registry = PartRegistry::new(&[
            PartDef::new("Hull", 2.0).protected_by(["Turret_That_Does_Not_Exist"]),
        ])
        .unwrap();
        let bindings = bound(&registry);

        let outcome = route_hit(&mut registry, &bindings, true, [object(0), NOWHERE], 1.0);
        assert!(matches!(outcome, HitOutcome::Damaged { part: 0, .. }));
        assert_eq!(registry.part(0).unwrap().health, 1.0);
    }

    #[test]
    fn test_second_candidate_is_tried() {
        let mut registry =
            PartRegistry::new(&[PartDef::new("A", 1.0), PartDef::new("B", 3.0)]).unwrap();
        let bindings = bound(&registry);
        let projectile_collider = Entity::from_raw(999);

        let outcome = route_hit(
            &mut registry,
            &bindings,
            true,
            [projectile_collider, object(1)],
            1.0,
        );
        assert!(matches!(outcome, HitOutcome::Damaged { part: 1, .. }));
        assert_eq!(registry.part(1).unwrap().health, 2.0);
    }

    #[test]
    fn test_first_candidate_wins() {
        let mut registry =
            PartRegistry::new(&[PartDef::new("A", 2.0), PartDef::new("B", 2.0)]).unwrap();
        let bindings = bound(&registry);

        route_hit(&mut registry, &bindings, true, [object(1), object(0)], 1.0);
        assert_eq!(registry.part(0).unwrap().health, 2.0);
        assert_eq!(registry.part(1).unwrap().health, 1.0);
    }

    #[test]
    fn test_unresolved_hit_changes_nothing() {
        let mut registry = shielded_pair();
        let bindings = bound(&registry);
        let before = registry.clone();

        let outcome = route_hit(
            &mut registry,
            &bindings,
            true,
            [Entity::from_raw(500), Entity::from_raw(501)],
            1.0,
        );
        assert_eq!(outcome, HitOutcome::Unresolved);
        assert_eq!(registry, before);
    }

    #[test]
    fn test_off_screen_ship_is_invulnerable() {
        let mut registry = PartRegistry::new(&[PartDef::new("Hull", 1.0)]).unwrap();
        let bindings = bound(&registry);

        for _ in 0..5 {
            let outcome = route_hit(&mut registry, &bindings, false, [object(0), NOWHERE], 10.0);
            assert_eq!(outcome, HitOutcome::OffScreen);
        }
        assert_eq!(registry.part(0).unwrap().health, 1.0);
    }

    #[test]
    fn test_full_destruction_reported_once() {
        let mut registry =
            PartRegistry::new(&[PartDef::new("A", 1.0), PartDef::new("B", 1.0)]).unwrap();
        let bindings = bound(&registry);

        let first = route_hit(&mut registry, &bindings, true, [object(0), NOWHERE], 1.0);
        assert!(matches!(
            first,
            HitOutcome::Damaged { part_destroyed: true, ship_destroyed: false, .. }
        ));

        let second = route_hit(&mut registry, &bindings, true, [object(1), NOWHERE], 1.0);
        assert!(matches!(
            second,
            HitOutcome::Damaged { part_destroyed: true, ship_destroyed: true, .. }
        ));

        // Повторный hit по уже уничтоженному кораблю
        let third = route_hit(&mut registry, &bindings, true, [object(1), NOWHERE], 1.0);
        assert_eq!(third, HitOutcome::AlreadyDestroyed);
    }

    #[test]
    fn test_partial_destruction_keeps_ship_alive() {
        let mut registry =
            PartRegistry::new(&[PartDef::new("A", 1.0), PartDef::new("B", 2.0)]).unwrap();
        let bindings = bound(&registry);

        let first = route_hit(&mut registry, &bindings, true, [object(0), NOWHERE], 1.0);
        let second = route_hit(&mut registry, &bindings, true, [object(1), NOWHERE], 1.0);

        assert!(matches!(
            first,
            HitOutcome::Damaged { part_destroyed: true, ship_destroyed: false, .. }
        ));
        assert!(matches!(
            second,
            HitOutcome::Damaged { part_destroyed: false, ship_destroyed: false, .. }
        ));
        assert!(registry.part(0).unwrap().is_destroyed());
        assert!(!registry.part(1).unwrap().is_destroyed());
    }

    #[test]
    fn test_destroyed_part_ignores_further_hits() {
        let mut registry =
            PartRegistry::new(&[PartDef::new("A", 1.0), PartDef::new("B", 5.0)]).unwrap();
        let bindings = bound(&registry);

        route_hit(&mut registry, &bindings, true, [object(0), NOWHERE], 1.0);

        for _ in 0..3 {
            let outcome = route_hit(&mut registry, &bindings, true, [object(0), NOWHERE], 1.0);
            assert_eq!(outcome, HitOutcome::Inactive { part: 0 });
        }
        assert_eq!(registry.part(0).unwrap().health, 0.0);
        assert_eq!(registry.part(1).unwrap().health, 5.0);

        // Первый кандидат резолвится в мёртвую часть, второй не пробуется
        let outcome = route_hit(&mut registry, &bindings, true, [object(0), object(1)], 1.0);
        assert_eq!(outcome, HitOutcome::Inactive { part: 0 });
        assert_eq!(registry.part(1).unwrap().health, 5.0);
    }
}
