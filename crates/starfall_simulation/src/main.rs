//! Headless симуляция STARFALL
//!
//! Спавнит небольшую волну и обстреливает gunship, пока он не развалится.

use bevy::prelude::*;
use std::time::Duration;

use bevy::time::TimeUpdateStrategy;
use starfall_simulation::*;

fn main() {
    let seed = 42;
    println!("Starting STARFALL headless simulation (seed: {})", seed);

    let mut app = create_headless_app(seed);
    app.add_plugins(SimulationPlugin)
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
            1.0 / 60.0,
        )));

    let extents = ScreenExtents::default();
    let mut spawned = Vec::new();
    {
        let mut commands = app.world_mut().commands();
        for (blueprint, x) in [
            (ShipBlueprint::gunship(), 0.0),
            (ShipBlueprint::fighter(), 0.0),
            (ShipBlueprint::swooper(), -10.0),
        ] {
            let position = Vec2::new(x, extents.cam_height + blueprint.radius);
            match spawn_ship(&mut commands, &blueprint, position) {
                Ok(ship) => spawned.push((blueprint.name.clone(), ship)),
                Err(err) => eprintln!("Blueprint '{}' rejected: {}", blueprint.name, err),
            }
        }
    }
    app.world_mut().flush();

    let gunship = spawned
        .iter()
        .find(|(name, _)| name == "gunship")
        .map(|(_, ship)| *ship);

    for tick in 0..1200 {
        app.update();

        // Раз в 10 тиков стреляем по каждой части gunship'а по очереди
        if let Some(ship) = gunship {
            if tick % 10 == 0 {
                fire_at_next_part(app.world_mut(), ship, tick / 10);
            }
        }

        if tick % 100 == 0 {
            let mut query = app.world_mut().query::<&EnemyShip>();
            let ships = query.iter(app.world()).count();
            println!("Tick {}: {} ships alive", tick, ships);
        }
    }

    let destroyed = app.world().resource::<Events<ShipDestroyed>>().len();
    println!("Simulation complete! ({} destruction events pending)", destroyed);
}

/// Пишет ShipPartHit по одной из частей корабля
fn fire_at_next_part(world: &mut World, ship: Entity, shot: usize) {
    let Some(bindings) = world.get::<PartBindings>(ship) else {
        return;
    };
    if bindings.is_empty() {
        return;
    }

    let Some(object) = bindings.object(shot % bindings.len()) else {
        return;
    };

    let projectile = world.spawn_empty().id();
    world.send_event(ShipPartHit {
        ship,
        projectile,
        weapon: WeaponKind::Blaster,
        struck: [object, projectile],
    });
}
