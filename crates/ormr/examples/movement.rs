//! Movement demo — entities with `Position` and `Velocity`, advanced by a
//! system once per frame.
//!
//! Run with `RUST_LOG=trace cargo run --example movement` to watch the
//! registry's attach/dispatch logging.

use glam::Vec2;
use ormr::prelude::*;

struct Position(Vec2);
struct Velocity(Vec2);

/// Advance every entity that has a velocity and a position.
fn movement_system(registry: &mut Registry) {
    for entity in registry.query_mut::<Velocity>() {
        let delta = entity.get::<Velocity>().map(|v| v.0);
        if let (Some(delta), Some(pos)) = (delta, entity.get_mut::<Position>()) {
            pos.0 += delta;
        }
    }
}

fn main() {
    env_logger::init();

    let mut registry = Registry::new();

    // A moving entity...
    let mover = registry.create_entity();
    let entity = registry
        .get_entity_mut(mover)
        .expect("entity was just created");
    entity.attach(Position(Vec2::new(10.0, 10.0)));
    entity.attach(Velocity(Vec2::new(3.0, 3.0)));

    // ...a static one (position, no velocity)...
    let rock = registry.create_entity();
    registry
        .get_entity_mut(rock)
        .expect("entity was just created")
        .attach(Position(Vec2::ZERO));

    // ...and one with nothing attached at all.
    registry.create_entity();

    let mut schedule = Schedule::new();
    schedule.add_system(movement_system);

    for frame in 0..5 {
        schedule.run(&mut registry);
        for entity in registry.query::<Position>() {
            if let Some(pos) = entity.get::<Position>() {
                println!("frame {frame}: entity {} at {:?}", entity.id(), pos.0);
            }
        }
    }
}
