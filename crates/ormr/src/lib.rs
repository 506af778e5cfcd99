//! # Ormr — Minimal Entity-Component Registry
//!
//! A small ECS core meant to be embedded in a real-time loop: create entities,
//! attach typed components, query by component type, mutate in place. One map,
//! one counter, zero `unsafe`.
//!
//! ```
//! use ormr::{Registry, Schedule};
//!
//! struct Position { x: f32, y: f32 }
//! struct Velocity { x: f32, y: f32 }
//!
//! let mut registry = Registry::new();
//! let player = registry.create_entity();
//! let entity = registry.get_entity_mut(player).unwrap();
//! entity.attach(Position { x: 0.0, y: 0.0 });
//! entity.attach(Velocity { x: 1.0, y: 2.0 });
//!
//! let mut schedule = Schedule::new();
//! schedule.add_system(|registry: &mut Registry| {
//!     for entity in registry.query_mut::<Velocity>() {
//!         let (dx, dy) = {
//!             let vel = entity.get::<Velocity>().unwrap();
//!             (vel.x, vel.y)
//!         };
//!         if let Some(pos) = entity.get_mut::<Position>() {
//!             pos.x += dx;
//!             pos.y += dy;
//!         }
//!     }
//! });
//!
//! schedule.run(&mut registry);
//! let pos = registry.get_entity(player).unwrap().get::<Position>().unwrap();
//! assert_eq!((pos.x, pos.y), (1.0, 2.0));
//! ```
//!
//! ## Module Overview
//!
//! - [`component`] — the [`Component`] marker and type-erased per-entity storage
//! - [`entity`] — never-reused [`Uid`]s and the [`Entity`] they name
//! - [`registry`] — the owning store: lifecycle, lookup, linear queries
//! - [`system`] — the [`System`] contract and an ordered [`Schedule`] runner

pub mod component;
pub mod entity;
pub mod prelude;
pub mod registry;
pub mod system;

pub use component::{Component, ComponentMap};
pub use entity::{Entity, Uid};
pub use registry::Registry;
pub use system::{Schedule, System};
