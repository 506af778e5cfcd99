//! # System — Logic That Operates on the Registry
//!
//! A system is a unit of per-frame logic: it receives a mutable registry
//! handle, queries for the entities it cares about, and mutates their
//! components in place. The registry never calls systems itself — a driver
//! does, and [`Schedule`] is that driver made concrete.
//!
//! ## Design Philosophy
//!
//! Many ECS frameworks make systems complex — parameter injection, dependency
//! graphs, parallel scheduling. We keep it radically simple:
//!
//! - A system is anything implementing [`System::update`]; any
//!   `FnMut(&mut Registry)` qualifies via a blanket impl.
//! - Systems run in the order they were added, one at a time.
//! - No automatic parallelism and no ordering guarantees between distinct
//!   schedules.
//!
//! ## Comparison
//!
//! - **hecs**: no built-in system/schedule concept at all — "systems are
//!   just functions, scheduling is your problem."
//! - **bevy_ecs**: parameter injection, parallel execution with conflict
//!   detection, run conditions. Much more complex.
//!
//! We're closer to hecs, but ship the minimal ordered runner so every
//! conforming system can be invoked uniformly.

use crate::registry::Registry;

/// A unit of per-frame logic driven against a [`Registry`].
///
/// The registry handle is valid and mutable for the duration of the call;
/// internal behavior is unconstrained.
pub trait System {
    fn update(&mut self, registry: &mut Registry);
}

/// Blanket impl: any `FnMut(&mut Registry)` is a `System`, so closures and
/// free functions work directly.
impl<F: FnMut(&mut Registry)> System for F {
    fn update(&mut self, registry: &mut Registry) {
        (self)(registry);
    }
}

/// A boxed [`System`] with a short name kept for dispatch logging.
struct NamedSystem {
    name: String,
    system: Box<dyn System>,
}

/// An ordered list of systems to run against a registry.
pub struct Schedule {
    systems: Vec<NamedSystem>,
}

impl Schedule {
    pub fn new() -> Self {
        Self {
            systems: Vec::new(),
        }
    }

    /// Add a system to the end of the schedule.
    pub fn add_system<S: System + 'static>(&mut self, system: S) {
        self.systems.push(NamedSystem {
            name: short_system_name(std::any::type_name::<S>()),
            system: Box::new(system),
        });
    }

    /// Run every system once, in the order they were added.
    pub fn run(&mut self, registry: &mut Registry) {
        for ns in &mut self.systems {
            log::trace!("running system {}", ns.name);
            ns.system.update(registry);
        }
    }

    /// Number of systems in this schedule.
    pub fn len(&self) -> usize {
        self.systems.len()
    }

    /// Whether the schedule holds no systems.
    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }
}

impl Default for Schedule {
    fn default() -> Self {
        Self::new()
    }
}

/// Strip the module path from a fully-qualified type name, keeping only the
/// last meaningful segment (e.g. `demo::movement_system` → `movement_system`,
/// `{{closure}}` → `<closure>`).
fn short_system_name(full: &str) -> String {
    let name = full.rsplit("::").next().unwrap_or(full);
    if name.contains("closure") {
        "<closure>".to_string()
    } else {
        name.to_string()
    }
}
