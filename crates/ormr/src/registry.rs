//! # Registry — The Owning Store of All Entities
//!
//! The [`Registry`] owns every live entity and, through them, every attached
//! component. It's the single source of truth the driver loop and all systems
//! operate on.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────┐
//! │ Registry                                           │
//! │                                                    │
//! │  entities: HashMap<Uid, Entity>                    │
//! │    key = the entity's own uid                      │
//! │    value = Entity { uid, ComponentMap }            │
//! │                                                    │
//! │  next_uid: u64                                     │
//! │    monotonic, never rolls back, never reused       │
//! └────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ownership
//!
//! Ownership is strictly exclusive: Registry → Entity → components. Callers
//! get borrowed views (`&Entity`, `&mut Entity`) whose lifetimes the borrow
//! checker scopes to the access, so a handle can't survive a
//! [`destroy_entity`](Registry::destroy_entity) call and dangle — re-fetch by
//! uid after mutating. Destroying an entity drops it and everything attached
//! to it in one cascade.
//!
//! ## Queries
//!
//! [`query`](Registry::query) is a linear scan over the whole population — a
//! deliberate simplicity-over-scale trade-off. There are no archetypes, no
//! per-type indices, no caching; at small-to-moderate entity counts the scan
//! is cheap and the bookkeeping it avoids is not.
//!
//! ## Comparison
//!
//! - **hecs / bevy_ecs**: group entities into archetypes so queries touch
//!   only matching storage. Much faster at scale, much more machinery.
//! - **ormr**: one map, one counter, O(n) queries. Easy to audit.

use std::collections::HashMap;

use crate::component::Component;
use crate::entity::{Entity, Uid};

/// The owning store of all entities: identity allocator, lookup table, and
/// query engine.
///
/// # Example
///
/// ```
/// use ormr::Registry;
///
/// struct Health(u32);
///
/// let mut registry = Registry::new();
/// let uid = registry.create_entity();
/// registry
///     .get_entity_mut(uid)
///     .unwrap()
///     .attach(Health(100));
///
/// for entity in registry.query::<Health>() {
///     assert_eq!(entity.id(), uid);
/// }
/// ```
pub struct Registry {
    /// All live entities, keyed by their own uid.
    entities: HashMap<Uid, Entity>,
    /// The next identity to hand out. Strictly greater than every uid ever
    /// issued by this registry.
    next_uid: u64,
}

impl Registry {
    /// Create an empty registry. No configuration parameters.
    pub fn new() -> Self {
        Self {
            entities: HashMap::new(),
            next_uid: 0,
        }
    }

    // ── Entity Lifecycle ─────────────────────────────────────────────

    /// Create a new empty entity and return its uid.
    ///
    /// Uids count up from 0 and are never reused, even after
    /// [`destroy_entity`](Self::destroy_entity).
    ///
    /// # Panics
    ///
    /// Panics if the u64 id space is exhausted — treated as unreachable in
    /// practice rather than a recoverable error.
    pub fn create_entity(&mut self) -> Uid {
        let uid = Uid(self.next_uid);
        self.next_uid = self
            .next_uid
            .checked_add(1)
            .expect("entity id space exhausted");
        self.entities.insert(uid, Entity::new(uid));
        log::debug!("created entity {uid}");
        uid
    }

    /// Destroy the entity with the given uid, dropping all its components.
    ///
    /// Returns `true` if the entity existed. An unknown uid is a no-op
    /// returning `false`, not an error.
    pub fn destroy_entity(&mut self, uid: Uid) -> bool {
        if self.entities.remove(&uid).is_some() {
            log::debug!("destroyed entity {uid}");
            true
        } else {
            false
        }
    }

    /// Destroy every entity. The uid counter does not reset, so uids issued
    /// after a clear still never collide with earlier ones.
    pub fn clear(&mut self) {
        log::debug!("destroying all {} entities", self.entities.len());
        self.entities.clear();
    }

    // ── Lookup ───────────────────────────────────────────────────────

    /// Borrow the entity with the given uid, or `None` if it doesn't exist
    /// (never created, or destroyed since).
    pub fn get_entity(&self, uid: Uid) -> Option<&Entity> {
        self.entities.get(&uid)
    }

    /// Mutably borrow the entity with the given uid, or `None` if it doesn't
    /// exist. This is the handle used to attach and detach components.
    pub fn get_entity_mut(&mut self, uid: Uid) -> Option<&mut Entity> {
        self.entities.get_mut(&uid)
    }

    /// Whether an entity with the given uid is currently alive.
    pub fn contains(&self, uid: Uid) -> bool {
        self.entities.contains_key(&uid)
    }

    /// Number of live entities.
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Whether the registry holds no entities.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    // ── Query ────────────────────────────────────────────────────────

    /// Iterate every entity that has a component of type `T`.
    ///
    /// Scans the full population; yields entities in unspecified order —
    /// don't depend on a particular order across calls.
    pub fn query<T: Component>(&self) -> impl Iterator<Item = &Entity> {
        self.entities.values().filter(|entity| entity.has::<T>())
    }

    /// Iterate every entity that has a component of type `T`, mutably.
    ///
    /// This is the per-frame workhorse: systems use it to mutate matching
    /// components in place.
    pub fn query_mut<T: Component>(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.entities
            .values_mut()
            .filter(|entity| entity.has::<T>())
    }

    /// Iterate the whole population, in unspecified order.
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.values()
    }

    /// Iterate the whole population mutably, in unspecified order.
    pub fn entities_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.entities.values_mut()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Pos {
        x: i32,
        y: i32,
    }

    #[derive(Debug, PartialEq)]
    struct Vel {
        x: i32,
        y: i32,
    }

    struct Tag;

    fn uids<'a>(entities: impl Iterator<Item = &'a Entity>) -> Vec<Uid> {
        let mut ids: Vec<Uid> = entities.map(|e| e.id()).collect();
        ids.sort();
        ids
    }

    #[test]
    fn uids_count_up_from_zero() {
        let mut registry = Registry::new();
        assert_eq!(registry.create_entity(), Uid(0));
        assert_eq!(registry.create_entity(), Uid(1));
        assert_eq!(registry.create_entity(), Uid(2));
    }

    #[test]
    fn uids_never_reused_after_destroy() {
        let mut registry = Registry::new();
        let mut issued = Vec::new();
        for round in 0..4 {
            let uid = registry.create_entity();
            issued.push(uid);
            if round % 2 == 0 {
                registry.destroy_entity(uid);
            }
        }
        // Strictly increasing across creates and destroys alike.
        for pair in issued.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn get_entity_present_iff_alive() {
        let mut registry = Registry::new();
        let uid = registry.create_entity();

        assert!(registry.get_entity(uid).is_some());
        assert!(registry.contains(uid));
        // A uid that was never issued doesn't resolve.
        assert!(registry.get_entity(Uid(99)).is_none());

        registry.destroy_entity(uid);
        assert!(registry.get_entity(uid).is_none());
        assert!(!registry.contains(uid));
    }

    #[test]
    fn destroy_unknown_uid_is_noop() {
        let mut registry = Registry::new();
        assert!(!registry.destroy_entity(Uid(42)));
        // Destroying twice: second call is a no-op too.
        let uid = registry.create_entity();
        assert!(registry.destroy_entity(uid));
        assert!(!registry.destroy_entity(uid));
    }

    #[test]
    fn query_returns_exactly_the_matching_set() {
        let mut registry = Registry::new();
        let a = registry.create_entity();
        let b = registry.create_entity();
        let _c = registry.create_entity(); // gets nothing attached

        registry.get_entity_mut(a).unwrap().attach(Pos { x: 0, y: 0 });
        registry.get_entity_mut(b).unwrap().attach(Pos { x: 1, y: 1 });
        registry.get_entity_mut(b).unwrap().attach(Tag);

        assert_eq!(uids(registry.query::<Pos>()), vec![a, b]);
        assert_eq!(uids(registry.query::<Tag>()), vec![b]);
        assert_eq!(uids(registry.query::<Vel>()), vec![]);
    }

    #[test]
    fn query_mut_mutates_in_place() {
        let mut registry = Registry::new();
        let uid = registry.create_entity();
        let entity = registry.get_entity_mut(uid).unwrap();
        entity.attach(Pos { x: 0, y: 0 });
        entity.attach(Vel { x: 3, y: 3 });

        for entity in registry.query_mut::<Vel>() {
            let (dx, dy) = {
                let vel = entity.get::<Vel>().unwrap();
                (vel.x, vel.y)
            };
            let pos = entity.get_mut::<Pos>().unwrap();
            pos.x += dx;
            pos.y += dy;
        }

        let entity = registry.get_entity(uid).unwrap();
        assert_eq!(entity.get::<Pos>(), Some(&Pos { x: 3, y: 3 }));
    }

    #[test]
    fn destroyed_entity_leaves_all_queries() {
        let mut registry = Registry::new();

        // A has Pos+Vel, B has Pos, C has nothing.
        let a = registry.create_entity();
        let b = registry.create_entity();
        let c = registry.create_entity();
        assert_eq!((a, b, c), (Uid(0), Uid(1), Uid(2)));

        let ent_a = registry.get_entity_mut(a).unwrap();
        ent_a.attach(Pos { x: 10, y: 10 });
        ent_a.attach(Vel { x: 3, y: 3 });
        registry.get_entity_mut(b).unwrap().attach(Pos { x: 0, y: 0 });

        assert_eq!(uids(registry.query::<Vel>()), vec![a]);

        registry.destroy_entity(a);
        assert_eq!(uids(registry.query::<Vel>()), vec![]);
        assert_eq!(uids(registry.query::<Pos>()), vec![b]);
        assert!(registry.get_entity(Uid(0)).is_none());
    }

    #[test]
    fn clear_destroys_everything_but_keeps_counting() {
        let mut registry = Registry::new();
        registry.create_entity();
        registry.create_entity();
        registry.clear();

        assert!(registry.is_empty());
        assert_eq!(registry.entity_count(), 0);
        // Counter survives the clear.
        assert_eq!(registry.create_entity(), Uid(2));
    }

    #[test]
    fn independent_registries_do_not_share_counters() {
        let mut first = Registry::new();
        let mut second = Registry::new();
        first.create_entity();
        first.create_entity();

        // A fresh registry starts at 0 regardless of others.
        assert_eq!(second.create_entity(), Uid(0));
    }

    #[test]
    fn entities_iterates_whole_population() {
        let mut registry = Registry::new();
        let a = registry.create_entity();
        let b = registry.create_entity();
        assert_eq!(uids(registry.entities()), vec![a, b]);
    }
}
