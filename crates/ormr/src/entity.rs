//! # Entity — An Identity and Its Attached Components
//!
//! An [`Entity`] pairs a [`Uid`] with a [`ComponentMap`]. The uid is the part
//! systems pass around; the component map is the part they mutate.
//!
//! ## Design: Never-Reused Ids
//!
//! Uids come from a per-registry monotonic counter and are never handed out
//! twice, even after the entity is destroyed. That makes a `Uid` a stable name
//! for "that particular entity, ever": a stale uid simply stops resolving
//! (`get_entity` returns `None`) instead of silently pointing at a newcomer.
//!
//! ```text
//! create → 0   create → 1   destroy(0)   create → 2   (0 is gone for good)
//! ```
//!
//! ## Comparison
//!
//! - **hecs / bevy_ecs**: recycle entity slots and detect staleness with a
//!   generation counter packed into the id.
//! - **ormr**: never recycles, so no generations are needed. A u64 counter
//!   outlives any realistic session.

use std::fmt;

use crate::component::{Component, ComponentMap};

/// A unique entity identifier.
///
/// Assigned once by [`Registry::create_entity`](crate::Registry::create_entity),
/// unique for the lifetime of the owning registry, and never reused — even
/// after the entity is destroyed.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Uid(pub(crate) u64);

impl Uid {
    /// Returns the raw numeric id. Useful for diagnostics, not for general use.
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Uid({})", self.0)
    }
}

impl fmt::Display for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One identity plus its attached components.
///
/// Entities are created only through
/// [`Registry::create_entity`](crate::Registry::create_entity) and accessed as
/// borrows via [`Registry::get_entity`](crate::Registry::get_entity) /
/// [`Registry::get_entity_mut`](crate::Registry::get_entity_mut) or a query.
pub struct Entity {
    uid: Uid,
    components: ComponentMap,
}

impl Entity {
    /// Construct with the given identity and no components. The uid is
    /// caller-supplied and not validated here; uniqueness is the registry's
    /// job.
    pub(crate) fn new(uid: Uid) -> Self {
        Self {
            uid,
            components: ComponentMap::new(),
        }
    }

    /// The immutable identity of this entity.
    pub fn id(&self) -> Uid {
        self.uid
    }

    /// Attach a component, replacing any existing instance of the same type.
    ///
    /// Always succeeds. Returns the displaced instance if one was present, so
    /// a caller that wants reject-on-duplicate semantics can inspect the
    /// result (or check [`has`](Self::has) first).
    pub fn attach<T: Component>(&mut self, component: T) -> Option<T> {
        log::trace!(
            "attach {} on entity {}",
            std::any::type_name::<T>(),
            self.uid
        );
        self.components.insert(component)
    }

    /// Detach and return the component of type `T`, if present.
    ///
    /// A no-op returning `None` when the type isn't attached — never an error.
    pub fn detach<T: Component>(&mut self) -> Option<T> {
        log::trace!(
            "detach {} from entity {}",
            std::any::type_name::<T>(),
            self.uid
        );
        self.components.remove::<T>()
    }

    /// Whether a component of type `T` is currently attached.
    pub fn has<T: Component>(&self) -> bool {
        self.components.contains::<T>()
    }

    /// Borrow the attached component of type `T`, or `None` if absent.
    pub fn get<T: Component>(&self) -> Option<&T> {
        self.components.get::<T>()
    }

    /// Mutably borrow the attached component of type `T`, or `None` if absent.
    pub fn get_mut<T: Component>(&mut self) -> Option<&mut T> {
        self.components.get_mut::<T>()
    }

    /// Number of components currently attached.
    pub fn component_count(&self) -> usize {
        self.components.len()
    }
}

impl fmt::Debug for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entity")
            .field("uid", &self.uid)
            .field("components", &self.components.len())
            .finish()
    }
}
