//! Convenience re-exports — `use ormr::prelude::*` for the common items.

pub use crate::component::Component;
pub use crate::entity::{Entity, Uid};
pub use crate::registry::Registry;
pub use crate::system::{Schedule, System};
