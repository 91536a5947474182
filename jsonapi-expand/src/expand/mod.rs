//! Resource expansion: relationship references replaced by the resources they point to.

pub mod cache;
pub mod expander;
pub mod index;
pub mod record;

pub use cache::ExpansionCache;
pub use expander::{Expander, Expansion};
pub use index::RelationshipIndex;
pub use record::{Deserialized, Field, Record};
