//! Deterministic structure placement.
//!
//! Placement is a pure function of the world seed: each structure type
//! hashes a square region of chunks into a candidate chunk, the biome
//! layer decides whether the candidate is viable, and a chunk-scoped
//! stream picks the instance variant. The per-type constants live in a
//! catalog that can be overridden from a RON file.

mod catalog;
mod error;
mod placement;
mod spawn;
mod variant;
mod viability;

pub use catalog::{Catalog, StructureConfig, StructureType};
pub use error::StructureError;
pub use placement::structure_pos;
pub use spawn::spawn_pos;
pub use variant::{variant, Variant};
pub use viability::is_viable_structure_pos;
