//! Structure layer errors.

use seedlore_biome::{GameVersion, GeneratorError};
use thiserror::Error;

use crate::catalog::StructureType;

/// Errors surfaced by placement, viability, and catalog loading.
#[derive(Debug, Error)]
pub enum StructureError {
    /// The catalog has no entry for this structure type in this version.
    /// Never falls back to a default: a silent default would place
    /// structures that the reference does not.
    #[error("no catalog entry for {structure:?} in {version:?}")]
    UnknownCatalogEntry {
        structure: StructureType,
        version: GameVersion,
    },
    /// The outward spawn scan hit its ring cap without a viable column.
    #[error("spawn search exhausted after {rings} chunk rings")]
    SearchExhausted { rings: u32 },
    /// A delegated biome query failed.
    #[error(transparent)]
    Generator(#[from] GeneratorError),
    /// A catalog override file could not be read.
    #[error("failed to read catalog file: {0}")]
    CatalogIo(#[from] std::io::Error),
    /// A catalog override file could not be parsed.
    #[error("failed to parse catalog file: {0}")]
    CatalogParse(#[from] ron::error::SpannedError),
}
