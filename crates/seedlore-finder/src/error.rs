//! Finder layer errors.

use seedlore_biome::GeneratorError;
use thiserror::Error;

/// Errors surfaced by the stronghold search.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FinderError {
    /// A delegated biome query failed, most often because the generator
    /// has no seed applied.
    #[error(transparent)]
    Generator(#[from] GeneratorError),
}
