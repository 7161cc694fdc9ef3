//! Resumable stronghold ring search.
//!
//! Strongholds are laid out on concentric rings around the origin; the
//! game refines each coarse ring position to the nearest suitable biome
//! with a seed-threaded generator stream. The search state here is a plain
//! owned value, so callers can persist it and continue enumerating
//! strongholds later without replaying earlier steps.

mod error;
mod stronghold;

pub use error::FinderError;
pub use stronghold::{
    init_first_stronghold, is_stronghold_biome, next_stronghold, StrongholdSearchState,
};
