//! World spawn estimation.

use seedlore_biome::{Generator, Pos};

use crate::error::StructureError;

/// Chunk rings scanned before the search gives up.
const MAX_RINGS: u32 = 256;
/// Spawn candidates read the surface band, well above any terrain.
const SAMPLE_Y: i32 = 316;

/// Estimated world spawn: the center block of the first chunk, scanning
/// square rings outward from the origin, whose surface biome is dry land.
///
/// Ring `r` walks `z` from `-r` to `r` and `x` from `-r` to `r`, visiting
/// only the ring border, so ties resolve toward negative `z` then negative
/// `x`. Errors with [`StructureError::SearchExhausted`] after
/// [`MAX_RINGS`] rings of open water.
pub fn spawn_pos(generator: &Generator) -> Result<Pos, StructureError> {
    for ring in 0..=MAX_RINGS {
        let r = ring as i32;
        for cz in -r..=r {
            for cx in -r..=r {
                if cx.abs().max(cz.abs()) != r {
                    continue;
                }
                let pos = Pos::new(cx * 16 + 8, cz * 16 + 8);
                let biome = generator.biome_at(1, pos.x, SAMPLE_Y, pos.z)?;
                if !biome.is_ocean() && !biome.is_river() {
                    log::debug!("spawn estimate {pos} in {biome} after {ring} rings");
                    return Ok(pos);
                }
            }
        }
    }
    Err(StructureError::SearchExhausted { rings: MAX_RINGS })
}
