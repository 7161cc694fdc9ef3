//! Region-hash structure placement.

use seedlore_biome::Pos;
use seedlore_rng::JavaRandom;

use crate::catalog::StructureConfig;

const REGION_HASH_X: i64 = 341873128712;
const REGION_HASH_Z: i64 = 132897987541;

/// Candidate position for a structure in region `(reg_x, reg_z)`.
///
/// The region coordinates and the type's salt are folded into the seed,
/// the derived stream draws the chunk offsets (averaged pairs for
/// triangular types), and, for types with a nonzero rarity, one further
/// draw from the same stream accepts or rejects the candidate. Biome
/// viability is deliberately not checked here.
#[must_use]
pub fn structure_pos(cfg: &StructureConfig, seed: u64, reg_x: i32, reg_z: i32) -> Option<Pos> {
    let hashed = i64::from(reg_x)
        .wrapping_mul(REGION_HASH_X)
        .wrapping_add(i64::from(reg_z).wrapping_mul(REGION_HASH_Z))
        .wrapping_add(seed as i64)
        .wrapping_add(cfg.salt as i64);
    let mut rng = JavaRandom::new(hashed as u64);
    let (cx, cz) = if cfg.triangular {
        let cx = (rng.next_int(cfg.chunk_range) + rng.next_int(cfg.chunk_range)) >> 1;
        let cz = (rng.next_int(cfg.chunk_range) + rng.next_int(cfg.chunk_range)) >> 1;
        (cx, cz)
    } else {
        let cx = rng.next_int(cfg.chunk_range);
        let cz = rng.next_int(cfg.chunk_range);
        (cx, cz)
    };
    if cfg.rarity > 0.0 && rng.next_float() >= cfg.rarity {
        return None;
    }
    Some(Pos::new(
        (reg_x * cfg.region_size + cx) << 4,
        (reg_z * cfg.region_size + cz) << 4,
    ))
}
