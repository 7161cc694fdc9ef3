//! Structure variant derivation.

use seedlore_biome::Biome;
use seedlore_rng::chunk_rand;

use crate::catalog::StructureType;

/// Stylistic choices for one placed instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Variant {
    /// Ruined ("zombie") layout instead of an inhabited one.
    pub abandoned: bool,
    /// Index of the start piece pool entry.
    pub start: u8,
    /// Quarter-turn rotation, `0..4`.
    pub rotation: u8,
}

/// Weighted start-pool entry: (weight, start index, abandoned).
type StartPool = &'static [(i32, u8, bool)];

/// Data-pack start pool weights per village biome. Normal entries come
/// first, abandoned variants after, matching the reference pool order.
const PLAINS_STARTS: StartPool = &[
    (50, 0, false),
    (50, 1, false),
    (50, 2, false),
    (50, 3, false),
    (1, 0, true),
    (1, 1, true),
    (1, 2, true),
    (1, 3, true),
];
const DESERT_STARTS: StartPool = &[
    (98, 0, false),
    (98, 1, false),
    (49, 2, false),
    (2, 0, true),
    (2, 1, true),
    (1, 2, true),
];
const SAVANNA_STARTS: StartPool = &[
    (100, 0, false),
    (50, 1, false),
    (150, 2, false),
    (150, 3, false),
    (2, 0, true),
    (1, 1, true),
    (3, 2, true),
    (3, 3, true),
];
const TAIGA_STARTS: StartPool = &[(49, 0, false), (49, 1, false), (1, 0, true), (1, 1, true)];
const SNOWY_STARTS: StartPool = &[
    (100, 0, false),
    (50, 1, false),
    (150, 2, false),
    (2, 0, true),
    (1, 1, true),
    (3, 2, true),
];

fn village_pool(biome: Biome) -> Option<StartPool> {
    match biome {
        Biome::Plains => Some(PLAINS_STARTS),
        Biome::Desert => Some(DESERT_STARTS),
        Biome::Savanna => Some(SAVANNA_STARTS),
        Biome::Taiga => Some(TAIGA_STARTS),
        Biome::SnowyPlains => Some(SNOWY_STARTS),
        _ => None,
    }
}

/// Variant of the instance at block `(x, z)`.
///
/// The chunk-scoped stream first draws the rotation, then one weighted
/// pick over the biome's start pool. Returns `None` when the biome is not
/// one the structure type recognizes; only villages carry variant data.
#[must_use]
pub fn variant(structure: StructureType, seed: u64, x: i32, z: i32, biome: Biome) -> Option<Variant> {
    if structure != StructureType::Village {
        return None;
    }
    let pool = village_pool(biome)?;
    let mut rng = chunk_rand(seed, x >> 4, z >> 4);
    let rotation = rng.next_int(4) as u8;
    let total: i32 = pool.iter().map(|&(w, _, _)| w).sum();
    let mut t = rng.next_int(total);
    for &(weight, start, abandoned) in pool {
        t -= weight;
        if t < 0 {
            return Some(Variant {
                abandoned,
                start,
                rotation,
            });
        }
    }
    // weights always sum to `total`, so the loop cannot fall through
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plains_village_vector() {
        let v = variant(StructureType::Village, 1234567890, 288, 1984, Biome::Plains);
        assert_eq!(
            v,
            Some(Variant {
                abandoned: false,
                start: 0,
                rotation: 1,
            })
        );
    }

    #[test]
    fn test_unrecognized_biome_rejected() {
        assert_eq!(
            variant(StructureType::Village, 1234567890, 288, 1984, Biome::Jungle),
            None
        );
        assert_eq!(
            variant(StructureType::Village, 1234567890, 288, 1984, Biome::Ocean),
            None
        );
    }

    #[test]
    fn test_non_village_types_have_no_variants() {
        assert_eq!(
            variant(StructureType::Monument, 1234567890, 128, 176, Biome::DeepOcean),
            None
        );
    }

    #[test]
    fn test_rotation_and_pool_ranges() {
        for (dx, dz) in [(0, 0), (16, 0), (0, 16), (160, -320)] {
            let v = variant(
                StructureType::Village,
                42,
                288 + dx,
                1984 + dz,
                Biome::SnowyPlains,
            )
            .expect("recognized biome");
            assert!(v.rotation < 4);
            assert!(v.start < 3, "snowy pool has three start pieces");
        }
    }

    #[test]
    fn test_pool_totals() {
        let total = |pool: StartPool| pool.iter().map(|&(w, _, _)| w).sum::<i32>();
        assert_eq!(total(PLAINS_STARTS), 204);
        assert_eq!(total(DESERT_STARTS), 250);
        assert_eq!(total(SAVANNA_STARTS), 459);
        assert_eq!(total(TAIGA_STARTS), 100);
        assert_eq!(total(SNOWY_STARTS), 306);
    }
}
