//! Stronghold ring placement and biome refinement.

use std::f64::consts::PI;

use seedlore_biome::{Biome, Generator, Pos};
use seedlore_rng::JavaRandom;

use crate::error::FinderError;

/// Distance from the ring center to the ring's base radius, blocks.
const BASE_DIST: f64 = 128.0;
/// Radius added per ring, blocks.
const RING_DIST: f64 = 192.0;
/// Half-width of the random distance jitter, blocks.
const DIST_JITTER: f64 = 80.0;
/// Refinement scan half-width around the coarse position, blocks.
const SCAN_RADIUS: i32 = 112;

/// Biomes a stronghold start may be refined onto.
pub fn is_stronghold_biome(biome: Biome) -> bool {
    use Biome::*;
    matches!(
        biome,
        Plains
            | SunflowerPlains
            | SnowyPlains
            | IceSpikes
            | Desert
            | Forest
            | FlowerForest
            | BirchForest
            | DarkForest
            | PaleGarden
            | OldGrowthBirchForest
            | OldGrowthPineTaiga
            | OldGrowthSpruceTaiga
            | Taiga
            | SnowyTaiga
            | Savanna
            | SavannaPlateau
            | WindsweptHills
            | WindsweptGravellyHills
            | WindsweptForest
            | WindsweptSavanna
            | Jungle
            | SparseJungle
            | BambooJungle
            | Badlands
            | ErodedBadlands
            | WoodedBadlands
            | Meadow
            | CherryGrove
            | Grove
            | SnowySlopes
            | FrozenPeaks
            | JaggedPeaks
            | StonyPeaks
            | MushroomFields
            | DripstoneCaves
            | LushCaves
    )
}

/// Complete, persistable state of the ring search.
///
/// `rnds` carries the raw generator state between steps, so a state
/// restored from storage continues the exact stream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrongholdSearchState {
    /// Refined position of the stronghold found by the last step.
    pub pos: Pos,
    /// Coarse position the next step will refine.
    pub nextapprox: Pos,
    /// Strongholds emitted so far.
    pub index: u32,
    /// Zero-based ring currently being filled.
    pub ringnum: i32,
    /// Strongholds on the current ring.
    pub ringmax: i32,
    /// Strongholds already placed on the current ring.
    pub ringidx: i32,
    /// Placement angle, radians; grows monotonically.
    pub angle: f64,
    /// Distance drawn for the pending coarse position, blocks.
    pub dist: f64,
    /// Raw generator state after the last draw.
    pub rnds: u64,
}

fn java_round(v: f64) -> i32 {
    (v + 0.5).floor() as i32
}

// libm keeps the trig bit-exact across platforms; a one-ulp difference in
// cos/sin can shift the rounded chunk coordinate.
fn coarse_pos(angle: f64, dist: f64) -> Pos {
    Pos::new(
        java_round(libm::cos(angle) * dist) * 16 + 8,
        java_round(libm::sin(angle) * dist) * 16 + 8,
    )
}

/// Seeds the search and draws the first ring's coarse position.
#[must_use]
pub fn init_first_stronghold(seed: u64) -> StrongholdSearchState {
    let mut rng = JavaRandom::new(seed);
    let angle = 2.0 * PI * rng.next_double();
    let dist = BASE_DIST + (rng.next_double() - 0.5) * DIST_JITTER;
    StrongholdSearchState {
        pos: Pos::new(0, 0),
        nextapprox: coarse_pos(angle, dist),
        index: 0,
        ringnum: 0,
        ringmax: 3,
        ringidx: 0,
        angle,
        dist,
        rnds: rng.state(),
    }
}

/// Reservoir-sampled scan for a stronghold biome near block `(x, z)`.
/// Candidates are biome cells; the first hit is taken unconditionally and
/// each later hit replaces it with probability `1/found`.
fn locate_biome(
    generator: &Generator,
    x: i32,
    z: i32,
    radius: i32,
    rng: &mut JavaRandom,
) -> Result<Option<Pos>, FinderError> {
    let cx = x >> 2;
    let cz = z >> 2;
    let r = radius >> 2;
    let mut found = 0;
    let mut out = Pos::new(0, 0);
    for jz in (cz - r)..=(cz + r) {
        for ix in (cx - r)..=(cx + r) {
            if !is_stronghold_biome(generator.biome_at(4, ix, 0, jz)?) {
                continue;
            }
            if found == 0 || rng.next_int(found + 1) == 0 {
                out = Pos::new(ix << 2, jz << 2);
            }
            found += 1;
        }
    }
    Ok(if found == 0 { None } else { Some(out) })
}

/// Advances the search by one stronghold.
///
/// Refines `nextapprox` against the seeded generator, records the result
/// in `state.pos`, and draws the following coarse position. Returns
/// whether the refinement landed on a stronghold biome; when it did not,
/// `pos` keeps the coarse position, matching the reference fallback.
pub fn next_stronghold(
    state: &mut StrongholdSearchState,
    generator: &Generator,
) -> Result<bool, FinderError> {
    let approx = state.nextapprox;
    let mut rng = JavaRandom::from_state(state.rnds);
    let refined = locate_biome(generator, approx.x, approx.z, SCAN_RADIUS, &mut rng)?;
    let valid = refined.is_some();
    state.pos = refined.unwrap_or(approx);
    state.rnds = rng.state();
    state.index += 1;
    state.ringidx += 1;
    state.angle += 2.0 * PI / f64::from(state.ringmax);
    if state.ringidx == state.ringmax {
        state.ringnum += 1;
        state.ringidx = 0;
        state.ringmax += 2 * state.ringmax / (state.ringnum + 1);
        state.angle += rng.next_double() * PI * 2.0;
        state.rnds = rng.state();
    }
    state.dist =
        BASE_DIST + RING_DIST * f64::from(state.ringnum) + (rng.next_double() - 0.5) * DIST_JITTER;
    state.rnds = rng.state();
    state.nextapprox = coarse_pos(state.angle, state.dist);
    log::debug!(
        "stronghold {} at {} (ring {}, valid {valid})",
        state.index,
        state.pos,
        state.ringnum
    );
    Ok(valid)
}
