//! Seed derivation helpers shared by the biome, structure, and finder
//! crates. Each helper owns one step of the world-seed derivation chain.

use crate::java_random::JavaRandom;
use crate::xoroshiro::Xoroshiro;

/// Chunk-local generator: two world-seeded long draws are multiplied by
/// the chunk coordinates and folded back into the seed.
#[must_use]
pub fn chunk_rand(world_seed: u64, chunk_x: i32, chunk_z: i32) -> JavaRandom {
    let mut rng = JavaRandom::new(world_seed);
    let a = rng.next_long().wrapping_mul(i64::from(chunk_x)) as u64;
    let b = rng.next_long().wrapping_mul(i64::from(chunk_z)) as u64;
    rng.set_seed(a ^ b ^ world_seed);
    rng
}

/// Scrambled state of the chunk-local generator, exposed for callers that
/// compare or persist the derived value directly.
#[must_use]
pub fn chunk_generate_rnd(world_seed: u64, chunk_x: i32, chunk_z: i32) -> u64 {
    chunk_rand(world_seed, chunk_x, chunk_z).state()
}

/// Population (decoration) seed for the chunk containing block `(x, z)`.
///
/// Drawn from the Xoroshiro base generator with Java-composed longs forced
/// odd, then folded with the block coordinates.
#[must_use]
pub fn population_seed(world_seed: u64, block_x: i32, block_z: i32) -> u64 {
    let mut rng = Xoroshiro::from_seed(world_seed);
    let a = rng.next_long_java() as u64 | 1;
    let b = rng.next_long_java() as u64 | 1;
    let x = i64::from(block_x) as u64;
    let z = i64::from(block_z) as u64;
    x.wrapping_mul(a).wrapping_add(z.wrapping_mul(b)) ^ world_seed
}

/// Region-attempt generator used by the scattered-feature searches: the
/// chunk-region coordinates are folded into the seed and one draw is
/// discarded before use.
#[must_use]
pub fn attempt_rand(seed: u64, chunk_x: i32, chunk_z: i32) -> JavaRandom {
    let folded = seed
        ^ (i64::from(chunk_x >> 4) as u64)
        ^ ((i64::from(chunk_z >> 4) as u64) << 4);
    let mut rng = JavaRandom::new(folded);
    rng.next(31);
    rng
}
