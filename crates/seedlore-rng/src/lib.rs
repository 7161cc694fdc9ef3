//! Deterministic random sources for seed-exact world reproduction.
//!
//! Two generator families cover every consumer in the workspace: a 48-bit
//! linear congruential generator used by chunk-local and structure seeding,
//! and Xoroshiro128++ used by the climate noise stack. Both reproduce the
//! reference arithmetic bit for bit, including the signed/unsigned
//! composition quirks on 64-bit draws.

mod java_random;
mod seed;
mod xoroshiro;

pub use java_random::JavaRandom;
pub use seed::{attempt_rand, chunk_generate_rnd, chunk_rand, population_seed};
pub use xoroshiro::{PositionalFork, Xoroshiro};
