//! Seed-exact overworld biome reproduction.
//!
//! The pipeline mirrors the reference generator: six seeded climate noise
//! fields are sampled at biome resolution (one cell per 4 blocks), folded
//! through a single-precision terrain offset spline into a depth value,
//! quantized, and matched against a fixed table of climate parameter boxes
//! to produce a biome. Everything downstream of the world seed is
//! deterministic, so equal seeds always reproduce equal worlds.

mod climate;
mod error;
mod generator;
mod id;
mod pos;
mod sampler;
mod spline;
mod table;

pub use climate::{quantize, ParamRange, TargetPoint};
pub use error::GeneratorError;
pub use generator::{Generator, Region, SurfaceColumn};
pub use id::{Biome, Dimension, GameVersion};
pub use pos::Pos;
pub use sampler::ClimateSampler;
pub use table::{overworld_entries, BiomeEntry};
