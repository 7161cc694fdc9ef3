//! Gradient-noise stack backing the climate sampler.
//!
//! Layered as the reference layers it: a single-octave gradient lattice
//! ([`GradientNoise`]), an octave sum with per-octave hashed seeding
//! ([`OctaveNoise`]), and the double-sampled normalized wrapper the climate
//! fields consume ([`NormalNoise`]). A legacy fixed-point surface context
//! ([`SurfaceNoise`]) rides along for the height-estimation entry points.
//!
//! Floating-point order of operations is load-bearing everywhere in this
//! crate; transcendental helpers go through `libm` so results do not vary
//! with the platform libc.

mod gradient;
mod normal;
mod octave;
mod surface;

pub use gradient::GradientNoise;
pub use normal::NormalNoise;
pub use octave::OctaveNoise;
pub use surface::SurfaceNoise;
