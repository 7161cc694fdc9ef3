//! Legacy LCG-seeded surface noise context.
//!
//! The current overworld surface path derives height from the climate
//! depth field, but the height-estimation entry points still accept this
//! context because other dimensions (and older pipelines) read it. Octave
//! seeding order is the legacy one: three stacks initialized back to back
//! from a single 48-bit LCG stream.

use seedlore_rng::JavaRandom;

use crate::gradient::{lerp, GradientNoise};

fn clamp01(v: f64) -> f64 {
    v.clamp(0.0, 1.0)
}

/// A legacy octave stack: octave `j` is sampled at frequency `2^-j` with
/// amplitude `2^j`.
#[derive(Debug, Clone)]
struct LegacyOctaves {
    octaves: Vec<GradientNoise>,
}

impl LegacyOctaves {
    fn new(rng: &mut JavaRandom, count: usize) -> Self {
        let octaves = (0..count).map(|_| GradientNoise::from_java(rng)).collect();
        Self { octaves }
    }

    fn value(&self, x: f64, y: f64, z: f64) -> f64 {
        let mut acc = 0.0;
        let mut freq = 1.0;
        let mut amp = 1.0;
        for octave in &self.octaves {
            acc += amp * octave.sample(x * freq, y * freq, z * freq, 0.0, 0.0);
            freq *= 0.5;
            amp *= 2.0;
        }
        acc
    }
}

/// Interpolated terrain density context for the legacy surface pipeline.
#[derive(Debug, Clone)]
pub struct SurfaceNoise {
    min_limit: LegacyOctaves,
    max_limit: LegacyOctaves,
    main: LegacyOctaves,
    xz_scale: f64,
    y_scale: f64,
    xz_factor: f64,
    y_factor: f64,
}

impl SurfaceNoise {
    /// Builds the overworld context for `world_seed`. Consumes the LCG
    /// stream in the reference order: 16 + 16 + 8 octaves.
    #[must_use]
    pub fn overworld(world_seed: u64) -> Self {
        let mut rng = JavaRandom::new(world_seed);
        let min_limit = LegacyOctaves::new(&mut rng, 16);
        let max_limit = LegacyOctaves::new(&mut rng, 16);
        let main = LegacyOctaves::new(&mut rng, 8);
        Self {
            min_limit,
            max_limit,
            main,
            xz_scale: 684.412,
            y_scale: 684.412,
            xz_factor: 80.0,
            y_factor: 160.0,
        }
    }

    /// Blended density at cell coordinates: the main stack selects a
    /// position between the two limit stacks.
    #[must_use]
    pub fn sample(&self, x: f64, y: f64, z: f64) -> f64 {
        let xs = x * self.xz_scale;
        let ys = y * self.y_scale;
        let zs = z * self.xz_scale;
        let xm = xs / self.xz_factor;
        let ym = ys / self.y_factor;
        let zm = zs / self.xz_factor;
        let t = clamp01(self.main.value(xm, ym, zm) / 10.0 + 0.5);
        lerp(
            t,
            self.min_limit.value(xs, ys, zs) / 512.0,
            self.max_limit.value(xs, ys, zs) / 512.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic_for_seed() {
        let a = SurfaceNoise::overworld(1234567890);
        let b = SurfaceNoise::overworld(1234567890);
        assert_eq!(a.sample(3.0, 8.0, -5.0), b.sample(3.0, 8.0, -5.0));
    }

    #[test]
    fn test_seed_changes_field() {
        let a = SurfaceNoise::overworld(1);
        let b = SurfaceNoise::overworld(2);
        assert_ne!(a.sample(3.0, 8.0, -5.0), b.sample(3.0, 8.0, -5.0));
    }

    #[test]
    fn test_octave_counts() {
        let sn = SurfaceNoise::overworld(7);
        assert_eq!(sn.min_limit.octaves.len(), 16);
        assert_eq!(sn.max_limit.octaves.len(), 16);
        assert_eq!(sn.main.octaves.len(), 8);
    }
}
