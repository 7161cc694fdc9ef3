//! Seeded climate field sampler.

use seedlore_noise::NormalNoise;

use crate::climate::{
    self, quantize, NoiseParams, TargetPoint,
};
use crate::spline::{fold_ridges, offset_spline, Spline};

/// Base of the depth-zero height estimate: the surface sits at
/// `128 * (base + offset)` blocks for a terrain offset of `offset`.
const HEIGHT_BASE: f64 = 0.49625;

/// The six seeded climate noise fields plus the terrain offset spline.
///
/// Horizontal inputs are biome cells (one per 4 blocks); the shift field
/// warps them before the other fields are read, which is what makes biome
/// edges ragged instead of axis-aligned.
#[derive(Debug, Clone)]
pub struct ClimateSampler {
    temperature: NormalNoise,
    humidity: NormalNoise,
    continentalness: NormalNoise,
    erosion: NormalNoise,
    shift: NormalNoise,
    weirdness: NormalNoise,
    offset: Spline,
}

fn seeded(world_seed: u64, p: &NoiseParams) -> NormalNoise {
    NormalNoise::seeded(world_seed, p.id, p.first_octave, p.amplitudes)
}

impl ClimateSampler {
    /// Seeds all six fields for `world_seed`.
    #[must_use]
    pub fn new(world_seed: u64) -> Self {
        Self {
            temperature: seeded(world_seed, &climate::TEMPERATURE),
            humidity: seeded(world_seed, &climate::HUMIDITY),
            continentalness: seeded(world_seed, &climate::CONTINENTALNESS),
            erosion: seeded(world_seed, &climate::EROSION),
            shift: seeded(world_seed, &climate::SHIFT),
            weirdness: seeded(world_seed, &climate::WEIRDNESS),
            offset: offset_spline(),
        }
    }

    /// Shifted sample position for cell `(x, z)`.
    fn shifted(&self, x: i32, z: i32) -> (f64, f64) {
        let xf = f64::from(x);
        let zf = f64::from(z);
        let px = xf + self.shift.value(xf, 0.0, zf) * 4.0;
        let pz = zf + self.shift.value(zf, xf, 0.0) * 4.0;
        (px, pz)
    }

    /// Terrain offset (bias included) at the shifted position, evaluated
    /// in single precision.
    fn offset_at(&self, px: f64, pz: f64) -> f32 {
        let c = self.continentalness.value(px, 0.0, pz) as f32;
        let e = self.erosion.value(px, 0.0, pz) as f32;
        let w = self.weirdness.value(px, 0.0, pz) as f32;
        self.offset.get(&[c, e, fold_ridges(w), w]) + 0.015
    }

    /// Quantized climate point at cell `(x, z)` and cell height `y`
    /// (blocks / 4).
    #[must_use]
    pub fn sample(&self, x: i32, y: i32, z: i32) -> TargetPoint {
        let (px, pz) = self.shifted(x, z);
        let c = self.continentalness.value(px, 0.0, pz);
        let e = self.erosion.value(px, 0.0, pz);
        let w = self.weirdness.value(px, 0.0, pz);
        let off = {
            let c32 = c as f32;
            let e32 = e as f32;
            let w32 = w as f32;
            self.offset.get(&[c32, e32, fold_ridges(w32), w32]) + 0.015
        };
        let depth = 1.0 - f64::from(y * 4) / 128.0 - 83.0 / 160.0 + f64::from(off);
        let t = self.temperature.value(px, 0.0, pz);
        let h = self.humidity.value(px, 0.0, pz);
        TargetPoint([
            quantize(t),
            quantize(h),
            quantize(c),
            quantize(e),
            quantize(depth),
            quantize(w),
        ])
    }

    /// Depth-zero surface height estimate (blocks) at cell `(x, z)`.
    #[must_use]
    pub fn surface_estimate(&self, x: i32, z: i32) -> f64 {
        let (px, pz) = self.shifted(x, z);
        128.0 * (HEIGHT_BASE + f64::from(self.offset_at(px, pz)))
    }
}
