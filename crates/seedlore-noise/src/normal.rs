//! Normalized double-sampled noise, the shape every climate field uses.

use seedlore_rng::Xoroshiro;

use crate::octave::OctaveNoise;

/// Frequency skew for the second stack; decorrelates the pair without a
/// second seeding pass.
const INPUT_FACTOR: f64 = 1.0181268882175227;

/// Two octave stacks built back-to-back from one stream, averaged with a
/// normalization factor derived from the nonzero-amplitude span.
#[derive(Debug, Clone)]
pub struct NormalNoise {
    first: OctaveNoise,
    second: OctaveNoise,
    value_factor: f64,
}

impl NormalNoise {
    /// Builds both stacks from `rng`. At least one amplitude must be
    /// nonzero; an all-zero table degenerates to a zero value factor.
    #[must_use]
    pub fn new(rng: &mut Xoroshiro, first_octave: i32, amplitudes: &[f64]) -> Self {
        let first = OctaveNoise::new(rng, first_octave, amplitudes);
        let second = OctaveNoise::new(rng, first_octave, amplitudes);
        let value_factor = match first.nonzero_span() {
            Some(span) => (1.0 / 6.0) / (0.1 * (1.0 + 1.0 / (span as f64 + 1.0))),
            None => 0.0,
        };
        Self {
            first,
            second,
            value_factor,
        }
    }

    /// Builds the noise for one named climate field of a world: the base
    /// Xoroshiro stream of `world_seed` is forked positionally and the
    /// child for `noise_id` seeds both stacks.
    #[must_use]
    pub fn seeded(world_seed: u64, noise_id: &str, first_octave: i32, amplitudes: &[f64]) -> Self {
        let mut base = Xoroshiro::from_seed(world_seed);
        let fork = base.fork_positional();
        let mut rng = fork.from_hash_of(noise_id);
        Self::new(&mut rng, first_octave, amplitudes)
    }

    /// Normalized value at `(x, y, z)`.
    #[must_use]
    pub fn value(&self, x: f64, y: f64, z: f64) -> f64 {
        let a = self.first.value(x, y, z);
        let b = self
            .second
            .value(x * INPUT_FACTOR, y * INPUT_FACTOR, z * INPUT_FACTOR);
        (a + b) * self.value_factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_factor_and_value() {
        let mut rng = Xoroshiro::from_seed(1234567890);
        let amplitudes = [1.0, 1.0, 2.0, 2.0, 2.0, 1.0, 1.0, 1.0, 1.0];
        let noise = NormalNoise::new(&mut rng, -9, &amplitudes);
        assert_eq!(noise.value_factor, 1.4999999999999998);
        assert_eq!(noise.value(72.0, 0.0, 496.0), -0.017560694284669134);
    }

    #[test]
    fn test_seeded_climate_fields() {
        let temperature =
            NormalNoise::seeded(1234567890, "minecraft:temperature", -10, &[1.5, 0.0, 1.0, 0.0, 0.0, 0.0]);
        assert_eq!(temperature.value(72.0, 0.0, 496.0), 0.4173403097248217);

        let continentalness = NormalNoise::seeded(
            1234567890,
            "minecraft:continentalness",
            -9,
            &[1.0, 1.0, 2.0, 2.0, 2.0, 1.0, 1.0, 1.0, 1.0],
        );
        assert_eq!(continentalness.value(72.0, 0.0, 496.0), 0.2739975985091186);
    }
}
