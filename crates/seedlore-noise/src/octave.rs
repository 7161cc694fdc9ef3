//! Octave stack with per-octave hashed seeding.

use seedlore_rng::Xoroshiro;

use crate::gradient::GradientNoise;

const ROUND_OFF: f64 = 33554432.0;

/// Wraps a coordinate into the +/-2^24 window before per-octave scaling,
/// keeping the lattice math in the precision band the reference uses.
fn wrap(x: f64) -> f64 {
    x - libm::floor(x / ROUND_OFF + 0.5) * ROUND_OFF
}

/// A sum of gradient-noise octaves.
///
/// Construction forks the input stream positionally and derives each
/// octave from the hash of `octave_{k}`, so the stream position after
/// construction is independent of how many octaves have zero amplitude.
/// Zero-amplitude octaves are skipped entirely (no lattice is built).
#[derive(Debug, Clone)]
pub struct OctaveNoise {
    levels: Vec<Option<GradientNoise>>,
    amplitudes: Vec<f64>,
    input_scale: f64,
    value_scale: f64,
}

impl OctaveNoise {
    /// Builds the stack. `first_octave` is the (negative) log2 of the
    /// lowest frequency; `amplitudes` holds one weight per octave.
    #[must_use]
    pub fn new(rng: &mut Xoroshiro, first_octave: i32, amplitudes: &[f64]) -> Self {
        let fork = rng.fork_positional();
        let levels = amplitudes
            .iter()
            .enumerate()
            .map(|(i, &amp)| {
                if amp == 0.0 {
                    None
                } else {
                    let name = format!("octave_{}", first_octave + i as i32);
                    let mut octave_rng = fork.from_hash_of(&name);
                    Some(GradientNoise::from_xoroshiro(&mut octave_rng))
                }
            })
            .collect();
        let n = amplitudes.len() as i32;
        Self {
            levels,
            amplitudes: amplitudes.to_vec(),
            input_scale: libm::exp2(f64::from(first_octave)),
            value_scale: libm::exp2(f64::from(n - 1)) / (libm::exp2(f64::from(n)) - 1.0),
        }
    }

    /// Accumulated value at `(x, y, z)`.
    #[must_use]
    pub fn value(&self, x: f64, y: f64, z: f64) -> f64 {
        let mut acc = 0.0;
        let mut input = self.input_scale;
        let mut value = self.value_scale;
        for (level, &amp) in self.levels.iter().zip(&self.amplitudes) {
            if let Some(noise) = level {
                acc += amp
                    * value
                    * noise.sample(wrap(x * input), wrap(y * input), wrap(z * input), 0.0, 0.0);
            }
            input *= 2.0;
            value /= 2.0;
        }
        acc
    }

    /// Indices of the outermost nonzero amplitudes, used by the
    /// normalization wrapper. `None` when every amplitude is zero.
    pub(crate) fn nonzero_span(&self) -> Option<usize> {
        let first = self.amplitudes.iter().position(|&a| a != 0.0)?;
        let last = self.amplitudes.iter().rposition(|&a| a != 0.0)?;
        Some(last - first)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_window() {
        assert_eq!(wrap(3.1e7), -2554432.0);
        assert_eq!(wrap(12.5), 12.5);
    }

    #[test]
    fn test_value_vectors() {
        let mut rng = Xoroshiro::from_seed(1234567890);
        let amplitudes = [1.0, 1.0, 2.0, 2.0, 2.0, 1.0, 1.0, 1.0, 1.0];
        let stack = OctaveNoise::new(&mut rng, -9, &amplitudes);
        assert_eq!(stack.value(72.0, 0.0, 496.0), -0.38440932506208125);
        assert_eq!(stack.value(-33.4, 7.0, 81.2), 0.20473590719226265);
    }

    #[test]
    fn test_zero_amplitude_octaves_skipped() {
        let mut rng = Xoroshiro::from_seed(1234567890);
        let stack = OctaveNoise::new(&mut rng, -10, &[1.5, 0.0, 1.0, 0.0, 0.0, 0.0]);
        let built: Vec<bool> = stack.levels.iter().map(Option::is_some).collect();
        assert_eq!(built, [true, false, true, false, false, false]);
        assert_eq!(stack.nonzero_span(), Some(2));
    }

    #[test]
    fn test_stream_position_independent_of_amplitudes() {
        let mut a = Xoroshiro::from_seed(99);
        let mut b = Xoroshiro::from_seed(99);
        let _ = OctaveNoise::new(&mut a, -7, &[1.0, 2.0, 1.0]);
        let _ = OctaveNoise::new(&mut b, -7, &[1.0, 0.0, 0.0]);
        assert_eq!(
            a.next_long(),
            b.next_long(),
            "construction must consume the same number of draws"
        );
    }
}
