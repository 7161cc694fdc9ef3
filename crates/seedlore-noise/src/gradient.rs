//! Single-octave gradient lattice noise.

use seedlore_rng::{JavaRandom, Xoroshiro};

/// 16-entry gradient table; the last four repeat earlier entries on
/// purpose, matching the reference table.
const GRADIENTS: [(f64, f64, f64); 16] = [
    (1.0, 1.0, 0.0),
    (-1.0, 1.0, 0.0),
    (1.0, -1.0, 0.0),
    (-1.0, -1.0, 0.0),
    (1.0, 0.0, 1.0),
    (-1.0, 0.0, 1.0),
    (1.0, 0.0, -1.0),
    (-1.0, 0.0, -1.0),
    (0.0, 1.0, 1.0),
    (0.0, -1.0, 1.0),
    (0.0, 1.0, -1.0),
    (0.0, -1.0, -1.0),
    (1.0, 1.0, 0.0),
    (0.0, -1.0, 1.0),
    (-1.0, 1.0, 0.0),
    (0.0, -1.0, -1.0),
];

pub(crate) fn lerp(t: f64, a: f64, b: f64) -> f64 {
    a + t * (b - a)
}

fn smoothstep(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// One octave of gradient noise: a random lattice origin plus a shuffled
/// 256-entry permutation.
#[derive(Debug, Clone)]
pub struct GradientNoise {
    xo: f64,
    yo: f64,
    zo: f64,
    permutation: [u8; 256],
}

impl GradientNoise {
    /// Initializes from a Xoroshiro stream: three origin doubles, then a
    /// Fisher-Yates shuffle driven by bounded draws.
    #[must_use]
    pub fn from_xoroshiro(rng: &mut Xoroshiro) -> Self {
        let xo = rng.next_double() * 256.0;
        let yo = rng.next_double() * 256.0;
        let zo = rng.next_double() * 256.0;
        let mut permutation = [0u8; 256];
        for (i, slot) in permutation.iter_mut().enumerate() {
            *slot = i as u8;
        }
        for i in 0..256usize {
            let j = rng.next_int(256 - i as u32) as usize;
            permutation.swap(i, i + j);
        }
        Self {
            xo,
            yo,
            zo,
            permutation,
        }
    }

    /// Legacy initialization from the 48-bit LCG, same draw order.
    #[must_use]
    pub fn from_java(rng: &mut JavaRandom) -> Self {
        let xo = rng.next_double() * 256.0;
        let yo = rng.next_double() * 256.0;
        let zo = rng.next_double() * 256.0;
        let mut permutation = [0u8; 256];
        for (i, slot) in permutation.iter_mut().enumerate() {
            *slot = i as u8;
        }
        for i in 0..256usize {
            let j = rng.next_int(256 - i as i32) as usize;
            permutation.swap(i, i + j);
        }
        Self {
            xo,
            yo,
            zo,
            permutation,
        }
    }

    fn idx(&self, v: i64) -> i64 {
        i64::from(self.permutation[(v & 255) as usize])
    }

    /// Samples the octave at `(x, y, z)`.
    ///
    /// When `y_amp` is nonzero the fractional y coordinate is snapped down
    /// to a multiple of `y_amp` (clamped by `y_min`) before the gradient
    /// dot products, while the interpolation weight still uses the
    /// unsnapped fraction. Both behaviors are reference-exact.
    #[must_use]
    pub fn sample(&self, x: f64, y: f64, z: f64, y_amp: f64, y_min: f64) -> f64 {
        let x = x + self.xo;
        let y = y + self.yo;
        let z = z + self.zo;
        let xf = libm::floor(x);
        let yf = libm::floor(y);
        let zf = libm::floor(z);
        let xr = x - xf;
        let yr = y - yf;
        let zr = z - zf;
        let y_fudge = if y_amp != 0.0 {
            let y_clamp = if 0.0 <= y_min && y_min < yr { y_min } else { yr };
            libm::floor(y_clamp / y_amp + 1.0e-7) * y_amp
        } else {
            0.0
        };
        self.sample_cell(xf as i64, yf as i64, zf as i64, xr, yr - y_fudge, zr, yr)
    }

    #[allow(clippy::too_many_arguments)]
    fn sample_cell(&self, x: i64, y: i64, z: i64, xr: f64, yr: f64, zr: f64, yr0: f64) -> f64 {
        let x0 = self.idx(x);
        let x1 = self.idx(x + 1);
        let a = self.idx(x0 + y);
        let b = self.idx(x0 + y + 1);
        let c = self.idx(x1 + y);
        let d = self.idx(x1 + y + 1);
        let grad = |h: i64, dx: f64, dy: f64, dz: f64| {
            let (gx, gy, gz) = GRADIENTS[(h & 15) as usize];
            gx * dx + gy * dy + gz * dz
        };
        let d000 = grad(self.idx(a + z), xr, yr, zr);
        let d100 = grad(self.idx(c + z), xr - 1.0, yr, zr);
        let d010 = grad(self.idx(b + z), xr, yr - 1.0, zr);
        let d110 = grad(self.idx(d + z), xr - 1.0, yr - 1.0, zr);
        let d001 = grad(self.idx(a + z + 1), xr, yr, zr - 1.0);
        let d101 = grad(self.idx(c + z + 1), xr - 1.0, yr, zr - 1.0);
        let d011 = grad(self.idx(b + z + 1), xr, yr - 1.0, zr - 1.0);
        let d111 = grad(self.idx(d + z + 1), xr - 1.0, yr - 1.0, zr - 1.0);
        let u = smoothstep(xr);
        let v = smoothstep(yr0);
        let w = smoothstep(zr);
        lerp(
            w,
            lerp(v, lerp(u, d000, d100), lerp(u, d010, d110)),
            lerp(v, lerp(u, d001, d101), lerp(u, d011, d111)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noise() -> GradientNoise {
        let mut rng = Xoroshiro::from_seed(1234567890);
        GradientNoise::from_xoroshiro(&mut rng)
    }

    #[test]
    fn test_origins_and_permutation() {
        let n = noise();
        assert_eq!(n.xo, 201.87590802559993);
        assert_eq!(n.yo, 74.99590066045673);
        assert_eq!(n.zo, 81.12487585717531);
        assert_eq!(&n.permutation[..8], &[47, 90, 95, 154, 146, 65, 42, 129]);
    }

    #[test]
    fn test_sample_values() {
        let n = noise();
        assert_eq!(n.sample(0.5, 0.5, 0.5, 0.0, 0.0), -0.047997272557726456);
        assert_eq!(n.sample(12.3, -4.5, 6.7, 0.0, 0.0), 0.13043531642592135);
    }

    #[test]
    fn test_sample_y_fudge() {
        let n = noise();
        assert_eq!(n.sample(12.3, -4.5, 6.7, 0.25, 0.4), -0.09961868824668696);
        assert_eq!(n.sample(-7.77, 120.0, 33.3, 16.0, 0.0), 0.2326040750793253);
    }

    #[test]
    fn test_permutation_is_a_permutation() {
        let n = noise();
        let mut seen = [false; 256];
        for &v in &n.permutation {
            assert!(!seen[v as usize], "duplicate entry {v}");
            seen[v as usize] = true;
        }
    }
}
