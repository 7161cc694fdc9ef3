//! Climate field definitions and quantized parameter geometry.

/// Seeding recipe for one climate noise field.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NoiseParams {
    pub id: &'static str,
    pub first_octave: i32,
    pub amplitudes: &'static [f64],
}

pub(crate) const TEMPERATURE: NoiseParams = NoiseParams {
    id: "minecraft:temperature",
    first_octave: -10,
    amplitudes: &[1.5, 0.0, 1.0, 0.0, 0.0, 0.0],
};

pub(crate) const HUMIDITY: NoiseParams = NoiseParams {
    id: "minecraft:vegetation",
    first_octave: -8,
    amplitudes: &[1.0, 1.0, 0.0, 0.0, 0.0, 0.0],
};

pub(crate) const CONTINENTALNESS: NoiseParams = NoiseParams {
    id: "minecraft:continentalness",
    first_octave: -9,
    amplitudes: &[1.0, 1.0, 2.0, 2.0, 2.0, 1.0, 1.0, 1.0, 1.0],
};

pub(crate) const EROSION: NoiseParams = NoiseParams {
    id: "minecraft:erosion",
    first_octave: -9,
    amplitudes: &[1.0, 1.0, 0.0, 1.0, 1.0],
};

pub(crate) const SHIFT: NoiseParams = NoiseParams {
    id: "minecraft:offset",
    first_octave: -3,
    amplitudes: &[1.0, 1.0, 1.0, 0.0],
};

pub(crate) const WEIRDNESS: NoiseParams = NoiseParams {
    id: "minecraft:ridge",
    first_octave: -7,
    amplitudes: &[1.0, 2.0, 1.0, 0.0, 0.0, 0.0],
};

/// Quantizes a climate value: narrowed to f32, scaled by 10000 in f32,
/// then truncated toward zero. The narrowing is part of the format.
#[must_use]
pub fn quantize(v: f64) -> i64 {
    i64::from((v as f32 * 10000.0) as i32)
}

/// Inclusive quantized interval along one climate axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamRange {
    pub min: i64,
    pub max: i64,
}

impl ParamRange {
    /// Interval from unquantized bounds.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min: quantize(min),
            max: quantize(max),
        }
    }

    /// Degenerate interval at a single value.
    #[must_use]
    pub fn point(v: f64) -> Self {
        Self::new(v, v)
    }

    /// Hull of two intervals.
    #[must_use]
    pub fn span(a: Self, b: Self) -> Self {
        Self {
            min: a.min.min(b.min),
            max: a.max.max(b.max),
        }
    }

    /// Zero inside the interval, distance to the nearest bound outside.
    #[must_use]
    pub fn distance(&self, v: i64) -> i64 {
        if v < self.min {
            self.min - v
        } else if v > self.max {
            v - self.max
        } else {
            0
        }
    }
}

/// A sampled climate point: temperature, humidity, continentalness,
/// erosion, depth, weirdness, all quantized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetPoint(pub [i64; 6]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantize_truncates_toward_zero() {
        assert_eq!(quantize(-0.1), -1000);
        assert_eq!(quantize(0.2739975985091186), 2739);
        assert_eq!(quantize(1.0), 10000);
        assert_eq!(quantize(-1.2), -12000);
        assert_eq!(quantize(0.56789), 5678);
        assert_eq!(quantize(-0.0001), -1);
        assert_eq!(quantize(0.0), 0);
    }

    #[test]
    fn test_range_distance() {
        let r = ParamRange::new(-0.45, -0.15);
        assert_eq!(r.distance(-3000), 0);
        assert_eq!(r.distance(-5000), 500);
        assert_eq!(r.distance(0), 1500);
    }

    #[test]
    fn test_span() {
        let a = ParamRange::new(-0.45, -0.15);
        let b = ParamRange::new(0.2, 0.55);
        let s = ParamRange::span(a, b);
        assert_eq!(s.min, -4500);
        assert_eq!(s.max, 5500);
    }
}
