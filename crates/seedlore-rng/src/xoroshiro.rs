//! Xoroshiro128++ with the reference seeding and derivation chain.

const GOLDEN_RATIO_64: u64 = 0x9E37_79B9_7F4A_7C15;
const SILVER_RATIO_64: u64 = 0x6A09_E667_F3BC_C909;

/// Stafford variant 13 of the 64-bit finalizer.
fn mix_stafford_13(mut v: u64) -> u64 {
    v = (v ^ (v >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    v = (v ^ (v >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    v ^ (v >> 31)
}

/// Xoroshiro128++ generator.
///
/// All 64-bit state transitions are unsigned; the `*_java` draw methods
/// re-compose values through signed 32-bit halves where the reference
/// consumes them that way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Xoroshiro {
    lo: u64,
    hi: u64,
}

impl Xoroshiro {
    /// Builds a generator from raw state words. The all-zero state is
    /// fixed up to the reference's non-zero fallback.
    #[must_use]
    pub fn new(lo: u64, hi: u64) -> Self {
        if lo | hi == 0 {
            Self {
                lo: GOLDEN_RATIO_64,
                hi: SILVER_RATIO_64,
            }
        } else {
            Self { lo, hi }
        }
    }

    /// Expands a 64-bit seed into two state words via the silver/golden
    /// ratio constants and the Stafford mixer.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        let l = seed ^ SILVER_RATIO_64;
        let h = l.wrapping_add(GOLDEN_RATIO_64);
        Self::new(mix_stafford_13(l), mix_stafford_13(h))
    }

    /// Raw 64-bit draw.
    pub fn next_long(&mut self) -> u64 {
        let (l, mut h) = (self.lo, self.hi);
        let n = l.wrapping_add(h).rotate_left(17).wrapping_add(l);
        h ^= l;
        self.lo = l.rotate_left(49) ^ h ^ (h << 21);
        self.hi = h.rotate_left(28);
        n
    }

    /// Signed 64-bit draw composed from two signed 32-bit halves, the way
    /// the reference's compatibility layer does it. Not the same stream
    /// position as [`Xoroshiro::next_long`]: this consumes two draws.
    pub fn next_long_java(&mut self) -> i64 {
        let a = (self.next_long() >> 32) as u32 as i32;
        let b = (self.next_long() >> 32) as u32 as i32;
        (i64::from(a) << 32).wrapping_add(i64::from(b))
    }

    /// Uniform draw in `0..n` via 32x32 multiply with low-half rejection.
    pub fn next_int(&mut self, n: u32) -> u32 {
        debug_assert!(n > 0, "bound must be positive");
        let mut r = (self.next_long() & 0xFFFF_FFFF).wrapping_mul(u64::from(n));
        if (r & 0xFFFF_FFFF) < u64::from(n) {
            let lim = n.wrapping_neg() % n;
            while (r & 0xFFFF_FFFF) < u64::from(lim) {
                r = (self.next_long() & 0xFFFF_FFFF).wrapping_mul(u64::from(n));
            }
        }
        (r >> 32) as u32
    }

    /// Uniform draw in `[0, 1)` with 53 bits of precision.
    pub fn next_double(&mut self) -> f64 {
        (self.next_long() >> 11) as f64 * 1.110_223_024_625_156_5e-16
    }

    /// Uniform draw in `[0, 1)` with 24 bits of precision.
    pub fn next_float(&mut self) -> f32 {
        (self.next_long() >> 40) as f32 * 5.960_464_5e-8
    }

    /// Captures two draws as a positional derivation root. Children are
    /// obtained from the root by name hashing, so distinct consumers get
    /// decorrelated streams from a single parent position.
    pub fn fork_positional(&mut self) -> PositionalFork {
        PositionalFork {
            lo: self.next_long(),
            hi: self.next_long(),
        }
    }
}

/// Root of a named derivation chain; see [`Xoroshiro::fork_positional`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionalFork {
    lo: u64,
    hi: u64,
}

impl PositionalFork {
    /// Derives a child generator by folding the big-endian MD5 halves of
    /// `name` into the fork state.
    #[must_use]
    pub fn from_hash_of(&self, name: &str) -> Xoroshiro {
        let digest = md5::compute(name.as_bytes());
        let ml = u64::from_be_bytes(digest.0[..8].try_into().unwrap_or([0; 8]));
        let mh = u64::from_be_bytes(digest.0[8..].try_into().unwrap_or([0; 8]));
        Xoroshiro::new(self.lo ^ ml, self.hi ^ mh)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_seed_state() {
        let rng = Xoroshiro::from_seed(1234567890);
        assert_eq!(rng.lo, 16615885512126121529);
        assert_eq!(rng.hi, 12775012081866864252);
    }

    #[test]
    fn test_next_long_stream() {
        let mut rng = Xoroshiro::from_seed(1234567890);
        assert_eq!(rng.next_long(), 14546692226546759163);
        assert_eq!(rng.next_long(), 5404024164299963211);
        assert_eq!(rng.next_long(), 5845663370893641180);
    }

    #[test]
    fn test_next_long_java_composition() {
        let mut rng = Xoroshiro::from_seed(1234567890);
        assert_eq!(rng.next_long_java(), -3900051846512839848);
        assert_eq!(rng.next_long_java(), 5845663369647300554);
    }

    #[test]
    fn test_next_double() {
        let mut rng = Xoroshiro::from_seed(1234567890);
        assert_eq!(rng.next_double(), 0.7885777657249997);
    }

    #[test]
    fn test_next_int_stream() {
        let mut rng = Xoroshiro::from_seed(1234567890);
        let draws: Vec<u32> = (0..5).map(|_| rng.next_int(256)).collect();
        assert_eq!(draws, [36, 126, 58, 47, 89]);
        let mut rng = Xoroshiro::from_seed(1234567890);
        let draws: Vec<u32> = (0..5).map(|_| rng.next_int(7)).collect();
        assert_eq!(draws, [0, 3, 1, 1, 2]);
    }

    #[test]
    fn test_fork_hash_of() {
        let mut rng = Xoroshiro::from_seed(1234567890);
        let fork = rng.fork_positional();
        let mut child = fork.from_hash_of("minecraft:temperature");
        assert_eq!(child.lo, 10781143254802790532);
        assert_eq!(child.hi, 13629753137128190659);
        assert_eq!(child.next_long(), 8033441510641704461);
    }

    #[test]
    fn test_zero_state_fallback() {
        let rng = Xoroshiro::new(0, 0);
        assert_ne!(rng.lo | rng.hi, 0, "zero state must be replaced");
    }
}
