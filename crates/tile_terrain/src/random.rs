//! Seeded random source used by every generation step.
//!
//! [`Mulberry32`] is a tiny 32-bit generator with good mixing for sequential seeds.
//! It implements [`RngCore`], so all generation functions take `&mut dyn RngCore` and
//! accept any `rand` generator in its place.
use rand::{Rng, RngCore};

const GOLDEN_GAMMA: u32 = 0x6D2B_79F5;
const TWO_POW_32: f64 = 4_294_967_296.0;

/// Mulberry32 pseudo-random generator.
///
/// Two instances built from the same seed yield identical sequences. State is
/// per-instance; nothing is shared between generators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    /// Create a generator from an unsigned 32-bit seed.
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Create a generator from a signed seed, wrapping it into 32 unsigned bits.
    pub fn from_i64(seed: i64) -> Self {
        Self::new(seed as u32)
    }

    /// Create a generator from a float seed; see [`coerce_seed`].
    pub fn from_f64(seed: f64) -> Self {
        Self::new(coerce_seed(seed))
    }

    /// Create a generator from a seed drawn from the thread-local generator.
    pub fn from_random_seed() -> Self {
        Self::new(random_seed())
    }

    /// Advance the state and return the next mixed 32-bit output.
    #[inline]
    pub fn next_raw(&mut self) -> u32 {
        self.state = self.state.wrapping_add(GOLDEN_GAMMA);
        let s = self.state;
        let mut t = (s ^ (s >> 15)).wrapping_mul(1 | s);
        t = t.wrapping_add((t ^ (t >> 7)).wrapping_mul(61 | t)) ^ t;
        t ^ (t >> 14)
    }

    /// Next float in `[0, 1)`.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_raw()) / TWO_POW_32
    }
}

impl RngCore for Mulberry32 {
    fn next_u32(&mut self) -> u32 {
        self.next_raw()
    }

    fn next_u64(&mut self) -> u64 {
        let hi = u64::from(self.next_raw());
        let lo = u64::from(self.next_raw());
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_raw().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

/// Fresh seed from the thread-local generator.
pub fn random_seed() -> u32 {
    rand::rng().random()
}

/// Build a float-producing closure from a signed seed.
pub fn create_random(seed: i64) -> impl FnMut() -> f64 {
    let mut rng = Mulberry32::from_i64(seed);
    move || rng.next_f64()
}

/// Coerce an arbitrary float seed into 32 unsigned bits.
///
/// The value is truncated toward zero and reduced modulo 2^32, so `42.7` seeds like
/// `42` and `-1.0` like `u32::MAX`. Non-finite input maps to `0`.
pub fn coerce_seed(seed: f64) -> u32 {
    if !seed.is_finite() {
        return 0;
    }
    seed.trunc().rem_euclid(TWO_POW_32) as u32
}

/// Draw a float in `[0, 1)` from any generator.
#[inline]
pub(crate) fn rand01(rng: &mut dyn RngCore) -> f64 {
    f64::from(rng.next_u32()) / TWO_POW_32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_reference_outputs() {
        let mut zero = Mulberry32::new(0);
        assert_eq!(zero.next_raw(), 1_144_304_738);
        assert_eq!(zero.next_raw(), 1_416_247);
        assert_eq!(zero.next_raw(), 958_946_056);

        let mut answer = Mulberry32::new(42);
        assert_eq!(answer.next_raw(), 2_581_720_956);
        assert_eq!(answer.next_raw(), 1_925_393_290);
    }

    #[test]
    fn values_stay_in_unit_interval() {
        let mut rng = Mulberry32::new(42);
        for _ in 0..1000 {
            let v = rng.next_f64();
            assert!((0.0..1.0).contains(&v), "{v} out of [0, 1)");
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = create_random(12345);
        let mut b = create_random(12345);
        let sa: Vec<f64> = (0..1000).map(|_| a()).collect();
        let sb: Vec<f64> = (0..1000).map(|_| b()).collect();
        assert_eq!(sa, sb);
    }

    #[test]
    fn different_seeds_diverge_early() {
        let mut a = create_random(12345);
        let mut b = create_random(54321);
        let sa: Vec<f64> = (0..10).map(|_| a()).collect();
        let sb: Vec<f64> = (0..10).map(|_| b()).collect();
        assert_ne!(sa, sb);
    }

    #[test]
    fn negative_seed_wraps_to_unsigned() {
        let mut neg = Mulberry32::from_i64(-12345);
        assert_eq!(neg.next_raw(), 2_829_502_202);
        assert_eq!(Mulberry32::from_i64(-1), Mulberry32::new(u32::MAX));
    }

    #[test]
    fn float_seeds_truncate() {
        assert_eq!(coerce_seed(42.7), 42);
        assert_eq!(coerce_seed(-1.0), u32::MAX);
        assert_eq!(coerce_seed(9_007_199_254_740_991.0), u32::MAX);
        assert_eq!(coerce_seed(f64::NAN), 0);
        assert_eq!(coerce_seed(f64::INFINITY), 0);

        let mut a = Mulberry32::from_f64(42.7);
        let mut b = Mulberry32::new(42);
        assert_eq!(a.next_f64(), b.next_f64());
    }

    #[test]
    fn rand01_matches_next_f64() {
        let mut a = Mulberry32::new(99);
        let mut b = Mulberry32::new(99);
        for _ in 0..16 {
            assert_eq!(rand01(&mut a), b.next_f64());
        }
    }

    #[test]
    fn fill_bytes_handles_partial_chunks() {
        let mut a = Mulberry32::new(5);
        let mut b = Mulberry32::new(5);
        let mut buf = [0u8; 6];
        a.fill_bytes(&mut buf);
        let first = b.next_raw().to_le_bytes();
        let second = b.next_raw().to_le_bytes();
        assert_eq!(&buf[..4], &first);
        assert_eq!(&buf[4..], &second[..2]);
    }
}
