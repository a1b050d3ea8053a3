use rand::{rngs::OsRng, Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

/// Largest value the classic C `rand()` produces on glibc.
pub const RAND_MAX: i32 = i32::MAX;

/// Source of the values fed to a set under test.
///
/// Uses the xoshiro256** PRNG so a run can be replayed from its seed.
///
/// # Examples
///
/// ```
/// use int_forest_fuzz::fuzzer::Fuzzer;
///
/// let mut a = Fuzzer::new(Some(7));
/// let mut b = Fuzzer::new(Some(7));
/// assert_eq!(a.random_value(), b.random_value());
///
/// let v = a.random_key(Some(10));
/// assert!((-10..=10).contains(&v));
/// ```
pub struct Fuzzer {
    /// The seed used to initialize the PRNG.
    pub seed: u64,
    rng: Xoshiro256StarStar,
}

impl Fuzzer {
    /// Create a new fuzzer with an optional seed.
    ///
    /// If no seed is provided, a random seed will be generated using `OsRng`.
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| OsRng.next_u64());
        Self {
            seed,
            rng: Xoshiro256StarStar::seed_from_u64(seed),
        }
    }

    /// Fair coin flip.
    pub fn random_bool(&mut self) -> bool {
        self.rng.gen()
    }

    /// Spread-out signed value: `((a * b) ^ (c << 3)) * sign` with
    /// `a, c` in `[0, RAND_MAX]`, `b` in `[0, 53)` and wrapping arithmetic.
    pub fn random_value(&mut self) -> i32 {
        let a: i32 = self.rng.gen_range(0..=RAND_MAX);
        let b: i32 = self.rng.gen_range(0..53);
        let c: i32 = self.rng.gen_range(0..=RAND_MAX).wrapping_shl(3);
        let sign = if self.random_bool() { 1 } else { -1 };
        (a.wrapping_mul(b) ^ c).wrapping_mul(sign)
    }

    /// [`random_value`](Self::random_value), folded into `[-k, k]` when a
    /// key space `k` is given so that inserts, erases and lookups collide.
    pub fn random_key(&mut self, key_space: Option<u32>) -> i32 {
        let value = self.random_value();
        match key_space {
            None => value,
            Some(k) => fold(value, k),
        }
    }
}

fn fold(value: i32, k: u32) -> i32 {
    let k = i64::from(k.min(i32::MAX as u32));
    let folded = (i64::from(value) + k).rem_euclid(2 * k + 1) - k;
    folded as i32
}
