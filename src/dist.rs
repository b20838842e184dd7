//! Input distribution generation.
//!
//! Each [`Distribution`] produces one canonical input shape for a target
//! size. The random source is injected by the caller, so a run becomes
//! reproducible by fixing a seed; nothing here touches ambient global state.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Bounds of the random distribution, matching the default synthesis range.
pub const VALUE_MIN: i64 = -1_000_000;
pub const VALUE_MAX: i64 = 1_000_000;

/// A canonical input shape.
///
/// The three cases stress different algorithmic behaviors: `Ascending` and
/// `Descending` are the classic quicksort adversaries, `Random` is the
/// average case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Distribution {
    Random,
    Ascending,
    Descending,
}

impl Distribution {
    /// All distribution cases, in the order they are reported.
    pub const ALL: [Distribution; 3] = [
        Distribution::Random,
        Distribution::Ascending,
        Distribution::Descending,
    ];

    /// The label used in reports, CSV records, and annotated output.
    pub fn name(self) -> &'static str {
        match self {
            Distribution::Random => "random",
            Distribution::Ascending => "ascending",
            Distribution::Descending => "descending",
        }
    }

    /// Produces one sequence of `len` elements for this case.
    ///
    /// `Random` draws independently and uniformly from
    /// `VALUE_MIN..=VALUE_MAX`; `Ascending` is `1..=len`; `Descending` is
    /// `len..=1`.
    pub fn generate(self, len: usize, rng: &mut StdRng) -> Vec<i64> {
        match self {
            Distribution::Random => (0..len)
                .map(|_| rng.random_range(VALUE_MIN..=VALUE_MAX))
                .collect(),
            Distribution::Ascending => (1..=len as i64).collect(),
            Distribution::Descending => (1..=len as i64).rev().collect(),
        }
    }
}

impl std::fmt::Display for Distribution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Builds the run-level random source: seeded for reproducible benchmarks,
/// OS-seeded otherwise.
pub fn rng_for(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}
