//! # Sortbench
//!
//! `sortbench` pairs a small family of in-memory integer sorting algorithms
//! with a benchmark harness that drives each of them through a matrix of
//! input distributions, output scenarios, and sizes, producing comparable
//! timing and memory measurements.
//!
//! ## The sorting contract
//!
//! Every [`Algorithm`] sorts a mutable slice of `i64` in place, ascending.
//! Temporary storage is claimed before any element moves, so an allocation
//! failure surfaces as an error with the input untouched — never as a
//! silently unsorted "success".
//!
//! ```rust
//! use sortbench::Algorithm;
//!
//! let mut data = vec![5, 3, 3, 1];
//! Algorithm::Hybrid.sort(&mut data).unwrap();
//!
//! assert_eq!(data, vec![1, 3, 3, 5]);
//! ```
//!
//! ## The benchmark matrix
//!
//! The harness enumerates (algorithm, distribution, size) cells one at a
//! time — strictly sequentially, so no concurrent cell skews a timing — and
//! gives every scenario its own clone of the base sequence. Each cell yields
//! a [`Measurement`] carrying the sort-only duration, an optional
//! sort-plus-output duration, a modeled auxiliary-memory estimate, and the
//! observed process peak RSS where the platform reports one.
//!
//! ```rust
//! use sortbench::prelude::*;
//! use sortbench::dist::rng_for;
//!
//! let mut rng = rng_for(Some(42));
//! let base = Distribution::Random.generate(1_000, &mut rng);
//!
//! let m = run_cell(Algorithm::Merge, Distribution::Random, &base, ScenarioSink::SortOnly)
//!     .unwrap();
//! assert_eq!(m.len, 1_000);
//! ```
//!
//! Results render either as human-readable report blocks or as a CSV record
//! stream with one row per cell (see [`report`]).

pub mod algo;
pub mod core;
pub mod dataset;
pub mod dist;
pub mod estimate;
pub mod report;
pub mod runner;
pub mod rusage;

pub use core::{Algorithm, BenchError, SortError};
pub use dist::Distribution;
pub use runner::{Measurement, Scenario, ScenarioSink, SweepConfig, run_cell, run_sweep};

pub mod prelude {
    pub use crate::core::{Algorithm, BenchError, SortError};
    pub use crate::dist::Distribution;
    pub use crate::runner::{
        Measurement, Scenario, ScenarioSink, SweepConfig, run_cell, run_sweep,
    };
}
