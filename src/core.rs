//! Core types shared by the sort engine and the benchmark harness.
//!
//! This module defines:
//! - [`Algorithm`]: the closed set of sorting algorithms, selected by key.
//! - [`SortError`]: the explicit failure channel for a single sort call.
//! - [`BenchError`]: everything that can abort a benchmark invocation.

use std::collections::TryReserveError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::algo;

/// Failure modes of a single sort call.
///
/// Every routine claims all of its temporary storage up front (via
/// `try_reserve_exact`) before moving any element, so on `Err` the input
/// slice is guaranteed to be unmodified.
#[derive(Debug, Error)]
pub enum SortError {
    /// A temporary buffer could not be allocated.
    #[error("failed to allocate {bytes} bytes of scratch space")]
    Alloc {
        bytes: usize,
        #[source]
        source: TryReserveError,
    },

    /// The value range of the input does not fit in an addressable count
    /// table. Only counting sort can hit this; its memory cost scales with
    /// the value range rather than the element count.
    #[error("value range {span} exceeds the addressable count table size")]
    RangeOverflow { span: i128 },
}

/// A sorting algorithm, selected by key at configuration time.
///
/// The set is closed: each variant satisfies the same contract (sort a
/// mutable slice of `i64` in place, ascending) through [`Algorithm::sort`].
///
/// # Examples
///
/// ```
/// use sortbench::Algorithm;
///
/// let mut data = vec![5, 3, 3, 1];
/// Algorithm::Quick.sort(&mut data).unwrap();
///
/// assert_eq!(data, vec![1, 3, 3, 5]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Median-of-three quicksort, in place, not stable.
    Quick,
    /// Top-down mergesort, O(n) scratch, stable.
    Merge,
    /// Max-heap heapsort, in place, not stable.
    Heap,
    /// Counting sort over the value range, stable.
    Counting,
    /// Insertion-sorted 32-element chunks merged with doubling width.
    Hybrid,
}

impl Algorithm {
    /// All algorithms, in the order they are reported.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Quick,
        Algorithm::Merge,
        Algorithm::Heap,
        Algorithm::Counting,
        Algorithm::Hybrid,
    ];

    /// The short key used on the command line and in CSV records.
    pub fn key(self) -> &'static str {
        match self {
            Algorithm::Quick => "quick",
            Algorithm::Merge => "merge",
            Algorithm::Heap => "heap",
            Algorithm::Counting => "counting",
            Algorithm::Hybrid => "hybrid",
        }
    }

    /// The name used in report headers and annotated output blocks.
    pub fn display_name(self) -> &'static str {
        match self {
            Algorithm::Quick => "QuickSort",
            Algorithm::Merge => "MergeSort",
            Algorithm::Heap => "HeapSort",
            Algorithm::Counting => "CountingSort",
            Algorithm::Hybrid => "HybridSort",
        }
    }

    /// Looks up an algorithm by its key.
    pub fn from_key(key: &str) -> Option<Algorithm> {
        Algorithm::ALL.into_iter().find(|a| a.key() == key)
    }

    /// Sorts `data` in place, ascending.
    ///
    /// On `Err` the slice is unmodified; see [`SortError`].
    pub fn sort(self, data: &mut [i64]) -> Result<(), SortError> {
        match self {
            Algorithm::Quick => {
                algo::quick_sort(data);
                Ok(())
            }
            Algorithm::Merge => algo::merge_sort(data),
            Algorithm::Heap => {
                algo::heap_sort(data);
                Ok(())
            }
            Algorithm::Counting => algo::counting_sort(data),
            Algorithm::Hybrid => algo::hybrid_sort(data),
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Fatal conditions of a benchmark invocation.
///
/// Configuration, I/O, resource-exhaustion, and correctness failures are
/// distinct variants so a diagnostic tells an algorithm defect apart from an
/// environment problem. All of them terminate the current run; nothing is
/// retried.
#[derive(Debug, Error)]
pub enum BenchError {
    #[error("unknown algorithm key `{0}` (expected quick, merge, heap, counting, hybrid, or all)")]
    UnknownAlgorithm(String),

    #[error("no algorithms selected")]
    EmptySelection,

    #[error("failed to read input file {path}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no integer values found in {path}")]
    EmptyInput { path: PathBuf },

    #[error("failed to write {path}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to emit sorted output during the `{scenario}` scenario")]
    Emit {
        scenario: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("{algorithm} failed on the {case} case of {len} elements")]
    Sort {
        algorithm: &'static str,
        case: &'static str,
        len: usize,
        #[source]
        source: SortError,
    },

    /// An algorithm produced a result that is not non-decreasing. This is a
    /// correctness failure, never an environment problem.
    #[error("{algorithm} produced an unsorted result on the {case} case of {len} elements")]
    Validation {
        algorithm: &'static str,
        case: &'static str,
        len: usize,
    },

    #[error("invalid generator parameters: {0}")]
    Generate(String),
}
