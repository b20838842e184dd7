//! Modeled auxiliary-memory estimates.
//!
//! These are predictions derived from algorithm identity, element count, and
//! (for counting sort) the value range. They are reported alongside the
//! observed peak-RSS figure from [`crate::rusage`], never instead of it: the
//! model answers "what does this algorithm inherently need", the observation
//! answers "what did the process actually touch".

use crate::core::Algorithm;

/// Bytes per element of the working buffers.
const ELEMENT_BYTES: u64 = size_of::<i64>() as u64;

/// Modeled bytes per quicksort stack frame (indices plus bookkeeping).
const QUICK_FRAME_BYTES: u64 = 64;

/// Estimates the auxiliary bytes `algorithm` needs beyond the input buffer
/// for `len` elements spanning `value_range` distinct values.
///
/// `value_range` only matters for counting sort, whose count table scales
/// with the range rather than the element count.
pub fn estimate_aux_bytes(algorithm: Algorithm, len: usize, value_range: u64) -> u64 {
    let n = len as u64;
    match algorithm {
        // Smaller-side recursion bounds the stack to ~log2(n) frames.
        Algorithm::Quick => u64::from(ceil_log2(len)) * QUICK_FRAME_BYTES,
        Algorithm::Merge | Algorithm::Hybrid => n * ELEMENT_BYTES,
        Algorithm::Heap => 0,
        Algorithm::Counting => (n + value_range) * ELEMENT_BYTES,
    }
}

/// The number of distinct representable values in `data`, `max - min + 1`.
///
/// Zero for an empty sequence. Saturates at `u64::MAX` for a full-width
/// span.
pub fn value_range(data: &[i64]) -> u64 {
    let Some(&first) = data.first() else {
        return 0;
    };
    let (min, max) = data.iter().fold((first, first), |(min, max), &v| {
        (min.min(v), max.max(v))
    });
    u64::try_from(max as i128 - min as i128 + 1).unwrap_or(u64::MAX)
}

fn ceil_log2(n: usize) -> u32 {
    match n {
        0 | 1 => 0,
        _ => (n - 1).ilog2() + 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counting_estimate_scales_with_range() {
        let narrow = estimate_aux_bytes(Algorithm::Counting, 100, 10);
        let wide = estimate_aux_bytes(Algorithm::Counting, 100, 10_000);
        assert!(wide > narrow);
    }

    #[test]
    fn merge_estimate_is_linear_in_len() {
        assert_eq!(estimate_aux_bytes(Algorithm::Merge, 1_000, 5), 8_000);
        assert_eq!(estimate_aux_bytes(Algorithm::Hybrid, 1_000, 5), 8_000);
    }

    #[test]
    fn heap_estimate_is_constant() {
        assert_eq!(
            estimate_aux_bytes(Algorithm::Heap, 10, 5),
            estimate_aux_bytes(Algorithm::Heap, 1_000_000, 5_000_000),
        );
    }

    #[test]
    fn quick_estimate_grows_logarithmically() {
        let small = estimate_aux_bytes(Algorithm::Quick, 1 << 10, 0);
        let large = estimate_aux_bytes(Algorithm::Quick, 1 << 20, 0);
        assert_eq!(large, 2 * small);
    }

    #[test]
    fn value_range_spans_negatives() {
        assert_eq!(value_range(&[-5, 0, -5, 3]), 9);
        assert_eq!(value_range(&[]), 0);
        assert_eq!(value_range(&[7]), 1);
        assert_eq!(value_range(&[i64::MIN, i64::MAX]), u64::MAX);
    }
}
