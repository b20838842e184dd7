//! The five sorting routines behind [`Algorithm::sort`](crate::Algorithm::sort).
//!
//! All of them share one contract: sort a mutable slice of `i64` in place,
//! ascending. Routines that need temporary storage (mergesort, counting
//! sort, the chunked hybrid) claim it with `try_reserve_exact` before moving
//! a single element, so an allocation failure surfaces as
//! [`SortError::Alloc`] with the input untouched instead of a silent no-op.

use crate::core::SortError;

/// Chunk width of the hybrid sort: each chunk is insertion-sorted before the
/// doubling merge passes.
pub const CHUNK: usize = 32;

/// Median-of-three quicksort.
///
/// Recurses into the smaller partition and iterates on the larger one, which
/// bounds the recursion depth to O(log n). In place, never allocates, not
/// stable.
pub fn quick_sort(data: &mut [i64]) {
    if data.len() > 1 {
        quick_sort_range(data, 0, data.len() - 1);
    }
}

fn quick_sort_range(data: &mut [i64], mut low: usize, mut high: usize) {
    while low < high {
        let p = partition(data, low, high);
        if p - low < high - p {
            if p > low {
                quick_sort_range(data, low, p - 1);
            }
            low = p + 1;
        } else {
            // p > low here: p == low would force high - p <= 0.
            quick_sort_range(data, p + 1, high);
            high = p - 1;
        }
    }
}

/// Lomuto partition around the median of `data[low]`, `data[mid]`,
/// `data[high]`. Returns the pivot's final index.
fn partition(data: &mut [i64], low: usize, high: usize) -> usize {
    data.swap(median_of_three(data, low, high), high);

    let pivot = data[high];
    let mut i = low;
    for j in low..high {
        if data[j] <= pivot {
            data.swap(i, j);
            i += 1;
        }
    }
    data.swap(i, high);
    i
}

fn median_of_three(data: &[i64], low: usize, high: usize) -> usize {
    let mid = low + (high - low) / 2;
    let (a, b, c) = (data[low], data[mid], data[high]);

    if (a <= b && b <= c) || (c <= b && b <= a) {
        mid
    } else if (b <= a && a <= c) || (c <= a && a <= b) {
        low
    } else {
        high
    }
}

/// Top-down mergesort. Stable; uses one O(n) scratch buffer for the whole
/// sort.
pub fn merge_sort(data: &mut [i64]) -> Result<(), SortError> {
    let n = data.len();
    if n <= 1 {
        return Ok(());
    }

    let mut scratch = alloc_scratch(n)?;
    merge_sort_range(data, &mut scratch, 0, n - 1);
    Ok(())
}

fn merge_sort_range(data: &mut [i64], scratch: &mut [i64], left: usize, right: usize) {
    if left >= right {
        return;
    }

    let mid = left + (right - left) / 2;
    merge_sort_range(data, scratch, left, mid);
    merge_sort_range(data, scratch, mid + 1, right);
    merge_runs(data, scratch, left, mid, right);
}

/// Merges the sorted runs `data[left..=mid]` and `data[mid+1..=right]`.
///
/// Two-pointer merge through `scratch`; the left run wins ties, which is
/// what makes mergesort and the hybrid stable.
fn merge_runs(data: &mut [i64], scratch: &mut [i64], left: usize, mid: usize, right: usize) {
    let run = &mut scratch[..right - left + 1];
    run.copy_from_slice(&data[left..=right]);
    let (left_run, right_run) = run.split_at(mid - left + 1);

    let mut i = 0;
    let mut j = 0;
    let mut k = left;

    while i < left_run.len() && j < right_run.len() {
        if left_run[i] <= right_run[j] {
            data[k] = left_run[i];
            i += 1;
        } else {
            data[k] = right_run[j];
            j += 1;
        }
        k += 1;
    }
    while i < left_run.len() {
        data[k] = left_run[i];
        i += 1;
        k += 1;
    }
    while j < right_run.len() {
        data[k] = right_run[j];
        j += 1;
        k += 1;
    }
}

/// Heapsort: sift-down max-heap build, then repeated extraction of the max
/// to the tail. In place, O(1) extra space, not stable.
pub fn heap_sort(data: &mut [i64]) {
    let n = data.len();
    if n <= 1 {
        return;
    }

    for root in (0..n / 2).rev() {
        sift_down(data, root, n);
    }
    for end in (1..n).rev() {
        data.swap(0, end);
        sift_down(data, 0, end);
    }
}

fn sift_down(data: &mut [i64], mut root: usize, end: usize) {
    loop {
        let mut child = 2 * root + 1;
        if child >= end {
            break;
        }
        if child + 1 < end && data[child] < data[child + 1] {
            child += 1;
        }
        if data[root] >= data[child] {
            break;
        }
        data.swap(root, child);
        root = child;
    }
}

/// Counting sort: min/max scan, range-sized count table, prefix sums, then
/// placement scanning the input in reverse so equal keys keep their relative
/// order.
///
/// Stable by construction. The count table scales with the value range, not
/// the element count, so a sparse wide range fails with
/// [`SortError::RangeOverflow`] or [`SortError::Alloc`] rather than thrash.
pub fn counting_sort(data: &mut [i64]) -> Result<(), SortError> {
    if data.len() <= 1 {
        return Ok(());
    }

    let mut min = data[0];
    let mut max = data[0];
    for &v in &data[1..] {
        if v < min {
            min = v;
        }
        if v > max {
            max = v;
        }
    }

    let span = max as i128 - min as i128 + 1;
    let range = usize::try_from(span).map_err(|_| SortError::RangeOverflow { span })?;

    let mut counts: Vec<usize> = Vec::new();
    counts
        .try_reserve_exact(range)
        .map_err(|source| SortError::Alloc {
            bytes: range.saturating_mul(size_of::<usize>()),
            source,
        })?;
    counts.resize(range, 0);
    let mut output = alloc_scratch(data.len())?;

    for &v in data.iter() {
        counts[(v as i128 - min as i128) as usize] += 1;
    }
    for i in 1..range {
        counts[i] += counts[i - 1];
    }
    for &v in data.iter().rev() {
        let slot = (v as i128 - min as i128) as usize;
        counts[slot] -= 1;
        output[counts[slot]] = v;
    }

    data.copy_from_slice(&output);
    Ok(())
}

/// Chunked hybrid sort: insertion-sort fixed 32-element chunks, then merge
/// adjacent runs with doubling width until one run remains.
///
/// A simplified, non-adaptive run-merge scheme; it does not detect
/// pre-existing runs beyond the fixed chunking. Shares [`merge_runs`] with
/// mergesort, reusing one O(n) scratch buffer across every merge step.
pub fn hybrid_sort(data: &mut [i64]) -> Result<(), SortError> {
    let n = data.len();
    if n <= 1 {
        return Ok(());
    }

    // Claim scratch before the chunk passes touch the data.
    let mut scratch = if n > CHUNK {
        alloc_scratch(n)?
    } else {
        Vec::new()
    };

    for start in (0..n).step_by(CHUNK) {
        let end = usize::min(start + CHUNK, n);
        insertion_sort(&mut data[start..end]);
    }

    let mut width = CHUNK;
    while width < n {
        let mut left = 0;
        while left + width < n {
            let mid = left + width - 1;
            let right = usize::min(left + 2 * width - 1, n - 1);
            merge_runs(data, &mut scratch, left, mid, right);
            left += 2 * width;
        }
        width *= 2;
    }
    Ok(())
}

/// Insertion sort over a single chunk.
pub(crate) fn insertion_sort(data: &mut [i64]) {
    for i in 1..data.len() {
        let value = data[i];
        let mut j = i;
        while j > 0 && data[j - 1] > value {
            data[j] = data[j - 1];
            j -= 1;
        }
        data[j] = value;
    }
}

/// Allocates a zeroed `i64` scratch buffer, surfacing failure instead of
/// aborting.
fn alloc_scratch(len: usize) -> Result<Vec<i64>, SortError> {
    let mut buf: Vec<i64> = Vec::new();
    buf.try_reserve_exact(len).map_err(|source| SortError::Alloc {
        bytes: len.saturating_mul(size_of::<i64>()),
        source,
    })?;
    buf.resize(len, 0);
    Ok(buf)
}
