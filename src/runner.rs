//! The scenario runner: times each algorithm against each distribution case
//! and validates every result.
//!
//! One benchmark cell is a (algorithm, distribution, size) triple. The
//! runner clones the base sequence independently for every scenario so no
//! scenario ever observes another's mutated state, and it re-sorts a fresh
//! clone for the side-effect scenarios because the emission is timed
//! together with the sort. Execution is strictly sequential by design; a
//! second in-flight measurement would skew the timings.

use std::io::Write;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::core::{Algorithm, BenchError};
use crate::dataset;
use crate::dist::{Distribution, rng_for};
use crate::estimate::{estimate_aux_bytes, value_range};
use crate::rusage::peak_rss_bytes;

/// A timed execution mode: sorting combined with zero or one side effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scenario {
    SortOnly,
    SortPlusStream,
    SortPlusPersist,
}

impl Scenario {
    /// The label reports attach to this scenario's duration.
    pub fn label(self) -> &'static str {
        match self {
            Scenario::SortOnly => "sorting only",
            Scenario::SortPlusStream => "sorting + console output",
            Scenario::SortPlusPersist => "sorting + file output",
        }
    }
}

/// Where a side-effect scenario emits the sorted sequence.
///
/// Borrowing the writer keeps sink ownership (and file lifecycle) with the
/// caller; the runner only ever appends.
pub enum ScenarioSink<'a> {
    /// Time the sort alone.
    SortOnly,
    /// Time sort + line-oriented streaming to a console sink.
    Stream(&'a mut dyn Write),
    /// Time sort + an annotated block written to a durable sink.
    Persist(&'a mut dyn Write),
}

impl ScenarioSink<'_> {
    fn scenario(&self) -> Scenario {
        match self {
            ScenarioSink::SortOnly => Scenario::SortOnly,
            ScenarioSink::Stream(_) => Scenario::SortPlusStream,
            ScenarioSink::Persist(_) => Scenario::SortPlusPersist,
        }
    }
}

/// One measurement: the result of running one benchmark cell.
///
/// Immutable once built; consumed by the reporter.
#[derive(Clone, Debug)]
pub struct Measurement {
    pub algorithm: Algorithm,
    pub case: Distribution,
    pub len: usize,
    pub scenario: Scenario,
    /// Duration of the pure sort, always measured.
    pub sort_only: Duration,
    /// Duration of sort + side effect on a fresh clone; `None` for
    /// [`Scenario::SortOnly`].
    pub scenario_total: Option<Duration>,
    /// Modeled auxiliary-memory estimate, see [`crate::estimate`].
    pub estimated_aux_bytes: u64,
    /// Observed process peak RSS, if the platform reports one.
    pub peak_rss_bytes: Option<u64>,
}

/// Checks the post-condition every sort must satisfy: the sequence is
/// non-decreasing.
///
/// A violation means an algorithm defect and is always fatal; timings for an
/// incorrectly sorted result must never be reported.
pub fn validate_sorted(
    algorithm: Algorithm,
    case: Distribution,
    data: &[i64],
) -> Result<(), BenchError> {
    if data.is_sorted() {
        Ok(())
    } else {
        Err(BenchError::Validation {
            algorithm: algorithm.display_name(),
            case: case.name(),
            len: data.len(),
        })
    }
}

/// Runs one benchmark cell against `base`, leaving `base` untouched.
///
/// The sort-only pass is always timed and validated. If `sink` carries a
/// side effect, a second pass re-sorts a fresh clone and emits it inside the
/// same timed window — never reusing the already-sorted first clone, since
/// the emission is part of what is being measured together with sorting.
pub fn run_cell(
    algorithm: Algorithm,
    case: Distribution,
    base: &[i64],
    sink: ScenarioSink<'_>,
) -> Result<Measurement, BenchError> {
    let scenario = sink.scenario();
    let sort_err = |source| BenchError::Sort {
        algorithm: algorithm.display_name(),
        case: case.name(),
        len: base.len(),
        source,
    };

    let mut sorted = base.to_vec();
    let start = Instant::now();
    algorithm.sort(&mut sorted).map_err(sort_err)?;
    let sort_only = start.elapsed();
    validate_sorted(algorithm, case, &sorted)?;

    let scenario_total = match sink {
        ScenarioSink::SortOnly => None,
        ScenarioSink::Stream(out) => {
            let mut clone = base.to_vec();
            let start = Instant::now();
            algorithm.sort(&mut clone).map_err(sort_err)?;
            dataset::write_plain(out, &clone).map_err(|source| BenchError::Emit {
                scenario: scenario.label(),
                source,
            })?;
            let total = start.elapsed();
            validate_sorted(algorithm, case, &clone)?;
            Some(total)
        }
        ScenarioSink::Persist(out) => {
            let mut clone = base.to_vec();
            let start = Instant::now();
            algorithm.sort(&mut clone).map_err(sort_err)?;
            dataset::write_annotated_block(out, algorithm, case, &clone).map_err(|source| {
                BenchError::Emit {
                    scenario: scenario.label(),
                    source,
                }
            })?;
            let total = start.elapsed();
            validate_sorted(algorithm, case, &clone)?;
            Some(total)
        }
    };

    debug!(
        algorithm = algorithm.key(),
        case = case.name(),
        len = base.len(),
        sort_seconds = sort_only.as_secs_f64(),
        "measured cell"
    );

    Ok(Measurement {
        algorithm,
        case,
        len: base.len(),
        scenario,
        sort_only,
        scenario_total,
        estimated_aux_bytes: estimate_aux_bytes(algorithm, base.len(), value_range(base)),
        peak_rss_bytes: peak_rss_bytes(),
    })
}

/// Configuration of a full benchmark sweep.
pub struct SweepConfig {
    /// Element counts to measure, usually the fixed ladder
    /// [`SweepConfig::SIZE_LADDER`].
    pub sizes: Vec<usize>,
    /// Algorithms under test, usually [`Algorithm::ALL`].
    pub algorithms: Vec<Algorithm>,
    /// Fixed seed for reproducible random distributions.
    pub seed: Option<u64>,
    /// Directory the generated distribution files are (re)written into. The
    /// caller must have created it.
    pub data_dir: PathBuf,
}

impl SweepConfig {
    /// The default size ladder of the benchmark matrix.
    pub const SIZE_LADDER: [usize; 5] = [100, 1_000, 10_000, 100_000, 1_000_000];
}

/// Sweeps the benchmark matrix: sizes × distributions × algorithms, one cell
/// at a time.
///
/// For each (size, distribution) the base sequence is generated once,
/// persisted to the data directory, and then measured sort-only against
/// every algorithm on independent clones. Returns one [`Measurement`] per
/// cell, in sweep order.
pub fn run_sweep(config: &SweepConfig) -> Result<Vec<Measurement>, BenchError> {
    if config.algorithms.is_empty() {
        return Err(BenchError::EmptySelection);
    }

    let mut rng = rng_for(config.seed);
    let mut records = Vec::new();

    for &size in &config.sizes {
        for case in Distribution::ALL {
            let base = case.generate(size, &mut rng);

            let file = config.data_dir.join(format!("{}_{}.txt", case.name(), size));
            dataset::write_values(&file, &base)?;

            for &algorithm in &config.algorithms {
                info!(
                    algorithm = algorithm.key(),
                    case = case.name(),
                    size,
                    "running benchmark cell"
                );
                records.push(run_cell(algorithm, case, &base, ScenarioSink::SortOnly)?);
            }
        }
    }

    Ok(records)
}
