//! Flat-text datasets: parsing input files, writing sorted output, and
//! synthesizing random inputs.
//!
//! The on-disk formats are deliberately simple. Inputs are whitespace or
//! newline separated integers; sorted output is one integer per line, with
//! an optional two-line `ALGORITHM:` / `CASE:` header per block when several
//! annotated blocks share a file.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use rand::Rng;
use rand::rngs::StdRng;
use tracing::warn;

use crate::core::{Algorithm, BenchError};
use crate::dist::Distribution;

/// Reads a whitespace/newline-delimited integer file.
///
/// Malformed tokens are skipped, but never silently: each run logs one
/// warning with the skip count. A file that yields no values at all is a
/// fatal [`BenchError::EmptyInput`].
pub fn read_values(path: &Path) -> Result<Vec<i64>, BenchError> {
    let text = fs::read_to_string(path).map_err(|source| BenchError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;

    let mut values = Vec::new();
    let mut skipped = 0usize;
    for token in text.split_whitespace() {
        match token.parse::<i64>() {
            Ok(value) => values.push(value),
            Err(_) => skipped += 1,
        }
    }

    if skipped > 0 {
        warn!(path = %path.display(), skipped, "skipped malformed tokens in input file");
    }
    if values.is_empty() {
        return Err(BenchError::EmptyInput {
            path: path.to_path_buf(),
        });
    }
    Ok(values)
}

/// Writes `values` to `path`, one integer per line.
pub fn write_values(path: &Path, values: &[i64]) -> Result<(), BenchError> {
    let wrap = |source: io::Error| BenchError::WriteOutput {
        path: path.to_path_buf(),
        source,
    };

    let file = fs::File::create(path).map_err(wrap)?;
    let mut out = BufWriter::new(file);
    write_plain(&mut out, values).map_err(wrap)?;
    out.flush().map_err(wrap)
}

/// Writes `values` to an arbitrary sink, one integer per line.
pub fn write_plain(out: &mut dyn Write, values: &[i64]) -> io::Result<()> {
    for value in values {
        writeln!(out, "{value}")?;
    }
    Ok(())
}

/// Writes one annotated output block: an `ALGORITHM:` / `CASE:` header, the
/// values one per line, and a blank separator line.
pub fn write_annotated_block(
    out: &mut dyn Write,
    algorithm: Algorithm,
    case: Distribution,
    values: &[i64],
) -> io::Result<()> {
    writeln!(out, "ALGORITHM: {}", algorithm.display_name())?;
    writeln!(out, "CASE: {}", case.name())?;
    write_plain(out, values)?;
    writeln!(out)
}

/// Synthesizes `count` random values in `min..=max`, guaranteeing both a
/// negative and a positive value whenever `count >= 2`.
///
/// The range must straddle zero (`min < 0 < max`), which keeps synthesized
/// datasets exercising the negative-key paths of every algorithm.
pub fn synthesize_values(
    count: usize,
    min: i64,
    max: i64,
    rng: &mut StdRng,
) -> Result<Vec<i64>, BenchError> {
    if count == 0 {
        return Err(BenchError::Generate("count must be greater than zero".into()));
    }
    if min > max {
        return Err(BenchError::Generate(
            "min value cannot be greater than max value".into(),
        ));
    }
    if !(min < 0 && 0 < max) {
        return Err(BenchError::Generate(
            "range must include both negative and positive numbers (min < 0 < max)".into(),
        ));
    }

    let mut values: Vec<i64> = (0..count).map(|_| rng.random_range(min..=max)).collect();

    if count >= 2 {
        if !values.iter().any(|&v| v < 0) {
            values[0] = rng.random_range(min..=-1);
        }
        if !values.iter().any(|&v| v > 0) {
            values[count - 1] = rng.random_range(1..=max);
        }
    }

    Ok(values)
}
