//! Rendering measurements: human-readable blocks and the CSV record stream.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::core::BenchError;
use crate::runner::{Measurement, Scenario};

/// Schema of the structured record stream, one row per
/// (algorithm, distribution case, size) combination.
pub const CSV_HEADER: &str =
    "algorithm,input_case,size,execution_time_seconds,estimated_aux_memory_bytes";

/// Prints human-readable report blocks.
///
/// Consecutive measurements sharing an (algorithm, size) pair are grouped
/// under one `ALGORITHM:` header with a `CASE:` block each.
pub fn print_blocks(out: &mut dyn Write, records: &[Measurement]) -> io::Result<()> {
    let mut idx = 0;
    while idx < records.len() {
        let head = &records[idx];
        writeln!(out)?;
        writeln!(
            out,
            "=============== ALGORITHM: {} ===============",
            head.algorithm
        )?;
        writeln!(out, "ELEMENTS: {}", head.len)?;

        while idx < records.len()
            && records[idx].algorithm == head.algorithm
            && records[idx].len == head.len
        {
            print_case(out, &records[idx])?;
            idx += 1;
        }
    }
    Ok(())
}

fn print_case(out: &mut dyn Write, m: &Measurement) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "======")?;
    writeln!(out, "CASE: {}", m.case)?;
    writeln!(
        out,
        "1. Computation time ({}): {:.6} s",
        Scenario::SortOnly.label(),
        m.sort_only.as_secs_f64()
    )?;
    if let Some(total) = m.scenario_total {
        writeln!(
            out,
            "2. Computation time ({}): {:.6} s",
            m.scenario.label(),
            total.as_secs_f64()
        )?;
    }
    writeln!(
        out,
        "Estimated auxiliary memory: {} bytes",
        m.estimated_aux_bytes
    )?;
    match m.peak_rss_bytes {
        Some(bytes) => writeln!(out, "Peak memory consumption: {} KB", bytes / 1024)?,
        None => writeln!(out, "Peak memory consumption: unavailable")?,
    }
    writeln!(out, "======")
}

/// Writes the structured record stream: the [`CSV_HEADER`] line followed by
/// one row per measurement, sort-only seconds at nanosecond precision.
pub fn write_csv(out: &mut dyn Write, records: &[Measurement]) -> io::Result<()> {
    writeln!(out, "{CSV_HEADER}")?;
    for m in records {
        writeln!(
            out,
            "{},{},{},{:.9},{}",
            m.algorithm.key(),
            m.case.name(),
            m.len,
            m.sort_only.as_secs_f64(),
            m.estimated_aux_bytes
        )?;
    }
    Ok(())
}

/// Writes the CSV record stream to a file.
pub fn write_csv_file(path: &Path, records: &[Measurement]) -> Result<(), BenchError> {
    let wrap = |source: io::Error| BenchError::WriteOutput {
        path: path.to_path_buf(),
        source,
    };

    let file = fs::File::create(path).map_err(wrap)?;
    let mut out = BufWriter::new(file);
    write_csv(&mut out, records).map_err(wrap)?;
    out.flush().map_err(wrap)
}
