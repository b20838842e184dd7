//! Command-line front end for the sortbench harness.

use std::error::Error;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sortbench::dataset;
use sortbench::dist::rng_for;
use sortbench::prelude::*;
use sortbench::report;

#[derive(Parser)]
#[command(name = "sortbench", version, about = "Benchmark in-memory integer sorting algorithms")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sort an input file with one or more algorithms and report timings
    Run {
        /// Algorithm keys (quick, merge, heap, counting, hybrid) or `all`
        #[arg(required = true)]
        algorithms: Vec<String>,

        /// Input file of whitespace-separated integers
        #[arg(short, long)]
        input: PathBuf,

        /// Output sink: `stdout` or a file path
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Sweep the benchmark matrix and emit one record per cell
    Bench {
        /// Fixed element count instead of the default size ladder
        #[arg(long)]
        size: Option<usize>,

        /// Write CSV records to this path
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Seed the random distribution for a reproducible sweep
        #[arg(long)]
        seed: Option<u64>,

        /// Directory the generated distribution files are written into
        #[arg(long, default_value = "bench-data")]
        data_dir: PathBuf,
    },
    /// Generate a random input file with both signs guaranteed present
    Generate {
        /// Number of elements to generate
        count: usize,

        /// Minimum value (must be negative)
        #[arg(long, default_value_t = -1_000_000, allow_hyphen_values = true)]
        min: i64,

        /// Maximum value (must be positive)
        #[arg(long, default_value_t = 1_000_000, allow_hyphen_values = true)]
        max: i64,

        /// Optional random seed
        #[arg(long)]
        seed: Option<u64>,

        /// Output path
        #[arg(short, long, default_value = "in.txt")]
        output: PathBuf,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sortbench=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    match execute(Cli::parse().command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            let mut source = err.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

fn execute(command: Commands) -> Result<(), BenchError> {
    match command {
        Commands::Run {
            algorithms,
            input,
            output,
        } => run_command(&algorithms, &input, output.as_deref()),
        Commands::Bench {
            size,
            csv,
            seed,
            data_dir,
        } => bench_command(size, csv, seed, data_dir),
        Commands::Generate {
            count,
            min,
            max,
            seed,
            output,
        } => generate_command(count, min, max, seed, &output),
    }
}

/// Resolves algorithm keys, deduplicating and preserving report order; the
/// sentinel `all` selects every algorithm.
fn select_algorithms(keys: &[String]) -> Result<Vec<Algorithm>, BenchError> {
    let mut selected = Vec::new();
    for key in keys {
        if key == "all" {
            for algorithm in Algorithm::ALL {
                if !selected.contains(&algorithm) {
                    selected.push(algorithm);
                }
            }
            continue;
        }
        let algorithm =
            Algorithm::from_key(key).ok_or_else(|| BenchError::UnknownAlgorithm(key.clone()))?;
        if !selected.contains(&algorithm) {
            selected.push(algorithm);
        }
    }
    if selected.is_empty() {
        return Err(BenchError::EmptySelection);
    }
    Ok(selected)
}

fn run_command(
    keys: &[String],
    input: &std::path::Path,
    output: Option<&str>,
) -> Result<(), BenchError> {
    let algorithms = select_algorithms(keys)?;
    let values = dataset::read_values(input)?;

    // The three cases are derived from the one input file: its own order
    // stands in for the random case, the other two are sorted clones.
    let mut ascending = values.clone();
    ascending.sort_unstable();
    let descending: Vec<i64> = ascending.iter().rev().copied().collect();
    let cases = [
        (Distribution::Random, &values),
        (Distribution::Ascending, &ascending),
        (Distribution::Descending, &descending),
    ];

    let mut persist = match output {
        Some(target) if target != "stdout" => {
            let path = PathBuf::from(target);
            let file = fs::File::create(&path).map_err(|source| BenchError::WriteOutput {
                path: path.clone(),
                source,
            })?;
            Some((path, BufWriter::new(file)))
        }
        _ => None,
    };
    let stream_to_stdout = output == Some("stdout");

    let mut records = Vec::new();
    for algorithm in algorithms {
        for (case, base) in cases {
            let measurement = if stream_to_stdout {
                let stdout = io::stdout();
                let mut lock = stdout.lock();
                run_cell(algorithm, case, base, ScenarioSink::Stream(&mut lock))?
            } else if let Some((_, writer)) = persist.as_mut() {
                run_cell(algorithm, case, base, ScenarioSink::Persist(writer))?
            } else {
                run_cell(algorithm, case, base, ScenarioSink::SortOnly)?
            };
            records.push(measurement);
        }
    }

    if let Some((path, mut writer)) = persist {
        writer.flush().map_err(|source| BenchError::WriteOutput {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), "wrote sorted output");
    }

    let stdout = io::stdout();
    report::print_blocks(&mut stdout.lock(), &records).map_err(|source| BenchError::Emit {
        scenario: "report",
        source,
    })
}

fn bench_command(
    size: Option<usize>,
    csv: Option<PathBuf>,
    seed: Option<u64>,
    data_dir: PathBuf,
) -> Result<(), BenchError> {
    fs::create_dir_all(&data_dir).map_err(|source| BenchError::WriteOutput {
        path: data_dir.clone(),
        source,
    })?;

    let config = SweepConfig {
        sizes: match size {
            Some(size) => vec![size],
            None => SweepConfig::SIZE_LADDER.to_vec(),
        },
        algorithms: Algorithm::ALL.to_vec(),
        seed,
        data_dir,
    };

    let records = run_sweep(&config)?;

    let stdout = io::stdout();
    report::print_blocks(&mut stdout.lock(), &records).map_err(|source| BenchError::Emit {
        scenario: "report",
        source,
    })?;

    if let Some(path) = csv {
        report::write_csv_file(&path, &records)?;
        info!(path = %path.display(), records = records.len(), "wrote benchmark records");
    }
    Ok(())
}

fn generate_command(
    count: usize,
    min: i64,
    max: i64,
    seed: Option<u64>,
    output: &std::path::Path,
) -> Result<(), BenchError> {
    let mut rng = rng_for(seed);
    let values = dataset::synthesize_values(count, min, max, &mut rng)?;
    dataset::write_values(output, &values)?;
    info!(path = %output.display(), count, "generated input file");
    Ok(())
}
