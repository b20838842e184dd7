use std::fs;
use std::path::Path;

use sortbench::dataset;
use sortbench::dist::rng_for;
use sortbench::prelude::*;
use sortbench::report;

#[test]
fn test_sort_only_cell() {
    let base = vec![5, 3, 3, 1, -2];
    let m = run_cell(
        Algorithm::Quick,
        Distribution::Random,
        &base,
        ScenarioSink::SortOnly,
    )
    .unwrap();

    assert_eq!(m.algorithm, Algorithm::Quick);
    assert_eq!(m.case, Distribution::Random);
    assert_eq!(m.len, 5);
    assert_eq!(m.scenario, Scenario::SortOnly);
    assert!(m.scenario_total.is_none());
    // Base sequence is cloned per scenario, never mutated.
    assert_eq!(base, vec![5, 3, 3, 1, -2]);
}

#[test]
fn test_stream_cell_emits_sorted_lines() {
    let base = vec![3, 1, 2];
    let mut sink = Vec::new();
    let m = run_cell(
        Algorithm::Merge,
        Distribution::Random,
        &base,
        ScenarioSink::Stream(&mut sink),
    )
    .unwrap();

    assert_eq!(String::from_utf8(sink).unwrap(), "1\n2\n3\n");
    assert!(m.scenario_total.is_some());
    assert_eq!(m.scenario, Scenario::SortPlusStream);
}

#[test]
fn test_persist_cell_writes_annotated_block() {
    let base = vec![-5, 0, -5, 3];
    let mut sink = Vec::new();
    run_cell(
        Algorithm::Counting,
        Distribution::Ascending,
        &base,
        ScenarioSink::Persist(&mut sink),
    )
    .unwrap();

    let text = String::from_utf8(sink).unwrap();
    assert_eq!(
        text,
        "ALGORITHM: CountingSort\nCASE: ascending\n-5\n-5\n0\n3\n\n"
    );
}

#[test]
fn test_scenario_total_covers_sort_plus_emission() {
    // Large enough that emission cost dominates timer jitter.
    let mut rng = rng_for(Some(99));
    let base = Distribution::Random.generate(100_000, &mut rng);

    let mut sink = Vec::new();
    let m = run_cell(
        Algorithm::Hybrid,
        Distribution::Random,
        &base,
        ScenarioSink::Stream(&mut sink),
    )
    .unwrap();

    assert!(m.scenario_total.unwrap() >= m.sort_only);
}

#[test]
fn test_sweep_produces_one_record_per_cell() {
    let dir = tempfile::tempdir().unwrap();
    let config = SweepConfig {
        sizes: vec![100, 1_000],
        algorithms: Algorithm::ALL.to_vec(),
        seed: Some(42),
        data_dir: dir.path().to_path_buf(),
    };

    let records = run_sweep(&config).unwrap();

    // 2 sizes x 3 distributions x 5 algorithms
    assert_eq!(records.len(), 30);
    for m in &records {
        assert!(m.sort_only.as_secs_f64() >= 0.0);
        assert!(m.scenario_total.is_none());
    }

    // The distribution files were regenerated for each size.
    for size in [100usize, 1_000] {
        for case in Distribution::ALL {
            let path = dir.path().join(format!("{}_{}.txt", case.name(), size));
            let values = dataset::read_values(&path).unwrap();
            assert_eq!(values.len(), size, "bad file {}", path.display());
        }
    }
}

#[test]
fn test_sweep_is_reproducible_with_fixed_seed() {
    let run = |dir: &Path| {
        let config = SweepConfig {
            sizes: vec![100],
            algorithms: vec![Algorithm::Quick],
            seed: Some(7),
            data_dir: dir.to_path_buf(),
        };
        run_sweep(&config).unwrap();
        fs::read_to_string(dir.join("random_100.txt")).unwrap()
    };

    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    assert_eq!(run(first.path()), run(second.path()));
}

#[test]
fn test_csv_record_stream() {
    let dir = tempfile::tempdir().unwrap();
    let config = SweepConfig {
        sizes: vec![100],
        algorithms: Algorithm::ALL.to_vec(),
        seed: Some(1),
        data_dir: dir.path().to_path_buf(),
    };
    let records = run_sweep(&config).unwrap();

    let mut out = Vec::new();
    report::write_csv(&mut out, &records).unwrap();
    let text = String::from_utf8(out).unwrap();
    let mut lines = text.lines();

    assert_eq!(lines.next(), Some(report::CSV_HEADER));

    let mut rows = 0;
    for line in lines {
        let fields: Vec<&str> = line.split(',').collect();
        assert_eq!(fields.len(), 5, "bad row: {line}");
        assert!(Algorithm::from_key(fields[0]).is_some());
        assert_eq!(fields[2].parse::<usize>().unwrap(), 100);
        assert!(fields[3].parse::<f64>().unwrap() >= 0.0);
        fields[4].parse::<u64>().unwrap();
        rows += 1;
    }
    assert_eq!(rows, 15);
}

#[test]
fn test_read_values_skips_malformed_tokens() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("in.txt");
    fs::write(&path, "5 3\nxyz -7\n 2.5 11\t").unwrap();

    let values = dataset::read_values(&path).unwrap();
    assert_eq!(values, vec![5, 3, -7, 11]);
}

#[test]
fn test_read_values_rejects_empty_input() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("in.txt");
    fs::write(&path, "not numbers at all\n").unwrap();

    let err = dataset::read_values(&path).unwrap_err();
    assert!(matches!(err, BenchError::EmptyInput { .. }));

    let err = dataset::read_values(&dir.path().join("missing.txt")).unwrap_err();
    assert!(matches!(err, BenchError::ReadInput { .. }));
}

#[test]
fn test_write_then_read_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");
    let values = vec![-3, 0, 17, i64::MIN, i64::MAX];

    dataset::write_values(&path, &values).unwrap();
    assert_eq!(dataset::read_values(&path).unwrap(), values);
}

#[test]
fn test_synthesize_guarantees_both_signs() {
    // A narrow positive-heavy draw would rarely produce a negative value by
    // chance; the generator must force one in.
    for seed in 0..20 {
        let mut rng = rng_for(Some(seed));
        let values = dataset::synthesize_values(10, -1, 1_000_000, &mut rng).unwrap();

        assert_eq!(values.len(), 10);
        assert!(values.iter().any(|&v| v < 0), "seed {seed}: no negative");
        assert!(values.iter().any(|&v| v > 0), "seed {seed}: no positive");
        assert!(values.iter().all(|&v| (-1..=1_000_000).contains(&v)));
    }
}

#[test]
fn test_synthesize_rejects_bad_parameters() {
    let mut rng = rng_for(Some(0));

    for (count, min, max) in [(0usize, -10i64, 10i64), (5, 10, -10), (5, 1, 10), (5, -10, 0)] {
        let err = dataset::synthesize_values(count, min, max, &mut rng).unwrap_err();
        assert!(matches!(err, BenchError::Generate(_)), "{count} {min} {max}");
    }
}

#[test]
fn test_validator_flags_unsorted_result() {
    use sortbench::runner::validate_sorted;

    assert!(validate_sorted(Algorithm::Quick, Distribution::Random, &[1, 2, 3]).is_ok());
    assert!(validate_sorted(Algorithm::Quick, Distribution::Random, &[]).is_ok());

    let err = validate_sorted(Algorithm::Quick, Distribution::Random, &[2, 1]).unwrap_err();
    assert!(matches!(err, BenchError::Validation { .. }));
}

#[test]
fn test_report_blocks_group_cases_per_algorithm() {
    let base = vec![4, 2, 9, -1];
    let records: Vec<Measurement> = [
        Distribution::Random,
        Distribution::Ascending,
        Distribution::Descending,
    ]
    .into_iter()
    .map(|case| run_cell(Algorithm::Heap, case, &base, ScenarioSink::SortOnly).unwrap())
    .collect();

    let mut out = Vec::new();
    report::print_blocks(&mut out, &records).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(
        text.matches("=============== ALGORITHM: HeapSort ===============")
            .count(),
        1
    );
    assert_eq!(text.matches("ELEMENTS: 4").count(), 1);
    for case in ["random", "ascending", "descending"] {
        assert!(text.contains(&format!("CASE: {case}")), "missing {case}");
    }
    assert!(text.contains("1. Computation time (sorting only):"));
}
