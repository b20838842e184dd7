use std::time::Instant;

use sortbench::dist::rng_for;
use sortbench::prelude::*;

#[test]
fn test_sort_1m() {
    let count = 1_000_000;
    let mut rng = rng_for(Some(1234));
    let base = Distribution::Random.generate(count, &mut rng);

    for algorithm in Algorithm::ALL {
        let mut data = base.clone();

        let start = Instant::now();
        algorithm.sort(&mut data).unwrap();
        let duration = start.elapsed();
        println!("{algorithm} sorted {count} elements in {duration:?}");

        assert_eq!(data.len(), count);
        assert!(data.is_sorted(), "{algorithm} failed at scale");
    }
}

#[test]
fn test_sweep_smallest_ladder_rungs() {
    // The two smallest ladder rungs keep this fast while still exercising
    // the whole matrix path end to end.
    let dir = tempfile::tempdir().unwrap();
    let config = SweepConfig {
        sizes: vec![100, 1_000],
        algorithms: Algorithm::ALL.to_vec(),
        seed: Some(5),
        data_dir: dir.path().to_path_buf(),
    };

    let records = run_sweep(&config).unwrap();
    assert_eq!(records.len(), 30);
}

#[test]
#[ignore]
fn test_sort_10m() {
    // Slow in debug builds; run with --ignored for a deeper soak.
    let count = 10_000_000;
    let mut rng = rng_for(Some(99));

    for case in Distribution::ALL {
        let base = case.generate(count, &mut rng);
        for algorithm in Algorithm::ALL {
            let mut data = base.clone();
            algorithm.sort(&mut data).unwrap();
            assert!(data.is_sorted(), "{algorithm} failed on {case} at 10M");
        }
    }
}
