//! Benchmarks run on a small electron source written to disk

use phasebench_bench::{Benchmark, ElectronSourceBenchmark, StatisticsBenchmark};
use phasebench_phasespace::{PhaseSpace, PhaseSpaceReader};
use rstest::{fixture, rstest};

#[fixture]
fn reader() -> PhaseSpaceReader {
    PhaseSpaceReader::new()
}

#[fixture]
fn sim(reader: PhaseSpaceReader) -> PhaseSpace {
    reader
        .read_multithreaded_csv("./data/source_t*.csv", 2)
        .unwrap()
}

#[fixture]
fn reference(reader: PhaseSpaceReader) -> PhaseSpace {
    reader.read_text_columns("./data/input.dat").unwrap()
}

fn electron_source(nevents: usize, bidirectional: bool) -> ElectronSourceBenchmark {
    let mut benchmark = ElectronSourceBenchmark::new();
    benchmark.set_nevents(nevents);
    benchmark.set_bidirectional(bidirectional);
    benchmark.quiet();
    benchmark
}

#[rstest]
#[case(true, 18)]
#[case(false, 10)]
fn electron_source_is_clean(
    sim: PhaseSpace,
    reference: PhaseSpace,
    #[case] bidirectional: bool,
    #[case] n_checks: usize,
) {
    let test = electron_source(4, bidirectional)
        .run(&sim, &reference)
        .unwrap();

    assert!(test.is_clean(), "{}", test.report());
    assert_eq!(test.checks().len(), n_checks);
    assert!(test
        .report()
        .to_string()
        .contains("No error occurred (atol=0.01, rtol=1e-12)."));
}

#[rstest]
fn electron_source_with_wrong_event_count(sim: PhaseSpace, reference: PhaseSpace) {
    // twice the events halves the expected weight of every particle
    let test = electron_source(8, true).run(&sim, &reference).unwrap();

    let failed: Vec<_> = test
        .checks()
        .iter()
        .filter(|c| !c.passed())
        .map(|c| (c.label(), c.failures()))
        .collect();

    assert_eq!(
        failed,
        [
            ("Number of events", 1),
            ("Weight normalization (test in ref)", 4),
            ("Weight normalization (ref in test)", 4),
        ]
    );

    let report = test.report().to_string();
    assert!(report.contains("Error(s) occurred :"));
    assert!(report.contains(
        "\tNumber of events :\n\t  value  4.0000E+00 is not equal to reference  8.0000E+00"
    ));
    assert_eq!(report.matches("\t...\n").count(), 2);
}

#[rstest]
fn electron_source_json_report(sim: PhaseSpace, reference: PhaseSpace) {
    let test = electron_source(5, false).run(&sim, &reference).unwrap();
    let json = test.report().to_json().unwrap();

    assert!(json.contains("\"label\": \"Number of events\""));
    assert!(json.contains("\"kind\": \"mismatch\""));
    assert!(json.contains("\"kind\": \"absent\""));
}

#[rstest]
#[case(4, true)]
#[case(5, false)]
fn statistics(
    sim: PhaseSpace,
    reference: PhaseSpace,
    #[case] nevents: usize,
    #[case] clean: bool,
) {
    let mut benchmark = StatisticsBenchmark::new();
    benchmark.set_nevents(nevents);
    benchmark.quiet();

    let test = benchmark.run(&sim, &reference).unwrap();
    assert_eq!(test.is_clean(), clean);
}
