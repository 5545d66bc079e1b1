//! Integration tests for the phase-space readers

use phasebench_phasespace::{
    read_multithreaded_csv, read_text_columns, Error, PhaseSpace, PhaseSpaceReader, Shape,
    Species,
};
use rstest::{fixture, rstest};

#[fixture]
fn sim() -> PhaseSpace {
    read_multithreaded_csv(
        "./data/electron_t*.csv",
        2,
        Shape::WithTime,
        Species::Electron,
    )
    .unwrap()
}

#[fixture]
fn reference() -> PhaseSpace {
    read_text_columns("./data/input.dat", Shape::WithTime, Species::Electron).unwrap()
}

#[test]
fn single_thread_is_deinterleaved() {
    let ps = read_multithreaded_csv(
        "./data/single_thread_t*.csv",
        1,
        Shape::WithoutTime,
        Species::Electron,
    )
    .unwrap();

    assert_eq!(ps.w, vec![1.0, 8.0]);
    assert_eq!(ps.x, vec![2.0, 9.0]);
    assert_eq!(ps.y, vec![3.0, 10.0]);
    assert_eq!(ps.z, vec![4.0, 11.0]);
    assert_eq!(ps.px, vec![5.0, 12.0]);
    assert_eq!(ps.py, vec![6.0, 13.0]);
    assert_eq!(ps.pz, vec![7.0, 14.0]);
    assert_eq!(ps.t, None);
}

#[rstest]
fn threads_are_concatenated_in_order(sim: PhaseSpace) {
    assert_eq!(sim.len(), 3);
    assert_eq!(sim.w, vec![1.0, 1.0, 2.0]);
    assert_eq!(sim.px, vec![10.0, 5.0, 20.0]);
    assert_eq!(sim.y, vec![0.5, 0.0, 0.15]);
    assert_eq!(sim.t, Some(vec![166.8, 167.3, 166.9]));
    assert_eq!(sim.species, Species::Electron);
}

#[rstest]
fn pattern_without_wildcard(sim: PhaseSpace) {
    let mut reader = PhaseSpaceReader::new();
    reader.set_species(Species::Electron);
    let other = reader.read_multithreaded_csv("./data/electron_t.csv", 2).unwrap();
    assert_eq!(other, sim);
}

#[rstest]
fn text_columns_skip_comments_and_blanks(reference: PhaseSpace) {
    assert_eq!(reference.len(), 3);
    assert_eq!(reference.w, vec![1.0, 1.0, 2.0]);
    assert_eq!(reference.py, vec![0.1, 0.0, 0.06]);
    assert_eq!(reference.t, Some(vec![0.0; 3]));
    assert_eq!(reference.total_weight(), 4.0);
}

#[test]
fn text_columns_without_time() {
    let ps = read_text_columns("./data/no_time.dat", Shape::WithoutTime, Species::Gamma).unwrap();
    assert_eq!(ps.len(), 2);
    assert_eq!(ps.shape(), Shape::WithoutTime);
    assert_eq!(ps.species, Species::Gamma);
}

#[rstest]
#[case("./data/no_time.dat", Shape::WithTime, 8, 7)] // row too short
#[case("./data/input.dat", Shape::WithoutTime, 7, 8)] // row too long
fn text_columns_wrong_shape(
    #[case] path: &str,
    #[case] shape: Shape,
    #[case] expected_count: usize,
    #[case] found_count: usize,
) {
    let result = read_text_columns(path, shape, Species::Electron);
    match result {
        Err(Error::UnexpectedFieldCount {
            expected, found, ..
        }) => {
            assert_eq!(expected, expected_count);
            assert_eq!(found, found_count);
        }
        other => panic!("unexpected result {other:?}"),
    }
}

#[test]
fn csv_wrong_field_count() {
    let result = read_multithreaded_csv(
        "./data/bad_count_t*.csv",
        1,
        Shape::WithTime,
        Species::Electron,
    );
    assert!(matches!(
        result,
        Err(Error::UnexpectedFieldCount {
            expected: 8,
            found: 6,
            ..
        })
    ));
}

#[test]
fn text_columns_bad_token() {
    let result = read_text_columns("./data/bad_token.dat", Shape::WithTime, Species::Electron);
    match result {
        Err(Error::ParseError { line, token, .. }) => {
            assert_eq!(line, 2);
            assert_eq!(token, "five");
        }
        other => panic!("unexpected result {other:?}"),
    }
}

#[rstest]
#[case(3)] // electron_t2.csv does not exist
#[case(10)]
fn missing_thread_file(#[case] threads: usize) {
    let result = read_multithreaded_csv(
        "./data/electron_t*.csv",
        threads,
        Shape::WithTime,
        Species::Electron,
    );
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn zero_threads() {
    let result = read_multithreaded_csv(
        "./data/electron_t*.csv",
        0,
        Shape::WithTime,
        Species::Electron,
    );
    assert!(matches!(result, Err(Error::InvalidThreadCount)));
}

#[rstest]
fn back_projected_origin(sim: PhaseSpace) {
    // straight line back to x = 0 along the momentum
    let origin_y: Vec<f64> = (0..sim.len())
        .map(|i| sim.y[i] - sim.x[i] * sim.py[i] / sim.px[i])
        .collect();

    assert!(origin_y.iter().all(|y| y.abs() < 1e-9));
}
