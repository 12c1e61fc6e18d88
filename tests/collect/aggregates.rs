//! Integration tests for aggregates and combinatorial helpers

use sundry::collect::{aggregate, combine};

#[test]
fn empty_average_is_zero() {
    assert_eq!(aggregate::average::<i32>(&[]), 0);
    assert!(aggregate::average::<f64>(&[]).abs() < f64::EPSILON);
}

#[test]
fn averages_by_field() {
    let scores = [("ann", 90.0), ("bob", 70.0)];
    let mean = aggregate::average_by(&scores, |_, s| s.1);
    assert!((mean - 80.0_f64).abs() < f64::EPSILON);
}

#[test]
fn extremes_seed_from_first_element() {
    let temps = [-12.5, -3.0, -20.25];
    assert_eq!(aggregate::max(&temps), Some(-3.0));
    assert_eq!(aggregate::min(&temps), Some(-20.25));
    assert_eq!(aggregate::max::<i8>(&[]), None);
}

#[test]
fn sum_by_projection() {
    let orders = [(1, 250_u64), (2, 100)];
    assert_eq!(aggregate::sum_by(&orders, |_, o| o.1), 350);
}

#[test]
fn cross_join_rows() {
    let sizes = [vec!["S"], vec!["M"]];
    let finishes = [vec!["red", "matte"], vec!["blue", "gloss"]];
    let rows = combine::cross_join(&sizes, &finishes);
    assert_eq!(
        rows,
        vec![
            vec!["S", "red", "matte"],
            vec!["S", "blue", "gloss"],
            vec!["M", "red", "matte"],
            vec!["M", "blue", "gloss"],
        ]
    );
    assert!(rows.iter().all(|row| row.len() == 3));
}

#[test]
fn zip_pairs_mixed_types() {
    assert_eq!(
        combine::zip_pairs(&["a", "b", "c"], &[1, 2]),
        vec![("a", 1), ("b", 2)]
    );
}
