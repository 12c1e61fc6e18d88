//! Documented end-to-end scenarios

use std::collections::HashMap;

use sundry::collect::{combine, map, seq};

#[test]
fn chunk_into_threes_and_fours() {
    let nine: Vec<i32> = (1..=9).collect();
    assert_eq!(
        seq::chunk(&nine, 3).unwrap(),
        vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]
    );
    assert_eq!(
        seq::chunk(&nine, 4).unwrap(),
        vec![vec![1, 2, 3, 4], vec![5, 6, 7, 8], vec![9]]
    );
}

#[test]
fn diff_words() {
    assert_eq!(
        seq::diff(&["one", "two", "three", "four"], &["one", "two2", "three3", "four"]),
        vec!["two", "three"]
    );
}

#[test]
fn group_by_remainder() {
    let seven: Vec<i32> = (1..=7).collect();
    let groups = map::group_by(&seven, |_, x| x % 3);
    assert_eq!(
        groups,
        HashMap::from([(0, vec![3, 6]), (1, vec![1, 4, 7]), (2, vec![2, 5])])
    );
}

#[test]
fn zip_truncates_to_shortest() {
    let expected = vec![vec![1, 4], vec![2, 5], vec![3, 6]];
    assert_eq!(combine::zip(&[1, 2, 3], &[4, 5, 6]), expected);
    assert_eq!(combine::zip(&[1, 2, 3, 7, 8], &[4, 5, 6]), expected);
}

#[test]
fn splice_middle() {
    let (removed, remainder) = seq::splice(&["a", "b", "c", "d", "e"], 2, 2);
    assert_eq!(removed, vec!["c", "d"]);
    assert_eq!(remainder, vec!["a", "b", "e"]);
}
