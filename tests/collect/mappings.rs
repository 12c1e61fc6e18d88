//! Integration tests for mapping helpers

use std::collections::HashMap;

use sundry::collect::{self, combine, map};
use sundry::foundation::ErrorKind;

fn stock() -> HashMap<String, u32> {
    HashMap::from([
        ("apple".to_string(), 3),
        ("pear".to_string(), 0),
        ("plum".to_string(), 7),
    ])
}

#[test]
fn entries_line_up() {
    let m = stock();
    let (keys, values) = map::entries(&m);
    for (k, v) in keys.iter().zip(values) {
        assert_eq!(m[k], v);
    }
}

#[test]
fn filter_then_project() {
    let in_stock = map::filter(&stock(), |_, n| *n > 0);
    let names = map::only(&in_stock, &["apple".to_string(), "pear".to_string()]);
    assert_eq!(names, HashMap::from([("apple".to_string(), 3)]));
}

#[test]
fn merge_prefers_later_maps() {
    let base = stock();
    let update = HashMap::from([("pear".to_string(), 5)]);
    let merged = map::merge(&[&base, &update]);
    assert_eq!(merged["pear"], 5);
    assert_eq!(merged["plum"], 7);
}

#[test]
fn flip_refuses_to_lose_keys() {
    let colors = HashMap::from([("sky", "blue"), ("sea", "blue")]);
    let err = map::flip(&colors).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::DuplicateKey(_)));
    assert!(err.payload().unwrap().contains("keys"));

    let unique = HashMap::from([("sky", "blue"), ("grass", "green")]);
    let flipped = map::flip(&unique).unwrap();
    assert_eq!(flipped["green"], "grass");
}

#[test]
fn key_by_and_group_by_agree_on_keys() {
    let words = ["ant", "bee", "cat", "bat"];
    let groups = map::group_by(&words, |_, w| w.len());
    let keyed = map::key_by(&words, |_, w| w.len());
    assert_eq!(groups[&3], words.to_vec());
    assert_eq!(keyed[&3], "bat");
}

#[test]
fn combine_keys_and_values() {
    let m = combine::combine(&["x", "y"], &[1, 2, 3]);
    assert_eq!(m, HashMap::from([("x", 1), ("y", 2)]));
}

#[test]
fn mutators_change_the_map_in_place() {
    let mut m = stock();
    assert!(map::add(&mut m, "fig".to_string(), 1));
    assert!(!map::add(&mut m, "fig".to_string(), 9));
    assert_eq!(map::pull(&mut m, &"apple".to_string()), Some(3));
    map::forget(&mut m, &["pear".to_string()]);
    assert!(map::has(&m, &["fig".to_string(), "plum".to_string()]));
    assert!(!map::has(&m, &["pear".to_string()]));
}

#[test]
fn emptiness_follows_removals() {
    let mut m = HashMap::from([("only".to_string(), 1u32)]);
    assert!(collect::is_not_empty(&m));
    assert_eq!(map::pull(&mut m, &"only".to_string()), Some(1));
    assert!(collect::is_empty(&m));
}
