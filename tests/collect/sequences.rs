//! Integration tests for sequence helpers

use std::collections::HashMap;

use sundry::collect::{random, seq};
use sundry::foundation::{ErrorKind, is_empty, is_not_empty};

// =============================================================================
// Iteration
// =============================================================================

#[test]
fn map_filter_reduce_pipeline() {
    let prices = [120, 45, 300, 80];
    let discounted = seq::map(&prices, |_, p| p * 9 / 10);
    let affordable = seq::filter(&discounted, |_, p| *p < 100);
    let total = seq::reduce(&affordable, 0, |acc, _, p| acc + p);
    assert_eq!(affordable, vec![40, 72]);
    assert_eq!(total, 112);
}

#[test]
fn callbacks_see_indices() {
    let letters = ["a", "b", "c"];
    let odd_positions = seq::filter(&letters, |i, _| i % 2 == 1);
    assert_eq!(odd_positions, vec!["b"]);
    let keyed = seq::map_with_keys(&letters, |i, s| (*s, i));
    assert_eq!(keyed, HashMap::from([("a", 0), ("b", 1), ("c", 2)]));
}

#[test]
fn times_is_one_based() {
    assert_eq!(seq::times(3, |i| i), vec![1, 2, 3]);
    assert!(seq::times(0, |i| i).is_empty());
}

// =============================================================================
// Search
// =============================================================================

#[test]
fn first_distinguishes_missing_from_zero() {
    let values = [0, 0, 1];
    assert_eq!(seq::first(&values, |_, _| true), Some(&0));
    assert_eq!(seq::first(&values, |_, v| *v > 5), None);
    assert_eq!(seq::search(&values, &1), Some(2));
    assert_eq!(seq::search(&values, &9), None);
}

#[test]
fn membership() {
    assert!(seq::contains(&["x", "y"], &"y"));
    assert!(seq::does_not_contain(&["x", "y"], &"z"));
    let rows = [HashMap::from([("id", 1)]), HashMap::from([("id", 2)])];
    assert!(seq::contains_entry(&rows, &"id", &2));
    assert!(!seq::contains_entry(&rows, &"id", &3));
    assert_eq!(seq::pluck(&rows, &"id"), vec![1, 2]);
}

#[test]
fn emptiness_checks() {
    assert!(is_empty(&Vec::<i32>::new()));
    assert!(is_not_empty(&vec![1]));
}

// =============================================================================
// Ordering
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
struct Task {
    name: &'static str,
    priority: u8,
}

fn task(name: &'static str, priority: u8) -> Task {
    Task { name, priority }
}

#[test]
fn sort_by_never_drops_equal_keys() {
    let tasks = vec![task("a", 2), task("b", 1), task("c", 2), task("d", 1)];
    let sorted = seq::sort_by(&tasks, |_, t| t.priority);
    let names: Vec<_> = sorted.iter().map(|t| t.name).collect();
    assert_eq!(names, vec!["b", "d", "a", "c"]);

    let sorted = seq::sort_by_desc(&tasks, |_, t| t.priority);
    let names: Vec<_> = sorted.iter().map(|t| t.name).collect();
    assert_eq!(names, vec!["a", "c", "b", "d"]);
}

#[test]
fn sort_by_string_key() {
    let tasks = vec![task("zed", 1), task("amy", 1)];
    let sorted = seq::sort_by(&tasks, |_, t| t.name);
    assert_eq!(sorted[0].name, "amy");
}

#[test]
fn sort_does_not_touch_input() {
    let input = vec![3, 1, 2];
    let sorted = seq::sort(&input);
    assert_eq!(input, vec![3, 1, 2]);
    assert_eq!(sorted, vec![1, 2, 3]);
}

// =============================================================================
// Slicing
// =============================================================================

#[test]
fn zero_sizes_are_rejected() {
    for err in [
        seq::chunk(&[1], 0).unwrap_err(),
        seq::split(&[1], 0).unwrap_err(),
        seq::sliding(&[1], 0, 1).unwrap_err(),
        seq::nth(&[1], 0).unwrap_err(),
    ] {
        assert!(matches!(err.kind, ErrorKind::InvalidParam(_)));
    }
}

#[test]
fn pagination() {
    let items: Vec<i32> = (1..=10).collect();
    assert_eq!(seq::for_page(&items, 1, 4), vec![1, 2, 3, 4]);
    assert_eq!(seq::for_page(&items, 3, 4), vec![9, 10]);
    assert!(seq::for_page(&items, 4, 4).is_empty());
}

#[test]
fn slice_and_skip() {
    let items = ["a", "b", "c", "d"];
    assert_eq!(seq::slice(&items, 1, 2), vec!["b", "c"]);
    assert_eq!(seq::slice(&items, -1, 5), vec!["d"]);
    assert_eq!(seq::skip(&items, 2), vec!["c", "d"]);
}

#[test]
fn unique_keeps_last_of_each_key() {
    let events = [("login", 1), ("click", 2), ("login", 3)];
    let latest = seq::unique(&events, |_, e| e.0);
    assert_eq!(latest, vec![("click", 2), ("login", 3)]);
}

// =============================================================================
// Randomization
// =============================================================================

#[test]
fn seeded_shuffle_is_reproducible_and_complete() {
    let mut a: Vec<u32> = (0..16).collect();
    let mut b = a.clone();
    random::shuffle_seeded(&mut a, 2024);
    random::shuffle_seeded(&mut b, 2024);
    assert_eq!(a, b);
    let mut sorted = a.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, (0..16).collect::<Vec<_>>());
}

#[test]
fn random_sample_with_caller_rng() {
    use rand::SeedableRng;
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(5);
    let mut deck: Vec<u8> = (1..=52).collect();
    let hand = random::random(&mut deck, 5, &mut rng);
    assert_eq!(hand.len(), 5);
    assert_eq!(hand, deck[..5].to_vec());
}
