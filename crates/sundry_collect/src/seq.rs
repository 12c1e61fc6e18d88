//! Operations over ordered sequences.
//!
//! Inputs are borrowed slices and outputs are freshly allocated vectors, so
//! the caller's data is never modified. Callbacks receive the element index
//! alongside a reference to the element.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use sundry_foundation::{Error, Result, Sortable};

/// Copies `seq[start..start + length]`, clamped to the end of the slice.
pub(crate) fn take_range<T: Clone>(seq: &[T], start: usize, length: usize) -> Vec<T> {
    if start >= seq.len() {
        return Vec::new();
    }
    let end = start.saturating_add(length).min(seq.len());
    seq[start..end].to_vec()
}

/// Resolves a possibly negative offset against `len`.
///
/// Returns `None` when the offset points before the start or past the end.
fn resolve_offset(offset: isize, len: usize) -> Option<usize> {
    let magnitude = offset.unsigned_abs();
    if offset >= 0 {
        (magnitude <= len).then_some(magnitude)
    } else {
        len.checked_sub(magnitude)
    }
}

// =============================================================================
// Mapping, Filtering, Iteration
// =============================================================================

/// Applies `f` to every element, preserving order and length.
pub fn map<T, S, F>(seq: &[T], mut f: F) -> Vec<S>
where
    F: FnMut(usize, &T) -> S,
{
    seq.iter().enumerate().map(|(i, item)| f(i, item)).collect()
}

/// Builds a mapping from the `(key, value)` pairs produced by `f`.
///
/// Later elements overwrite earlier ones that produce the same key.
pub fn map_with_keys<T, K, S, F>(seq: &[T], mut f: F) -> HashMap<K, S>
where
    K: Eq + Hash,
    F: FnMut(usize, &T) -> (K, S),
{
    seq.iter().enumerate().map(|(i, item)| f(i, item)).collect()
}

/// Keeps the elements for which `predicate` holds, in their original order.
pub fn filter<T, F>(seq: &[T], mut predicate: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(usize, &T) -> bool,
{
    seq.iter()
        .enumerate()
        .filter(|(i, item)| predicate(*i, item))
        .map(|(_, item)| item.clone())
        .collect()
}

/// Splits the sequence into the elements that pass and those that fail.
pub fn partition<T, F>(seq: &[T], mut predicate: F) -> (Vec<T>, Vec<T>)
where
    T: Clone,
    F: FnMut(usize, &T) -> bool,
{
    let mut pass = Vec::new();
    let mut fail = Vec::new();
    for (i, item) in seq.iter().enumerate() {
        if predicate(i, item) {
            pass.push(item.clone());
        } else {
            fail.push(item.clone());
        }
    }
    (pass, fail)
}

/// Visits elements in order until `visitor` returns `false`.
pub fn each<T, F>(seq: &[T], mut visitor: F)
where
    F: FnMut(usize, &T) -> bool,
{
    for (i, item) in seq.iter().enumerate() {
        if !visitor(i, item) {
            break;
        }
    }
}

/// Returns true if `predicate` holds for every element.
///
/// Stops at the first failure. An empty sequence satisfies any predicate.
pub fn every<T, F>(seq: &[T], mut predicate: F) -> bool
where
    F: FnMut(usize, &T) -> bool,
{
    seq.iter().enumerate().all(|(i, item)| predicate(i, item))
}

/// Folds the sequence left to right starting from `seed`.
pub fn reduce<T, S, F>(seq: &[T], seed: S, mut f: F) -> S
where
    F: FnMut(S, usize, &T) -> S,
{
    seq.iter()
        .enumerate()
        .fold(seed, |acc, (i, item)| f(acc, i, item))
}

/// Counts elements per key.
pub fn count_by<T, K, F>(seq: &[T], mut f: F) -> HashMap<K, usize>
where
    K: Eq + Hash,
    F: FnMut(usize, &T) -> K,
{
    let mut counts = HashMap::new();
    for (i, item) in seq.iter().enumerate() {
        *counts.entry(f(i, item)).or_insert(0) += 1;
    }
    counts
}

/// Renders every element with `f` and joins the results with `glue`.
pub fn implode<T, F>(seq: &[T], f: F, glue: &str) -> String
where
    F: FnMut(usize, &T) -> String,
{
    map(seq, f).join(glue)
}

/// Calls `f` with `1..=n` and collects the results.
pub fn times<S, F>(n: usize, f: F) -> Vec<S>
where
    F: FnMut(usize) -> S,
{
    (1..=n).map(f).collect()
}

/// Inclusive integer range. Empty when `from > to`.
#[must_use]
pub fn range(from: i64, to: i64) -> Vec<i64> {
    (from..=to).collect()
}

// =============================================================================
// Search & Membership
// =============================================================================

/// Returns true if the sequence holds `item`.
pub fn contains<T: PartialEq>(seq: &[T], item: &T) -> bool {
    seq.contains(item)
}

/// Returns true if the sequence does not hold `item`.
pub fn does_not_contain<T: PartialEq>(seq: &[T], item: &T) -> bool {
    !seq.contains(item)
}

/// Returns true if any mapping in `seq` maps `key` to `value`.
pub fn contains_entry<K, V>(seq: &[HashMap<K, V>], key: &K, value: &V) -> bool
where
    K: Eq + Hash,
    V: PartialEq,
{
    seq.iter().any(|m| m.get(key) == Some(value))
}

/// Returns true if no mapping in `seq` maps `key` to `value`.
pub fn does_not_contain_entry<K, V>(seq: &[HashMap<K, V>], key: &K, value: &V) -> bool
where
    K: Eq + Hash,
    V: PartialEq,
{
    !contains_entry(seq, key, value)
}

/// Position of the first element equal to `item`.
pub fn search<T: PartialEq>(seq: &[T], item: &T) -> Option<usize> {
    seq.iter().position(|candidate| candidate == item)
}

/// First element matching `predicate`.
pub fn first<T, F>(seq: &[T], mut predicate: F) -> Option<&T>
where
    F: FnMut(usize, &T) -> bool,
{
    seq.iter()
        .enumerate()
        .find(|(i, item)| predicate(*i, item))
        .map(|(_, item)| item)
}

/// Last element matching `predicate`, scanning from the back.
pub fn last<T, F>(seq: &[T], mut predicate: F) -> Option<&T>
where
    F: FnMut(usize, &T) -> bool,
{
    seq.iter()
        .enumerate()
        .rev()
        .find(|(i, item)| predicate(*i, item))
        .map(|(_, item)| item)
}

/// Values stored under `key` in each mapping, skipping mappings without it.
pub fn pluck<K, V>(seq: &[HashMap<K, V>], key: &K) -> Vec<V>
where
    K: Eq + Hash,
    V: Clone,
{
    seq.iter().filter_map(|m| m.get(key).cloned()).collect()
}

// =============================================================================
// Ordering
// =============================================================================

/// Sorts ascending.
pub fn sort<T: Sortable + Clone>(seq: &[T]) -> Vec<T> {
    let mut sorted = seq.to_vec();
    sorted.sort_by(|a, b| a.sort_cmp(b));
    sorted
}

/// Sorts descending. Equal elements keep their input order.
pub fn sort_desc<T: Sortable + Clone>(seq: &[T]) -> Vec<T> {
    let mut sorted = seq.to_vec();
    sorted.sort_by(|a, b| b.sort_cmp(a));
    sorted
}

/// Sorts ascending by the key `f` extracts.
///
/// The sort is stable and every element is kept, including elements whose
/// keys compare equal.
pub fn sort_by<T, K, F>(seq: &[T], f: F) -> Vec<T>
where
    T: Clone,
    K: Sortable,
    F: FnMut(usize, &T) -> K,
{
    sort_keyed(seq, f, false)
}

/// Sorts descending by the key `f` extracts. Stable, like [`sort_by`].
pub fn sort_by_desc<T, K, F>(seq: &[T], f: F) -> Vec<T>
where
    T: Clone,
    K: Sortable,
    F: FnMut(usize, &T) -> K,
{
    sort_keyed(seq, f, true)
}

fn sort_keyed<T, K, F>(seq: &[T], mut f: F, descending: bool) -> Vec<T>
where
    T: Clone,
    K: Sortable,
    F: FnMut(usize, &T) -> K,
{
    let mut keyed: Vec<(K, usize)> = seq
        .iter()
        .enumerate()
        .map(|(i, item)| (f(i, item), i))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| {
        let ord: Ordering = a.sort_cmp(b);
        if descending { ord.reverse() } else { ord }
    });
    keyed.into_iter().map(|(_, i)| seq[i].clone()).collect()
}

// =============================================================================
// Slicing & Windowing
// =============================================================================

/// Splits into consecutive groups of `size`; the last group may be shorter.
///
/// # Errors
///
/// Returns an invalid parameter error if `size` is zero.
#[track_caller]
pub fn chunk<T: Clone>(seq: &[T], size: usize) -> Result<Vec<Vec<T>>> {
    if size == 0 {
        return Err(Error::invalid_param("chunk size must be positive"));
    }
    Ok(seq.chunks(size).map(<[T]>::to_vec).collect())
}

/// Overlapping windows of `size` elements, starting every `step` elements.
///
/// Yields nothing when the sequence is shorter than `size`.
///
/// # Errors
///
/// Returns an invalid parameter error if `size` or `step` is zero.
#[track_caller]
pub fn sliding<T: Clone>(seq: &[T], size: usize, step: usize) -> Result<Vec<Vec<T>>> {
    if size == 0 || step == 0 {
        return Err(Error::invalid_param(format!(
            "sliding window needs a positive size and step, got size {size} step {step}"
        )));
    }
    let Some(slack) = seq.len().checked_sub(size) else {
        return Ok(Vec::new());
    };
    Ok(times(slack / step + 1, |n| take_range(seq, (n - 1) * step, size)))
}

/// Divides the sequence into `groups` groups of near-equal size.
///
/// The remainder goes to the earliest groups. Groups that would be empty
/// (more groups than elements) are omitted.
///
/// # Errors
///
/// Returns an invalid parameter error if `groups` is zero.
#[track_caller]
pub fn split<T: Clone>(seq: &[T], groups: usize) -> Result<Vec<Vec<T>>> {
    if groups == 0 {
        return Err(Error::invalid_param("number of groups must be positive"));
    }
    let base = seq.len() / groups;
    let remainder = seq.len() % groups;
    let mut result = Vec::with_capacity(groups);
    let mut start = 0;
    for i in 0..groups {
        let size = if i < remainder { base + 1 } else { base };
        if size == 0 {
            continue;
        }
        result.push(take_range(seq, start, size));
        start += size;
    }
    Ok(result)
}

/// Every `step`-th element, starting with the first.
///
/// One element is taken per complete group of `step`, so the result has
/// `len / step` items and a trailing partial group contributes nothing.
///
/// # Errors
///
/// Returns an invalid parameter error if `step` is zero.
#[track_caller]
pub fn nth<T: Clone>(seq: &[T], step: usize) -> Result<Vec<T>> {
    if step == 0 {
        return Err(Error::invalid_param("nth step must be positive"));
    }
    Ok(seq.iter().step_by(step).take(seq.len() / step).cloned().collect())
}

/// Up to `length` elements starting at `offset`.
///
/// A negative offset counts from the end. An offset before the start or
/// past the end yields an empty vector.
pub fn slice<T: Clone>(seq: &[T], offset: isize, length: usize) -> Vec<T> {
    match resolve_offset(offset, seq.len()) {
        Some(start) => take_range(seq, start, length),
        None => Vec::new(),
    }
}

/// Everything after the first `offset` elements.
pub fn skip<T: Clone>(seq: &[T], offset: usize) -> Vec<T> {
    seq.get(offset..).map(<[T]>::to_vec).unwrap_or_default()
}

/// The `page`-th page (1-based) of `per_page` elements.
///
/// Page 0 is treated like page 1.
pub fn for_page<T: Clone>(seq: &[T], page: usize, per_page: usize) -> Vec<T> {
    let offset = page.saturating_sub(1).saturating_mul(per_page);
    take_range(seq, offset, per_page)
}

/// Removes up to `length` elements starting at `offset`.
///
/// Returns `(removed, remainder)`. A negative offset counts from the end; an
/// offset outside the sequence removes nothing.
pub fn splice<T: Clone>(seq: &[T], offset: isize, length: usize) -> (Vec<T>, Vec<T>) {
    let Some(start) = resolve_offset(offset, seq.len()) else {
        return (Vec::new(), seq.to_vec());
    };
    let end = start.saturating_add(length).min(seq.len());
    let removed = seq[start..end].to_vec();
    let mut remainder = seq[..start].to_vec();
    remainder.extend_from_slice(&seq[end..]);
    (removed, remainder)
}

/// Pads the sequence with `item` up to `|size|` elements.
///
/// A positive size pads at the end, a negative size at the front. Sequences
/// already long enough are returned unchanged.
pub fn pad<T: Clone>(seq: &[T], size: isize, item: T) -> Vec<T> {
    let target = size.unsigned_abs();
    if seq.len() >= target {
        return seq.to_vec();
    }
    let filler = vec![item; target - seq.len()];
    if size > 0 {
        [seq, &filler[..]].concat()
    } else {
        [&filler[..], seq].concat()
    }
}

// =============================================================================
// Construction
// =============================================================================

/// Removes the last element. Returns the remainder and the element.
pub fn pop<T: Clone>(seq: &[T]) -> (Vec<T>, Option<T>) {
    match seq.split_last() {
        Some((last, rest)) => (rest.to_vec(), Some(last.clone())),
        None => (Vec::new(), None),
    }
}

/// Removes the first element. Returns the remainder and the element.
pub fn shift<T: Clone>(seq: &[T]) -> (Vec<T>, Option<T>) {
    match seq.split_first() {
        Some((first, rest)) => (rest.to_vec(), Some(first.clone())),
        None => (Vec::new(), None),
    }
}

/// `items` followed by `seq`.
pub fn prepend<T: Clone>(seq: &[T], items: &[T]) -> Vec<T> {
    [items, seq].concat()
}

/// `seq` followed by `items`.
pub fn push<T: Clone>(seq: &[T], items: &[T]) -> Vec<T> {
    [seq, items].concat()
}

/// Concatenates every sequence in order.
pub fn union<T: Clone>(seqs: &[&[T]]) -> Vec<T> {
    seqs.concat()
}

/// Flattens a sequence of sequences.
pub fn collapse<T: Clone>(seqs: &[Vec<T>]) -> Vec<T> {
    seqs.concat()
}

// =============================================================================
// Set Algebra
// =============================================================================

/// Elements of `seq` that do not appear in `refs`.
///
/// Scans `refs` for every element, O(n·m). See [`diff_hashed`] for large
/// inputs.
pub fn diff<T: PartialEq + Clone>(seq: &[T], refs: &[T]) -> Vec<T> {
    seq.iter()
        .filter(|item| !refs.contains(item))
        .cloned()
        .collect()
}

/// Elements of `seq` that also appear in `refs`. O(n·m).
pub fn intersect<T: PartialEq + Clone>(seq: &[T], refs: &[T]) -> Vec<T> {
    seq.iter()
        .filter(|item| refs.contains(item))
        .cloned()
        .collect()
}

/// [`diff`] using a hash set, O(n + m).
pub fn diff_hashed<T: Eq + Hash + Clone>(seq: &[T], refs: &[T]) -> Vec<T> {
    let refs: HashSet<&T> = refs.iter().collect();
    seq.iter()
        .filter(|item| !refs.contains(item))
        .cloned()
        .collect()
}

/// [`intersect`] using a hash set, O(n + m).
pub fn intersect_hashed<T: Eq + Hash + Clone>(seq: &[T], refs: &[T]) -> Vec<T> {
    let refs: HashSet<&T> = refs.iter().collect();
    seq.iter()
        .filter(|item| refs.contains(item))
        .cloned()
        .collect()
}

/// One element per key produced by `f`.
///
/// The last occurrence of each key wins; survivors stay in input order, so
/// `a b c d a c e` keyed by identity gives `b d a c e`.
pub fn unique<T, K, F>(seq: &[T], mut f: F) -> Vec<T>
where
    T: Clone,
    K: Eq + Hash,
    F: FnMut(usize, &T) -> K,
{
    let mut last_index: HashMap<K, usize> = HashMap::with_capacity(seq.len());
    for (i, item) in seq.iter().enumerate() {
        last_index.insert(f(i, item), i);
    }
    let keep: HashSet<usize> = last_index.into_values().collect();
    filter(seq, |i, _| keep.contains(&i))
}
