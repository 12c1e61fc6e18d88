//! Operations over keyed mappings.
//!
//! Mappings are [`HashMap`]s, so iteration order is unspecified and nothing
//! here promises an order across keys. When keys and values must line up,
//! use [`entries`], which reads both in a single pass.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use sundry_foundation::{Error, Result};

// =============================================================================
// Mapping, Filtering, Iteration
// =============================================================================

/// Transforms every value, keeping its key.
pub fn map<K, V, S, F>(m: &HashMap<K, V>, mut f: F) -> HashMap<K, S>
where
    K: Eq + Hash + Clone,
    F: FnMut(&K, &V) -> S,
{
    m.iter().map(|(k, v)| (k.clone(), f(k, v))).collect()
}

/// Builds a new mapping from the `(key, value)` pairs produced by `f`.
///
/// When two entries produce the same key, which one survives is unspecified.
pub fn map_with_keys<K, V, SK, S, F>(m: &HashMap<K, V>, mut f: F) -> HashMap<SK, S>
where
    SK: Eq + Hash,
    F: FnMut(&K, &V) -> (SK, S),
{
    m.iter().map(|(k, v)| f(k, v)).collect()
}

/// Keeps the entries for which `predicate` holds.
pub fn filter<K, V, F>(m: &HashMap<K, V>, mut predicate: F) -> HashMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
    F: FnMut(&K, &V) -> bool,
{
    m.iter()
        .filter(|(k, v)| predicate(k, v))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

/// Visits entries until `visitor` returns `false`.
pub fn each<K, V, F>(m: &HashMap<K, V>, mut visitor: F)
where
    F: FnMut(&K, &V) -> bool,
{
    for (k, v) in m {
        if !visitor(k, v) {
            break;
        }
    }
}

/// Returns true if `predicate` holds for every entry.
pub fn every<K, V, F>(m: &HashMap<K, V>, mut predicate: F) -> bool
where
    F: FnMut(&K, &V) -> bool,
{
    m.iter().all(|(k, v)| predicate(k, v))
}

/// Replaces every key with the one `f` computes, keeping the value.
pub fn rekey<K, V, NK, F>(m: &HashMap<K, V>, mut f: F) -> HashMap<NK, V>
where
    V: Clone,
    NK: Eq + Hash,
    F: FnMut(&K, &V) -> NK,
{
    m.iter().map(|(k, v)| (f(k, v), v.clone())).collect()
}

// =============================================================================
// Keys & Values
// =============================================================================

/// Keys and values read in one pass; `keys[i]` maps to `values[i]`.
pub fn entries<K: Clone, V: Clone>(m: &HashMap<K, V>) -> (Vec<K>, Vec<V>) {
    m.iter().map(|(k, v)| (k.clone(), v.clone())).unzip()
}

/// All keys, in unspecified order.
pub fn keys<K: Clone, V>(m: &HashMap<K, V>) -> Vec<K> {
    m.keys().cloned().collect()
}

/// All values, in unspecified order.
///
/// Not guaranteed to line up with a separate call to [`keys`].
pub fn values<K, V: Clone>(m: &HashMap<K, V>) -> Vec<V> {
    m.values().cloned().collect()
}

/// Concatenates every value list. Order across keys is unspecified.
pub fn flatten<K, V: Clone>(m: &HashMap<K, Vec<V>>) -> Vec<V> {
    m.values().flatten().cloned().collect()
}

/// Key of some entry holding `value`.
pub fn search<'a, K, V: PartialEq>(m: &'a HashMap<K, V>, value: &V) -> Option<&'a K> {
    m.iter().find(|(_, v)| *v == value).map(|(k, _)| k)
}

/// Value stored under `key`.
pub fn get<'a, K: Eq + Hash, V>(m: &'a HashMap<K, V>, key: &K) -> Option<&'a V> {
    m.get(key)
}

/// Value stored under `key`, or `default` when absent.
pub fn get_or_default<K: Eq + Hash, V: Clone>(m: &HashMap<K, V>, key: &K, default: V) -> V {
    m.get(key).cloned().unwrap_or(default)
}

/// Returns true if every key in `keys` is present.
pub fn has<K: Eq + Hash, V>(m: &HashMap<K, V>, keys: &[K]) -> bool {
    keys.iter().all(|k| m.contains_key(k))
}

// =============================================================================
// Projection
// =============================================================================

/// Entries whose key is in `keys`.
pub fn only<K: Eq + Hash + Clone, V: Clone>(m: &HashMap<K, V>, keys: &[K]) -> HashMap<K, V> {
    keys.iter()
        .filter_map(|k| m.get(k).map(|v| (k.clone(), v.clone())))
        .collect()
}

/// Entries whose key is not in `keys`.
pub fn except<K: Eq + Hash + Clone, V: Clone>(m: &HashMap<K, V>, keys: &[K]) -> HashMap<K, V> {
    filter(m, |k, _| !keys.contains(k))
}

/// Entries of `a` whose key is absent from `b` or maps to a different value.
pub fn diff_assoc<K, V>(a: &HashMap<K, V>, b: &HashMap<K, V>) -> HashMap<K, V>
where
    K: Eq + Hash + Clone,
    V: PartialEq + Clone,
{
    filter(a, |k, v| b.get(k) != Some(v))
}

/// Entries of `a` whose key is absent from `b`.
pub fn diff_keys<K, V, W>(a: &HashMap<K, V>, b: &HashMap<K, W>) -> HashMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    filter(a, |k, _| !b.contains_key(k))
}

/// Entries of `a` whose key is also present in `b`.
pub fn intersect_by_keys<K, V, W>(a: &HashMap<K, V>, b: &HashMap<K, W>) -> HashMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    filter(a, |k, _| b.contains_key(k))
}

// =============================================================================
// Combination
// =============================================================================

/// Merges left to right; later mappings overwrite earlier ones.
pub fn merge<K: Eq + Hash + Clone, V: Clone>(maps: &[&HashMap<K, V>]) -> HashMap<K, V> {
    let mut merged = HashMap::new();
    for m in maps {
        merged.extend(m.iter().map(|(k, v)| (k.clone(), v.clone())));
    }
    merged
}

/// Merges left to right, concatenating the value lists of shared keys.
pub fn merge_recursive<K, V>(maps: &[&HashMap<K, Vec<V>>]) -> HashMap<K, Vec<V>>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    let mut merged: HashMap<K, Vec<V>> = HashMap::new();
    for m in maps {
        for (k, v) in *m {
            merged.entry(k.clone()).or_default().extend_from_slice(v);
        }
    }
    merged
}

/// Swaps keys and values.
///
/// # Errors
///
/// Returns a duplicate key error if two keys share a value, since one of
/// them would otherwise be lost.
#[track_caller]
pub fn flip<K, V>(m: &HashMap<K, V>) -> Result<HashMap<V, K>>
where
    K: Clone + Debug,
    V: Eq + Hash + Clone + Debug,
{
    let mut flipped = HashMap::with_capacity(m.len());
    for (k, v) in m {
        if let Some(previous) = flipped.insert(v.clone(), k.clone()) {
            return Err(Error::duplicate_key(format!("{v:?}"))
                .with_payload(format!("keys {previous:?} and {k:?}")));
        }
    }
    Ok(flipped)
}

/// Swaps keys and values; on collision an unspecified key survives.
pub fn flip_lossy<K: Clone, V: Eq + Hash + Clone>(m: &HashMap<K, V>) -> HashMap<V, K> {
    m.iter().map(|(k, v)| (v.clone(), k.clone())).collect()
}

/// Groups elements by the key `f` computes, keeping input order per group.
pub fn group_by<T, K, F>(seq: &[T], mut f: F) -> HashMap<K, Vec<T>>
where
    T: Clone,
    K: Eq + Hash,
    F: FnMut(usize, &T) -> K,
{
    let mut groups: HashMap<K, Vec<T>> = HashMap::new();
    for (i, item) in seq.iter().enumerate() {
        groups.entry(f(i, item)).or_default().push(item.clone());
    }
    groups
}

/// Indexes elements by the key `f` computes. The last element per key wins.
pub fn key_by<T, K, F>(seq: &[T], mut f: F) -> HashMap<K, T>
where
    T: Clone,
    K: Eq + Hash,
    F: FnMut(usize, &T) -> K,
{
    seq.iter()
        .enumerate()
        .map(|(i, item)| (f(i, item), item.clone()))
        .collect()
}

// =============================================================================
// Mutation
// =============================================================================

/// Removes every key in `keys` and returns the mutated mapping.
pub fn forget<'a, K: Eq + Hash, V>(m: &'a mut HashMap<K, V>, keys: &[K]) -> &'a mut HashMap<K, V> {
    for k in keys {
        m.remove(k);
    }
    m
}

/// Removes `key` and returns its value.
pub fn pull<K: Eq + Hash, V>(m: &mut HashMap<K, V>, key: &K) -> Option<V> {
    m.remove(key)
}

/// Stores `value` under `key`, returning the value it replaced.
pub fn put<K: Eq + Hash, V>(m: &mut HashMap<K, V>, key: K, value: V) -> Option<V> {
    m.insert(key, value)
}

/// Stores `value` only if `key` is absent. Returns true if it was stored.
pub fn add<K: Eq + Hash, V>(m: &mut HashMap<K, V>, key: K, value: V) -> bool {
    if m.contains_key(&key) {
        return false;
    }
    m.insert(key, value);
    true
}
