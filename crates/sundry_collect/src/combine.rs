//! Combinatorial builders over two or more inputs.

use std::collections::HashMap;
use std::hash::Hash;

pub use crate::seq::{chunk, sliding, split};

/// Cartesian product of two sequences of rows, row-major over `a`.
///
/// Each result row is `a[i]` concatenated with `b[j]`. Empty when either
/// side is empty.
pub fn cross_join<T: Clone>(a: &[Vec<T>], b: &[Vec<T>]) -> Vec<Vec<T>> {
    a.iter()
        .flat_map(|left| b.iter().map(move |right| [left.as_slice(), right.as_slice()].concat()))
        .collect()
}

/// Pairs elements positionally as two-element rows.
///
/// Truncated to the shorter input, so `[1, 2, 3]` and `[4, 5, 6, 7]` give
/// `[[1, 4], [2, 5], [3, 6]]`.
pub fn zip<T: Clone>(a: &[T], b: &[T]) -> Vec<Vec<T>> {
    a.iter()
        .zip(b)
        .map(|(x, y)| vec![x.clone(), y.clone()])
        .collect()
}

/// Pairs elements positionally as tuples, truncated to the shorter input.
pub fn zip_pairs<A: Clone, B: Clone>(a: &[A], b: &[B]) -> Vec<(A, B)> {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x.clone(), y.clone()))
        .collect()
}

/// Builds a mapping from parallel key and value sequences.
///
/// Extra keys or values beyond the shorter input are ignored; a repeated
/// key keeps its last value.
pub fn combine<K, V>(keys: &[K], values: &[V]) -> HashMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    zip_pairs(keys, values).into_iter().collect()
}
