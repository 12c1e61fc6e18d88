//! Numeric aggregates over sequences.
//!
//! Sums and averages of an empty sequence are zero, so an empty input is
//! indistinguishable from one that really averages to zero. Callers that
//! care should check for emptiness first. Minimum and maximum return
//! `None` on empty input.

use std::ops::Div;

use num_traits::{FromPrimitive, Zero};
use sundry_foundation::Sortable;

/// Sum of all elements; zero when empty.
pub fn sum<T: Zero + Copy>(seq: &[T]) -> T {
    seq.iter().fold(T::zero(), |acc, x| acc + *x)
}

/// Sum of the values `f` extracts; zero when empty.
pub fn sum_by<T, N, F>(seq: &[T], mut f: F) -> N
where
    N: Zero,
    F: FnMut(usize, &T) -> N,
{
    seq.iter()
        .enumerate()
        .fold(N::zero(), |acc, (i, item)| acc + f(i, item))
}

/// Arithmetic mean in the element type; zero when empty.
///
/// Integer types use integer division, so the mean of `[1, 2]` is `1`.
pub fn average<T>(seq: &[T]) -> T
where
    T: Zero + Copy + Div<Output = T> + FromPrimitive,
{
    mean(sum(seq), seq.len())
}

/// Arithmetic mean of the values `f` extracts; zero when empty.
pub fn average_by<T, N, F>(seq: &[T], f: F) -> N
where
    N: Zero + Div<Output = N> + FromPrimitive,
    F: FnMut(usize, &T) -> N,
{
    mean(sum_by(seq, f), seq.len())
}

// A length that does not fit the numeric type (e.g. 300 elements of `i8`)
// also yields zero.
fn mean<N: Zero + Div<Output = N> + FromPrimitive>(total: N, len: usize) -> N {
    if len == 0 {
        return N::zero();
    }
    match N::from_usize(len) {
        Some(divisor) => total / divisor,
        None => N::zero(),
    }
}

/// Smallest element, or `None` when empty.
pub fn min<T: Sortable + Clone>(seq: &[T]) -> Option<T> {
    min_by(seq, |_, item| item.clone())
}

/// Largest element, or `None` when empty.
pub fn max<T: Sortable + Clone>(seq: &[T]) -> Option<T> {
    max_by(seq, |_, item| item.clone())
}

/// Smallest value `f` extracts, or `None` when empty.
pub fn min_by<T, N, F>(seq: &[T], f: F) -> Option<N>
where
    N: Sortable,
    F: FnMut(usize, &T) -> N,
{
    extreme(seq, f, |candidate, best| candidate.sort_cmp(best).is_lt())
}

/// Largest value `f` extracts, or `None` when empty.
pub fn max_by<T, N, F>(seq: &[T], f: F) -> Option<N>
where
    N: Sortable,
    F: FnMut(usize, &T) -> N,
{
    extreme(seq, f, |candidate, best| candidate.sort_cmp(best).is_gt())
}

fn extreme<T, N, F, B>(seq: &[T], mut f: F, better: B) -> Option<N>
where
    F: FnMut(usize, &T) -> N,
    B: Fn(&N, &N) -> bool,
{
    let mut best: Option<N> = None;
    for (i, item) in seq.iter().enumerate() {
        let candidate = f(i, item);
        let replace = match &best {
            Some(current) => better(&candidate, current),
            None => true,
        };
        if replace {
            best = Some(candidate);
        }
    }
    best
}
