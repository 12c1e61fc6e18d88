//! Whole-string helpers.

use std::borrow::Borrow;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Escapes `&`, `<`, `>`, `"` and `'` for inclusion in HTML.
#[must_use]
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&#34;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Number of characters.
#[must_use]
pub fn length(value: &str) -> usize {
    value.chars().count()
}

/// Up to `length` characters starting at character `start`.
#[must_use]
pub fn substr(subject: &str, start: usize, length: usize) -> String {
    subject.chars().skip(start).take(length).collect()
}

/// Reverses character order.
#[must_use]
pub fn reverse(value: &str) -> String {
    value.chars().rev().collect()
}

/// Returns true if every character is 7-bit ASCII.
#[must_use]
pub fn is_ascii(value: &str) -> bool {
    value.is_ascii()
}

/// Joins `parts` with `glue`.
#[must_use]
pub fn join<S: Borrow<str>>(parts: &[S], glue: &str) -> String {
    parts.join(glue)
}

/// A string of `length` ASCII letters drawn from `rng`.
pub fn random<R: Rng + ?Sized>(length: usize, rng: &mut R) -> String {
    (0..length)
        .map(|_| char::from(LETTERS[rng.gen_range(0..LETTERS.len())]))
        .collect()
}

/// [`random`] with a generator seeded from `seed`.
#[must_use]
pub fn random_seeded(length: usize, seed: u64) -> String {
    random(length, &mut ChaCha8Rng::seed_from_u64(seed))
}
