//! Replacement and removal.

use regex::{Captures, Regex};
use sundry_foundation::{Error, Result};

use crate::offset::{clamp_length, clamp_offset};

/// Replaces every occurrence of `search`. An empty `search` changes nothing.
#[must_use]
pub fn replace(search: &str, replace: &str, subject: &str) -> String {
    if search.is_empty() {
        return subject.to_string();
    }
    subject.replace(search, replace)
}

/// Replaces every occurrence of each string in `search`, one after another.
#[must_use]
pub fn replace_many(search: &[&str], replacement: &str, subject: &str) -> String {
    search
        .iter()
        .fold(subject.to_string(), |acc, s| replace(s, replacement, &acc))
}

/// Replaces the first occurrence of `search`.
#[must_use]
pub fn replace_first(search: &str, replace: &str, subject: &str) -> String {
    if search.is_empty() {
        return subject.to_string();
    }
    subject.replacen(search, replace, 1)
}

/// Replaces the last occurrence of `search`.
#[must_use]
pub fn replace_last(search: &str, replace: &str, subject: &str) -> String {
    if search.is_empty() {
        return subject.to_string();
    }
    match subject.rfind(search) {
        Some(i) => format!("{}{replace}{}", &subject[..i], &subject[i + search.len()..]),
        None => subject.to_string(),
    }
}

/// Replaces successive occurrences of `search` with successive replacements.
///
/// Occurrences beyond the last replacement are left alone.
#[must_use]
pub fn replace_sequential(search: &str, replacements: &[&str], subject: &str) -> String {
    replacements
        .iter()
        .fold(subject.to_string(), |acc, r| replace_first(search, r, &acc))
}

/// Replaces successive matches of `pattern` with successive replacements.
///
/// Matches beyond the last replacement are left alone.
///
/// # Errors
///
/// Returns an invalid parameter error if `pattern` is not a valid regular
/// expression.
#[track_caller]
pub fn regex_replace_sequential(
    pattern: &str,
    replacements: &[&str],
    subject: &str,
) -> Result<String> {
    let re = match Regex::new(pattern) {
        Ok(re) => re,
        Err(e) => {
            return Err(Error::invalid_param(format!("invalid pattern: {e}"))
                .with_payload(pattern));
        }
    };
    let mut next = replacements.iter();
    let replaced = re.replace_all(subject, |caps: &Captures<'_>| match next.next() {
        Some(r) => (*r).to_string(),
        None => caps[0].to_string(),
    });
    Ok(replaced.into_owned())
}

/// Applies each `(search, replace)` pair in order.
///
/// ```
/// use sundry_str::swap;
///
/// let swapped = swap(&[("Tacos", "Burritos"), ("great", "fantastic")], "Tacos are great!");
/// assert_eq!(swapped, "Burritos are fantastic!");
/// ```
#[must_use]
pub fn swap(pairs: &[(&str, &str)], subject: &str) -> String {
    pairs
        .iter()
        .fold(subject.to_string(), |acc, (s, r)| replace(s, r, &acc))
}

/// Removes every occurrence of `search`.
///
/// Case-insensitive removal compares characters by their lowercase form and
/// keeps the original case of everything that is not removed.
#[must_use]
pub fn remove(search: &str, subject: &str, case_sensitive: bool) -> String {
    if case_sensitive {
        return replace(search, "", subject);
    }
    if search.is_empty() || subject.is_empty() {
        return subject.to_string();
    }

    let fold = |c: char| c.to_lowercase().next().unwrap_or(c);
    let chars: Vec<char> = subject.chars().collect();
    let folded: Vec<char> = chars.iter().copied().map(fold).collect();
    let needle: Vec<char> = search.chars().map(fold).collect();

    let mut out = String::with_capacity(subject.len());
    let mut i = 0;
    while i < chars.len() {
        if folded[i..].starts_with(&needle) {
            i += needle.len();
        } else {
            out.push(chars[i]);
            i += 1;
        }
    }
    out
}

/// Replaces `length` characters starting at `offset` with `replace`.
///
/// A negative `offset` counts from the end; offsets outside the string are
/// clamped to its bounds. A negative `length` stops that many characters
/// before the end.
#[must_use]
pub fn substr_replace(subject: &str, replace: &str, offset: isize, length: isize) -> String {
    let chars: Vec<char> = subject.chars().collect();
    let start = clamp_offset(offset, chars.len());
    let stop = start + clamp_length(length, chars.len() - start);

    let mut out: String = chars[..start].iter().collect();
    out.push_str(replace);
    out.extend(&chars[stop..]);
    out
}
