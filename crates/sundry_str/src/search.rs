//! Substring search and extraction.
//!
//! An empty search string never matches: extraction functions return the
//! subject unchanged and predicates return `false`.

use regex::Regex;

use crate::config::ExcerptOptions;

/// The remainder after the first occurrence of `search`, left-trimmed of spaces.
///
/// Returns `subject` when `search` is empty or absent.
#[must_use]
pub fn after<'a>(subject: &'a str, search: &str) -> &'a str {
    if search.is_empty() {
        return subject;
    }
    match subject.find(search) {
        Some(i) => subject[i + search.len()..].trim_start_matches(' '),
        None => subject,
    }
}

/// The remainder after the last occurrence of `search`, left-trimmed of spaces.
#[must_use]
pub fn after_last<'a>(subject: &'a str, search: &str) -> &'a str {
    if search.is_empty() {
        return subject;
    }
    match subject.rfind(search) {
        Some(i) => subject[i + search.len()..].trim_start_matches(' '),
        None => subject,
    }
}

/// Everything before the first occurrence of `search`.
#[must_use]
pub fn before<'a>(subject: &'a str, search: &str) -> &'a str {
    if search.is_empty() {
        return subject;
    }
    match subject.find(search) {
        Some(i) => &subject[..i],
        None => subject,
    }
}

/// Everything before the last occurrence of `search`.
#[must_use]
pub fn before_last<'a>(subject: &'a str, search: &str) -> &'a str {
    if search.is_empty() {
        return subject;
    }
    match subject.rfind(search) {
        Some(i) => &subject[..i],
        None => subject,
    }
}

/// The widest portion between the first `from` and the last `to`.
#[must_use]
pub fn between<'a>(subject: &'a str, from: &str, to: &str) -> &'a str {
    if from.is_empty() || to.is_empty() {
        return subject;
    }
    before_last(after(subject, from), to)
}

/// The narrowest portion between the first `from` and the next `to`.
#[must_use]
pub fn between_first<'a>(subject: &'a str, from: &str, to: &str) -> &'a str {
    if from.is_empty() || to.is_empty() {
        return subject;
    }
    before(after(subject, from), to)
}

/// Returns true if `haystack` contains `needle`.
#[must_use]
pub fn contains(haystack: &str, needle: &str, ignore_case: bool) -> bool {
    if needle.is_empty() {
        return false;
    }
    if ignore_case {
        haystack.to_lowercase().contains(&needle.to_lowercase())
    } else {
        haystack.contains(needle)
    }
}

/// Returns true if `haystack` contains at least one of `needles`.
#[must_use]
pub fn contains_any(haystack: &str, needles: &[&str], ignore_case: bool) -> bool {
    needles.iter().any(|n| contains(haystack, n, ignore_case))
}

/// Returns true if `haystack` contains every one of `needles`.
#[must_use]
pub fn contains_all(haystack: &str, needles: &[&str], ignore_case: bool) -> bool {
    needles.iter().all(|n| contains(haystack, n, ignore_case))
}

/// Returns true if `haystack` begins with a non-empty `needle`.
#[must_use]
pub fn starts_with(haystack: &str, needle: &str) -> bool {
    !needle.is_empty() && haystack.starts_with(needle)
}

/// Returns true if `haystack` ends with a non-empty `needle`.
#[must_use]
pub fn ends_with(haystack: &str, needle: &str) -> bool {
    !needle.is_empty() && haystack.ends_with(needle)
}

/// Matches `value` against a glob `pattern` in which `*` matches any run
/// of characters. The whole value must match.
#[must_use]
pub fn is(pattern: &str, value: &str) -> bool {
    if pattern.is_empty() {
        return false;
    }
    if pattern == value {
        return true;
    }
    let anchored = format!("^{}$", regex::escape(pattern).replace(r"\*", ".*"));
    match Regex::new(&anchored) {
        Ok(re) => re.is_match(value),
        Err(_) => false,
    }
}

/// Number of non-overlapping occurrences of `needle`.
#[must_use]
pub fn substr_count(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    haystack.matches(needle).count()
}

/// Extracts the text around the first occurrence of `phrase`.
///
/// Keeps `options.radius` characters on either side. The omission marker
/// is prepended when text before the window was dropped, and appended
/// whenever the trailing window holds a full `radius` characters. Returns
/// an empty string when the phrase is not found.
///
/// ```
/// use sundry_str::{ExcerptOptions, excerpt};
///
/// let options = ExcerptOptions::default().with_radius(4).with_omission("....");
/// assert_eq!(excerpt("This is my name", "my", &options), ".... is my nam....");
/// ```
#[must_use]
pub fn excerpt(text: &str, phrase: &str, options: &ExcerptOptions) -> String {
    let Some(byte_index) = text.find(phrase) else {
        return String::new();
    };
    let chars: Vec<char> = text.chars().collect();
    let index = text[..byte_index].chars().count();
    let phrase_end = index + phrase.chars().count();
    let radius = options.radius;

    let start = index.saturating_sub(radius);
    let reach = phrase_end.saturating_add(radius);
    let end = reach.min(chars.len());

    let mut out = String::new();
    if start > 0 {
        out.push_str(&options.omission);
    }
    out.extend(&chars[start..end]);
    // A full trailing window is marked even when it ends at the last character.
    if reach <= chars.len() {
        out.push_str(&options.omission);
    }
    out
}
