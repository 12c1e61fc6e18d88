//! Padding, capping, truncation, masking and trimming.
//!
//! Lengths are measured in characters.

use std::collections::VecDeque;

use crate::offset::clamp_offset;

fn filler(pad: &str, count: usize) -> String {
    pad.chars().cycle().take(count).collect()
}

/// Pads on the left with repetitions of `pad` up to `length` characters.
///
/// Returns `value` unchanged when it is already long enough or `pad` is empty.
#[must_use]
pub fn pad_left(value: &str, length: usize, pad: &str) -> String {
    let current = value.chars().count();
    if current >= length || pad.is_empty() {
        return value.to_string();
    }
    filler(pad, length - current) + value
}

/// Pads on the right with repetitions of `pad` up to `length` characters.
#[must_use]
pub fn pad_right(value: &str, length: usize, pad: &str) -> String {
    let current = value.chars().count();
    if current >= length || pad.is_empty() {
        return value.to_string();
    }
    format!("{value}{}", filler(pad, length - current))
}

/// Pads both sides up to `length` characters.
///
/// Whole copies of `pad` are added alternately on the right and the left,
/// then the side that received the last copy is trimmed back to `length`.
///
/// ```
/// use sundry_str::pad_both;
///
/// assert_eq!(pad_both("tom", 10, "-"), "---tom----");
/// assert_eq!(pad_both("tom", 10, "-="), "=-=tom-=-=");
/// ```
#[must_use]
pub fn pad_both(value: &str, length: usize, pad: &str) -> String {
    if value.chars().count() >= length || pad.is_empty() {
        return value.to_string();
    }
    let pad: Vec<char> = pad.chars().collect();
    let mut out: VecDeque<char> = value.chars().collect();
    let mut append = true;
    while out.len() < length {
        if append {
            out.extend(&pad);
        } else {
            for c in pad.iter().rev() {
                out.push_front(*c);
            }
        }
        append = !append;
    }
    if append {
        out.drain(..out.len() - length);
    } else {
        out.truncate(length);
    }
    out.into_iter().collect()
}

/// Ends `value` with exactly one `cap`, collapsing repeated caps.
#[must_use]
pub fn finish(value: &str, cap: &str) -> String {
    if cap.is_empty() {
        return value.to_string();
    }
    let mut trimmed = value;
    while let Some(rest) = trimmed.strip_suffix(cap) {
        trimmed = rest;
    }
    format!("{trimmed}{cap}")
}

/// Starts `value` with exactly one `prefix`, collapsing repeated prefixes.
#[must_use]
pub fn start(value: &str, prefix: &str) -> String {
    if prefix.is_empty() {
        return value.to_string();
    }
    let mut trimmed = value;
    while let Some(rest) = trimmed.strip_prefix(prefix) {
        trimmed = rest;
    }
    format!("{prefix}{trimmed}")
}

/// Truncates to `limit` characters, appending `end` when anything was cut.
#[must_use]
pub fn limit(value: &str, limit: usize, end: &str) -> String {
    match value.char_indices().nth(limit) {
        Some((byte, _)) => format!("{}{end}", &value[..byte]),
        None => value.to_string(),
    }
}

/// Replaces a span of characters with `character`.
///
/// The span starts at `index` (negative counts from the end). A positive
/// `length` masks that many characters; a negative one masks up to that
/// many characters before the end; zero masks nothing. Out of range spans
/// are clamped.
///
/// ```
/// use sundry_str::mask;
///
/// assert_eq!(mask("186777123456", '*', 3, 3), "186***123456");
/// assert_eq!(mask("186777123456", '*', 3, -3), "186******456");
/// ```
#[must_use]
pub fn mask(subject: &str, character: char, index: isize, length: isize) -> String {
    let chars: Vec<char> = subject.chars().collect();
    let len = chars.len();
    let begin = clamp_offset(index, len);
    let end = match length {
        0 => 0,
        n if n > 0 => begin.saturating_add(n.unsigned_abs()),
        n => len.saturating_sub(n.unsigned_abs()),
    }
    .clamp(begin, len);

    chars
        .iter()
        .enumerate()
        .map(|(i, c)| if (begin..end).contains(&i) { character } else { *c })
        .collect()
}

/// Trims whitespace, or the characters in `characters` when given.
#[must_use]
pub fn trim<'a>(value: &'a str, characters: Option<&str>) -> &'a str {
    match characters {
        Some(set) => value.trim_matches(|c: char| set.contains(c)),
        None => value.trim(),
    }
}

/// Trims from the start only.
#[must_use]
pub fn trim_left<'a>(value: &'a str, characters: Option<&str>) -> &'a str {
    match characters {
        Some(set) => value.trim_start_matches(|c: char| set.contains(c)),
        None => value.trim_start(),
    }
}

/// Trims from the end only.
#[must_use]
pub fn trim_right<'a>(value: &'a str, characters: Option<&str>) -> &'a str {
    match characters {
        Some(set) => value.trim_end_matches(|c: char| set.contains(c)),
        None => value.trim_end(),
    }
}
