//! String helpers for search, replacement, case conversion and padding.
//!
//! Every offset and length counts characters, never bytes, so no helper
//! can split a multi-byte character.
//!
//! Modules:
//! - [`search`] - Substring extraction, membership, glob matching, excerpts
//! - [`replace`] - Plain, sequential and pattern-based replacement
//! - [`case`] - Case conversion (`studly`, `snake`, `headline`, ...)
//! - [`pad`] - Padding, capping, truncation, masking, trimming
//! - [`text`] - HTML escaping, reversal, random letters

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod case;
pub mod config;
mod offset;
pub mod pad;
pub mod replace;
pub mod search;
pub mod text;

pub use case::{camel, headline, kebab, lc_first, lower, snake, snake_with, studly, uc_first, upper};
pub use config::ExcerptOptions;
pub use pad::{finish, limit, mask, pad_both, pad_left, pad_right, start, trim, trim_left, trim_right};
pub use replace::{
    regex_replace_sequential, remove, replace, replace_first, replace_last, replace_many,
    replace_sequential, substr_replace, swap,
};
pub use search::{
    after, after_last, before, before_last, between, between_first, contains, contains_all,
    contains_any, ends_with, excerpt, is, starts_with, substr_count,
};
pub use text::{escape_html, is_ascii, join, length, random, random_seeded, reverse, substr};
