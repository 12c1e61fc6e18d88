//! Core types shared by the sundry helper crates.
//!
//! This crate provides:
//! - [`Error`] - Errors carrying a payload and the offending [`CallSite`]
//! - [`Sortable`] and [`Blank`] - Bounds used by the collection helpers
//! - [`coerce`] - Checked runtime type coercion
//! - [`dump`] - JSON rendering and `MessagePack` encoding

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod dump;
pub mod error;
pub mod types;

pub use dump::{from_bytes, render, to_bytes, to_json};
pub use error::{CallSite, Error, ErrorKind, Result};
pub use types::{Blank, Sortable, coerce, coerce_ref, is_empty, is_not_empty};
