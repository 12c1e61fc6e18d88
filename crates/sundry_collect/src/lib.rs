//! Generic helpers over sequences and keyed mappings.
//!
//! This crate provides:
//! - [`seq`] - Mapping, filtering, ordering, slicing and set algebra over slices
//! - [`map`] - Projection, merging and mutation of `HashMap`s
//! - [`aggregate`] - Sums, averages and extremes
//! - [`combine`] - Cross joins, zips and key/value pairing
//! - [`random`] - Shuffling and sampling with a caller-supplied random source
//!
//! Every helper borrows its input and returns new containers, except the
//! shuffles in [`random`] and the mutators at the end of [`map`], which take
//! `&mut`. Parameters that would make an operation meaningless (a zero chunk
//! size, for example) produce an [`Error`] rather than a panic.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod aggregate;
pub mod combine;
pub mod map;
pub mod random;
pub mod seq;

pub use aggregate::{average, average_by, max, max_by, min, min_by, sum, sum_by};
pub use combine::{combine, cross_join, zip, zip_pairs};
pub use random::{shuffle, shuffle_seeded};
pub use sundry_foundation::{Blank, Error, ErrorKind, Result, is_empty, is_not_empty};
