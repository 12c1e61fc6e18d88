//! Sundry - Generic collection helpers, call-site aware errors, string utilities
//!
//! This crate re-exports all layers of the sundry workspace for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: sundry_collect     - Sequence, mapping, aggregate and random helpers
//!          sundry_str         - String search, replacement, case and padding
//! Layer 0: sundry_foundation  - Error, CallSite, Sortable/Blank bounds, dump
//! ```

pub use sundry_collect as collect;
pub use sundry_foundation as foundation;
pub use sundry_str as strings;

pub use sundry_foundation::{Error, ErrorKind, Result, call_site};
