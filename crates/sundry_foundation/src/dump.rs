//! Value rendering and compact encoding.
//!
//! JSON is used for the human-readable forms and `MessagePack` for the
//! compact byte encoding. Every failure is reported as a serialization
//! error located at the caller; nothing degrades to an empty string.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

/// Serializes a value to compact JSON.
///
/// # Errors
///
/// Returns an error if the value cannot be represented as JSON
/// (e.g. a map with non-string keys).
#[track_caller]
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    match serde_json::to_string(value) {
        Ok(json) => Ok(json),
        Err(e) => Err(Error::serialization(e.to_string())),
    }
}

/// Renders a value as an indented, structured debug string.
///
/// # Errors
///
/// Returns an error if the value cannot be represented as JSON.
#[track_caller]
pub fn render<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    match serde_json::to_string_pretty(value) {
        Ok(json) => Ok(json),
        Err(e) => Err(Error::serialization(e.to_string())),
    }
}

/// Prints the [`render`]ing of a value to stdout.
///
/// # Errors
///
/// Returns an error if the value cannot be rendered.
#[track_caller]
pub fn dump<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let rendered = render(value)?;
    println!("{rendered}");
    Ok(())
}

/// Serializes a value to bytes using `MessagePack` format.
///
/// Uses named serialization to preserve struct field names.
///
/// # Errors
///
/// Returns an error if serialization fails.
#[track_caller]
pub fn to_bytes<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    match rmp_serde::to_vec_named(value) {
        Ok(bytes) => Ok(bytes),
        Err(e) => Err(Error::serialization(e.to_string())),
    }
}

/// Deserializes a value from `MessagePack` bytes.
///
/// # Errors
///
/// Returns an error if the bytes do not decode to a `T`.
#[track_caller]
pub fn from_bytes<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    match rmp_serde::from_slice(bytes) {
        Ok(value) => Ok(value),
        Err(e) => Err(Error::serialization(e.to_string()).with_payload(format!("{bytes:?}"))),
    }
}
