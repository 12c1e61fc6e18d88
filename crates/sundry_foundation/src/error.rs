//! Error types for the sundry helpers.
//!
//! Uses `thiserror` for ergonomic error definition. Every error can carry an
//! opaque payload and the [`CallSite`] of the code that misused a helper.

use std::fmt;
use std::panic::Location;

use serde::Serialize;
use thiserror::Error;

/// Result alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for sundry operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional opaque payload (usually a serialized value).
    pub payload: Option<String>,
    /// Where the offending call was made.
    pub call_site: Option<CallSite>,
}

impl Error {
    /// Creates a new error with the given kind and no call site.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            payload: None,
            call_site: None,
        }
    }

    /// Creates an invalid parameter error located at the caller.
    #[must_use]
    #[track_caller]
    pub fn invalid_param(message: impl Into<String>) -> Self {
        Self::located(ErrorKind::InvalidParam(message.into()), CallSite::caller())
    }

    /// Creates a type mismatch error located at the caller.
    #[must_use]
    #[track_caller]
    pub fn type_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::located(
            ErrorKind::TypeMismatch {
                expected: expected.into(),
                actual: actual.into(),
            },
            CallSite::caller(),
        )
    }

    /// Creates a duplicate key error located at the caller.
    #[must_use]
    #[track_caller]
    pub fn duplicate_key(key: impl Into<String>) -> Self {
        Self::located(ErrorKind::DuplicateKey(key.into()), CallSite::caller())
    }

    /// Creates a serialization error located at the caller.
    #[must_use]
    #[track_caller]
    pub fn serialization(message: impl Into<String>) -> Self {
        let message = message.into();
        let call_site = CallSite::caller();
        tracing::warn!(%call_site, "serialization failed: {message}");
        Self {
            kind: ErrorKind::Serialization(message),
            payload: None,
            call_site: Some(call_site),
        }
    }

    fn located(kind: ErrorKind, call_site: CallSite) -> Self {
        tracing::debug!(error_type = kind.name(), %call_site, "{kind}");
        Self {
            kind,
            payload: None,
            call_site: Some(call_site),
        }
    }

    /// Attaches an opaque payload.
    #[must_use]
    pub fn with_payload(mut self, payload: impl Into<String>) -> Self {
        self.payload = Some(payload.into());
        self
    }

    /// Replaces the call site, e.g. with one built by [`call_site!`](crate::call_site).
    #[must_use]
    pub fn with_call_site(mut self, call_site: CallSite) -> Self {
        self.call_site = Some(call_site);
        self
    }

    /// Drops the call site.
    #[must_use]
    pub fn without_call_site(mut self) -> Self {
        self.call_site = None;
        self
    }

    /// Human-readable message.
    #[must_use]
    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    /// Stable label of the error kind, e.g. `"invalid_param"`.
    #[must_use]
    pub fn error_type(&self) -> &'static str {
        self.kind.name()
    }

    /// The opaque payload, if any.
    #[must_use]
    pub fn payload(&self) -> Option<&str> {
        self.payload.as_deref()
    }

    /// The captured call site, if any.
    #[must_use]
    pub fn call_site(&self) -> Option<&CallSite> {
        self.call_site.as_ref()
    }

    /// Source file of the call site.
    #[must_use]
    pub fn file(&self) -> Option<&str> {
        self.call_site.as_ref().map(|site| site.file.as_str())
    }

    /// Line of the call site.
    #[must_use]
    pub fn line(&self) -> Option<u32> {
        self.call_site.as_ref().map(|site| site.line)
    }

    /// Containing routine of the call site, when it was supplied.
    #[must_use]
    pub fn function(&self) -> Option<&str> {
        self.call_site
            .as_ref()
            .and_then(|site| site.function.as_deref())
    }

    /// Renders every field as pretty-printed JSON.
    ///
    /// Absent call-site fields render as empty strings and zero, so the
    /// shape of the dump never changes.
    #[must_use]
    pub fn inspect(&self) -> String {
        let message = self.message();
        let inspection = Inspection {
            data: self.payload().unwrap_or_default(),
            error_type: self.error_type(),
            filename: self.file().unwrap_or_default(),
            function_name: self.function().unwrap_or_default(),
            lineno: self.line().unwrap_or_default(),
            column: self.call_site.as_ref().map_or(0, |site| site.column),
            message: &message,
        };
        serde_json::to_string_pretty(&inspection).unwrap_or_else(|_| format!("{self:?}"))
    }
}

#[derive(Serialize)]
struct Inspection<'a> {
    data: &'a str,
    error_type: &'static str,
    filename: &'a str,
    function_name: &'a str,
    lineno: u32,
    column: u32,
    message: &'a str,
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A helper was called with an argument it cannot work with.
    #[error("invalid parameter: {0}")]
    InvalidParam(String),

    /// A runtime value did not have the requested type.
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        /// The expected type name.
        expected: String,
        /// The actual type name.
        actual: String,
    },

    /// Two entries would land on the same key.
    #[error("duplicate key: {0}")]
    DuplicateKey(String),

    /// A value could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl ErrorKind {
    /// Stable snake-case label for this kind.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::InvalidParam(_) => "invalid_param",
            Self::TypeMismatch { .. } => "type_mismatch",
            Self::DuplicateKey(_) => "duplicate_key",
            Self::Serialization(_) => "serialization",
        }
    }
}

/// Source location of the call that produced an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallSite {
    /// Source file.
    pub file: String,
    /// Line number (1-indexed).
    pub line: u32,
    /// Column number (1-indexed).
    pub column: u32,
    /// Containing routine or module path, when known.
    pub function: Option<String>,
}

impl CallSite {
    /// Creates a call site from an explicit location.
    #[must_use]
    pub fn new(file: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            file: file.into(),
            line,
            column,
            function: None,
        }
    }

    /// Captures the location of the caller.
    ///
    /// Propagates through every `#[track_caller]` frame, so a helper that is
    /// itself `#[track_caller]` reports its own caller.
    #[must_use]
    #[track_caller]
    pub fn caller() -> Self {
        let location = Location::caller();
        Self::new(location.file(), location.line(), location.column())
    }

    /// Sets the containing routine name.
    #[must_use]
    pub fn with_function(mut self, function: impl Into<String>) -> Self {
        self.function = Some(function.into());
        self
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)?;
        if let Some(function) = &self.function {
            write!(f, " in {function}")?;
        }
        Ok(())
    }
}

/// Builds a [`CallSite`] for the current source position, using the
/// enclosing module path as the routine name.
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::CallSite::new(file!(), line!(), column!()).with_function(module_path!())
    };
}
