#![forbid(unsafe_code)]

//! Error model.
//!
//! Interaction itself never fails: unknown lengths and ids degrade to
//! "nothing happens this frame". Errors only come from configuration, which
//! is validated once when a strip is built.

use std::fmt;

use tabstrip_layout::LayoutConfigError;

/// Top-level error.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The layout configuration cannot produce sound geometry.
    Layout(LayoutConfigError),
}

/// Standard result type for tabstrip APIs.
pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Layout(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Layout(err) => Some(err),
        }
    }
}

impl From<LayoutConfigError> for Error {
    fn from(err: LayoutConfigError) -> Self {
        Self::Layout(err)
    }
}
