// this_file: crates/scanfill-core/src/error.rs

//! Error types for the scanfill rasterizer.
//!
//! Rasterization is pure geometry, so the taxonomy is deliberately narrow:
//! storage growth can fail, callers can hand us values we refuse to accept,
//! and configuration can be wrong. Degenerate geometry (zero-length segments,
//! reversed joins, empty paths) is never an error; it just draws less.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RasterError>;

/// Main error type for scanfill
#[derive(Debug, Error)]
pub enum RasterError {
    /// Growing the edge list, active list or a coverage buffer failed
    #[error("Out of memory while growing {what} to {requested} entries")]
    OutOfMemory {
        /// Which structure was being grown.
        what: &'static str,
        /// Number of entries the structure needed.
        requested: usize,
    },

    /// A caller-supplied value was rejected
    #[error("Invalid parameter: {name} = {value}")]
    InvalidParameter {
        /// Name of the parameter.
        name: String,
        /// Offending value, formatted for display.
        value: String,
    },

    /// A coverage target with unusable dimensions
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl RasterError {
    /// Create an allocation failure for the named structure
    ///
    /// # Example
    ///
    /// ```
    /// # use scanfill_core::RasterError;
    /// let err = RasterError::out_of_memory("edge list", 1024);
    /// assert_eq!(
    ///     err.to_string(),
    ///     "Out of memory while growing edge list to 1024 entries"
    /// );
    /// ```
    pub fn out_of_memory(what: &'static str, requested: usize) -> Self {
        Self::OutOfMemory { what, requested }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(name: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            value: value.to_string(),
        }
    }

    /// Create a configuration error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config(reason.into())
    }
}
