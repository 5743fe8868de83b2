//! Error types for boxcut operations.
//!
//! This module provides the main error type [`BoxcutError`] which wraps
//! the error conditions that can occur while building a pattern.

use std::io;

use thiserror::Error;

use crate::dimension::DimensionError;

/// The main error type for boxcut operations.
///
/// # Diagnostic Variants
///
/// The `Dimension` variant keeps the text that failed to parse, so callers
/// can point at the offending characters using [`DimensionError::span`].
#[derive(Debug, Error)]
pub enum BoxcutError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Dimension { err: DimensionError, src: String },

    #[error("Layout error: {0}")]
    Layout(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error + Send + Sync>),
}

impl From<crate::export::Error> for BoxcutError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl BoxcutError {
    /// Create a new `Dimension` error with the associated source text.
    pub fn new_dimension_error(err: DimensionError, src: impl Into<String>) -> Self {
        Self::Dimension {
            err,
            src: src.into(),
        }
    }
}
