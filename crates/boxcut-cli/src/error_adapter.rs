//! Error adapter for converting BoxcutError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI. Dimension errors
//! are rendered with a label under the offending part of the input.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use boxcut::{BoxcutError, dimension::DimensionError};

/// Adapter for a dimension parse failure.
pub struct DimensionAdapter<'a> {
    err: &'a DimensionError,
    /// The text that failed to parse
    src: &'a str,
}

impl<'a> DimensionAdapter<'a> {
    pub fn new(err: &'a DimensionError, src: &'a str) -> Self {
        Self { err, src }
    }

    fn label(&self) -> &'static str {
        match self.err {
            DimensionError::InvalidFormat { .. } => "not a dimension",
            DimensionError::InvalidNumber { .. } => "malformed number",
            DimensionError::UnsupportedUnit { .. } => "unknown unit",
            DimensionError::TrailingInput { .. } => "unexpected text",
        }
    }
}

impl fmt::Debug for DimensionAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DimensionAdapter")
            .field("err", &self.err)
            .finish()
    }
}

impl fmt::Display for DimensionAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.err)
    }
}

impl std::error::Error for DimensionAdapter<'_> {}

impl MietteDiagnostic for DimensionAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new("boxcut::dimension"))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.err.help()))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let span = self.err.span();
        let span = SourceSpan::new(span.start.into(), span.len());
        Some(Box::new(std::iter::once(
            LabeledSpan::new_primary_with_span(Some(self.label().to_string()), span),
        )))
    }
}

/// Adapter for non-diagnostic [`BoxcutError`] variants.
///
/// This adapter handles errors that don't have rich diagnostic information,
/// such as I/O errors, layout errors, configuration errors, and export errors.
pub struct ErrorAdapter<'a>(pub &'a BoxcutError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            BoxcutError::Io(_) => "boxcut::io",
            BoxcutError::Dimension { .. } => "boxcut::dimension",
            BoxcutError::Layout(_) => "boxcut::layout",
            BoxcutError::Config(_) => "boxcut::config",
            BoxcutError::Export(_) => "boxcut::export",
        };
        Some(Box::new(code))
    }
}

/// A reportable error that can be rendered by miette.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A dimension error with the offending input.
    Dimension(DimensionAdapter<'a>),
    /// A simple error without source location.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Dimension(d) => fmt::Display::fmt(d, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Dimension(_) => None,
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Dimension(d) => d.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Dimension(d) => d.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Dimension(d) => d.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Dimension(d) => d.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

/// Convert a [`BoxcutError`] into a reportable error.
pub fn to_reportable(err: &BoxcutError) -> Reportable<'_> {
    match err {
        BoxcutError::Dimension { err, src } => {
            Reportable::Dimension(DimensionAdapter::new(err, src))
        }
        _ => Reportable::Error(ErrorAdapter(err)),
    }
}
