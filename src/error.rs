//! Unified error types for sbom-compare.
//!
//! Module-level errors ([`ParseError`], [`ReportError`], [`ConfigError`]) are
//! folded into [`SbomCompareError`] with a context string describing where the
//! failure happened.

use crate::config::ConfigError;
use crate::parsers::ParseError;
use crate::reports::ReportError;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for sbom-compare operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SbomCompareError {
    /// Errors while loading an SBOM into a package mapping
    #[error("Failed to load SBOM: {context}")]
    Parse {
        context: String,
        #[source]
        source: ParseError,
    },

    /// Errors during report rendering
    #[error("Report generation failed: {context}")]
    Report {
        context: String,
        #[source]
        source: ReportError,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Convenient Result type for sbom-compare operations
pub type Result<T> = std::result::Result<T, SbomCompareError>;

impl SbomCompareError {
    /// Create a parse error with context
    pub fn parse(context: impl Into<String>, source: ParseError) -> Self {
        Self::Parse {
            context: context.into(),
            source,
        }
    }

    /// Create a report error with context
    pub fn report(context: impl Into<String>, source: ReportError) -> Self {
        Self::Report {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let message = format!("{source}");
        Self::Io {
            path: Some(path.into()),
            message,
            source,
        }
    }
}

impl From<std::io::Error> for SbomCompareError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<ParseError> for SbomCompareError {
    fn from(err: ParseError) -> Self {
        Self::parse(String::new(), err)
    }
}

impl From<ReportError> for SbomCompareError {
    fn from(err: ReportError) -> Self {
        Self::report(String::new(), err)
    }
}

impl From<ConfigError> for SbomCompareError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

/// Extension trait for adding context to errors.
///
/// Context chains outermost first: `"outer: inner: original"`.
///
/// ```ignore
/// use sbom_compare::error::ErrorContext;
///
/// let mapping = loader
///     .load_str(&content)
///     .with_context(|| format!("loading {}", path.display()))?;
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<SbomCompareError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

fn add_context_to_error(err: SbomCompareError, new_ctx: &str) -> SbomCompareError {
    match err {
        SbomCompareError::Parse {
            context: existing,
            source,
        } => SbomCompareError::Parse {
            context: chain_context(new_ctx, &existing),
            source,
        },
        SbomCompareError::Report {
            context: existing,
            source,
        } => SbomCompareError::Report {
            context: chain_context(new_ctx, &existing),
            source,
        },
        SbomCompareError::Io {
            path,
            message,
            source,
        } => SbomCompareError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        SbomCompareError::Config(msg) => SbomCompareError::Config(chain_context(new_ctx, &msg)),
    }
}

/// Chain two context strings, skipping an empty existing context.
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}
