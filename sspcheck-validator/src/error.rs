use std::fmt;
use std::io;
use std::ops::Range;
use std::path::PathBuf;

use thiserror::Error;

/// An engine diagnostic, detached from the engine's own error types.
///
/// The underlying XSLT/XPath engine reports spanned, coded errors. Callers
/// of this crate only ever see this carrier, with the engine's native
/// diagnostic text preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Error code, such as an XPath/XSLT specification code.
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// Longer explanatory note, possibly empty.
    pub note: String,
    /// Byte range into the stylesheet source, when the engine knows it.
    pub span: Option<Range<usize>>,
}

impl Diagnostic {
    pub(crate) fn from_engine(e: xee_xpath::error::Error) -> Self {
        Self {
            code: e.error.code().to_string(),
            message: e.error.message().to_string(),
            note: e.error.note().to_string(),
            span: e.span.map(|span| span.range()),
        }
    }

    pub(crate) fn from_engine_value(e: xee_xpath::error::ErrorValue) -> Self {
        Self {
            code: e.code().to_string(),
            message: e.message().to_string(),
            note: e.note().to_string(),
            span: None,
        }
    }

    /// A diagnostic that is only a message, without code, note or span.
    pub(crate) fn message(message: impl Into<String>) -> Self {
        Self {
            code: String::new(),
            message: message.into(),
            note: String::new(),
            span: None,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.code.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{} {}", self.code, self.message)
        }
    }
}

/// Failure to turn a stylesheet file into a compiled program.
///
/// Fatal to stylesheet loading; a validator is never constructed from a
/// stylesheet that failed to compile.
#[derive(Debug, Error)]
pub enum CompilationError {
    #[error("cannot read stylesheet {path}: {error}")]
    Read {
        path: PathBuf,
        #[source]
        error: io::Error,
    },
    #[error("cannot compile stylesheet {path}: {diagnostic}")]
    Invalid { path: PathBuf, diagnostic: Diagnostic },
}

/// Failure of a single validate call.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The input document does not exist or cannot be read.
    #[error("cannot read input document {path}: {error}")]
    InputNotFound {
        path: PathBuf,
        #[source]
        error: io::Error,
    },
    /// The engine failed during the transformation: malformed input XML, a
    /// runtime XSLT error, or an unresolvable required resource.
    #[error("transformation failed: {diagnostic}")]
    Transform { diagnostic: Diagnostic },
    /// The extraction stage failed. This is a defect, not a user input
    /// problem; the extraction query is fixed.
    #[error(transparent)]
    Query(#[from] QueryError),
}

/// Failure in the fixed failed-assertion extraction query.
///
/// The query never varies, so any of these indicates a programming defect
/// rather than a problem with the validated document.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("failed-assert query does not compile: {diagnostic}")]
    Compile { diagnostic: Diagnostic },
    #[error("failed-assert query cannot be evaluated: {diagnostic}")]
    Evaluate { diagnostic: Diagnostic },
    #[error("validation report is not well-formed XML: {message}")]
    MalformedReport { message: String },
}
