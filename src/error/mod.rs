//! Error types and diagnostics.
//!
//! Building a query never fails. Running one can: the session may be empty,
//! or the XPath engine may reject the generated expression. Both are ordinary
//! outcomes of [`QuerySelector::select`](crate::QuerySelector::select) and are
//! reported as [`SelectError`].
//!
//! HTML parsing is error-tolerant. Problems the parser recovered from are
//! kept as [`ParseDiagnostic`]s on the document rather than surfaced as errors.

use std::fmt;

/// A single problem the HTML parser recovered from.
///
/// Every diagnostic describes markup that was repaired; none of them stop
/// the document from loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDiagnostic {
    /// Human-readable message, as reported by the parser.
    pub message: String,
}

impl fmt::Display for ParseDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "recovered: {}", self.message)
    }
}

/// The error type returned when a selection cannot be evaluated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectError {
    /// No tag or attribute was selected before the terminal call, so there
    /// is nothing to evaluate.
    EmptyQuery,

    /// The engine rejected the generated expression.
    Compile {
        /// The expression that was rejected.
        query: String,
        /// The engine's message.
        message: String,
    },

    /// The expression compiled but evaluating it failed, or it produced
    /// something other than nodes.
    Evaluation {
        /// The expression being evaluated.
        query: String,
        /// The engine's message.
        message: String,
    },

    /// The parsed HTML could not be loaded into the engine.
    Document {
        /// The engine's message.
        message: String,
    },
}

impl fmt::Display for SelectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyQuery => write!(f, "empty query: nothing was selected"),
            Self::Compile { query, message } => {
                write!(f, "invalid query {query:?}: {message}")
            }
            Self::Evaluation { query, message } => {
                write!(f, "failed to evaluate {query:?}: {message}")
            }
            Self::Document { message } => {
                write!(f, "failed to load document: {message}")
            }
        }
    }
}

impl std::error::Error for SelectError {}
