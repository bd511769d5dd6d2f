//! The diagnostic record passed to error handlers.

use std::fmt;

use crate::{error::Severity, span::Span};

/// A single problem found in a configuration file.
///
/// Carries the source location the problem was found in (usually a file
/// path), a 1-based line and column, and the message text. A byte [`Span`]
/// is attached when the reader knows the exact range in the source, which
/// lets front ends render a snippet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    severity: Severity,
    source_location: String,
    line: u64,
    column: u64,
    message: String,
    span: Option<Span>,
}

impl Diagnostic {
    /// Create a warning diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// Create an error diagnostic.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Create a fatal error diagnostic.
    pub fn fatal(message: impl Into<String>) -> Self {
        Self::new(Severity::FatalError, message)
    }

    /// Create a new diagnostic with the given severity and message.
    ///
    /// The location starts out empty at line 0, column 0; use
    /// [`Diagnostic::at`] to set it.
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            source_location: String::new(),
            line: 0,
            column: 0,
            message: message.into(),
            span: None,
        }
    }

    /// Set the source location, line and column.
    pub fn at(mut self, source_location: impl Into<String>, line: u64, column: u64) -> Self {
        self.source_location = source_location.into();
        self.line = line;
        self.column = column;
        self
    }

    /// Attach the byte range in the source text.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Get the severity of this diagnostic.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Get the source location (file path or system identifier).
    pub fn source_location(&self) -> &str {
        &self.source_location
    }

    /// Get the 1-based line number.
    pub fn line(&self) -> u64 {
        self.line
    }

    /// Get the 1-based column number.
    pub fn column(&self) -> u64 {
        self.column
    }

    /// Get the message text.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the byte range in the source, if known.
    pub fn span(&self) -> Option<Span> {
        self.span
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Format: "error: message" or "error: ssl.xml:3:7: message"
        write!(f, "{}: ", self.severity)?;
        if !self.source_location.is_empty() {
            write!(f, "{}:{}:{}: ", self.source_location, self.line, self.column)?;
        }
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Diagnostic {}
