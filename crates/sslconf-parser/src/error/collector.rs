//! Collector for accumulating diagnostics during a parse pass.
//!
//! The [`DiagnosticCollector`] is an [`ErrorHandler`] that keeps every
//! diagnostic it receives, so callers can inspect or render them after the
//! pass instead of only learning that something went wrong.

use crate::{
    ErrorHandler,
    error::{Diagnostic, ParseError},
};

/// An [`ErrorHandler`] that stores the diagnostics of one parse pass.
///
/// # Example
///
/// ```
/// # use sslconf_parser::{ConfigReader, error::DiagnosticCollector};
/// let mut collector = DiagnosticCollector::new();
/// ConfigReader::new("ssl.xml").parse("<ssl>", &mut collector);
///
/// assert!(collector.has_errors());
/// assert!(collector.finish().is_err());
/// ```
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
    has_errors: bool,
}

impl DiagnosticCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a diagnostic to this collector.
    ///
    /// If it is an error or fatal error the collector is marked as having
    /// errors.
    pub fn emit(&mut self, diagnostic: Diagnostic) {
        if diagnostic.severity().is_error() {
            self.has_errors = true;
        }
        self.diagnostics.push(diagnostic);
    }

    /// Whether an error or fatal error has been collected.
    pub fn has_errors(&self) -> bool {
        self.has_errors
    }

    /// All diagnostics collected so far.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Consume the collector and return every diagnostic in report order.
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    /// Finish collection and return a result.
    ///
    /// - If there are errors, returns `Err(ParseError)` with all diagnostics.
    /// - Otherwise returns the warnings that were collected.
    pub fn finish(self) -> Result<Vec<Diagnostic>, ParseError> {
        if self.has_errors {
            Err(ParseError::new(self.diagnostics))
        } else {
            Ok(self.diagnostics)
        }
    }
}

impl ErrorHandler for DiagnosticCollector {
    fn warning(&mut self, diagnostic: &Diagnostic) {
        self.emit(diagnostic.clone());
    }

    fn error(&mut self, diagnostic: &Diagnostic) {
        self.emit(diagnostic.clone());
    }

    fn fatal_error(&mut self, diagnostic: &Diagnostic) {
        self.emit(diagnostic.clone());
    }

    fn reset_errors(&mut self) {
        self.diagnostics.clear();
        self.has_errors = false;
    }
}
