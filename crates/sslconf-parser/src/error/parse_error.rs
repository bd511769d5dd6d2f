//! The ParseError type for wrapping reader diagnostics.

use std::fmt;

use crate::error::Diagnostic;

/// Error type for a failed parse pass.
///
/// Wraps every diagnostic reported during the pass, warnings included, in
/// the order they were reported.
#[derive(Debug, Clone)]
pub struct ParseError {
    diagnostics: Vec<Diagnostic>,
}

impl ParseError {
    /// Create a new parse error from diagnostics.
    pub fn new(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }

    /// Get all diagnostics in this error.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Number of error or fatal error diagnostics.
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity().is_error())
            .count()
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut errors = self.diagnostics.iter().filter(|d| d.severity().is_error());
        if let Some(first) = errors.next() {
            write!(f, "{}", first)?;
            let rest = errors.count();
            if rest > 0 {
                write!(f, " (+{} more)", rest)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

impl From<Diagnostic> for ParseError {
    fn from(diagnostic: Diagnostic) -> Self {
        Self {
            diagnostics: vec![diagnostic],
        }
    }
}

impl From<Vec<Diagnostic>> for ParseError {
    fn from(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_from_diagnostic() {
        let err: ParseError = Diagnostic::error("test error").into();

        assert_eq!(err.diagnostics().len(), 1);
        assert_eq!(err.diagnostics()[0].message(), "test error");
        assert_eq!(err.error_count(), 1);
    }

    #[test]
    fn test_parse_error_display_single() {
        let err: ParseError = Diagnostic::fatal("malformed root").into();

        assert_eq!(err.to_string(), "fatal error: malformed root");
    }

    #[test]
    fn test_parse_error_display_skips_warnings() {
        let diags = vec![
            Diagnostic::warning("doctype ignored"),
            Diagnostic::error("first error"),
            Diagnostic::error("second error"),
            Diagnostic::fatal("third error"),
        ];
        let err: ParseError = diags.into();

        assert_eq!(err.to_string(), "error: first error (+2 more)");
        assert_eq!(err.error_count(), 3);
        assert_eq!(err.diagnostics().len(), 4);
    }
}
