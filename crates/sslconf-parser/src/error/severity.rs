//! Severity levels for diagnostics.
//!
//! The three levels mirror the callback contract of SAX-style parsers:
//! warnings are advisory, errors let the pass continue, and fatal errors
//! end the pass.

use std::fmt;

/// The severity level of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    /// An advisory issue; the document is still usable.
    Warning,

    /// A recoverable issue. The reader keeps going, but the configuration
    /// must not be used.
    Error,

    /// An unrecoverable issue. The reader stops at this point.
    FatalError,
}

impl Severity {
    /// Returns `true` for [`Severity::Error`] and [`Severity::FatalError`].
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error | Severity::FatalError)
    }

    /// Returns `true` if this is a fatal error.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Severity::FatalError)
    }

    /// Returns `true` if this is a warning severity.
    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::Warning)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
            Severity::FatalError => write!(f, "fatal error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_predicates() {
        assert!(Severity::Warning.is_warning());
        assert!(!Severity::Warning.is_error());
        assert!(Severity::Error.is_error());
        assert!(!Severity::Error.is_fatal());
        assert!(Severity::FatalError.is_error());
        assert!(Severity::FatalError.is_fatal());
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Warning < Severity::Error);
        assert!(Severity::Error < Severity::FatalError);
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(Severity::Warning.to_string(), "warning");
        assert_eq!(Severity::Error.to_string(), "error");
        assert_eq!(Severity::FatalError.to_string(), "fatal error");
    }
}
