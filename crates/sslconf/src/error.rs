//! Error types for SSL configuration loading.

use std::{io, path::PathBuf};

use thiserror::Error;

use sslconf_parser::error::ParseError;

/// The main error type for SSL configuration loading.
///
/// # Diagnostic Variants
///
/// `Invalid` carries every diagnostic of the failed pass together with the
/// source text, so front ends can render snippets.
#[derive(Debug, Error)]
pub enum SslConfigError {
    #[error("failed to read SSL configuration `{}`: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("SSL configuration `{location}` is invalid: {err}")]
    Invalid {
        location: String,
        err: ParseError,
        src: String,
    },
}

impl SslConfigError {
    /// Create a new `Invalid` error with the associated source text.
    pub fn new_invalid(location: impl Into<String>, err: ParseError, src: impl Into<String>) -> Self {
        Self::Invalid {
            location: location.into(),
            err,
            src: src.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use sslconf_parser::error::Diagnostic;

    use super::*;

    #[test]
    fn test_invalid_display() {
        let err = SslConfigError::new_invalid(
            "ssl.xml",
            Diagnostic::fatal("document has no root element").into(),
            "",
        );

        assert_eq!(
            err.to_string(),
            "SSL configuration `ssl.xml` is invalid: fatal error: document has no root element"
        );
    }

    #[test]
    fn test_io_display() {
        let err = SslConfigError::Io {
            path: PathBuf::from("missing.xml"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };

        assert_eq!(
            err.to_string(),
            "failed to read SSL configuration `missing.xml`: not found"
        );
    }
}
