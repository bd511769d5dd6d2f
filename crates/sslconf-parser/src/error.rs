//! Diagnostic types reported while reading an SSL configuration file.
//!
//! The reader never fails on its own: every problem it finds in a document
//! becomes a [`Diagnostic`] delivered to an
//! [`ErrorHandler`](crate::ErrorHandler). Handlers that need to keep the
//! diagnostics around can use the [`DiagnosticCollector`], which turns the
//! accumulated errors into a [`ParseError`].
//!
//! # Example
//!
//! ```
//! # use sslconf_parser::error::{Diagnostic, Severity};
//! let diag = Diagnostic::error("unexpected text after root element")
//!     .at("ssl.xml", 4, 2);
//!
//! assert_eq!(diag.severity(), Severity::Error);
//! assert_eq!(diag.line(), 4);
//! ```

mod collector;
mod diagnostic;
mod parse_error;
mod severity;

pub use collector::DiagnosticCollector;
pub use diagnostic::Diagnostic;
pub use parse_error::ParseError;
pub use severity::Severity;
