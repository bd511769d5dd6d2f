//! # Sslconf Parser
//!
//! Reads SSL configuration documents and reports well-formedness problems
//! through the [`ErrorHandler`] callback interface.
//!
//! The reader is deliberately shallow: it checks that a file is a single,
//! well-formed XML document and leaves the meaning of its elements to the
//! caller. Each problem is reported as a [`Diagnostic`](error::Diagnostic)
//! with a source location, a 1-based line and column, and a message.
//!
//! ## Usage
//!
//! ```
//! # use sslconf_parser::{ConfigReader, error::DiagnosticCollector};
//! let mut collector = DiagnosticCollector::new();
//! let summary = ConfigReader::new("ssl.xml").parse("<SSLConfig/>", &mut collector);
//!
//! assert_eq!(summary.errors(), 0);
//! assert!(collector.finish().is_ok());
//! ```

pub mod error;

mod handler;
mod position;
mod reader;
mod span;

pub use handler::ErrorHandler;
pub use position::LineIndex;
pub use reader::{ConfigReader, ENGINE_NAME, ParseSummary};
pub use span::Span;
