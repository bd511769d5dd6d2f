//! Sslconf - loading SSL configuration files with parse diagnostic reporting.
//!
//! An SSL configuration document is read in a single pass by
//! [`sslconf_parser::ConfigReader`]. Problems found on the way are delivered
//! to a [`ConfigErrorReporter`], which logs them (when the security trace
//! level asks for it) and remembers whether any of them was an error. The
//! [`ConfigLoader`] checks that flag once the pass is over and rejects the
//! configuration if it is set.
//!
//! # Example
//!
//! ```
//! # use std::sync::Arc;
//! # use sslconf::{ConfigLoader, SslConfigError, TraceLevels, config::AppConfig};
//! let trace = Arc::new(TraceLevels::new(1));
//! let mut loader = ConfigLoader::new(&AppConfig::default(), trace);
//!
//! let summary = loader.load_str("ssl.xml", "<SSLConfig><client/></SSLConfig>")?;
//! assert_eq!(summary.elements(), 2);
//! # Ok::<(), SslConfigError>(())
//! ```

pub mod config;

mod error;
mod loader;
mod reporter;
mod sink;
mod trace;

pub use sslconf_parser::{self as parser, ParseSummary};

pub use error::SslConfigError;
pub use loader::ConfigLoader;
pub use reporter::{ConfigErrorReporter, format_report};
pub use sink::{LogFacade, LogSink, PARSE_TARGET};
pub use trace::{PARSE_WARNINGS_LEVEL, TraceLevels};
