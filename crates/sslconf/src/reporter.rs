//! Parse diagnostic reporting for SSL configuration files.
//!
//! [`ConfigErrorReporter`] is the [`ErrorHandler`] registered with the
//! reader while an SSL configuration file is loaded. It does two things:
//!
//! - remembers whether any error or fatal error was reported, so the loader
//!   can refuse the configuration once the pass is over
//! - formats every diagnostic and hands it to a [`LogSink`], but only while
//!   the security trace level enables parse warnings
//!
//! The two are independent: with tracing off nothing is logged, yet errors
//! are still recorded.
//!
//! # Message format
//!
//! ```text
//! SSL configuration file parse warning.
//! quick-xml Exception: Warning at file "ssl.xml", line 10, column 3
//!    Message: deprecated attribute
//! ```
//!
//! The first line reads `parse error.` for errors and `fatal parse error.`
//! for fatal errors; the severity word on the second line is `Warning`,
//! `Error` or `Fatal error`.

use std::sync::Arc;

use log::{Level, debug};

use sslconf_parser::{
    ErrorHandler,
    error::{Diagnostic, Severity},
};

use crate::{
    config::ReportConfig,
    sink::{LogFacade, LogSink},
    trace::TraceLevels,
};

/// Error handler that records whether a parse pass saw errors and logs
/// formatted diagnostics.
///
/// One reporter belongs to one loader and is driven by one pass at a time;
/// callbacks take `&mut self` and there is no internal locking. Reuse it for
/// another pass after calling [`reset_errors`](ErrorHandler::reset_errors).
///
/// # Example
///
/// ```
/// # use std::sync::Arc;
/// # use sslconf::{ConfigErrorReporter, TraceLevels};
/// # use sslconf_parser::{ErrorHandler, error::Diagnostic};
/// let mut reporter = ConfigErrorReporter::new(Arc::new(TraceLevels::new(1)));
///
/// reporter.warning(&Diagnostic::warning("deprecated attribute").at("ssl.xml", 10, 3));
/// assert!(!reporter.saw_errors());
///
/// reporter.fatal_error(&Diagnostic::fatal("malformed root").at("ssl.xml", 1, 1));
/// assert!(reporter.saw_errors());
///
/// reporter.reset_errors();
/// assert!(!reporter.saw_errors());
/// ```
#[derive(Debug)]
pub struct ConfigErrorReporter<S = LogFacade> {
    saw_errors: bool,
    trace: Arc<TraceLevels>,
    sink: S,
    labels: ReportConfig,
}

impl ConfigErrorReporter<LogFacade> {
    /// Create a reporter that logs through the [`log`] facade.
    pub fn new(trace: Arc<TraceLevels>) -> Self {
        Self::with_sink(trace, LogFacade::default())
    }
}

impl<S: LogSink> ConfigErrorReporter<S> {
    /// Create a reporter that records messages into `sink`.
    pub fn with_sink(trace: Arc<TraceLevels>, sink: S) -> Self {
        Self {
            saw_errors: false,
            trace,
            sink,
            labels: ReportConfig::default(),
        }
    }

    /// Replace the category and parser name used in messages.
    pub fn with_labels(mut self, labels: ReportConfig) -> Self {
        self.labels = labels;
        self
    }

    /// Whether an error or fatal error was reported since creation or the
    /// last [`reset_errors`](ErrorHandler::reset_errors).
    pub fn saw_errors(&self) -> bool {
        self.saw_errors
    }

    /// The trace levels consulted on every callback.
    pub fn trace_levels(&self) -> &Arc<TraceLevels> {
        &self.trace
    }

    /// The sink messages are recorded into.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// The labels used when formatting messages.
    pub fn labels(&self) -> &ReportConfig {
        &self.labels
    }

    fn forward(&self, severity: Severity, diagnostic: &Diagnostic) {
        if !self.trace.parse_warnings() {
            return;
        }

        let message = format_report(&self.labels, severity, diagnostic);
        self.sink.record(log_level(severity), &message);
    }
}

impl<S: LogSink> ErrorHandler for ConfigErrorReporter<S> {
    fn warning(&mut self, diagnostic: &Diagnostic) {
        self.forward(Severity::Warning, diagnostic);
    }

    fn error(&mut self, diagnostic: &Diagnostic) {
        self.saw_errors = true;
        self.forward(Severity::Error, diagnostic);
    }

    fn fatal_error(&mut self, diagnostic: &Diagnostic) {
        self.saw_errors = true;
        self.forward(Severity::FatalError, diagnostic);
    }

    fn reset_errors(&mut self) {
        debug!(saw_errors = self.saw_errors; "Resetting configuration error state");
        self.saw_errors = false;
    }
}

/// Format a diagnostic as the three-line configuration parse report.
///
/// `severity` selects the wording and is normally the diagnostic's own
/// severity; the callback that received the diagnostic decides.
pub fn format_report(labels: &ReportConfig, severity: Severity, diagnostic: &Diagnostic) -> String {
    let (header, label) = match severity {
        Severity::Warning => ("parse warning", "Warning"),
        Severity::Error => ("parse error", "Error"),
        Severity::FatalError => ("fatal parse error", "Fatal error"),
    };

    format!(
        "{category} configuration file {header}.\n\
         {parser} Exception: {label} at file \"{location}\", line {line}, column {column}\n   \
         Message: {message}",
        category = labels.category(),
        parser = labels.parser_name(),
        location = diagnostic.source_location(),
        line = diagnostic.line(),
        column = diagnostic.column(),
        message = diagnostic.message(),
    )
}

fn log_level(severity: Severity) -> Level {
    match severity {
        Severity::Warning => Level::Warn,
        Severity::Error | Severity::FatalError => Level::Error,
    }
}
