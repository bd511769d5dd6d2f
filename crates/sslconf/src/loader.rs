//! SSL configuration file loading.
//!
//! The loader owns one [`ConfigErrorReporter`] for its whole lifetime and
//! runs one parse pass per load. Before each pass the reporter is reset;
//! after the pass its error flag alone decides whether the configuration is
//! accepted.

use std::{fs, path::Path, sync::Arc};

use log::{debug, info, warn};

use sslconf_parser::{
    ConfigReader, ErrorHandler, LineIndex, ParseSummary, Span,
    error::{Diagnostic, DiagnosticCollector, ParseError},
};

use crate::{
    config::AppConfig,
    error::SslConfigError,
    reporter::ConfigErrorReporter,
    sink::{LogFacade, LogSink},
    trace::TraceLevels,
};

/// Validates SSL configuration documents.
///
/// # Example
///
/// ```
/// # use std::sync::Arc;
/// # use sslconf::{ConfigLoader, TraceLevels, config::AppConfig};
/// let mut loader = ConfigLoader::new(&AppConfig::default(), Arc::new(TraceLevels::default()));
///
/// assert!(loader.load_str("ssl.xml", "<SSLConfig/>").is_ok());
/// assert!(loader.load_str("ssl.xml", "<SSLConfig>").is_err());
/// ```
#[derive(Debug)]
pub struct ConfigLoader<S = LogFacade> {
    reporter: ConfigErrorReporter<S>,
}

impl ConfigLoader<LogFacade> {
    /// Create a loader that logs through the [`log`] facade.
    ///
    /// Report labels come from `config`; `trace` is shared with whoever
    /// adjusts trace levels at runtime.
    pub fn new(config: &AppConfig, trace: Arc<TraceLevels>) -> Self {
        Self::with_reporter(ConfigErrorReporter::new(trace).with_labels(config.report().clone()))
    }
}

impl<S: LogSink> ConfigLoader<S> {
    /// Create a loader around an existing reporter.
    pub fn with_reporter(reporter: ConfigErrorReporter<S>) -> Self {
        Self { reporter }
    }

    /// The reporter used for every pass.
    pub fn reporter(&self) -> &ConfigErrorReporter<S> {
        &self.reporter
    }

    /// Validate a configuration document held in memory.
    ///
    /// `location` names the document in diagnostics.
    ///
    /// # Errors
    ///
    /// Returns [`SslConfigError::Invalid`] when the pass reported at least one
    /// error or fatal error. Warnings alone do not fail the load.
    pub fn load_str(&mut self, location: &str, text: &str) -> Result<ParseSummary, SslConfigError> {
        info!(location; "Validating SSL configuration");

        self.reporter.reset_errors();
        let mut collector = DiagnosticCollector::new();
        let summary =
            ConfigReader::new(location).parse(text, &mut (&mut self.reporter, &mut collector));

        if self.reporter.saw_errors() {
            warn!(location, errors = summary.errors(); "SSL configuration rejected");
            let err = ParseError::new(collector.into_diagnostics());
            return Err(SslConfigError::new_invalid(location, err, text));
        }

        debug!(
            location,
            elements = summary.elements(),
            warnings = summary.warnings();
            "SSL configuration accepted"
        );

        Ok(summary)
    }

    /// Read and validate a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`SslConfigError::Io`] if the file cannot be read, and
    /// [`SslConfigError::Invalid`] as for [`load_str`](Self::load_str). A file
    /// that is not valid UTF-8 is reported to the reporter as a fatal error
    /// and rejected as invalid.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<ParseSummary, SslConfigError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| SslConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let location = path.display().to_string();

        match String::from_utf8(bytes) {
            Ok(text) => self.load_str(&location, &text),
            Err(err) => Err(self.reject_undecodable(&location, err.as_bytes(), err.utf8_error())),
        }
    }

    fn reject_undecodable(
        &mut self,
        location: &str,
        bytes: &[u8],
        err: std::str::Utf8Error,
    ) -> SslConfigError {
        let offset = err.valid_up_to();
        let text = String::from_utf8_lossy(bytes).into_owned();
        // The valid prefix is unchanged by lossy decoding.
        let (line, column) = LineIndex::new(&text).position(offset);
        let diagnostic = Diagnostic::fatal(format!(
            "invalid UTF-8 byte sequence at byte {offset}; configuration files are read as UTF-8"
        ))
        .at(location, line, column)
        .with_span(Span::new(offset..offset + char::REPLACEMENT_CHARACTER.len_utf8()));

        warn!(location, offset; "SSL configuration is not valid UTF-8");
        self.reporter.reset_errors();
        self.reporter.fatal_error(&diagnostic);

        SslConfigError::new_invalid(location, ParseError::from(diagnostic), text)
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, io::Write};

    use log::Level;

    use super::*;

    #[derive(Default)]
    struct Recording(RefCell<Vec<String>>);

    impl LogSink for Recording {
        fn record(&self, _level: Level, message: &str) {
            self.0.borrow_mut().push(message.to_string());
        }
    }

    fn loader(level: u8, sink: &Recording) -> ConfigLoader<&Recording> {
        ConfigLoader::with_reporter(ConfigErrorReporter::with_sink(
            Arc::new(TraceLevels::new(level)),
            sink,
        ))
    }

    #[test]
    fn test_valid_document() {
        let sink = Recording::default();
        let mut loader = loader(1, &sink);

        let summary = loader
            .load_str("ssl.xml", "<SSLConfig><server/></SSLConfig>")
            .unwrap();

        assert_eq!(summary.elements(), 2);
        assert!(!loader.reporter().saw_errors());
        assert!(sink.0.borrow().is_empty());
    }

    #[test]
    fn test_warnings_do_not_fail() {
        let sink = Recording::default();
        let mut loader = loader(1, &sink);

        let summary = loader
            .load_str("ssl.xml", "<!DOCTYPE SSLConfig><SSLConfig/>")
            .unwrap();

        assert_eq!(summary.warnings(), 1);
        let messages = sink.0.borrow();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].starts_with("SSL configuration file parse warning."));
    }

    #[test]
    fn test_invalid_document_keeps_all_diagnostics() {
        let sink = Recording::default();
        let mut loader = loader(1, &sink);

        let err = loader
            .load_str("ssl.xml", "<!DOCTYPE x><a/><b/>")
            .unwrap_err();

        match err {
            SslConfigError::Invalid { location, err, src } => {
                assert_eq!(location, "ssl.xml");
                assert_eq!(err.diagnostics().len(), 2);
                assert_eq!(err.error_count(), 1);
                assert_eq!(src, "<!DOCTYPE x><a/><b/>");
            }
            other => panic!("Expected Invalid, got {other:?}"),
        }
        assert_eq!(sink.0.borrow().len(), 2);
    }

    #[test]
    fn test_reporter_reset_between_loads() {
        let sink = Recording::default();
        let mut loader = loader(0, &sink);

        assert!(loader.load_str("bad.xml", "").is_err());
        assert!(loader.reporter().saw_errors());

        assert!(loader.load_str("good.xml", "<SSLConfig/>").is_ok());
        assert!(!loader.reporter().saw_errors());
    }

    #[test]
    fn test_fatal_error_rejected_even_when_silent() {
        let sink = Recording::default();
        let mut loader = loader(0, &sink);

        let result = loader.load_str("ssl.xml", "<SSLConfig><client></SSLConfig>");

        assert!(matches!(result, Err(SslConfigError::Invalid { .. })));
        assert!(sink.0.borrow().is_empty());
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "<SSLConfig>\n  <client/>\n</SSLConfig>\n").unwrap();

        let sink = Recording::default();
        let summary = loader(1, &sink).load_file(file.path()).unwrap();

        assert_eq!(summary.elements(), 2);
    }

    #[test]
    fn test_load_file_uses_path_as_location() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "<SSLConfig>").unwrap();

        let sink = Recording::default();
        let err = loader(1, &sink).load_file(file.path()).unwrap_err();

        let expected = file.path().display().to_string();
        assert!(matches!(&err, SslConfigError::Invalid { location, .. } if *location == expected));
        assert!(sink.0.borrow()[0].contains(&format!("at file \"{expected}\"")));
    }

    #[test]
    fn test_load_file_with_latin1_bytes_is_reported() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"<?xml version=\"1.0\" encoding=\"ISO-8859-1\"?><SSLConfig a=\"caf\xe9\"/>")
            .unwrap();

        let sink = Recording::default();
        let mut loader = loader(1, &sink);
        let err = loader.load_file(file.path()).unwrap_err();

        match &err {
            SslConfigError::Invalid { err, .. } => {
                assert_eq!(err.error_count(), 1);
                assert!(err.diagnostics()[0].severity().is_fatal());
            }
            other => panic!("Expected Invalid, got {other:?}"),
        }
        assert!(loader.reporter().saw_errors());
        let messages = sink.0.borrow();
        assert_eq!(messages.len(), 1);
        for needle in ["fatal parse error", "Fatal error", "line 1", "column 61", "UTF-8"] {
            assert!(messages[0].contains(needle), "missing `{needle}` in {:?}", messages[0]);
        }
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let sink = Recording::default();

        let err = loader(1, &sink)
            .load_file(dir.path().join("missing.xml"))
            .unwrap_err();

        assert!(matches!(err, SslConfigError::Io { .. }));
    }
}
