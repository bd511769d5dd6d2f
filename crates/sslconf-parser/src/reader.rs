//! Single-pass well-formedness reader for SSL configuration files.
//!
//! [`ConfigReader`] walks a document with [`quick_xml`] and turns every
//! problem it sees into a callback on an [`ErrorHandler`]. It does not
//! build a tree and knows nothing about the configuration schema; the only
//! checks are the ones needed to decide whether the file is a usable XML
//! document:
//!
//! - syntax errors, mismatched end tags and malformed or duplicate
//!   attributes end the pass with a fatal error
//! - a missing root element, or elements left open at end of input, are fatal
//! - a second root element and stray text outside the root are errors
//! - a `DOCTYPE`, a version other than `1.0`, or a non UTF-8 encoding
//!   declaration produce warnings

use std::borrow::Cow;

use log::{debug, trace};
use quick_xml::{
    Reader,
    events::{BytesDecl, BytesStart, Event},
};

use crate::{
    ErrorHandler,
    error::{Diagnostic, Severity},
    position::LineIndex,
    span::Span,
};

/// Name of the XML engine behind [`ConfigReader`], as shown in reports.
pub const ENGINE_NAME: &str = "quick-xml";

/// Counts gathered during one parse pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseSummary {
    elements: usize,
    warnings: usize,
    errors: usize,
    fatal: bool,
}

impl ParseSummary {
    /// Number of elements opened during the pass.
    pub fn elements(&self) -> usize {
        self.elements
    }

    /// Number of warnings reported.
    pub fn warnings(&self) -> usize {
        self.warnings
    }

    /// Number of errors reported, fatal errors included.
    pub fn errors(&self) -> usize {
        self.errors
    }

    /// Whether the pass ended on a fatal error.
    pub fn is_fatal(&self) -> bool {
        self.fatal
    }
}

/// Reads one configuration document and reports diagnostics.
///
/// # Example
///
/// ```
/// # use sslconf_parser::{ConfigReader, error::DiagnosticCollector};
/// let reader = ConfigReader::new("ssl.xml");
/// let mut collector = DiagnosticCollector::new();
///
/// let summary = reader.parse("<ssl><client/></ssl>", &mut collector);
///
/// assert_eq!(summary.elements(), 2);
/// assert!(collector.diagnostics().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigReader {
    source_location: String,
}

impl ConfigReader {
    /// Create a reader whose diagnostics name `source_location`.
    pub fn new(source_location: impl Into<String>) -> Self {
        Self {
            source_location: source_location.into(),
        }
    }

    /// The location attached to every diagnostic.
    pub fn source_location(&self) -> &str {
        &self.source_location
    }

    /// Read `text` and report each problem to `handler`.
    ///
    /// The handler is not reset first; callers reusing a handler across
    /// passes call [`ErrorHandler::reset_errors`] themselves.
    pub fn parse(&self, text: &str, handler: &mut dyn ErrorHandler) -> ParseSummary {
        debug!(location = self.source_location.as_str(), bytes = text.len(); "Reading configuration document");

        let mut pass = Pass {
            location: &self.source_location,
            index: LineIndex::new(text),
            handler,
            summary: ParseSummary::default(),
        };

        let mut reader = Reader::from_str(text);
        let mut open: Vec<String> = Vec::new();
        let mut root_seen = false;

        loop {
            let start = clamp_offset(reader.buffer_position(), text.len());
            let event = reader.read_event();
            let end = clamp_offset(reader.buffer_position(), text.len());
            let span = Span::new(start..end);

            match event {
                Ok(Event::Decl(decl)) => pass.check_declaration(&decl, span),
                Ok(Event::DocType(_)) => pass.report(
                    Severity::Warning,
                    span,
                    "DOCTYPE declaration ignored; DTD validation is not supported".to_string(),
                ),
                Ok(Event::Start(element)) => {
                    let name = element_name(element.name().as_ref());
                    pass.open_element(&name, open.is_empty(), &mut root_seen, span);
                    open.push(name);
                    if !pass.check_attributes(&element, span) {
                        break;
                    }
                }
                Ok(Event::Empty(element)) => {
                    let name = element_name(element.name().as_ref());
                    pass.open_element(&name, open.is_empty(), &mut root_seen, span);
                    if !pass.check_attributes(&element, span) {
                        break;
                    }
                }
                Ok(Event::End(_)) => {
                    open.pop();
                }
                Ok(Event::Text(content)) if open.is_empty() => {
                    if let Some(skip) = content.iter().position(|b| !b.is_ascii_whitespace()) {
                        pass.report(
                            Severity::Error,
                            Span::new(start + skip..end),
                            "text is not allowed outside the root element".to_string(),
                        );
                    }
                }
                Ok(Event::CData(_)) if open.is_empty() => pass.report(
                    Severity::Error,
                    span,
                    "CDATA section is not allowed outside the root element".to_string(),
                ),
                Ok(Event::Eof) => {
                    if let Some(name) = open.last() {
                        pass.report(
                            Severity::FatalError,
                            Span::new(end..end),
                            format!("element `{name}` is not closed before end of input"),
                        );
                    } else if !root_seen {
                        pass.report(
                            Severity::FatalError,
                            Span::new(end..end),
                            "document has no root element".to_string(),
                        );
                    }
                    break;
                }
                Ok(other) => {
                    trace!(event:? = other; "Skipping event");
                }
                Err(err) => {
                    let at = clamp_offset(reader.error_position(), text.len());
                    pass.report(Severity::FatalError, Span::new(at..end), err.to_string());
                    break;
                }
            }
        }

        debug!(
            location = self.source_location.as_str(),
            elements = pass.summary.elements,
            warnings = pass.summary.warnings,
            errors = pass.summary.errors;
            "Finished reading configuration document"
        );

        pass.summary
    }
}

/// State of one running pass.
struct Pass<'r, 'h> {
    location: &'r str,
    index: LineIndex<'r>,
    handler: &'h mut dyn ErrorHandler,
    summary: ParseSummary,
}

impl Pass<'_, '_> {
    fn report(&mut self, severity: Severity, span: Span, message: String) {
        let (line, column) = self.index.position(span.start());
        let diagnostic = Diagnostic::new(severity, message)
            .at(self.location, line, column)
            .with_span(span);

        match severity {
            Severity::Warning => {
                self.summary.warnings += 1;
                self.handler.warning(&diagnostic);
            }
            Severity::Error => {
                self.summary.errors += 1;
                self.handler.error(&diagnostic);
            }
            Severity::FatalError => {
                self.summary.errors += 1;
                self.summary.fatal = true;
                self.handler.fatal_error(&diagnostic);
            }
        }
    }

    fn open_element(&mut self, name: &str, at_top_level: bool, root_seen: &mut bool, span: Span) {
        self.summary.elements += 1;
        if !at_top_level {
            return;
        }

        if *root_seen {
            self.report(
                Severity::Error,
                span,
                format!("document has more than one root element; found `{name}`"),
            );
        }
        *root_seen = true;
    }

    /// Returns `false` once a fatal attribute problem has been reported.
    fn check_attributes(&mut self, element: &BytesStart<'_>, span: Span) -> bool {
        for attribute in element.attributes() {
            match attribute {
                Ok(attribute) if attribute.value.contains(&b'<') => {
                    self.report(
                        Severity::FatalError,
                        span,
                        format!(
                            "value of attribute `{}` must not contain `<`",
                            String::from_utf8_lossy(attribute.key.as_ref())
                        ),
                    );
                    return false;
                }
                Ok(_) => {}
                Err(err) => {
                    self.report(
                        Severity::FatalError,
                        span,
                        format!("malformed attribute: {err}"),
                    );
                    return false;
                }
            }
        }
        true
    }

    fn check_declaration(&mut self, decl: &BytesDecl<'_>, span: Span) {
        match decl.version() {
            Ok(version) if version.as_ref() != b"1.0".as_slice() => self.report(
                Severity::Warning,
                span,
                format!(
                    "XML version `{}` is not supported; reading as 1.0",
                    String::from_utf8_lossy(&version)
                ),
            ),
            Ok(_) => {}
            Err(err) => self.report(
                Severity::Error,
                span,
                format!("malformed XML declaration: {err}"),
            ),
        }

        match decl.encoding() {
            Some(Ok(encoding)) if !is_utf8_label(&encoding) => self.report(
                Severity::Warning,
                span,
                format!(
                    "declared encoding `{}` ignored; the file is read as UTF-8",
                    String::from_utf8_lossy(&encoding)
                ),
            ),
            Some(Err(err)) => self.report(
                Severity::Error,
                span,
                format!("malformed encoding declaration: {err}"),
            ),
            _ => {}
        }
    }
}

fn is_utf8_label(label: &Cow<'_, [u8]>) -> bool {
    label.eq_ignore_ascii_case(b"utf-8") || label.eq_ignore_ascii_case(b"utf8")
}

fn element_name(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).into_owned()
}

fn clamp_offset<P>(position: P, limit: usize) -> usize
where
    usize: TryFrom<P>,
{
    usize::try_from(position).map_or(limit, |offset| offset.min(limit))
}
