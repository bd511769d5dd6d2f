//! The diagnostic callback interface driven by [`ConfigReader`](crate::ConfigReader).

use crate::error::{Diagnostic, Severity};

/// Receives diagnostics from a parse pass.
///
/// The reader calls exactly one of [`warning`](ErrorHandler::warning),
/// [`error`](ErrorHandler::error) or [`fatal_error`](ErrorHandler::fatal_error)
/// for each problem it finds, synchronously and in document order. After a
/// `fatal_error` the pass ends.
///
/// Implementations must not panic; the reader has no way to recover from a
/// failing callback.
pub trait ErrorHandler {
    /// An advisory diagnostic.
    fn warning(&mut self, diagnostic: &Diagnostic);

    /// A recoverable error. Reading continues after this call.
    fn error(&mut self, diagnostic: &Diagnostic);

    /// An unrecoverable error. No further callbacks follow in this pass.
    fn fatal_error(&mut self, diagnostic: &Diagnostic);

    /// Clear any accumulated error state before reusing the handler.
    fn reset_errors(&mut self);

    /// Dispatch `diagnostic` to the callback matching its severity.
    fn report(&mut self, diagnostic: &Diagnostic) {
        match diagnostic.severity() {
            Severity::Warning => self.warning(diagnostic),
            Severity::Error => self.error(diagnostic),
            Severity::FatalError => self.fatal_error(diagnostic),
        }
    }
}

impl<H: ErrorHandler + ?Sized> ErrorHandler for &mut H {
    fn warning(&mut self, diagnostic: &Diagnostic) {
        (**self).warning(diagnostic);
    }

    fn error(&mut self, diagnostic: &Diagnostic) {
        (**self).error(diagnostic);
    }

    fn fatal_error(&mut self, diagnostic: &Diagnostic) {
        (**self).fatal_error(diagnostic);
    }

    fn reset_errors(&mut self) {
        (**self).reset_errors();
    }
}

/// Fans every callback out to both handlers, first `A` then `B`.
impl<A: ErrorHandler, B: ErrorHandler> ErrorHandler for (A, B) {
    fn warning(&mut self, diagnostic: &Diagnostic) {
        self.0.warning(diagnostic);
        self.1.warning(diagnostic);
    }

    fn error(&mut self, diagnostic: &Diagnostic) {
        self.0.error(diagnostic);
        self.1.error(diagnostic);
    }

    fn fatal_error(&mut self, diagnostic: &Diagnostic) {
        self.0.fatal_error(diagnostic);
        self.1.fatal_error(diagnostic);
    }

    fn reset_errors(&mut self) {
        self.0.reset_errors();
        self.1.reset_errors();
    }
}
