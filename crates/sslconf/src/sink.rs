//! Destinations for formatted report messages.

use std::sync::Arc;

use log::Level;

/// Log target used by [`LogFacade`].
pub const PARSE_TARGET: &str = "sslconf::parse";

/// Records a formatted message at a severity.
///
/// Recording is best effort: implementations must not panic, and there is
/// no way to report a failure back to the caller.
pub trait LogSink {
    /// Record `message` at `level`.
    fn record(&self, level: Level, message: &str);
}

/// Forwards messages to the [`log`] facade.
#[derive(Debug, Clone, Copy)]
pub struct LogFacade {
    target: &'static str,
}

impl LogFacade {
    /// Create a facade sink logging under `target`.
    pub fn new(target: &'static str) -> Self {
        Self { target }
    }

    /// The log target messages are recorded under.
    pub fn target(&self) -> &'static str {
        self.target
    }
}

impl Default for LogFacade {
    fn default() -> Self {
        Self::new(PARSE_TARGET)
    }
}

impl LogSink for LogFacade {
    fn record(&self, level: Level, message: &str) {
        log::log!(target: self.target, level, "{message}");
    }
}

impl<S: LogSink + ?Sized> LogSink for &S {
    fn record(&self, level: Level, message: &str) {
        (**self).record(level, message);
    }
}

impl<S: LogSink + ?Sized> LogSink for Arc<S> {
    fn record(&self, level: Level, message: &str) {
        (**self).record(level, message);
    }
}

impl<S: LogSink + ?Sized> LogSink for Box<S> {
    fn record(&self, level: Level, message: &str) {
        (**self).record(level, message);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    #[derive(Default)]
    struct Recording(Mutex<Vec<(Level, String)>>);

    impl LogSink for Recording {
        fn record(&self, level: Level, message: &str) {
            self.0.lock().unwrap().push((level, message.to_string()));
        }
    }

    #[test]
    fn test_facade_default_target() {
        assert_eq!(LogFacade::default().target(), PARSE_TARGET);
    }

    #[test]
    fn test_facade_record_does_not_panic_without_logger() {
        LogFacade::default().record(Level::Warn, "no logger installed");
    }

    #[test]
    fn test_forwarding_impls() {
        let sink = Arc::new(Recording::default());

        (&*sink).record(Level::Warn, "by ref");
        sink.record(Level::Error, "by arc");
        let boxed: Box<dyn LogSink> = Box::new(Arc::clone(&sink));
        boxed.record(Level::Info, "by box");

        let records = sink.0.lock().unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[2], (Level::Info, "by box".to_string()));
    }
}
