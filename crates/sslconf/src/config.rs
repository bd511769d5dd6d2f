//! Configuration types for SSL configuration loading.
//!
//! All types implement [`serde::Deserialize`] so front ends can load them
//! from TOML or any other serde format. Missing sections and fields fall
//! back to their defaults.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining trace and report settings.
//! - [`TraceConfig`] - Initial security trace level.
//! - [`ReportConfig`] - Labels used when formatting parse diagnostics.
//!
//! # Example
//!
//! ```
//! # use sslconf::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.report().category(), "SSL");
//! assert_eq!(config.trace().security(), 0);
//! ```

use serde::Deserialize;

use sslconf_parser::ENGINE_NAME;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Tracing section.
    #[serde(default)]
    trace: TraceConfig,

    /// Report formatting section.
    #[serde(default)]
    report: ReportConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(trace: TraceConfig, report: ReportConfig) -> Self {
        Self { trace, report }
    }

    /// Returns the trace configuration.
    pub fn trace(&self) -> &TraceConfig {
        &self.trace
    }

    /// Returns the report configuration.
    pub fn report(&self) -> &ReportConfig {
        &self.report
    }

    /// Replace the configured security trace level.
    pub fn set_security_level(&mut self, level: u8) {
        self.trace.security = level;
    }
}

/// Initial tracing levels.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct TraceConfig {
    /// Security trace level; `1` or higher logs parse diagnostics.
    #[serde(default)]
    security: u8,
}

impl TraceConfig {
    /// Creates a new [`TraceConfig`].
    pub fn new(security: u8) -> Self {
        Self { security }
    }

    /// Returns the security trace level.
    pub fn security(&self) -> u8 {
        self.security
    }
}

/// Labels placed in formatted parse diagnostics.
///
/// `category` opens the first line (`"<category> configuration file ..."`)
/// and `parser_name` opens the second (`"<parser_name> Exception: ..."`).
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_category")]
    category: String,

    #[serde(default = "default_parser_name")]
    parser_name: String,
}

impl ReportConfig {
    /// Creates a new [`ReportConfig`].
    pub fn new(category: impl Into<String>, parser_name: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            parser_name: parser_name.into(),
        }
    }

    /// Returns the category label.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns the parser name label.
    pub fn parser_name(&self) -> &str {
        &self.parser_name
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self::new(default_category(), default_parser_name())
    }
}

fn default_category() -> String {
    "SSL".to_string()
}

fn default_parser_name() -> String {
    ENGINE_NAME.to_string()
}
