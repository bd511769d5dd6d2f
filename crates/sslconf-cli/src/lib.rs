//! sslconf CLI library
//!
//! This module contains the core CLI logic for validating SSL configuration
//! files.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;
pub use config::ConfigError;

use std::sync::Arc;

use log::info;
use thiserror::Error;

use sslconf::{ConfigLoader, ParseSummary, SslConfigError, TraceLevels};

/// Errors surfaced by [`run`].
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Load(#[from] SslConfigError),
}

/// Run the sslconf CLI application
///
/// Loads the tool configuration, then validates the SSL configuration file
/// named by `args.input`. Parse diagnostics are logged by the loader's
/// reporter when the security trace level enables them.
///
/// # Errors
///
/// Returns `CliError` for:
/// - Configuration loading errors
/// - I/O errors reading the input file
/// - Invalid SSL configuration documents
pub fn run(args: &Args) -> Result<ParseSummary, CliError> {
    info!(input_path = args.input; "Validating SSL configuration file");

    let mut app_config = config::load_config(args.config.as_ref())?;
    if let Some(level) = args.trace_level {
        app_config.set_security_level(level);
    }

    let trace = Arc::new(TraceLevels::new(app_config.trace().security()));
    let mut loader = ConfigLoader::new(&app_config, trace);
    let summary = loader.load_file(&args.input)?;

    info!(
        input_path = args.input,
        elements = summary.elements(),
        warnings = summary.warnings();
        "SSL configuration is valid"
    );

    Ok(summary)
}
