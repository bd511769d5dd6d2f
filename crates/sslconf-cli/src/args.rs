//! Command-line argument definitions for the sslconf CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control the input path, configuration file
//! selection, logging verbosity and the security trace level.

use clap::Parser;

/// Command-line arguments for the SSL configuration validator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the SSL configuration file to validate
    #[arg(help = "Path to the SSL configuration file")]
    pub input: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Security trace level; overrides the configuration file (1 or more logs parse diagnostics)
    #[arg(short, long)]
    pub trace_level: Option<u8>,
}
