//! Security tracing levels.
//!
//! [`TraceLevels`] is shared between whoever owns the configuration and the
//! components that consult it. Levels are read on every check, so a change
//! made through one handle is seen by all of them at their next callback.

use std::sync::atomic::{AtomicU8, Ordering};

/// Security trace level at which parse diagnostics are logged.
pub const PARSE_WARNINGS_LEVEL: u8 = 1;

/// Runtime tracing levels for the security subsystem.
///
/// # Example
///
/// ```
/// # use sslconf::TraceLevels;
/// let levels = TraceLevels::new(0);
/// assert!(!levels.parse_warnings());
///
/// levels.set_security(2);
/// assert!(levels.parse_warnings());
/// ```
#[derive(Debug, Default)]
pub struct TraceLevels {
    security: AtomicU8,
}

impl TraceLevels {
    /// Create trace levels with the given security level.
    pub fn new(security: u8) -> Self {
        Self {
            security: AtomicU8::new(security),
        }
    }

    /// The current security trace level.
    pub fn security(&self) -> u8 {
        self.security.load(Ordering::Relaxed)
    }

    /// Change the security trace level.
    pub fn set_security(&self, level: u8) {
        self.security.store(level, Ordering::Relaxed);
    }

    /// Whether configuration parse diagnostics should be logged.
    pub fn parse_warnings(&self) -> bool {
        self.security() >= PARSE_WARNINGS_LEVEL
    }
}
