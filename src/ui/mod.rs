//! User interface module - progress output for pipeline logs.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - `Console`, which honours `--quiet`

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_error, display_report, display_status, display_success, display_warning,
    format_outcome, format_report_lines,
};

use crate::stamper::StampReport;
use crate::warnings::StampWarning;

/// Routes progress output, dropping everything but warnings and errors when quiet.
#[derive(Debug, Clone, Copy, Default)]
pub struct Console {
    quiet: bool,
}

impl Console {
    pub fn new(quiet: bool) -> Self {
        Console { quiet }
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    pub fn status(&self, message: &str) {
        if !self.quiet {
            display_status(message);
        }
    }

    pub fn report(&self, report: &StampReport) {
        if !self.quiet {
            display_report(report);
        }
    }

    pub fn warning(&self, warning: &StampWarning) {
        display_warning(warning);
    }

    pub fn error(&self, message: &str) {
        display_error(message);
    }
}
