//! Main workflow orchestration logic
//!
//! Keeps clap out of the stamping workflow so it can be driven
//! programmatically and from tests.

use std::path::PathBuf;

use crate::config::Config;
use crate::domain::SubstitutionContext;
use crate::error::Result;
use crate::stamper::{stamp_file, StampOptions, StampReport};
use crate::ui::Console;
use crate::warnings::{collect_warnings, StampWarning};

/// Arguments for the stamp workflow
///
/// Mirrors the CLI Args without depending on clap.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StampWorkflowArgs {
    /// Version file to rewrite
    pub file: PathBuf,

    pub software_version: String,

    pub api_version: String,

    /// Commit identifier of the build
    pub release_ref: String,

    /// Source branch, if known
    pub branch: Option<String>,

    /// Preview mode - don't write the file
    pub dry_run: bool,

    /// Force the sidecar lock regardless of configuration
    pub lock: bool,
}

/// Result of a successful stamp workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    pub report: StampReport,

    pub warnings: Vec<StampWarning>,
}

/// Main stamp workflow
///
/// 1. Validate the substitution values
/// 2. Merge configuration with command line switches
/// 3. Stamp the file
/// 4. Report the outcome and any warnings
pub fn run_stamp_workflow(
    args: StampWorkflowArgs,
    config: &Config,
    console: &Console,
) -> Result<WorkflowResult> {
    let context = SubstitutionContext::new(
        args.software_version,
        args.api_version,
        args.release_ref,
        args.branch,
    )?;

    let mut options = StampOptions::from_config(config)?;
    options.dry_run = args.dry_run;
    options.lock |= args.lock;

    console.status(&format!(
        "Stamping {} (branch: {})",
        args.file.display(),
        context.branch().unwrap_or("<none>")
    ));

    let report = stamp_file(&args.file, &context, &options)?;
    let warnings = collect_warnings(&report, &context);

    for warning in &warnings {
        console.warning(warning);
    }
    console.report(&report);

    Ok(WorkflowResult { report, warnings })
}
