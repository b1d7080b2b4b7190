use std::fmt;
use std::path::PathBuf;

use crate::domain::{BuildKind, SubstitutionContext};
use crate::stamper::StampReport;

/// Non-fatal findings from a stamping run that should be reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum StampWarning {
    /// The file held no placeholder tokens and was left untouched
    NoPlaceholders { path: PathBuf },
    /// Branch looks like a release branch but did not match the pattern
    NearMissReleaseBranch { branch: String },
}

impl fmt::Display for StampWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StampWarning::NoPlaceholders { path } => {
                write!(f, "No placeholders found in '{}'", path.display())
            }
            StampWarning::NearMissReleaseBranch { branch } => {
                write!(
                    f,
                    "Branch '{}' starts with 'release/' but does not match the release pattern; \
                     stamping as a development build",
                    branch
                )
            }
        }
    }
}

/// Inspect a finished run for anything worth a warning
pub fn collect_warnings(report: &StampReport, context: &SubstitutionContext) -> Vec<StampWarning> {
    let mut warnings = Vec::new();

    if report.total_replacements() == 0 {
        warnings.push(StampWarning::NoPlaceholders {
            path: report.path.clone(),
        });
    }

    if let Some(branch) = context.branch() {
        if report.build_kind == BuildKind::Development && branch.trim_start().starts_with("release/")
        {
            warnings.push(StampWarning::NearMissReleaseBranch {
                branch: branch.to_string(),
            });
        }
    }

    warnings
}
