use crate::domain::branch::BuildKind;
use crate::domain::placeholder::Placeholder;
use crate::error::{Result, StampError};

/// Literal inserted between the software version and the release reference
/// on development builds.
pub const DEV_SUFFIX_SEPARATOR: &str = " dev-";

/// Values substituted into a version file.
///
/// Built once at the CLI boundary and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionContext {
    software_version: String,
    api_version: String,
    release_ref: String,
    branch: Option<String>,
}

impl SubstitutionContext {
    /// Create a validated context.
    ///
    /// # Returns
    /// * `Ok(SubstitutionContext)` - All required values are present
    /// * `Err(StampError::Validation)` - A required value is empty
    pub fn new(
        software_version: impl Into<String>,
        api_version: impl Into<String>,
        release_ref: impl Into<String>,
        branch: Option<String>,
    ) -> Result<Self> {
        let context = SubstitutionContext {
            software_version: software_version.into(),
            api_version: api_version.into(),
            release_ref: release_ref.into(),
            branch,
        };

        for (field, value) in [
            ("software version", &context.software_version),
            ("API version", &context.api_version),
            ("release reference", &context.release_ref),
        ] {
            if value.is_empty() {
                return Err(StampError::validation(format!("{} must not be empty", field)));
            }
        }

        Ok(context)
    }

    pub fn software_version(&self) -> &str {
        &self.software_version
    }

    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    pub fn release_ref(&self) -> &str {
        &self.release_ref
    }

    pub fn branch(&self) -> Option<&str> {
        self.branch.as_deref()
    }

    /// Software version as written into the file for the given build kind
    pub fn effective_software_version(&self, kind: BuildKind) -> String {
        match kind {
            BuildKind::Release => self.software_version.clone(),
            BuildKind::Development => format!(
                "{}{}{}",
                self.software_version, DEV_SUFFIX_SEPARATOR, self.release_ref
            ),
        }
    }

    /// Replacement text for every placeholder, in `Placeholder::ALL` order
    pub fn replacements(&self, kind: BuildKind) -> [(Placeholder, String); 3] {
        [
            (
                Placeholder::SoftwareVersion,
                self.effective_software_version(kind),
            ),
            (Placeholder::ApiVersion, self.api_version.clone()),
            (Placeholder::ReleaseRef, self.release_ref.clone()),
        ]
    }
}
