use std::sync::OnceLock;

use regex::Regex;

use crate::error::{Result, StampError};

/// Built-in release branch pattern: `release/<anything>/<d>.<d>.<d>`.
///
/// Dots between the digits are literal, so `release/x/1x2x3` is not a release branch.
pub const DEFAULT_RELEASE_PATTERN: &str = r"release/.+/\d\.\d\.\d";

/// Classification of a build derived from its source branch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildKind {
    Release,
    Development,
}

impl BuildKind {
    /// Classify a build from an optional branch name.
    ///
    /// A missing branch name always yields a development build.
    pub fn from_branch(matcher: &BranchMatcher, branch: Option<&str>) -> Self {
        match branch {
            Some(name) if matcher.is_match(name) => BuildKind::Release,
            _ => BuildKind::Development,
        }
    }

    pub fn is_release(self) -> bool {
        self == BuildKind::Release
    }
}

impl std::fmt::Display for BuildKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildKind::Release => write!(f, "release"),
            BuildKind::Development => write!(f, "development"),
        }
    }
}

/// Full-string matcher for release branch names
#[derive(Debug, Clone)]
pub struct BranchMatcher {
    regex: Regex,
}

impl BranchMatcher {
    /// Compile a release branch pattern.
    ///
    /// The pattern is wrapped as `^(?:pattern)$` so that it can only match
    /// the entire branch name.
    pub fn new(pattern: &str) -> Result<Self> {
        let anchored = format!("^(?:{})$", pattern);
        let regex = Regex::new(&anchored).map_err(|e| {
            StampError::config(format!("Invalid release branch pattern '{}': {}", pattern, e))
        })?;
        Ok(BranchMatcher { regex })
    }

    pub fn is_match(&self, branch: &str) -> bool {
        self.regex.is_match(branch)
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }
}

fn builtin_matcher() -> &'static BranchMatcher {
    static BUILTIN: OnceLock<BranchMatcher> = OnceLock::new();
    BUILTIN.get_or_init(|| {
        BranchMatcher::new(DEFAULT_RELEASE_PATTERN).expect("built-in release pattern compiles")
    })
}

impl Default for BranchMatcher {
    fn default() -> Self {
        builtin_matcher().clone()
    }
}

/// Check if a branch name is a release branch under the built-in pattern
pub fn is_release_branch(name: &str) -> bool {
    builtin_matcher().is_match(name)
}
