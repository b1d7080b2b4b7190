//! Domain logic - pure stamping rules independent of the filesystem

pub mod branch;
pub mod context;
pub mod placeholder;

pub use branch::{is_release_branch, BranchMatcher, BuildKind, DEFAULT_RELEASE_PATTERN};
pub use context::{SubstitutionContext, DEV_SUFFIX_SEPARATOR};
pub use placeholder::Placeholder;
