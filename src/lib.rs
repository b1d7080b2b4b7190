pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod fs_ops;
pub mod stamper;
pub mod ui;
pub mod warnings;

pub use domain::{is_release_branch, BuildKind, SubstitutionContext};
pub use error::{Result, StampError};
pub use stamper::{render, stamp_file, StampOptions, StampReport};
