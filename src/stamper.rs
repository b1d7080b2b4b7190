//! Placeholder substitution for version files.
//!
//! `render` is the pure transformation; `stamp_file` wraps it with the
//! read-modify-write cycle on disk.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::config::Config;
use crate::domain::{BranchMatcher, BuildKind, Placeholder, SubstitutionContext};
use crate::error::{Result, StampError};
use crate::fs_ops::{self, StampLock};

fn token_regex() -> &'static Regex {
    static TOKENS: OnceLock<Regex> = OnceLock::new();
    TOKENS.get_or_init(|| {
        let names: Vec<&str> = Placeholder::ALL.iter().map(|p| p.name()).collect();
        Regex::new(&format!(r"\{{({})\}}", names.join("|")))
            .expect("placeholder names are plain identifiers")
    })
}

/// Outcome of rendering a document in memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub content: String,
    pub counts: BTreeMap<Placeholder, usize>,
}

impl Rendered {
    /// Total number of tokens replaced
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}

/// Replace every placeholder token in `document`.
///
/// A single left-to-right pass: text inserted for one token is never scanned
/// again, so a value that itself looks like a token is written literally.
pub fn render(document: &str, context: &SubstitutionContext, kind: BuildKind) -> Rendered {
    let replacements: BTreeMap<Placeholder, String> =
        context.replacements(kind).into_iter().collect();
    let mut counts: BTreeMap<Placeholder, usize> =
        Placeholder::ALL.iter().map(|p| (*p, 0)).collect();

    let content = token_regex()
        .replace_all(document, |caps: &Captures| {
            match Placeholder::from_name(&caps[1]) {
                Some(placeholder) => {
                    *counts.entry(placeholder).or_default() += 1;
                    replacements[&placeholder].clone()
                }
                None => caps[0].to_string(),
            }
        })
        .into_owned();

    Rendered { content, counts }
}

/// How `stamp_file` classifies branches and writes the result
#[derive(Debug, Clone)]
pub struct StampOptions {
    pub matcher: BranchMatcher,
    pub atomic_write: bool,
    pub lock: bool,
    pub dry_run: bool,
}

impl Default for StampOptions {
    fn default() -> Self {
        StampOptions {
            matcher: BranchMatcher::default(),
            atomic_write: true,
            lock: false,
            dry_run: false,
        }
    }
}

impl StampOptions {
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(StampOptions {
            matcher: config.release.matcher()?,
            atomic_write: config.behavior.atomic_write,
            lock: config.behavior.lock,
            dry_run: false,
        })
    }
}

/// What a stamping run did to a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StampReport {
    pub path: PathBuf,
    pub build_kind: BuildKind,
    pub software_version: String,
    pub counts: BTreeMap<Placeholder, usize>,
    pub written: bool,
    pub dry_run: bool,
}

impl StampReport {
    pub fn total_replacements(&self) -> usize {
        self.counts.values().sum()
    }
}

/// Stamp the version file at `path`.
///
/// The file must already exist and be both readable and writable. Nothing
/// is written when the document contains no placeholders or when
/// `options.dry_run` is set.
///
/// # Returns
/// * `Ok(StampReport)` - Classification, replacement counts and write status
/// * `Err(StampError)` - `NotFound`, `PermissionDenied`, `Io` or `Lock`
pub fn stamp_file(
    path: &Path,
    context: &SubstitutionContext,
    options: &StampOptions,
) -> Result<StampReport> {
    let _lock = if options.lock {
        // Don't leave a sidecar behind for a target that isn't there
        std::fs::metadata(path).map_err(|e| StampError::from_io(path, e))?;
        Some(StampLock::acquire(path)?)
    } else {
        None
    };

    let document = fs_ops::read_document(path)?;
    fs_ops::ensure_writable(path)?;

    let kind = BuildKind::from_branch(&options.matcher, context.branch());
    let rendered = render(&document, context, kind);
    let changed = rendered.content != document;

    let written = changed && !options.dry_run;
    if written {
        if options.atomic_write {
            fs_ops::write_atomic(path, &rendered.content)?;
        } else {
            fs_ops::write_in_place(path, &rendered.content)?;
        }
    }

    Ok(StampReport {
        path: path.to_path_buf(),
        build_kind: kind,
        software_version: context.effective_software_version(kind),
        counts: rendered.counts,
        written,
        dry_run: options.dry_run,
    })
}
