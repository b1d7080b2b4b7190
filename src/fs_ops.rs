//! Filesystem plumbing for the stamper: reading, writability checks,
//! atomic overwrite and the optional sidecar lock.

use std::ffi::OsString;
use std::fs::{self, File, Metadata, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tempfile::NamedTempFile;

use crate::error::{Result, StampError};

/// Read the whole document as UTF-8 text
pub fn read_document(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| StampError::from_io(path, e))
}

/// Fail with `PermissionDenied` unless `path` can be opened for writing.
///
/// Read-only targets are rejected up front because the atomic rename would
/// otherwise replace them regardless of their permission bits.
pub fn ensure_writable(path: &Path) -> Result<()> {
    let metadata = fs::metadata(path).map_err(|e| StampError::from_io(path, e))?;

    if metadata.permissions().readonly() {
        return Err(StampError::PermissionDenied {
            path: path.to_path_buf(),
        });
    }

    OpenOptions::new()
        .write(true)
        .open(path)
        .map(|_| ())
        .map_err(|e| StampError::from_io(path, e))
}

/// Replace the content of `path` without exposing a partially written file.
///
/// Symlinks are followed, so the file they point to is the one replaced.
/// The data goes to a temporary file next to that file, which takes the
/// original permissions and is then renamed over it. File ownership is not
/// carried over.
///
/// Falls back to [`write_in_place`] when a rename would change what the
/// caller observes: the target has other hard links, or its directory does
/// not allow creating the temporary file.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let target = fs::canonicalize(path).map_err(|e| StampError::from_io(path, e))?;
    let metadata = fs::metadata(&target).map_err(|e| StampError::from_io(&target, e))?;

    if has_other_links(&metadata) {
        return write_in_place(&target, contents);
    }

    let dir = target.parent().unwrap_or_else(|| Path::new("."));

    let mut tmp = match NamedTempFile::new_in(dir) {
        Ok(tmp) => tmp,
        Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
            return write_in_place(&target, contents);
        }
        Err(e) => return Err(StampError::from_io(dir, e)),
    };
    tmp.write_all(contents.as_bytes())
        .and_then(|()| tmp.as_file().sync_all())
        .and_then(|()| tmp.as_file().set_permissions(metadata.permissions()))
        .map_err(|e| StampError::from_io(tmp.path(), e))?;
    tmp.persist(&target)
        .map_err(|e| StampError::from_io(&target, e.error))?;

    Ok(())
}

#[cfg(unix)]
fn has_other_links(metadata: &Metadata) -> bool {
    use std::os::unix::fs::MetadataExt;

    metadata.nlink() > 1
}

#[cfg(not(unix))]
fn has_other_links(_metadata: &Metadata) -> bool {
    false
}

/// Truncate and rewrite `path` in place
pub fn write_in_place(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|e| StampError::from_io(path, e))
}

/// Sidecar path used for locking `target`
pub fn lock_path(target: &Path) -> PathBuf {
    let mut name: OsString = target.as_os_str().to_owned();
    name.push(".lock");
    PathBuf::from(name)
}

/// Exclusive advisory lock held on `<target>.lock` until dropped.
///
/// The sidecar stays valid across the atomic rename, which swaps out the
/// target's inode. The lock file is left in place after release.
#[derive(Debug)]
pub struct StampLock {
    _file: File,
    path: PathBuf,
}

impl StampLock {
    /// Block until the lock for `target` is acquired
    pub fn acquire(target: &Path) -> Result<Self> {
        let path = lock_path(target);
        let file = OpenOptions::new()
            .create(true)
            .read(true)
            .write(true)
            .truncate(false)
            .open(&path)
            .map_err(|e| StampError::lock(&path, e))?;

        file.lock_exclusive()
            .map_err(|e| StampError::lock(&path, e))?;

        Ok(StampLock { _file: file, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lock_path_appends_suffix() {
        assert_eq!(
            lock_path(Path::new("build/Version.txt")),
            PathBuf::from("build/Version.txt.lock")
        );
    }

    #[test]
    fn test_write_atomic_replaces_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Version.txt");
        fs::write(&path, "old").unwrap();

        write_atomic(&path, "new\r\ncontent").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new\r\ncontent");
        let leftovers: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(leftovers.len(), 1, "temporary file should not remain");
    }

    #[cfg(unix)]
    #[test]
    fn test_write_atomic_keeps_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Version.txt");
        fs::write(&path, "old").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o640)).unwrap();

        write_atomic(&path, "new").unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o640);
    }

    #[test]
    fn test_ensure_writable_rejects_readonly() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Version.txt");
        fs::write(&path, "text").unwrap();
        let mut permissions = fs::metadata(&path).unwrap().permissions();
        permissions.set_readonly(true);
        fs::set_permissions(&path, permissions).unwrap();

        let err = ensure_writable(&path).unwrap_err();
        assert!(matches!(err, StampError::PermissionDenied { .. }));
    }

    #[test]
    fn test_read_missing_document() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_document(&dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, StampError::NotFound { .. }));
    }

    #[test]
    fn test_lock_creates_sidecar() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("Version.txt");
        fs::write(&target, "text").unwrap();

        let lock = StampLock::acquire(&target).unwrap();
        assert!(lock.path().exists());
        drop(lock);

        // Re-acquiring after release must not block
        let _again = StampLock::acquire(&target).unwrap();
    }
}
