use std::io;
use std::path::Path;

use camino::Utf8Path;
use tracing::instrument;
use walkdir::WalkDir;

use crate::error::Error;

/// Something that can copy a directory tree.
pub trait CopyTree {
    /// Recursively copy `from` to `to`.
    fn copy_tree(&self, from: &Utf8Path, to: &Utf8Path) -> Result<(), Error>;
}

/// Copies directory trees on the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsCopier;

impl CopyTree for FsCopier {
    #[instrument(level = "trace")]
    fn copy_tree(&self, from: &Utf8Path, to: &Utf8Path) -> Result<(), Error> {
        if !from.exists() {
            return Err(Error::MissingSource {
                path: from.to_owned(),
            });
        }

        copy_dir(from, to).map_err(|source| Error::Copy {
            from: from.to_owned(),
            to: to.to_owned(),
            source,
        })
    }
}

/// Recursively copy `from` to `to`, overwriting existing files.
///
/// If `from` is a file, it's copied to `to`. Symlinks are copied as symlinks, not followed.
pub fn copy_dir(from: &Utf8Path, to: &Utf8Path) -> io::Result<()> {
    if !fs_err::metadata(from)?.is_dir() {
        if let Some(parent) = to.parent() {
            fs_err::create_dir_all(parent)?;
        }
        fs_err::copy(from, to)?;
        return Ok(());
    }

    for entry in WalkDir::new(from).follow_links(false) {
        let entry = entry?;
        let relative = entry
            .path()
            .strip_prefix(from)
            .map_err(io::Error::other)?;
        let target = to.as_std_path().join(relative);
        let file_type = entry.file_type();

        if file_type.is_dir() {
            fs_err::create_dir_all(&target)?;
        } else if file_type.is_symlink() {
            tracing::trace!(from = ?entry.path(), to = ?target, "Copying symlink");
            copy_symlink(entry.path(), &target)?;
        } else {
            tracing::trace!(from = ?entry.path(), to = ?target, "Copying file");
            fs_err::copy(entry.path(), &target)?;
        }
    }

    Ok(())
}

#[cfg(unix)]
fn copy_symlink(from: &Path, to: &Path) -> io::Result<()> {
    let link_target = fs_err::read_link(from)?;
    if fs_err::symlink_metadata(to).is_ok() {
        fs_err::remove_file(to)?;
    }
    std::os::unix::fs::symlink(&link_target, to)
}

#[cfg(not(unix))]
fn copy_symlink(from: &Path, to: &Path) -> io::Result<()> {
    fs_err::copy(from, to).map(|_| ())
}
