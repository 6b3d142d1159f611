//! Writing a rendered template to a new file without clobbering.

use crate::error::{ScaffoldError, ScaffoldResult};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use strata_core::MigrationVersion;
use strata_template::MigrationTemplate;

/// Render `template` for `version` into a new file at `path`.
///
/// Fails with [`ScaffoldError::FileAlreadyExists`] if anything is already at
/// `path`, including a file created by a concurrent writer between the check
/// and the exclusive create. Exactly one file is created on success and none
/// on failure.
pub fn materialize(
    path: &Path,
    template: &MigrationTemplate,
    version: MigrationVersion,
) -> ScaffoldResult<PathBuf> {
    match fs::symlink_metadata(path) {
        Ok(_) => {
            return Err(ScaffoldError::FileAlreadyExists {
                path: path.to_path_buf(),
            })
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => {
            return Err(ScaffoldError::FileCreateFailed {
                path: path.to_path_buf(),
                source: e,
            })
        }
    }

    let content = template.render(version)?;

    let file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| create_error(path, e))?;

    let mut pending = PendingFile::new(path, file);
    pending
        .write_all(content.as_bytes())
        .map_err(|e| create_error(path, e))?;
    Ok(pending.commit())
}

fn create_error(path: &Path, err: io::Error) -> ScaffoldError {
    if err.kind() == io::ErrorKind::AlreadyExists {
        ScaffoldError::FileAlreadyExists {
            path: path.to_path_buf(),
        }
    } else {
        ScaffoldError::FileCreateFailed {
            path: path.to_path_buf(),
            source: err,
        }
    }
}

/// A freshly created file that is removed again unless committed.
///
/// The handle is closed on every exit path.
struct PendingFile<'a> {
    path: &'a Path,
    file: Option<File>,
}

impl<'a> PendingFile<'a> {
    fn new(path: &'a Path, file: File) -> Self {
        Self {
            path,
            file: Some(file),
        }
    }

    fn write_all(&mut self, bytes: &[u8]) -> io::Result<()> {
        let file = self
            .file
            .as_mut()
            .ok_or_else(|| io::Error::other("file already closed"))?;
        file.write_all(bytes)?;
        file.sync_all()
    }

    fn commit(mut self) -> PathBuf {
        self.file.take();
        self.path.to_path_buf()
    }
}

impl Drop for PendingFile<'_> {
    fn drop(&mut self) {
        if let Some(file) = self.file.take() {
            drop(file);
            if let Err(e) = fs::remove_file(self.path) {
                log::warn!(
                    "Failed to remove partially written {}: {}",
                    self.path.display(),
                    e
                );
            }
        }
    }
}

#[cfg(test)]
#[path = "materialize_test.rs"]
mod tests;
