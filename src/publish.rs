//! Atomic publishing of a rendered site.
//!
//! The output directory is never written to directly. A run renders into a
//! staging directory next to it, then swaps it in with two renames:
//!
//! ```text
//! 1. stage     .vanity-stage-XXXX   ← generate() writes here
//! 2. backup    build  →  build-bak-<timestamp>
//! 3. swap      .vanity-stage-XXXX  →  build
//! 4. cleanup   remove build-bak-<timestamp>   (non-fatal)
//! ```
//!
//! Failure handling per step:
//!
//! | Step | On failure |
//! |------|------------|
//! | backup | error; staging discarded, output untouched |
//! | swap | backup renamed back (best-effort), staging discarded, error |
//! | cleanup | warning only; reported in [`Cleanup::Failed`] |
//!
//! An existing output directory is therefore only ever replaced by a fully
//! rendered tree, or restored from its backup.
//!
//! The staging directory shares the output's parent so both renames stay on
//! one filesystem. All filesystem calls go through [`Filesystem`] so tests
//! can inject failures at each step.

use chrono::Utc;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use thiserror::Error;
use tracing::{debug, warn};

const STAGING_PREFIX: &str = ".vanity-stage-";

#[derive(Error, Debug)]
pub enum PublishError {
    #[error("failed to create staging directory in {}: {source}", parent.display())]
    Stage {
        parent: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to move {} aside to {}: {source}", output.display(), backup.display())]
    Backup {
        output: PathBuf,
        backup: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to move {} into place at {}: {source}", staging.display(), output.display())]
    Swap {
        staging: PathBuf,
        output: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Filesystem operations the publisher depends on.
pub trait Filesystem {
    fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;
    fn remove_dir_all(&self, path: &Path) -> io::Result<()>;
}

/// [`Filesystem`] backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFilesystem;

impl Filesystem for StdFilesystem {
    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        std::fs::rename(from, to)
    }

    fn remove_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::remove_dir_all(path)
    }
}

/// Outcome of the non-fatal backup removal.
#[derive(Debug)]
pub enum Cleanup {
    Removed,
    Failed { backup: PathBuf, error: io::Error },
}

/// What a successful publish did.
#[derive(Debug)]
pub struct PublishReport {
    pub output: PathBuf,
    pub backup: PathBuf,
    pub cleanup: Cleanup,
}

/// A freshly created, still-empty staging directory for `output`.
///
/// Dropping it without publishing removes it along with its contents.
#[derive(Debug)]
pub struct Staging {
    dir: TempDir,
    output: PathBuf,
}

impl Staging {
    /// Create a staging directory in the output's parent directory.
    pub fn new(output: &Path) -> Result<Self, PublishError> {
        let output = normalize(output);
        let parent = parent_dir(&output);
        let mut builder = tempfile::Builder::new();
        builder.prefix(STAGING_PREFIX);
        // The staging dir becomes the published root, so it must not keep
        // the private 0700 mode temp dirs are created with.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            builder.permissions(std::fs::Permissions::from_mode(0o755));
        }
        let dir = builder
            .tempdir_in(&parent)
            .map_err(|source| PublishError::Stage { parent, source })?;
        debug!(staging = %dir.path().display(), "created staging directory");
        Ok(Self { dir, output })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Swap the staged tree into place with the real filesystem.
    pub fn publish(self) -> Result<PublishReport, PublishError> {
        self.publish_with(&StdFilesystem)
    }

    /// Swap the staged tree into place.
    pub fn publish_with(self, fs: &impl Filesystem) -> Result<PublishReport, PublishError> {
        let backup = backup_path(&self.output, &timestamp());
        publish_dir(fs, self.dir, &self.output, &backup)
    }
}

fn publish_dir(
    fs: &impl Filesystem,
    staging: TempDir,
    output: &Path,
    backup: &Path,
) -> Result<PublishReport, PublishError> {
    // Staging is still owned by `staging`, so any early return removes it.
    fs.rename(output, backup)
        .map_err(|source| PublishError::Backup {
            output: output.to_path_buf(),
            backup: backup.to_path_buf(),
            source,
        })?;
    debug!(backup = %backup.display(), "moved output aside");

    if let Err(source) = fs.rename(staging.path(), output) {
        if let Err(restore) = fs.rename(backup, output) {
            warn!(
                backup = %backup.display(),
                error = %restore,
                "failed to restore output from backup"
            );
        }
        return Err(PublishError::Swap {
            staging: staging.path().to_path_buf(),
            output: output.to_path_buf(),
            source,
        });
    }
    // The staged path now names the published output; dropping the guard
    // must not delete anything.
    let _ = staging.keep();
    debug!(output = %output.display(), "swapped staging into place");

    let cleanup = match fs.remove_dir_all(backup) {
        Ok(()) => Cleanup::Removed,
        Err(error) => {
            warn!(
                backup = %backup.display(),
                error = %error,
                "could not remove previous output; leaving it in place"
            );
            Cleanup::Failed {
                backup: backup.to_path_buf(),
                error,
            }
        }
    };

    Ok(PublishReport {
        output: output.to_path_buf(),
        backup: backup.to_path_buf(),
        cleanup,
    })
}

/// `<output>-bak-<stamp>`, next to the output directory.
pub fn backup_path(output: &Path, stamp: &str) -> PathBuf {
    let mut name = normalize(output).into_os_string();
    name.push(format!("-bak-{stamp}"));
    PathBuf::from(name)
}

/// Filesystem-safe UTC timestamp with nanoseconds.
fn timestamp() -> String {
    Utc::now().format("%Y%m%dT%H%M%S%.9fZ").to_string()
}

/// Drop trailing separators so `build/` and `build` name the same directory.
fn normalize(path: &Path) -> PathBuf {
    path.components().collect()
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
