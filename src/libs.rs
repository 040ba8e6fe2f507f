use crate::error::{Result, SetupError};
use std::fs::{self, File};
use std::io;
use std::path::Path;

/// What happened when copying the game assemblies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Every listed file was copied, in list order.
    Copied(Vec<String>),
    /// The game data folder does not exist; nothing was copied.
    SourceMissing,
}

/// Copy each file in `files` from `source_dir` to `dest_dir`, replacing existing files and
/// keeping permissions and timestamps. `on_copied` is called after each file.
///
/// A missing `source_dir` is not an error. A missing file inside an existing `source_dir` is.
pub fn copy_required_files<F>(
    source_dir: &Path,
    dest_dir: &Path,
    files: &[&str],
    mut on_copied: F,
) -> Result<CopyOutcome>
where
    F: FnMut(&str) -> io::Result<()>,
{
    if !source_dir.exists() {
        tracing::warn!(
            source = %source_dir.display(),
            "game data folder missing, skipping DLL copy"
        );
        return Ok(CopyOutcome::SourceMissing);
    }

    let mut copied = Vec::with_capacity(files.len());
    for file in files {
        let from = source_dir.join(file);
        let to = dest_dir.join(file);
        copy_with_metadata(&from, &to).map_err(|source| SetupError::CopyFailed {
            file: (*file).to_string(),
            source_dir: source_dir.to_path_buf(),
            source,
        })?;
        tracing::debug!(from = %from.display(), to = %to.display(), "copied");
        on_copied(file)?;
        copied.push((*file).to_string());
    }
    Ok(CopyOutcome::Copied(copied))
}

/// Copy contents through a writable handle, stamp the times on it, then apply the source's
/// permissions last so read-only assemblies stay read-only without blocking the copy.
fn copy_with_metadata(from: &Path, to: &Path) -> io::Result<()> {
    let meta = fs::metadata(from)?;

    // a read-only copy left by an earlier run must be replaceable
    if let Ok(existing) = fs::metadata(to) {
        let mut perms = existing.permissions();
        if perms.readonly() {
            #[allow(clippy::permissions_set_readonly_false)]
            perms.set_readonly(false);
            fs::set_permissions(to, perms)?;
        }
    }

    let mut src = File::open(from)?;
    let mut dst = File::create(to)?;
    io::copy(&mut src, &mut dst)?;

    let mut times = fs::FileTimes::new().set_modified(meta.modified()?);
    if let Ok(accessed) = meta.accessed() {
        times = times.set_accessed(accessed);
    }
    dst.set_times(times)?;
    drop(dst);

    fs::set_permissions(to, meta.permissions())
}
