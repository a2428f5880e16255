//! Atomic rename helper.
//! - Plain rename; callers have already refused existing destinations.
//! - On Unix, best-effort fsync of the destination directory after rename.

use std::fs;
use std::io;
use std::path::Path;

pub(super) fn rename_durable(src: &Path, dst: &Path) -> io::Result<()> {
    fs::rename(src, dst)?;

    #[cfg(unix)]
    if let Some(parent) = dst.parent() {
        // A failed fsync must not turn a completed rename into an error.
        let _ = super::util::fsync_dir(parent);
    }

    Ok(())
}
