//! Metadata preservation for the copy fallback.
//! - Copies timestamps (atime, mtime) and, on Unix, permissions (mode) from source to dest.
//! - Best-effort: failures are logged and ignored.

use filetime::{set_file_times, FileTime};
use std::fs;
use std::path::Path;
use tracing::{trace, warn};

/// Apply `src_meta` timestamps and permissions to `dest`.
pub(super) fn preserve_metadata(dest: &Path, src_meta: &fs::Metadata) {
    let at = FileTime::from_last_access_time(src_meta);
    let mt = FileTime::from_last_modification_time(src_meta);
    match set_file_times(dest, at, mt) {
        Ok(()) => trace!(path = %dest.display(), "set atime/mtime on destination"),
        Err(e) => {
            warn!(path = %dest.display(), error = %e, "failed to set atime/mtime on destination")
        }
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let src_mode = src_meta.permissions().mode() & 0o7777;
        if let Err(e) = fs::set_permissions(dest, fs::Permissions::from_mode(src_mode)) {
            warn!(path = %dest.display(), mode = format!("{:o}", src_mode), error = %e, "failed to set permissions on destination");
        } else {
            trace!(path = %dest.display(), mode = format!("{:o}", src_mode), "set permissions on destination");
        }
    }

    #[cfg(windows)]
    {
        let mut perms = match fs::metadata(dest) {
            Ok(meta) => meta.permissions(),
            Err(e) => {
                warn!(path = %dest.display(), error = %e, "failed to stat destination for readonly flag");
                return;
            }
        };
        perms.set_readonly(src_meta.permissions().readonly());
        if let Err(e) = fs::set_permissions(dest, perms) {
            warn!(path = %dest.display(), error = %e, "failed to set readonly flag on destination");
        }
    }
}
