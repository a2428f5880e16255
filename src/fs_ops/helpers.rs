//! I/O helper utilities.
//!
//! Small adapters that enrich io::Error with the operation, the path and a
//! platform-aware hint, usable with map_err in both io::Result and
//! anyhow::Result code paths.
//!
//! Usage:
//!   // in functions returning anyhow::Result<_>
//!   fs::write(p, data).map_err(io_error_with_help("write listing", p))?;
//!
//!   // in functions returning io::Result<_> (ErrorKind is preserved)
//!   fs::rename(a, b).map_err(io_error_with_help_io("rename", a))?;

use anyhow::anyhow;
use std::io;
use std::path::Path;

fn build_message(op: &str, path: &Path, e: &io::Error) -> String {
    let mut msg = format!("{} '{}': {}", op, path.display(), e);

    if let Some(code) = e.raw_os_error() {
        #[cfg(unix)]
        {
            match code {
                libc::EACCES | libc::EPERM => {
                    msg.push_str(" (permission denied; check ownership and write permissions)");
                }
                libc::ENOENT => {
                    msg.push_str(" (path not found; was the file moved since the listing was made?)");
                }
                libc::ENOTDIR => {
                    msg.push_str(" (a parent component is a file, not a directory)");
                }
                libc::ENOSPC => {
                    msg.push_str(" (insufficient space on device)");
                }
                libc::EROFS => {
                    msg.push_str(" (read-only filesystem)");
                }
                libc::ENAMETOOLONG => {
                    msg.push_str(" (filename or path too long)");
                }
                _ => {}
            }
        }
        #[cfg(windows)]
        {
            match code {
                5 => msg.push_str(" (access denied; check permissions)"), // ERROR_ACCESS_DENIED
                32 => msg.push_str(" (sharing violation; file is in use)"), // ERROR_SHARING_VIOLATION
                2 | 3 => msg.push_str(" (path not found)"), // FILE/PATH NOT FOUND
                112 => msg.push_str(" (insufficient disk space)"), // ERROR_DISK_FULL
                206 => msg.push_str(" (filename or path too long)"), // ERROR_FILENAME_EXCED_RANGE
                _ => {}
            }
        }
        msg.push_str(&format!(" [os code: {}]", code));
    } else {
        match e.kind() {
            io::ErrorKind::PermissionDenied => {
                msg.push_str(" (permission denied; check ownership and write permissions)");
            }
            io::ErrorKind::NotFound => {
                msg.push_str(" (path not found)");
            }
            _ => {}
        }
    }

    msg
}

/// Adapter for anyhow::Result code.
pub fn io_error_with_help<'a>(
    op: &'a str,
    path: &'a Path,
) -> impl FnOnce(io::Error) -> anyhow::Error + 'a {
    move |e: io::Error| anyhow!(build_message(op, path, &e))
}

/// Adapter for io::Result code; keeps the original ErrorKind.
pub fn io_error_with_help_io<'a>(
    op: &'a str,
    path: &'a Path,
) -> impl FnOnce(io::Error) -> io::Error + 'a {
    move |e: io::Error| io::Error::new(e.kind(), build_message(op, path, &e))
}
