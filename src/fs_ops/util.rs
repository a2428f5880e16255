use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

pub(super) fn unique_temp_path(dst_dir: &Path) -> PathBuf {
    let pid = std::process::id();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    dst_dir.join(format!(".edmv.{}.{}.tmp", pid, nanos))
}

pub(super) fn is_cross_device(e: &io::Error) -> bool {
    if e.kind() == io::ErrorKind::CrossesDevices {
        return true;
    }
    // EXDEV / ERROR_NOT_SAME_DEVICE
    match e.raw_os_error() {
        #[cfg(unix)]
        Some(code) => code == libc::EXDEV,
        #[cfg(windows)]
        Some(code) => code == 17,
        None => false,
    }
}

/// True when both paths name the same filesystem object.
pub(super) fn same_file(a: &Path, b: &Path) -> io::Result<bool> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::MetadataExt;
        let (ma, mb) = (fs::symlink_metadata(a)?, fs::symlink_metadata(b)?);
        Ok(ma.dev() == mb.dev() && ma.ino() == mb.ino())
    }
    #[cfg(not(unix))]
    {
        Ok(dunce::canonicalize(a)? == dunce::canonicalize(b)?)
    }
}

#[cfg(unix)]
pub(super) fn fsync_dir(dir: &Path) -> io::Result<()> {
    let f = File::open(dir)?;
    f.sync_all()
}

#[cfg(windows)]
pub(super) fn fsync_dir(_dir: &Path) -> io::Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn crosses_devices_kind_is_detected() {
        assert!(is_cross_device(&io::Error::from(io::ErrorKind::CrossesDevices)));
        assert!(!is_cross_device(&io::Error::from(io::ErrorKind::PermissionDenied)));
    }

    #[cfg(unix)]
    #[test]
    fn exdev_code_is_detected() {
        assert!(is_cross_device(&io::Error::from_raw_os_error(libc::EXDEV)));
    }

    #[test]
    fn same_file_distinguishes_entries() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a");
        let b = dir.path().join("b");
        fs::write(&a, "a").unwrap();
        fs::write(&b, "b").unwrap();
        assert!(same_file(&a, &a).unwrap());
        assert!(!same_file(&a, &b).unwrap());
    }

    #[test]
    fn temp_path_is_hidden_in_dir() {
        let dir = tempdir().unwrap();
        let p = unique_temp_path(dir.path());
        assert_eq!(p.parent(), Some(dir.path()));
        let name = p.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with(".edmv.") && name.ends_with(".tmp"));
    }
}
