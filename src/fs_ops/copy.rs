//! Copy half of the cross-device fallback:
//! - Copies to a temp file in the destination directory (O_EXCL, fsynced)
//! - Applies source timestamps and permissions to the temp file
//! - Renames temp -> dest, so a failed copy never leaves a partial destination
//!
//! The source is never touched here; removing it is the caller's job once this
//! returns Ok.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

use super::atomic::rename_durable;
use super::helpers::io_error_with_help_io;
use super::{metadata, util};

const BUF_SIZE: usize = 1024 * 1024;

/// Copy `src` -> `dst` (which must not exist), then fsync. Returns bytes written.
pub(super) fn copy_streaming(src: &Path, dst: &Path) -> io::Result<u64> {
    let src_f = File::open(src)?;
    let dst_f = OpenOptions::new().write(true).create_new(true).open(dst)?;

    let mut reader = BufReader::with_capacity(BUF_SIZE, src_f);
    let mut writer = BufWriter::with_capacity(BUF_SIZE, dst_f);
    let bytes = io::copy(&mut reader, &mut writer)?;
    writer.flush()?;
    writer.get_ref().sync_all()?;
    Ok(bytes)
}

/// Copy bytes and metadata of `src` to `dest` through a temp sibling.
pub fn safe_copy_and_rename(src: &Path, dest: &Path) -> io::Result<()> {
    let dest_dir = dest.parent().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("destination has no parent: {}", dest.display()),
        )
    })?;

    let meta = fs::symlink_metadata(src).map_err(io_error_with_help_io("stat", src))?;

    #[cfg(unix)]
    if meta.file_type().is_symlink() {
        // Recreate the link itself rather than copying what it points at.
        let target = fs::read_link(src).map_err(io_error_with_help_io("read link", src))?;
        return std::os::unix::fs::symlink(target, dest)
            .map_err(io_error_with_help_io("create link", dest));
    }

    let tmp_path = util::unique_temp_path(dest_dir);
    let copied = copy_streaming(src, &tmp_path)
        .map_err(io_error_with_help_io("copy to temporary file", &tmp_path))
        .and_then(|_| {
            metadata::preserve_metadata(&tmp_path, &meta);
            rename_durable(&tmp_path, dest)
                .map_err(io_error_with_help_io("rename temporary file into", dest))
        });

    if copied.is_err() {
        let _ = fs::remove_file(&tmp_path);
    }
    copied
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn copy_small_file_ok() {
        let dir = tempdir().unwrap();
        let src_path = dir.path().join("src.txt");
        let dst_path = dir.path().join("dst.txt");
        let data = b"hello world";
        fs::write(&src_path, data).unwrap();

        let n = copy_streaming(&src_path, &dst_path).unwrap();
        assert_eq!(n, data.len() as u64);
        assert_eq!(fs::read(&dst_path).unwrap(), data);
    }

    #[test]
    fn copy_refuses_existing_destination() {
        let dir = tempdir().unwrap();
        let src_path = dir.path().join("src");
        let dst_path = dir.path().join("dst");
        fs::write(&src_path, b"data").unwrap();
        fs::write(&dst_path, b"x").unwrap();

        let err = copy_streaming(&src_path, &dst_path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
    }

    #[test]
    fn safe_copy_keeps_source_and_leaves_no_temp() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("src.txt");
        fs::write(&src, "payload").unwrap();
        let dest_dir = dir.path().join("out");
        fs::create_dir(&dest_dir).unwrap();
        let dest = dest_dir.join("dest.txt");

        safe_copy_and_rename(&src, &dest).unwrap();

        assert_eq!(fs::read_to_string(&dest).unwrap(), "payload");
        assert!(src.exists(), "copy must not remove the source");
        for entry in fs::read_dir(&dest_dir).unwrap() {
            let name = entry.unwrap().file_name();
            let name = name.to_string_lossy();
            assert!(!name.starts_with(".edmv."), "temp file left behind: {name}");
        }
    }

    #[test]
    fn missing_source_fails_without_temp() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("dest.txt");
        let err = safe_copy_and_rename(&dir.path().join("absent"), &dest).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[cfg(unix)]
    #[test]
    fn symlink_is_recreated() {
        let dir = tempdir().unwrap();
        let link = dir.path().join("link");
        std::os::unix::fs::symlink("target-name", &link).unwrap();
        let dest = dir.path().join("moved");

        safe_copy_and_rename(&link, &dest).unwrap();
        assert_eq!(fs::read_link(&dest).unwrap(), Path::new("target-name"));
    }
}
