//! Transform engine against a real temp directory, plus a filesystem double
//! that forces the cross-device path.

use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use assert_fs::prelude::*;
use edmv::{prune, EdmvError, FileSystem, PathList, RenamePlan, StdFileSystem, Transform};

fn plan(from: &[&str], to: &[&str]) -> RenamePlan {
    let from: PathList = from.iter().copied().collect();
    let to: PathList = to.iter().copied().collect();
    prune(from, to).expect("plan has changes")
}

#[test]
fn renames_and_moves_into_new_directory() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("x/1.txt").write_str("one").unwrap();
    temp.child("y/2.txt").write_str("two").unwrap();

    let report = Transform::new(temp.path())
        .apply(&plan(&["x/1.txt", "y/2.txt"], &["x/renamed.txt", "z/2.txt"]))
        .unwrap();

    temp.child("x/renamed.txt").assert("one");
    temp.child("z/2.txt").assert("two");
    assert!(!temp.child("x/1.txt").path().exists());
    assert!(!temp.child("y/2.txt").path().exists());
    // Emptied directories are left behind.
    assert!(temp.child("y").path().is_dir());
    assert_eq!(report.moved, 2);
    assert_eq!(report.dirs_created, 1);
}

#[test]
fn existing_destination_is_a_conflict() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("a.txt").write_str("a").unwrap();
    temp.child("b.txt").write_str("b").unwrap();

    let err = Transform::new(temp.path())
        .apply(&plan(&["a.txt", "b.txt"], &["b.txt", "b.txt"]))
        .unwrap_err();

    match err {
        EdmvError::Conflict(p) => assert_eq!(p, PathBuf::from("b.txt")),
        other => panic!("unexpected error: {other:?}"),
    }
    temp.child("a.txt").assert("a");
    temp.child("b.txt").assert("b");
}

#[test]
fn swap_is_refused_without_touching_files() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("a.txt").write_str("a").unwrap();
    temp.child("b.txt").write_str("b").unwrap();

    let err = Transform::new(temp.path())
        .apply(&plan(&["a.txt", "b.txt"], &["b.txt", "a.txt"]))
        .unwrap_err();

    assert!(matches!(err, EdmvError::Conflict(_)));
    temp.child("a.txt").assert("a");
    temp.child("b.txt").assert("b");
}

#[test]
fn earlier_moves_stay_applied_after_a_failure() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("a.txt").write_str("a").unwrap();
    temp.child("b.txt").write_str("b").unwrap();
    temp.child("taken.txt").write_str("t").unwrap();

    let err = Transform::new(temp.path())
        .apply(&plan(&["a.txt", "b.txt"], &["c.txt", "taken.txt"]))
        .unwrap_err();

    assert!(matches!(err, EdmvError::Conflict(_)));
    temp.child("c.txt").assert("a");
    temp.child("b.txt").assert("b");
    temp.child("taken.txt").assert("t");
}

#[test]
fn chained_moves_follow_listing_order() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("a.txt").write_str("a").unwrap();
    temp.child("b.txt").write_str("b").unwrap();

    // b moves out of the way first, then a takes its name.
    Transform::new(temp.path())
        .apply(&plan(&["b.txt", "a.txt"], &["c.txt", "b.txt"]))
        .unwrap();

    temp.child("b.txt").assert("a");
    temp.child("c.txt").assert("b");
    assert!(!temp.child("a.txt").path().exists());
}

/// Rename always reports a device boundary; copy optionally fails.
#[derive(Default)]
struct CrossDevice {
    fail_copy: bool,
    ops: RefCell<Vec<String>>,
}

impl FileSystem for CrossDevice {
    fn rename(&self, _from: &Path, _to: &Path) -> io::Result<()> {
        self.ops.borrow_mut().push("rename".into());
        Err(io::Error::from(io::ErrorKind::CrossesDevices))
    }

    fn copy(&self, from: &Path, to: &Path) -> io::Result<()> {
        self.ops.borrow_mut().push("copy".into());
        if self.fail_copy {
            return Err(io::Error::other("simulated copy failure"));
        }
        StdFileSystem.copy(from, to)
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        self.ops.borrow_mut().push("remove".into());
        fs::remove_file(path)
    }
}

#[test]
fn cross_device_rename_falls_back_to_copy() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("src/data.bin").write_str("payload").unwrap();
    let fs_double = CrossDevice::default();

    let report = Transform::with_fs(temp.path(), &fs_double)
        .apply(&plan(&["src/data.bin"], &["dst/data.bin"]))
        .unwrap();

    temp.child("dst/data.bin").assert("payload");
    assert!(!temp.child("src/data.bin").path().exists());
    assert_eq!(report.copied, 1);
    assert_eq!(report.moved, 1);
    assert_eq!(*fs_double.ops.borrow(), ["rename", "copy", "remove"]);
}

#[test]
fn failed_copy_keeps_the_source() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("keep.txt").write_str("precious").unwrap();
    let fs_double = CrossDevice {
        fail_copy: true,
        ..Default::default()
    };

    let err = Transform::with_fs(temp.path(), &fs_double)
        .apply(&plan(&["keep.txt"], &["elsewhere.txt"]))
        .unwrap_err();

    match err {
        EdmvError::CopyFallback { from, to, .. } => {
            assert_eq!(from, PathBuf::from("keep.txt"));
            assert_eq!(to, PathBuf::from("elsewhere.txt"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    temp.child("keep.txt").assert("precious");
    assert!(!temp.child("elsewhere.txt").path().exists());
    assert!(!fs_double.ops.borrow().contains(&"remove".to_string()));
}

#[test]
fn other_rename_errors_do_not_copy() {
    struct Denied(RefCell<bool>);
    impl FileSystem for Denied {
        fn rename(&self, _from: &Path, _to: &Path) -> io::Result<()> {
            Err(io::Error::from(io::ErrorKind::PermissionDenied))
        }
        fn copy(&self, _from: &Path, _to: &Path) -> io::Result<()> {
            *self.0.borrow_mut() = true;
            Ok(())
        }
    }

    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("a.txt").touch().unwrap();
    let fs_double = Denied(RefCell::new(false));

    let err = Transform::with_fs(temp.path(), &fs_double)
        .apply(&plan(&["a.txt"], &["b.txt"]))
        .unwrap_err();

    match err {
        EdmvError::Io(e) => assert_eq!(e.kind(), io::ErrorKind::PermissionDenied),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(!*fs_double.0.borrow());
}
