//! Walk a directory, edit the listing text, prune and apply: the library path
//! the binary drives, minus the editor.

use assert_fs::prelude::*;
use edmv::{prune, EdmvError, PathList, PathTree, Transform};

fn walked(temp: &assert_fs::TempDir) -> PathList {
    let mut list = PathList::from_directory_walk(temp.path()).unwrap();
    list.sort();
    list
}

#[test]
fn edited_text_drives_the_moves() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("photos/img1.jpg").write_str("1").unwrap();
    temp.child("photos/img2.jpg").write_str("2").unwrap();
    temp.child("notes.md").write_str("n").unwrap();

    let original = walked(&temp);
    assert_eq!(original.to_lines(), "notes.md\nphotos/img1.jpg\nphotos/img2.jpg\n");

    let edited = PathList::from_lines("notes.md\n2024/beach.jpg\n2024/city.jpg\n");
    let plan = prune(original, edited).unwrap();
    assert_eq!(plan.len(), 2);

    let report = Transform::new(temp.path()).apply(&plan).unwrap();
    assert_eq!(report.moved, 2);
    temp.child("2024/beach.jpg").assert("1");
    temp.child("2024/city.jpg").assert("2");
    temp.child("notes.md").assert("n");
    assert_eq!(
        walked(&temp),
        PathList::from_iter(["2024/beach.jpg", "2024/city.jpg", "notes.md"])
    );
}

#[test]
fn deleted_line_is_refused_before_any_move() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("a.txt").touch().unwrap();
    temp.child("b.txt").touch().unwrap();

    let err = prune(walked(&temp), PathList::from_lines("a.txt\n")).unwrap_err();
    assert!(matches!(err, EdmvError::Alignment { original: 2, edited: 1 }));
    assert!(err.is_clean_exit());
    temp.child("a.txt").assert("");
    temp.child("b.txt").assert("");
}

#[test]
fn unchanged_text_is_noop() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("a/b.txt").touch().unwrap();

    let original = walked(&temp);
    let edited = PathList::from_lines(&original.to_lines());
    assert!(matches!(prune(original, edited), Err(EdmvError::NoOp)));
}

#[test]
fn preview_reflects_the_edited_layout() {
    let edited = PathList::from_lines("2024/beach.jpg\n2024/city.jpg\nnotes.md\n");
    let mut out = Vec::new();
    PathTree::build(&edited).render_flat(&mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "{2024{beach.jpg, city.jpg}, notes.md}\n"
    );
}
