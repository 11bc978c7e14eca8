mod common;

use common::write;
use create_component::copier::{copy, copy_dir_except, empty_dir, is_empty_dir};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_copy_reproduces_tree() {
    let src = TempDir::new().unwrap();
    write(src.path().join("a.txt"), "alpha");
    write(src.path().join("nested/b.txt"), "beta");
    write(src.path().join("nested/deeper/c.bin"), "\u{0}\u{1}\u{2}");
    fs::create_dir_all(src.path().join("empty")).unwrap();

    let dest = TempDir::new().unwrap();
    let target = dest.path().join("out");
    copy(src.path(), &target).unwrap();

    assert!(!dir_diff::is_different(src.path(), &target).unwrap());
    assert!(target.join("empty").is_dir());
}

#[test]
fn test_copy_single_file_creates_parents() {
    let src = TempDir::new().unwrap();
    write(src.path().join("file.txt"), "content");

    let dest = TempDir::new().unwrap();
    let target = dest.path().join("x/y/file.txt");
    copy(src.path().join("file.txt"), &target).unwrap();

    assert_eq!(fs::read_to_string(target).unwrap(), "content");
}

#[test]
fn test_copy_dir_except_skips_top_level_names() {
    let src = TempDir::new().unwrap();
    write(src.path().join("package.json"), "{}");
    write(src.path().join("src/package.json"), "{}");
    write(src.path().join("keep.txt"), "kept");

    let dest = TempDir::new().unwrap();
    copy_dir_except(src.path(), dest.path(), &["package.json"]).unwrap();

    assert!(!dest.path().join("package.json").exists());
    assert!(dest.path().join("src/package.json").exists());
    assert!(dest.path().join("keep.txt").exists());
}

#[test]
fn test_copy_missing_source_fails() {
    let dest = TempDir::new().unwrap();
    assert!(copy(dest.path().join("missing"), dest.path().join("out")).is_err());
}

#[test]
fn test_is_empty_dir() {
    let dir = TempDir::new().unwrap();
    assert!(is_empty_dir(dir.path()).unwrap());

    fs::create_dir(dir.path().join(".git")).unwrap();
    assert!(is_empty_dir(dir.path()).unwrap());

    write(dir.path().join("README.md"), "hello");
    assert!(!is_empty_dir(dir.path()).unwrap());
}

#[test]
fn test_single_non_vcs_entry_is_not_empty() {
    let dir = TempDir::new().unwrap();
    write(dir.path().join(".gitignore"), "node_modules");
    assert!(!is_empty_dir(dir.path()).unwrap());
}

#[test]
fn test_empty_dir_removes_children_only() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join(".git/objects")).unwrap();
    write(dir.path().join(".git/HEAD"), "ref: refs/heads/main");
    assert!(is_empty_dir(dir.path()).unwrap());

    write(dir.path().join("nested/file.txt"), "x");
    write(dir.path().join("top.txt"), "y");

    empty_dir(dir.path()).unwrap();

    assert!(dir.path().is_dir());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_empty_dir_missing_is_noop() {
    let dir = TempDir::new().unwrap();
    assert!(empty_dir(dir.path().join("missing")).is_ok());
}
