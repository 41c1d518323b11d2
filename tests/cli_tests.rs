//! Tests for the command-line driver

use clap::Parser;
use tempfile::TempDir;

use collatz_tree::cli::{run, write_file, Cli, Destination};
use collatz_tree::{exitcode, generate, TreeError};

fn parse(args: &[&str]) -> Cli {
    let mut argv = vec!["collatz-tree"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).expect("parse args")
}

#[test]
fn given_depth_and_output_when_running_then_writes_file() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("tree.dot");

    let cli = parse(&["--depth", "6", "-o", out.to_str().unwrap()]);
    let dest = run(&cli).unwrap();

    assert_eq!(dest, Destination::File(out.clone()));
    let written = std::fs::read_to_string(&out).unwrap();
    assert_eq!(written, generate(6).unwrap());
}

#[test]
fn given_existing_file_when_running_then_overwrites() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("tree.dot");
    std::fs::write(&out, "stale content that is longer than the new document ".repeat(50)).unwrap();

    let cli = parse(&["--depth", "2", "--output", out.to_str().unwrap()]);
    run(&cli).unwrap();

    assert_eq!(std::fs::read_to_string(&out).unwrap(), generate(2).unwrap());
}

#[test]
fn given_missing_directory_when_running_then_reports_io_error() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("no_such_dir").join("tree.dot");

    let cli = parse(&["-o", out.to_str().unwrap()]);
    let err = run(&cli).unwrap_err();

    match &err {
        TreeError::Io { path, .. } => assert_eq!(path, &out),
        other => panic!("expected Io error, got {:?}", other),
    }
    assert_eq!(err.exit_code(), exitcode::CANTCREAT);
    assert!(err.to_string().contains("tree.dot"));
    assert!(!out.exists());
}

#[test]
fn given_negative_depth_when_running_then_nothing_is_written() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("tree.dot");

    let cli = parse(&["--depth", "-2", "-o", out.to_str().unwrap()]);
    let err = run(&cli).unwrap_err();

    assert!(matches!(err, TreeError::InvalidArgument(_)));
    assert_eq!(err.exit_code(), exitcode::USAGE);
    assert!(!out.exists());
}

#[test]
fn given_directory_as_path_when_writing_then_fails() {
    let temp = TempDir::new().unwrap();
    let result = write_file(temp.path(), "digraph CollatzTree {\n}");
    assert!(matches!(result, Err(TreeError::Io { .. })));
}
