//! End-to-end runs of the `csv2envi` binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn csv2envi(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_csv2envi"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to launch csv2envi")
}

fn csv2envi_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_csv2envi"))
        .current_dir(dir)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to launch csv2envi")
}

fn path_str(p: &Path) -> &str {
    p.to_str().expect("temp paths are utf-8")
}

fn entries(dir: &Path) -> usize {
    fs::read_dir(dir).unwrap().count()
}

#[test]
fn converts_and_writes_header() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("values.csv");
    fs::write(&input, "elevation\n1\n2\n3\n4\n5\n6\n7\n8\n").unwrap();
    let base = dir.path().join("scene.csv");

    let out = csv2envi(&[
        path_str(&input),
        path_str(&base),
        "2",
        "2",
        "2",
        "1",
        "bsq",
        "0",
    ]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert!(out.stdout.is_empty());

    assert_eq!(
        fs::read(dir.path().join("scene.bsq")).unwrap(),
        [1, 3, 5, 7, 2, 4, 6, 8]
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("scene.hdr")).unwrap(),
        "ENVI\nlines = 2\nsamples = 2\nbands = 2\ndata type = 1\ninterleave = bsq\nbyte order = 0\n"
    );
}

#[test]
fn big_endian_int16_bip() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.txt");
    fs::write(&input, "v\n258\n-1\n").unwrap();
    let base = dir.path().join("out");

    let out = csv2envi(&[
        path_str(&input),
        path_str(&base),
        "1",
        "1",
        "2",
        "2",
        "bip",
        "1",
    ]);
    assert!(out.status.success());
    assert_eq!(
        fs::read(dir.path().join("out.bip")).unwrap(),
        [0x01, 0x02, 0xff, 0xff]
    );
    let hdr = fs::read_to_string(dir.path().join("out.hdr")).unwrap();
    assert!(hdr.contains("data type = 2\n"));
    assert!(hdr.contains("byte order = 1\n"));
}

#[test]
fn usage_errors_exit_1_without_outputs() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.csv");
    fs::write(&input, "v\n1\n").unwrap();
    let base = dir.path().join("out.csv");
    let (i, o) = (path_str(&input), path_str(&base));

    let cases: &[&[&str]] = &[
        &[],
        &[i, o, "1", "1", "1", "1", "bsq"],
        &[i, o, "1", "1", "1", "1", "bsq", "0", "0"],
        &[i, o, "0", "1", "1", "1", "bsq", "0"],
        &[i, o, "1", "abc", "1", "1", "bsq", "0"],
        &[i, o, "1", "1", "1", "7", "bsq", "0"],
        &[i, o, "1", "1", "1", "1", "bsx", "0"],
        &[i, o, "1", "1", "1", "1", "bsq", "3"],
        &["--", i, o, "1", "1", "1", "1", "bsq", "0"],
        &[i, "--", o, "1", "1", "1", "1", "bsq"],
    ];
    for args in cases {
        let out = csv2envi(args);
        assert_eq!(out.status.code(), Some(1), "args {args:?}");
        let stdout = String::from_utf8_lossy(&out.stdout);
        assert!(
            stdout.starts_with("Error: improper program arguments."),
            "args {args:?}: {stdout}"
        );
        assert!(stdout.contains("12 (2-byte unsigned integer)"));
    }
    // Only the input file is present.
    assert_eq!(entries(dir.path()), 1);
}

#[test]
fn missing_input_exits_1_without_outputs() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("absent.csv");
    let base = dir.path().join("out.csv");

    let out = csv2envi(&[
        path_str(&input),
        path_str(&base),
        "1",
        "1",
        "1",
        "4",
        "bil",
        "0",
    ]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("absent.csv"));
    assert_eq!(entries(dir.path()), 0);
}

#[test]
fn short_input_is_zero_filled() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.csv");
    fs::write(&input, "v\n9\n").unwrap();
    let base = dir.path().join("out.csv");

    let out = csv2envi(&[
        path_str(&input),
        path_str(&base),
        "1",
        "3",
        "1",
        "1",
        "bsq",
        "0",
    ]);
    assert!(out.status.success());
    assert_eq!(fs::read(dir.path().join("out.bsq")).unwrap(), [9, 0, 0]);
    // Mismatch is reported on stderr only.
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("ran out of records"));
}

#[test]
fn hyphen_leading_paths() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("-values.csv"), "v\n4\n5\n").unwrap();

    let out = csv2envi_in(
        dir.path(),
        &["-values.csv", "-scene.csv", "1", "2", "1", "1", "bip", "0"],
    );
    assert!(out.status.success(), "stdout: {}", String::from_utf8_lossy(&out.stdout));
    assert_eq!(fs::read(dir.path().join("-scene.bip")).unwrap(), [4, 5]);
    assert!(dir.path().join("-scene.hdr").exists());
}

#[test]
fn latin1_label_line_is_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("latin1.csv");
    fs::write(&input, b"temp\xe9rature\n1\n2\n").unwrap();
    let base = dir.path().join("out.csv");

    let out = csv2envi(&[
        path_str(&input),
        path_str(&base),
        "1",
        "1",
        "2",
        "12",
        "bsq",
        "1",
    ]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(fs::read(dir.path().join("out.bsq")).unwrap(), [0, 1, 0, 2]);
}
