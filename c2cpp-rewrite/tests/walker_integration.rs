//! Integration tests for file and directory conversion

use c2cpp_rewrite::{ConvertError, Converter, Extensions, Pipeline, PREAMBLE};
use std::fs;
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, contents: &str) {
    fs::write(dir.path().join(name), contents).unwrap();
}

#[test]
fn test_directory_mode_renames_sources_and_keeps_headers() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write(&input, "a.c", "#include <stdio.h>\nint *p = NULL;\n");
    write(&input, "b.h", "void f(char *s);\n");
    write(&input, "README.md", "# not code\n");

    let conversions = Converter::default()
        .convert_dir(input.path(), output.path())
        .unwrap();

    assert_eq!(conversions.len(), 2);
    assert_eq!(conversions[0].input, input.path().join("a.c"));
    assert_eq!(conversions[0].output, output.path().join("a.cpp"));
    assert_eq!(conversions[1].output, output.path().join("b.h"));

    let a = fs::read_to_string(output.path().join("a.cpp")).unwrap();
    assert_eq!(
        a,
        format!("{}#include <cstdio>\nint *p = nullptr;\n", PREAMBLE)
    );

    let b = fs::read_to_string(output.path().join("b.h")).unwrap();
    assert_eq!(b, format!("{}void f(const char *s);\n", PREAMBLE));

    assert!(!output.path().join("README.md").exists());
    assert!(!output.path().join("a.c").exists());
}

#[test]
fn test_directory_mode_creates_output_directory() {
    let input = TempDir::new().unwrap();
    let root = TempDir::new().unwrap();
    let output = root.path().join("nested").join("out");
    write(&input, "main.c", "int main(void);\n");

    Converter::default().convert_dir(input.path(), &output).unwrap();

    assert!(output.join("main.cpp").is_file());
}

#[test]
fn test_directory_mode_is_not_recursive() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    fs::create_dir(input.path().join("sub")).unwrap();
    fs::write(input.path().join("sub").join("deep.c"), "int x;\n").unwrap();
    fs::create_dir(input.path().join("dir.c")).unwrap();

    let conversions = Converter::default()
        .convert_dir(input.path(), output.path())
        .unwrap();

    assert!(conversions.is_empty());
    assert_eq!(fs::read_dir(output.path()).unwrap().count(), 0);
}

#[test]
fn test_empty_directory_succeeds() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();

    let conversions = Converter::default()
        .convert_path(input.path(), output.path())
        .unwrap();

    assert!(conversions.is_empty());
}

#[test]
fn test_file_mode_writes_given_path() {
    let dir = TempDir::new().unwrap();
    write(&dir, "in.c", "free(buf);");
    let target = dir.path().join("converted.txt");

    let conversions = Converter::default()
        .convert_path(&dir.path().join("in.c"), &target)
        .unwrap();

    assert_eq!(conversions.len(), 1);
    assert_eq!(conversions[0].changed_lines, 1);
    assert_eq!(
        fs::read_to_string(&target).unwrap(),
        format!("{}delete[] buf;", PREAMBLE)
    );
}

#[test]
fn test_missing_input_reports_read_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.c");

    let err = Converter::default()
        .convert_path(&missing, &dir.path().join("out.cpp"))
        .unwrap_err();

    assert!(matches!(err, ConvertError::Read { .. }));
    assert_eq!(err.path(), missing.as_path());
}

#[test]
fn test_custom_extensions_and_rules() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write(&input, "x.c", "p = NULL;\n");

    let converter = Converter::new(
        Pipeline::empty(),
        Extensions {
            converted: "cc".into(),
            ..Extensions::default()
        },
    );
    converter.convert_dir(input.path(), output.path()).unwrap();

    assert_eq!(
        fs::read_to_string(output.path().join("x.cc")).unwrap(),
        format!("{}p = NULL;\n", PREAMBLE)
    );
}
