//! Process-level behaviour of the `rowsift` binary.

use std::path::PathBuf;
use std::process::{Command, Output};

fn products_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../rowsift-ingest/tests/data/products.csv")
}

fn rowsift(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_rowsift"))
        .args(["--color", "never"])
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("spawn rowsift")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn success_prints_observation_and_rows() {
    let path = products_path();
    let output = rowsift(&[path.to_str().expect("utf-8 path"), "--aggregate", "price", "avg"]);
    assert_eq!(output.status.code(), Some(0));
    let text = stdout(&output);
    assert!(text.starts_with("Aggregation result (avg) for column 'price': 602\n"));
    assert!(text.contains("Processed rows:"));
}

#[test]
fn missing_file_exits_with_error() {
    let output = rowsift(&["/no/such/file.csv"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    let message = stderr(&output);
    assert!(message.starts_with("error: "), "{message}");
    assert!(message.contains("CSV file not found"), "{message}");
}

#[test]
fn data_error_exits_with_error() {
    let path = products_path();
    let output = rowsift(&[path.to_str().expect("utf-8 path"), "--aggregate", "brand", "avg"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).starts_with(
        "error: aggregate brand avg: non-numeric value 'apple' in column 'brand' at row 0"
    ));
}

#[test]
fn invalid_operator_exits_with_error() {
    let path = products_path();
    let output = rowsift(&[path.to_str().expect("utf-8 path"), "--filter", "brand", "neq", "x"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).starts_with("error: Unsupported operator: neq"));
}
