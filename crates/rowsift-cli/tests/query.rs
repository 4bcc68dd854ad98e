//! End-to-end tests for the query command.

use std::path::PathBuf;

use clap::Parser;

use rowsift_cli::cli::{Cli, OutputFormatArg};
use rowsift_cli::commands::{QueryOptions, QueryResult, format_result, run_query};
use rowsift_cli::render::TableRenderer;
use rowsift_ingest::read_csv_dataset;
use rowsift_model::{Capabilities, Dataset, PipelineError};

fn products_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../rowsift-ingest/tests/data/products.csv")
}

fn options(extra: &[&str]) -> QueryOptions {
    let path = products_path();
    let mut args = vec!["rowsift", path.to_str().expect("utf-8 path")];
    args.extend_from_slice(extra);
    let cli = Cli::try_parse_from(args).expect("parse args");
    QueryOptions::from_cli(&cli).expect("valid operations")
}

fn names(rows: &Dataset) -> Vec<&str> {
    rows.iter().filter_map(|row| row.get("name")).collect()
}

fn run(extra: &[&str]) -> QueryResult {
    run_query(&options(extra)).expect("run query")
}

#[test]
fn no_flags_returns_every_row() {
    let options = options(&[]);
    assert!(options.operations.is_empty());
    assert_eq!(options.capabilities(), Capabilities::none());

    let result = run_query(&options).expect("run query");
    assert_eq!(result.rows.len(), 10);
    assert!(result.observations.is_empty());
}

#[test]
fn operations_run_filter_aggregate_order() {
    let options = options(&[
        "--order-by",
        "price",
        "asc",
        "--aggregate",
        "rating",
        "min",
        "--filter",
        "brand",
        "eq",
        "samsung",
    ]);
    let kinds: Vec<String> = options.operations.iter().map(ToString::to_string).collect();
    assert_eq!(
        kinds,
        vec![
            "filter brand eq \"samsung\"",
            "aggregate rating min",
            "order-by price asc"
        ]
    );

    let result = run_query(&options).expect("run query");
    assert_eq!(names(&result.rows), vec!["galaxy a54"]);
}

#[test]
fn avg_is_printed_before_rows() {
    let result = run(&["--aggregate", "price", "avg"]);
    assert_eq!(result.rows.len(), 10);

    let text = format_result(
        &result,
        OutputFormatArg::Table,
        &TableRenderer::with_styling(Some(false)),
    )
    .expect("format");
    assert!(text.starts_with("Aggregation result (avg) for column 'price': 602\n"));
    assert!(text.contains("Processed rows:"));
    assert!(text.contains("iphone 13 mini"));
}

#[test]
fn rating_desc_puts_best_first() {
    let result = run(&["--order-by", "rating", "desc"]);
    assert_eq!(names(&result.rows)[0], "iphone 15 pro");
}

#[test]
fn json_output_parses() {
    let result = run(&["--filter", "price", "lt", "300", "--output", "json"]);
    let text = format_result(&result, OutputFormatArg::Json, &TableRenderer::default())
        .expect("format");
    let value: serde_json::Value = serde_json::from_str(&text).expect("valid json");
    assert_eq!(value["rows"].as_array().map(Vec::len), Some(3));
    assert_eq!(value["rows"][0]["name"], "redmi note 12");
}

#[test]
fn invalid_operator_is_rejected_before_loading() {
    let cli = Cli::try_parse_from(["rowsift", "missing.csv", "--filter", "brand", "neq", "x"])
        .expect("parse args");
    let err = QueryOptions::from_cli(&cli).unwrap_err();
    assert_eq!(err, PipelineError::UnsupportedOperator("neq".to_string()));
}

#[test]
fn data_errors_carry_operation_context() {
    let err = run_query(&options(&["--aggregate", "brand", "max"])).unwrap_err();
    insta::assert_snapshot!(
        format!("{err:#}"),
        @"aggregate brand max: non-numeric value 'apple' in column 'brand' at row 0"
    );
}

#[test]
fn missing_file_is_reported() {
    let cli = Cli::try_parse_from(["rowsift", "/no/such/file.csv"]).expect("parse args");
    let options = QueryOptions::from_cli(&cli).expect("no operations");
    let err = run_query(&options).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.starts_with("load rows from /no/such/file.csv"));
    assert!(message.contains("CSV file not found"));
}

#[test]
fn source_file_is_unchanged_by_query() {
    let before = read_csv_dataset(&products_path()).expect("read");
    run(&["--filter", "brand", "eq", "apple", "--order-by", "price", "asc"]);
    let after = read_csv_dataset(&products_path()).expect("read");
    assert_eq!(before, after);
}

#[test]
fn repeated_filter_uses_last_occurrence() {
    let options = options(&[
        "--filter", "brand", "eq", "apple", "--filter", "brand", "eq", "samsung",
    ]);
    assert_eq!(options.operations.len(), 1);
    let result = run_query(&options).expect("run query");
    assert_eq!(
        names(&result.rows),
        vec!["galaxy s23 ultra", "galaxy a54", "galaxy z flip 5"]
    );
}
