use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use rowsift_core::{Observation, Processor};
use rowsift_ingest::CsvSource;
use rowsift_model::{Capabilities, Dataset, Operation, PipelineError, RowRenderer};

use crate::cli::{Cli, OutputFormatArg};
use crate::render::{TableRenderer, observation_line, render_json};

/// A validated query, built from the parsed command line.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryOptions {
    pub file: PathBuf,
    /// Operations in execution order: filter, aggregate, order-by.
    pub operations: Vec<Operation>,
    pub output: OutputFormatArg,
}

impl QueryOptions {
    /// Validates the operation flags and collects them in execution order.
    pub fn from_cli(cli: &Cli) -> std::result::Result<Self, PipelineError> {
        let mut operations = Vec::new();
        if let Some([column, operator, value]) = cli.filter.as_deref() {
            operations.push(Operation::filter(column, operator, value)?);
        }
        if let Some([column, kind]) = cli.aggregate.as_deref() {
            operations.push(Operation::aggregate(column, kind)?);
        }
        if let Some([column, direction]) = cli.order_by.as_deref() {
            operations.push(Operation::sort(column, direction)?);
        }
        Ok(Self {
            file: cli.file.clone(),
            operations,
            output: cli.output,
        })
    }

    /// Capabilities needed by the requested operations; flags that were not
    /// given stay disabled.
    pub fn capabilities(&self) -> Capabilities {
        Capabilities::for_operations(&self.operations)
    }
}

/// Rows and observations left after running a query.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult {
    pub observations: Vec<Observation>,
    pub rows: Dataset,
}

pub fn run_query(options: &QueryOptions) -> Result<QueryResult> {
    let span = info_span!("query", file = %options.file.display());
    let _guard = span.enter();
    let start = Instant::now();

    let source = CsvSource::new(&options.file);
    let mut processor = Processor::from_source(&source, options.capabilities())
        .with_context(|| format!("load rows from {}", options.file.display()))?;

    for operation in &options.operations {
        processor
            .apply(operation)
            .with_context(|| operation.to_string())?;
    }

    info!(
        operations = options.operations.len(),
        rows = processor.rows().len(),
        duration_ms = start.elapsed().as_millis(),
        "query complete"
    );

    Ok(QueryResult {
        observations: processor.observations().to_vec(),
        rows: processor.into_rows(),
    })
}

/// Formats a query result for stdout.
pub fn format_result(
    result: &QueryResult,
    output: OutputFormatArg,
    renderer: &TableRenderer,
) -> Result<String> {
    match output {
        OutputFormatArg::Table => {
            let mut text = String::new();
            let styled = renderer.is_styled();
            for observation in &result.observations {
                text.push_str(&observation_line(observation, styled));
                text.push('\n');
            }
            text.push_str("\nProcessed rows:\n");
            text.push_str(&renderer.render(&result.rows));
            Ok(text)
        }
        OutputFormatArg::Json => {
            render_json(&result.observations, &result.rows).context("serialize query result")
        }
    }
}
