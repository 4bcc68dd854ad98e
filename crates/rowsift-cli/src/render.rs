use std::io::{self, IsTerminal};

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use crossterm::style::Stylize;
use serde::Serialize;

use rowsift_core::{CellValue, Observation};
use rowsift_model::{AggregationKind, Dataset, Row, RowRenderer};

/// Renders rows as a bordered grid, one column per dataset column.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableRenderer {
    /// `Some(true)` forces ANSI styling, `Some(false)` disables it, `None`
    /// styles only when stdout is a terminal.
    pub styling: Option<bool>,
}

impl TableRenderer {
    pub fn with_styling(styling: Option<bool>) -> Self {
        Self { styling }
    }

    /// Whether output from this renderer carries ANSI styling.
    pub fn is_styled(&self) -> bool {
        self.styling.unwrap_or_else(|| io::stdout().is_terminal())
    }

    pub fn build_table(&self, dataset: &Dataset) -> Table {
        let columns = dataset.display_columns();
        let mut table = Table::new();
        match self.styling {
            Some(true) => {
                table.enforce_styling();
            }
            Some(false) => {
                table.force_no_tty();
            }
            None => {}
        }
        apply_grid_style(&mut table);
        table.set_header(columns.iter().map(|column| header_cell(column)));
        for row in dataset {
            table.add_row(columns.iter().map(|column| value_cell(row, column)));
        }
        table
    }
}

impl RowRenderer for TableRenderer {
    fn render(&self, dataset: &Dataset) -> String {
        self.build_table(dataset).to_string()
    }
}

fn apply_grid_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn value_cell(row: &Row, column: &str) -> Cell {
    let value = row.get(column).unwrap_or_default();
    let cell = Cell::new(value);
    if CellValue::parse(value).is_number() {
        cell.set_alignment(CellAlignment::Right)
    } else {
        cell
    }
}

/// One line per scalar aggregation result, green when `styled`.
pub fn observation_line(observation: &Observation, styled: bool) -> String {
    let line = observation.to_string();
    if styled {
        line.green().to_string()
    } else {
        line
    }
}

// ---------------------------------------------------------------------------
// JSON output
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct ObservationReport<'a> {
    column: &'a str,
    kind: AggregationKind,
    value: f64,
}

#[derive(Serialize)]
struct QueryReport<'a> {
    observations: Vec<ObservationReport<'a>>,
    columns: &'a [String],
    rows: &'a [Row],
}

/// Renders observations and rows as one pretty-printed JSON document.
pub fn render_json(observations: &[Observation], dataset: &Dataset) -> serde_json::Result<String> {
    let report = QueryReport {
        observations: observations
            .iter()
            .map(|observation| ObservationReport {
                column: &observation.column,
                kind: observation.kind,
                value: observation.value,
            })
            .collect(),
        columns: &dataset.columns,
        rows: &dataset.rows,
    };
    serde_json::to_string_pretty(&report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        Dataset::from_records(
            ["name", "price"],
            [["galaxy a54", "349"], ["redmi 10c", "149"]],
        )
    }

    #[test]
    fn table_lists_headers_in_source_order() {
        let text = TableRenderer::with_styling(Some(false)).render(&sample());
        let name_at = text.find("name").expect("name header");
        let price_at = text.find("price").expect("price header");
        assert!(name_at < price_at);
        assert!(text.contains("galaxy a54"));
        assert!(text.contains("149"));
        assert!(!text.contains('\u{1b}'));
    }

    #[test]
    fn row_cells_follow_column_order() {
        let table = TableRenderer::default().build_table(&sample());
        let row = table.row(0).expect("first row");
        let cells: Vec<_> = row.cell_iter().collect();
        assert_eq!(cells.len(), 2);
        assert_eq!(cells[0].content(), "galaxy a54");
        assert_eq!(cells[1].content(), "349");
    }

    #[test]
    fn missing_cell_renders_empty() {
        let dataset = Dataset::new(
            vec!["name".to_string(), "price".to_string()],
            vec![Row::from_iter([("name", "x")])],
        );
        let table = TableRenderer::default().build_table(&dataset);
        let cells: Vec<_> = table.row(0).expect("row").cell_iter().collect();
        assert_eq!(cells[1].content(), "");
    }

    #[test]
    fn observation_line_is_green_only_when_styled() {
        crossterm::style::force_color_output(true);
        let observation = Observation {
            column: "price".to_string(),
            kind: AggregationKind::Avg,
            value: 602.0,
        };
        let plain = "Aggregation result (avg) for column 'price': 602";
        assert_eq!(observation_line(&observation, false), plain);

        let styled = observation_line(&observation, true);
        assert_ne!(styled, plain);
        assert!(styled.starts_with('\u{1b}'));
        assert!(styled.contains(plain));
    }

    #[test]
    fn json_report_shape() {
        let observations = vec![Observation {
            column: "price".to_string(),
            kind: AggregationKind::Avg,
            value: 249.5,
        }];
        let json = render_json(&observations, &sample()).expect("render json");
        let value: serde_json::Value = serde_json::from_str(&json).expect("parse json");
        insta::assert_json_snapshot!(value, @r###"
        {
          "columns": [
            "name",
            "price"
          ],
          "observations": [
            {
              "column": "price",
              "kind": "avg",
              "value": 249.5
            }
          ],
          "rows": [
            {
              "name": "galaxy a54",
              "price": "349"
            },
            {
              "name": "redmi 10c",
              "price": "149"
            }
          ]
        }
        "###);
    }
}
