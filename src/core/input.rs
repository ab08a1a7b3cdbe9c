//! Reading records (rows of text) from CSV, TSV or JSON sources and feeding
//! them into a [`Table`].

use crate::core::style::Styler;
use crate::core::table::Table;
use crate::errors::{AppError, AppResult};
use clap::ValueEnum;
use serde_json::Value;
use std::io::Read;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    Csv,
    Tsv,
    Json,
}

impl InputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputFormat::Csv => "csv",
            InputFormat::Tsv => "tsv",
            InputFormat::Json => "json",
        }
    }
}

/// Reads every record of `reader`.
///
/// `delimiter` only applies to [`InputFormat::Csv`]; TSV always splits on tabs.
/// Records may have different lengths.
pub fn read_records<R: Read>(
    reader: R,
    format: InputFormat,
    delimiter: u8,
) -> AppResult<Vec<Vec<String>>> {
    match format {
        InputFormat::Csv => read_delimited(reader, delimiter),
        InputFormat::Tsv => read_delimited(reader, b'\t'),
        InputFormat::Json => read_json(reader),
    }
}

fn read_delimited<R: Read>(reader: R, delimiter: u8) -> AppResult<Vec<Vec<String>>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(reader);

    let mut out = Vec::new();
    for record in rdr.records() {
        let record = record?;
        out.push(record.iter().map(str::to_string).collect());
    }
    Ok(out)
}

fn read_json<R: Read>(reader: R) -> AppResult<Vec<Vec<String>>> {
    let value: Value = serde_json::from_reader(reader)?;
    let Value::Array(rows) = value else {
        return Err(AppError::InvalidInput(
            "JSON input must be an array of rows".to_string(),
        ));
    };

    rows.into_iter()
        .enumerate()
        .map(|(i, row)| -> AppResult<Vec<String>> {
            match row {
                Value::Array(cells) => cells.into_iter().map(|c| scalar_to_string(i, c)).collect(),
                // serde_json maps iterate in key order
                Value::Object(map) => map.into_iter().map(|(_, c)| scalar_to_string(i, c)).collect(),
                _ => Err(AppError::InvalidInput(format!(
                    "row {i}: expected an array or an object"
                ))),
            }
        })
        .collect()
}

fn scalar_to_string(row: usize, value: Value) -> AppResult<String> {
    match value {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Array(_) | Value::Object(_) => Err(AppError::InvalidInput(format!(
            "row {row}: nested values are not supported"
        ))),
    }
}

/// Commits one table row per record. With `header`, the first record is
/// written through [`Table::write_colored_row`] using `header_style`.
pub fn fill_table<S: Styler + ?Sized>(
    table: &mut Table,
    records: Vec<Vec<String>>,
    header: bool,
    header_style: &S,
) {
    let mut records = records.into_iter();

    if header && let Some(first) = records.next() {
        table.write_colored_row(header_style, &first);
    }

    for record in records {
        for cell in record {
            table.write_cell(cell);
        }
        table.commit_row();
    }
}
