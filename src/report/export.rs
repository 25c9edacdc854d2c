//! Report export functions for CSV and YAML formats.
//!
//! Both renderers consume a finished row sequence and write it to any
//! `io::Write`.

use super::types::{Column, DataRow, Probability, Row, columns};
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

/// Field written in place of an elided run
pub const ELISION_TEXT: &str = "...";

/// Style tag attached to rows with probability above one half
pub const HIGHLIGHT_CSS: &str = "hi";

/// Render rows as CSV.
///
/// Writes a header of column display names, then one record per row. The
/// elision marker is a short record with a single `...` field.
pub fn render_csv<W: Write>(rows: &[Row], writer: W) -> Result<()> {
    let mut csv = csv::WriterBuilder::new().flexible(true).from_writer(writer);

    csv.write_record(columns().iter().map(|c| c.name.as_str()))?;

    for row in rows {
        match row {
            Row::Data(data) => {
                let num_people = data.num_people.to_string();
                let probability = data.probability.to_string();
                csv.write_record([num_people.as_str(), probability.as_str(), data.percent.as_str()])?;
            }
            Row::Elided => csv.write_record([ELISION_TEXT])?,
        }
    }

    csv.flush()?;
    Ok(())
}

#[derive(Serialize)]
struct MarkupDocument<'a> {
    tables: MarkupTables<'a>,
}

#[derive(Serialize)]
struct MarkupTables<'a> {
    probs: MarkupTable<'a>,
}

#[derive(Serialize)]
struct MarkupTable<'a> {
    cols: Vec<Column>,
    rows: Vec<MarkupRow<'a>>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum MarkupRow<'a> {
    Data {
        num_people: u32,
        probability: Probability,
        percent: &'a str,
        #[serde(rename = "_css", skip_serializing_if = "Option::is_none")]
        css: Option<&'static str>,
    },
    Elided {
        num_people: &'static str,
    },
}

impl<'a> From<&'a Row> for MarkupRow<'a> {
    fn from(row: &'a Row) -> Self {
        match row {
            Row::Data(DataRow { num_people, probability, percent }) => MarkupRow::Data {
                num_people: *num_people,
                probability: *probability,
                percent,
                css: probability.is_likely().then_some(HIGHLIGHT_CSS),
            },
            Row::Elided => MarkupRow::Elided { num_people: ELISION_TEXT },
        }
    }
}

/// Render rows as a YAML data document under `tables.probs`.
///
/// `cols` carries the column descriptors for templates that build headers
/// dynamically; rows above one half carry `_css: hi`.
pub fn render_markup<W: Write>(rows: &[Row], writer: W) -> Result<()> {
    let document = MarkupDocument {
        tables: MarkupTables {
            probs: MarkupTable { cols: columns(), rows: rows.iter().map(MarkupRow::from).collect() },
        },
    };

    serde_yaml::to_writer(writer, &document)?;
    Ok(())
}

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;
