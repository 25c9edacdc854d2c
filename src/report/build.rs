//! Row construction from a profile.

use super::types::{DataRow, Probability, Row};
use crate::error::Result;
use crate::probability::{probability, truncate_units};
use crate::profile::ProfileSpec;
use log::debug;

/// Compute one data row for `num_people`.
pub fn build_row(num_people: u32) -> Result<DataRow> {
    let exact = probability(num_people)?;
    let probability = Probability::from_units(truncate_units(&exact));
    Ok(DataRow { num_people, probability, percent: probability.percent() })
}

/// Build the ordered rows for a profile.
///
/// Elided counts are skipped. A single `Row::Elided` marker follows the row
/// for the count just below the smallest elided count. Only one contiguous
/// elided run is supported; disjoint runs still produce one marker.
pub fn build_rows(spec: &ProfileSpec) -> Result<Vec<Row>> {
    let mut rows = Vec::with_capacity(spec.counts.len() + 1);
    let elided_start = spec.elided.first().copied();

    for &count in &spec.counts {
        if spec.elided.contains(&count) {
            continue;
        }
        rows.push(Row::Data(build_row(count)?));
        if elided_start == Some(count + 1) {
            rows.push(Row::Elided);
        }
    }

    debug!(
        "Built {} data rows from {} counts (elision marker: {})",
        rows.iter().filter_map(Row::as_data).count(),
        spec.counts.len(),
        rows.iter().any(Row::is_elided)
    );

    Ok(rows)
}

#[cfg(test)]
#[path = "build_test.rs"]
mod build_test;
