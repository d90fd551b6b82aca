use thiserror::Error;
use tracing::warn;

use crate::table::{Row, Table};

#[derive(Debug, Error)]
pub enum Stage3Error {
    #[error("column index {index} out of range: table has {n_cols} columns (0..{n_cols})")]
    IndexOutOfRange { index: usize, n_cols: usize },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnSelectStats {
    pub retained: Vec<usize>,
    pub dropped_missing: Vec<String>,
}

pub fn run_stage3(
    table: &Table,
    indices: &[usize],
    drop_missing: bool,
) -> Result<(Table, ColumnSelectStats), Stage3Error> {
    let retained = resolve_indices(table, indices)?;

    let mut positions = Vec::with_capacity(retained.len() + 1);
    positions.push(0);
    for &idx in &retained {
        let pos = table
            .position_of_source(idx)
            .ok_or(Stage3Error::IndexOutOfRange {
                index: idx,
                n_cols: table.n_cols(),
            })?;
        positions.push(pos);
    }

    let columns = positions.iter().map(|&p| table.columns[p].clone()).collect();
    let mut rows: Vec<Row> = table
        .rows
        .iter()
        .map(|r| Row {
            id: r.id.clone(),
            cells: positions.iter().map(|&p| r.cells[p].clone()).collect(),
        })
        .collect();

    let mut dropped_missing = Vec::new();
    if drop_missing {
        rows.retain(|r| {
            let complete = r.cells.iter().all(|c| !c.is_missing());
            if !complete && !r.id_missing() {
                dropped_missing.push(r.id.clone());
            }
            complete
        });
        if !dropped_missing.is_empty() {
            warn!(
                count = dropped_missing.len(),
                ids = %dropped_missing.join(","),
                "dropped subjects with missing covariates"
            );
        }
    }

    Ok((
        Table { columns, rows },
        ColumnSelectStats {
            retained,
            dropped_missing,
        },
    ))
}

fn resolve_indices(table: &Table, indices: &[usize]) -> Result<Vec<usize>, Stage3Error> {
    let n_cols = table.n_cols();
    if indices.is_empty() {
        return Ok((1..n_cols).collect());
    }

    let mut sorted = indices.to_vec();
    sorted.sort_unstable();
    let before = sorted.len();
    sorted.dedup();
    if sorted.len() != before {
        warn!("duplicate column indices ignored");
    }
    if sorted.first() == Some(&0) {
        warn!("column index 0 is the subject ID and is always kept");
        sorted.remove(0);
    }
    if let Some(&index) = sorted.iter().find(|&&i| i >= n_cols) {
        return Err(Stage3Error::IndexOutOfRange { index, n_cols });
    }
    Ok(sorted)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_columns.rs"]
mod tests;
