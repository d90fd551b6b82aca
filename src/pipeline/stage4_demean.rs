use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::table::{Cell, ColumnKind, Table};

#[derive(Debug, Error)]
pub enum Stage4Error {
    #[error("column {index} cannot be demeaned: it is the subject ID column")]
    IdColumn { index: usize },
    #[error("column {index} cannot be demeaned: it is not retained in the design matrix")]
    NotRetained { index: usize },
    #[error("column {index} ({name}) cannot be demeaned: it contains non-numeric values")]
    NonNumeric { index: usize, name: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnMean {
    pub index: usize,
    pub name: String,
    /// `None` when the column held no values.
    pub mean: Option<f64>,
}

pub fn run_stage4(table: &mut Table, indices: &[usize]) -> Result<Vec<ColumnMean>, Stage4Error> {
    let mut indices = indices.to_vec();
    indices.sort_unstable();
    indices.dedup();

    let mut positions = Vec::with_capacity(indices.len());
    for &index in &indices {
        if index == 0 {
            return Err(Stage4Error::IdColumn { index });
        }
        let pos = table
            .position_of_source(index)
            .ok_or(Stage4Error::NotRetained { index })?;
        let column = &table.columns[pos];
        if column.kind == ColumnKind::Text {
            return Err(Stage4Error::NonNumeric {
                index,
                name: column.name.clone(),
            });
        }
        positions.push((index, pos));
    }

    let mut means = Vec::with_capacity(positions.len());
    for (index, pos) in positions {
        let mean = demean_column(table, pos);
        let name = table.columns[pos].name.clone();
        match mean {
            Some(m) => debug!(column = %name, mean = m, "demeaned column"),
            None => warn!(column = %name, "column has no values to demean"),
        }
        means.push(ColumnMean { index, name, mean });
    }
    Ok(means)
}

pub fn demean_column(table: &mut Table, pos: usize) -> Option<f64> {
    let values: Vec<f64> = table
        .rows
        .iter()
        .filter_map(|r| r.cells[pos].as_f64())
        .collect();
    if values.is_empty() {
        return None;
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;

    for row in &mut table.rows {
        let cell = &mut row.cells[pos];
        if let Some(v) = cell.as_f64() {
            *cell = Cell::Float(v - mean);
        }
    }
    table.columns[pos].kind = ColumnKind::Float;
    Some(mean)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_demean.rs"]
mod tests;
