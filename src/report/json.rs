use std::path::Path;

use serde::Serialize;

use crate::input::delim::Delimiter;
use crate::pipeline::stage1_load::LoadedTable;
use crate::pipeline::stage2_rows::RowFilterStats;
use crate::pipeline::stage3_columns::ColumnSelectStats;
use crate::pipeline::stage4_demean::ColumnMean;
use crate::pipeline::stage5_reconcile::SubjectLists;
use crate::pipeline::stage6_write::OutputPaths;
use crate::report::ReportError;
use crate::table::{ColumnKind, Table};

#[derive(Debug, Clone, Serialize)]
pub struct DesignSummary {
    pub tool: ToolSummary,
    pub input: InputSummary,
    pub columns: Vec<ColumnSummary>,
    pub demeaned: Vec<ColumnMean>,
    pub subjects: SubjectSummary,
    pub outputs: OutputSummary,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolSummary {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct InputSummary {
    pub path: String,
    pub delimiter: Delimiter,
    pub n_subjects: usize,
    pub n_columns: usize,
    pub duplicate_ids: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ColumnSummary {
    pub index: usize,
    pub name: String,
    pub kind: ColumnKind,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubjectSummary {
    pub included: usize,
    pub excluded: usize,
    pub dropped_missing: Vec<String>,
    pub unmatched_retain: Vec<String>,
    pub unmatched_remove: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OutputSummary {
    pub matrix: String,
    pub include: String,
    pub exclude: String,
    pub all_info: String,
}

impl DesignSummary {
    pub fn new(
        loaded: &LoadedTable,
        design: &Table,
        rows: &RowFilterStats,
        columns: &ColumnSelectStats,
        demeaned: Vec<ColumnMean>,
        lists: &SubjectLists,
        paths: &OutputPaths,
    ) -> Self {
        Self {
            tool: ToolSummary {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            input: InputSummary {
                path: loaded.path.to_string_lossy().to_string(),
                delimiter: loaded.delimiter,
                n_subjects: loaded.table.n_rows(),
                n_columns: loaded.table.n_cols(),
                duplicate_ids: loaded.duplicate_ids,
            },
            columns: design
                .columns
                .iter()
                .skip(1)
                .map(|c| ColumnSummary {
                    index: c.source_index,
                    name: c.name.clone(),
                    kind: c.kind,
                })
                .collect(),
            demeaned,
            subjects: SubjectSummary {
                included: lists.include.len(),
                excluded: lists.exclude.len(),
                dropped_missing: columns.dropped_missing.clone(),
                unmatched_retain: rows.unmatched_retain.clone(),
                unmatched_remove: rows.unmatched_remove.clone(),
            },
            outputs: OutputSummary {
                matrix: paths.matrix.to_string_lossy().to_string(),
                include: paths.include.to_string_lossy().to_string(),
                exclude: paths.exclude.to_string_lossy().to_string(),
                all_info: paths.all_info.to_string_lossy().to_string(),
            },
        }
    }
}

pub fn write_summary(path: &Path, summary: &DesignSummary) -> Result<(), ReportError> {
    let json = serde_json::to_string_pretty(summary)?;
    std::fs::write(path, json)?;
    Ok(())
}
