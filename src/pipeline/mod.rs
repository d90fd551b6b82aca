pub mod stage1_load;
pub mod stage2_rows;
pub mod stage3_columns;
pub mod stage4_demean;
pub mod stage5_reconcile;
pub mod stage6_write;

use std::path::PathBuf;
use std::time::Instant;

use thiserror::Error;
use tracing::info;

use crate::pipeline::stage1_load::{Stage1Error, run_stage1};
use crate::pipeline::stage2_rows::run_stage2;
use crate::pipeline::stage3_columns::{Stage3Error, run_stage3};
use crate::pipeline::stage4_demean::{Stage4Error, run_stage4};
use crate::pipeline::stage5_reconcile::{SubjectLists, run_stage5};
use crate::pipeline::stage6_write::{OutputPaths, Stage6Error, run_stage6, with_suffix};
use crate::report::json::{DesignSummary, write_summary};
use crate::table::format::OutputFormat;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("load: {0}")]
    Load(#[from] Stage1Error),
    #[error("column selection: {0}")]
    Columns(#[from] Stage3Error),
    #[error("demean: {0}")]
    Demean(#[from] Stage4Error),
    #[error("write: {0}")]
    Write(#[from] Stage6Error),
    #[error("summary: {0}")]
    Summary(#[from] crate::report::ReportError),
}

#[derive(Debug, Clone)]
pub struct DesignRequest {
    pub input: PathBuf,
    pub prefix: PathBuf,
    pub retain: Vec<String>,
    pub remove: Vec<String>,
    /// Source column indices to keep; empty keeps every covariate.
    pub columns: Vec<usize>,
    pub demean: Vec<usize>,
    pub drop_missing: bool,
    pub format: OutputFormat,
    pub write_summary: bool,
}

#[derive(Debug, Clone)]
pub struct DesignOutcome {
    pub paths: OutputPaths,
    pub lists: SubjectLists,
    pub summary: DesignSummary,
    pub summary_path: Option<PathBuf>,
}

pub fn run_design(req: &DesignRequest) -> Result<DesignOutcome, PipelineError> {
    let start = Instant::now();
    info!(stage = "stage1_load", "starting stage");
    let loaded = run_stage1(&req.input)?;
    info!(
        stage = "stage1_load",
        elapsed_ms = start.elapsed().as_millis(),
        delimiter = %loaded.delimiter,
        subjects = loaded.table.n_rows(),
        columns = loaded.table.n_cols(),
        "finished stage"
    );

    let start = Instant::now();
    info!(stage = "stage2_rows", "starting stage");
    let (rows, row_stats) = run_stage2(&loaded.table, &req.retain, &req.remove);
    info!(
        stage = "stage2_rows",
        elapsed_ms = start.elapsed().as_millis(),
        before = row_stats.rows_before,
        after = row_stats.rows_after,
        "finished stage"
    );

    let start = Instant::now();
    info!(stage = "stage3_columns", "starting stage");
    let (mut selected, column_stats) = run_stage3(&rows, &req.columns, req.drop_missing)?;
    info!(
        stage = "stage3_columns",
        elapsed_ms = start.elapsed().as_millis(),
        covariates = column_stats.retained.len(),
        dropped_missing = column_stats.dropped_missing.len(),
        "finished stage"
    );

    let means = if req.demean.is_empty() {
        Vec::new()
    } else {
        let start = Instant::now();
        info!(stage = "stage4_demean", "starting stage");
        let means = run_stage4(&mut selected, &req.demean)?;
        info!(
            stage = "stage4_demean",
            elapsed_ms = start.elapsed().as_millis(),
            columns = means.len(),
            "finished stage"
        );
        means
    };

    let lists = run_stage5(&loaded.table, &selected, &req.remove);
    info!(
        stage = "stage5_reconcile",
        included = lists.include.len(),
        excluded = lists.exclude.len(),
        "finished stage"
    );

    let start = Instant::now();
    info!(stage = "stage6_write", "starting stage");
    let paths = run_stage6(&req.prefix, &selected, &lists, &req.format)?;
    info!(
        stage = "stage6_write",
        elapsed_ms = start.elapsed().as_millis(),
        matrix = %paths.matrix.display(),
        "finished stage"
    );

    let summary = DesignSummary::new(
        &loaded,
        &selected,
        &row_stats,
        &column_stats,
        means,
        &lists,
        &paths,
    );
    let summary_path = if req.write_summary {
        let path = with_suffix(&req.prefix, ".summary.json");
        write_summary(&path, &summary)?;
        Some(path)
    } else {
        None
    };

    Ok(DesignOutcome {
        paths,
        lists,
        summary,
        summary_path,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/mod.rs"]
mod tests;
