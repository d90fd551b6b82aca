use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::pipeline::stage5_reconcile::SubjectLists;
use crate::table::Table;
use crate::table::format::OutputFormat;

#[derive(Debug, Error)]
pub enum Stage6Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub matrix: PathBuf,
    pub exclude: PathBuf,
    pub include: PathBuf,
    pub all_info: PathBuf,
}

impl OutputPaths {
    pub fn from_prefix(prefix: &Path) -> Self {
        Self {
            matrix: with_suffix(prefix, ".txt"),
            exclude: with_suffix(prefix, ".exclude.txt"),
            include: with_suffix(prefix, ".include.txt"),
            all_info: with_suffix(prefix, ".all_info.txt"),
        }
    }
}

/// Appends `suffix` to the final path component, keeping any dots already in the prefix.
pub fn with_suffix(prefix: &Path, suffix: &str) -> PathBuf {
    let mut s = prefix.as_os_str().to_os_string();
    s.push(suffix);
    PathBuf::from(s)
}

pub fn run_stage6(
    prefix: &Path,
    table: &Table,
    lists: &SubjectLists,
    format: &OutputFormat,
) -> Result<OutputPaths, Stage6Error> {
    if let Some(parent) = prefix.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let paths = OutputPaths::from_prefix(prefix);
    write_table(&paths.matrix, table, format, false)?;
    write_list(&paths.exclude, &lists.exclude)?;
    write_list(&paths.include, &lists.include)?;
    write_table(&paths.all_info, table, format, true)?;
    Ok(paths)
}

pub fn write_table(
    path: &Path,
    table: &Table,
    format: &OutputFormat,
    with_header: bool,
) -> Result<(), Stage6Error> {
    let first = if with_header { 0 } else { 1 };
    let columns = &table.columns[first.min(table.columns.len())..];

    if columns.is_empty() {
        // No fields to delimit: one blank line per subject.
        let mut out = BufWriter::new(File::create(path)?);
        for _ in &table.rows {
            out.write_all(b"\n")?;
        }
        out.flush()?;
        return Ok(());
    }

    let mut writer = csv::WriterBuilder::new()
        .delimiter(format.sep.byte())
        .quote_style(csv::QuoteStyle::Necessary)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_path(path)?;

    if with_header {
        writer.write_record(columns.iter().map(|c| c.name.as_str()))?;
    }
    for row in &table.rows {
        writer.write_record(
            row.cells[first..]
                .iter()
                .zip(columns)
                .map(|(cell, column)| format.render(cell, column.kind)),
        )?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_list(path: &Path, items: &[String]) -> Result<(), Stage6Error> {
    let mut out = BufWriter::new(File::create(path)?);
    for item in items {
        writeln!(out, "{item}")?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage6_write.rs"]
mod tests;
