use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use crate::input::delim::{Delimiter, detect_file_delimiter};
use crate::input::{InputError, open_reader, read_first_line};
use crate::table::Table;

#[derive(Debug, Error)]
pub enum Stage1Error {
    #[error("input error: {0}")]
    Input(#[from] InputError),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        line: u64,
        expected: usize,
        found: usize,
    },
}

#[derive(Debug, Clone)]
pub struct LoadedTable {
    pub path: PathBuf,
    pub delimiter: Delimiter,
    pub table: Table,
    pub duplicate_ids: usize,
}

pub fn run_stage1(path: &Path) -> Result<LoadedTable, Stage1Error> {
    let first_line =
        read_first_line(path)?.ok_or_else(|| InputError::EmptyFile(path.to_path_buf()))?;
    let delimiter = detect_file_delimiter(path, &first_line);
    debug!(path = %path.display(), %delimiter, "detected delimiter");

    let (header, records) = match delimiter {
        Delimiter::Newline => read_single_column(path)?,
        other => read_delimited(path, other.as_byte())?,
    };
    if header.is_empty() || header.iter().all(|h| h.is_empty()) {
        return Err(InputError::NoColumns(path.to_path_buf()).into());
    }

    let mut table = Table::from_raw(header, records);
    table.sort_by_id();

    let missing_ids = table.rows.iter().filter(|r| r.id_missing()).count();
    if missing_ids > 0 {
        warn!(rows = missing_ids, "rows without a subject ID");
    }
    let duplicate_ids = table.n_rows() - missing_ids - table.id_set().len();
    if duplicate_ids > 0 {
        warn!(
            column = table.id_column(),
            duplicates = duplicate_ids,
            "subject ID column contains duplicates"
        );
    }

    Ok(LoadedTable {
        path: path.to_path_buf(),
        delimiter,
        table,
        duplicate_ids,
    })
}

fn read_delimited(
    path: &Path,
    delimiter: u8,
) -> Result<(Vec<String>, Vec<Vec<String>>), Stage1Error> {
    let reader = open_reader(path)?;
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let header: Vec<String> = csv_reader.headers()?.iter().map(String::from).collect();
    let mut records = Vec::new();
    for result in csv_reader.records() {
        let record = result?;
        if record.len() != header.len() {
            return Err(Stage1Error::FieldCount {
                line: record.position().map(|p| p.line()).unwrap_or(0),
                expected: header.len(),
                found: record.len(),
            });
        }
        records.push(record.iter().map(String::from).collect());
    }
    Ok((header, records))
}

fn read_single_column(path: &Path) -> Result<(Vec<String>, Vec<Vec<String>>), Stage1Error> {
    let mut reader = open_reader(path)?;
    let mut line = String::new();
    let mut lines = Vec::new();
    loop {
        line.clear();
        if reader.read_line(&mut line).map_err(InputError::from)? == 0 {
            break;
        }
        let value = line.trim_end_matches(['\n', '\r']);
        if value.is_empty() {
            continue;
        }
        lines.push(value.to_string());
    }
    let mut lines = lines.into_iter();
    let header = lines.next().map(|h| vec![h]).unwrap_or_default();
    Ok((header, lines.map(|l| vec![l]).collect()))
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_load.rs"]
mod tests;
