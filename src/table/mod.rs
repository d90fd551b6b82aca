pub mod format;

use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Tokens read as missing data, matching the defaults of common dataframe readers.
pub const MISSING_MARKERS: [&str; 19] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Missing,
    Int(i64),
    Float(f64),
    Text(String),
}

impl Cell {
    pub fn parse(raw: &str) -> Self {
        if MISSING_MARKERS.contains(&raw) {
            return Cell::Missing;
        }
        if let Ok(v) = raw.parse::<i64>() {
            return Cell::Int(v);
        }
        match raw.parse::<f64>() {
            Ok(v) if v.is_nan() => Cell::Missing,
            Ok(v) => Cell::Float(v),
            Err(_) => Cell::Text(raw.to_string()),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Int(v) => Some(*v as f64),
            Cell::Float(v) => Some(*v),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Integer,
    Float,
    Text,
}

impl ColumnKind {
    pub fn is_numeric(self) -> bool {
        !matches!(self, ColumnKind::Text)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ColumnKind::Integer => "integer",
            ColumnKind::Float => "float",
            ColumnKind::Text => "text",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    /// Position of the column in the file the table was loaded from.
    pub source_index: usize,
    pub kind: ColumnKind,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub id: String,
    pub cells: Vec<Cell>,
}

impl Row {
    pub fn id_missing(&self) -> bool {
        self.cells.first().is_none_or(Cell::is_missing)
    }
}

/// In-memory table. Column 0 always holds the subject identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Row>,
}

impl Table {
    /// Cells of a text column keep their raw text, numeric-looking or not.
    pub fn from_raw(header: Vec<String>, records: Vec<Vec<String>>) -> Self {
        let parsed: Vec<Vec<Cell>> = records
            .iter()
            .map(|fields| fields.iter().map(|f| Cell::parse(f)).collect())
            .collect();

        let columns: Vec<Column> = header
            .into_iter()
            .enumerate()
            .map(|(idx, name)| Column {
                name,
                source_index: idx,
                kind: infer_kind(parsed.iter().map(|cells| &cells[idx])),
            })
            .collect();

        let rows = records
            .into_iter()
            .zip(parsed)
            .map(|(fields, mut cells)| {
                for (idx, column) in columns.iter().enumerate() {
                    if column.kind == ColumnKind::Text && !cells[idx].is_missing() {
                        cells[idx] = Cell::Text(fields[idx].clone());
                    }
                }
                let id = fields.into_iter().next().unwrap_or_default();
                Row { id, cells }
            })
            .collect();

        Table { columns, rows }
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    pub fn id_column(&self) -> &str {
        self.columns.first().map(|c| c.name.as_str()).unwrap_or("")
    }

    pub fn id_set(&self) -> BTreeSet<String> {
        self.rows
            .iter()
            .filter(|r| !r.id_missing())
            .map(|r| r.id.clone())
            .collect()
    }

    pub fn position_of_source(&self, source_index: usize) -> Option<usize> {
        self.columns
            .iter()
            .position(|c| c.source_index == source_index)
    }

    pub fn missing_count(&self, col: usize) -> usize {
        self.rows.iter().filter(|r| r.cells[col].is_missing()).count()
    }

    fn numeric_ids(&self) -> bool {
        self.columns.first().is_some_and(|c| c.kind.is_numeric())
    }

    /// Stable ascending sort on the subject-ID column, missing IDs last.
    pub fn sort_by_id(&mut self) {
        let numeric = self.numeric_ids();
        self.rows.sort_by(|a, b| compare_ids(a, b, numeric));
    }

    /// Sorts raw ID strings in the same order `sort_by_id` puts rows in.
    /// With a numeric ID column, entries that do not parse go after the numbers.
    pub fn sort_id_list(&self, ids: &mut [String]) {
        let numeric = self.numeric_ids();
        ids.sort_by(|a, b| compare_id_text(a, b, numeric));
    }
}

pub fn infer_kind<'a>(cells: impl Iterator<Item = &'a Cell>) -> ColumnKind {
    let mut kind = ColumnKind::Integer;
    for cell in cells {
        match cell {
            Cell::Int(_) => {}
            Cell::Float(_) | Cell::Missing => {
                if kind == ColumnKind::Integer {
                    kind = ColumnKind::Float;
                }
            }
            Cell::Text(_) => return ColumnKind::Text,
        }
    }
    kind
}

fn compare_ids(a: &Row, b: &Row, numeric: bool) -> Ordering {
    match (a.id_missing(), b.id_missing()) {
        (true, true) => return Ordering::Equal,
        (true, false) => return Ordering::Greater,
        (false, true) => return Ordering::Less,
        (false, false) => {}
    }
    if numeric {
        let x = a.cells[0].as_f64().unwrap_or(f64::NAN);
        let y = b.cells[0].as_f64().unwrap_or(f64::NAN);
        return x.partial_cmp(&y).unwrap_or(Ordering::Equal);
    }
    a.id.cmp(&b.id)
}

fn compare_id_text(a: &str, b: &str, numeric: bool) -> Ordering {
    if numeric {
        let x = a.trim().parse::<f64>().ok().filter(|v| !v.is_nan());
        let y = b.trim().parse::<f64>().ok().filter(|v| !v.is_nan());
        let by_value = match (x, y) {
            (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        return by_value.then_with(|| a.cmp(b));
    }
    a.cmp(b)
}

#[cfg(test)]
#[path = "../../tests/src_inline/table/mod.rs"]
mod tests;
