use std::collections::HashSet;

use tracing::warn;

use crate::table::Table;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowFilterStats {
    pub rows_before: usize,
    pub rows_after: usize,
    /// List entries that matched no row in the table.
    pub unmatched_retain: Vec<String>,
    pub unmatched_remove: Vec<String>,
}

pub fn run_stage2(table: &Table, retain: &[String], remove: &[String]) -> (Table, RowFilterStats) {
    let mut out = table.clone();
    let mut stats = RowFilterStats {
        rows_before: table.n_rows(),
        ..RowFilterStats::default()
    };

    stats.unmatched_retain = retain_subjects(&mut out, retain);
    stats.unmatched_remove = remove_subjects(&mut out, remove);
    stats.rows_after = out.n_rows();

    if !stats.unmatched_retain.is_empty() {
        warn!(
            count = stats.unmatched_retain.len(),
            ids = %stats.unmatched_retain.join(","),
            "retain list entries not found in table"
        );
    }
    if !stats.unmatched_remove.is_empty() {
        warn!(
            count = stats.unmatched_remove.len(),
            ids = %stats.unmatched_remove.join(","),
            "remove list entries not found in table"
        );
    }

    (out, stats)
}

pub fn retain_subjects(table: &mut Table, ids: &[String]) -> Vec<String> {
    if ids.is_empty() {
        return Vec::new();
    }
    let unmatched = unmatched_ids(table, ids);
    let keep: HashSet<&str> = ids.iter().map(String::as_str).collect();
    table
        .rows
        .retain(|r| !r.id_missing() && keep.contains(r.id.as_str()));
    unmatched
}

pub fn remove_subjects(table: &mut Table, ids: &[String]) -> Vec<String> {
    if ids.is_empty() {
        return Vec::new();
    }
    let unmatched = unmatched_ids(table, ids);
    let drop: HashSet<&str> = ids.iter().map(String::as_str).collect();
    table
        .rows
        .retain(|r| r.id_missing() || !drop.contains(r.id.as_str()));
    unmatched
}

fn unmatched_ids(table: &Table, ids: &[String]) -> Vec<String> {
    let present = table.id_set();
    let mut out: Vec<String> = ids
        .iter()
        .filter(|id| !present.contains(id.as_str()))
        .cloned()
        .collect();
    out.dedup();
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_rows.rs"]
mod tests;
