use std::collections::BTreeSet;

use crate::table::Table;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubjectLists {
    pub include: Vec<String>,
    pub exclude: Vec<String>,
}

/// Excluded subjects are those of `original` that were filtered out, plus
/// every entry of the remove list whether or not it appeared in the table.
/// Both lists are unique and ordered like the matrix rows.
pub fn run_stage5(original: &Table, filtered: &Table, removed: &[String]) -> SubjectLists {
    let kept = filtered.id_set();
    let mut excluded: BTreeSet<String> = original.id_set().difference(&kept).cloned().collect();
    excluded.extend(removed.iter().cloned());

    let mut include: Vec<String> = kept.into_iter().collect();
    let mut exclude: Vec<String> = excluded.into_iter().collect();
    original.sort_id_list(&mut include);
    original.sort_id_list(&mut exclude);
    SubjectLists { include, exclude }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_reconcile.rs"]
mod tests;
