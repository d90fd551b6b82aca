use crate::pipeline::stage1_load::LoadedTable;

/// Column overview used to pick indices for `--ret-cols` and `--demean`.
pub fn render_overview(loaded: &LoadedTable) -> String {
    let table = &loaded.table;
    let mut out = String::new();
    out.push_str(&format!("# file\t{}\n", loaded.path.display()));
    out.push_str(&format!("# delimiter\t{}\n", loaded.delimiter));
    out.push_str(&format!("# subjects\t{}\n", table.n_rows()));
    if loaded.duplicate_ids > 0 {
        out.push_str(&format!("# duplicate_ids\t{}\n", loaded.duplicate_ids));
    }
    out.push_str("index\tname\tkind\tmissing\n");
    for (pos, column) in table.columns.iter().enumerate() {
        let kind = if pos == 0 { "id" } else { column.kind.as_str() };
        out.push_str(&format!(
            "{}\t{}\t{}\t{}\n",
            column.source_index,
            column.name,
            kind,
            table.missing_count(pos)
        ));
    }
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
