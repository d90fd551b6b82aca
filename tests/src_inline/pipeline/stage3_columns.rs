use super::*;
use crate::table::Cell;

fn table() -> Table {
    let header = ["id", "age", "sex", "score"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let rows = [
        ["sub-01", "20", "F", ""],
        ["sub-02", "30", "M", "1.5"],
        ["sub-03", "", "M", "2.5"],
    ]
    .iter()
    .map(|r| r.iter().map(|s| s.to_string()).collect())
    .collect();
    Table::from_raw(header, rows)
}

fn names(table: &Table) -> Vec<&str> {
    table.columns.iter().map(|c| c.name.as_str()).collect()
}

#[test]
fn empty_selection_keeps_all_and_drops_missing() {
    let (out, stats) = run_stage3(&table(), &[], true).expect("select");
    assert_eq!(names(&out), vec!["id", "age", "sex", "score"]);
    assert_eq!(stats.retained, vec![1, 2, 3]);
    assert_eq!(out.n_rows(), 1);
    assert_eq!(out.rows[0].id, "sub-02");
    assert_eq!(stats.dropped_missing, vec!["sub-01", "sub-03"]);
}

#[test]
fn missing_only_matters_in_retained_columns() {
    let (out, stats) = run_stage3(&table(), &[2, 3], true).expect("select");
    assert_eq!(names(&out), vec!["id", "sex", "score"]);
    let ids: Vec<&str> = out.rows.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["sub-02", "sub-03"]);
    assert_eq!(stats.dropped_missing, vec!["sub-01"]);
}

#[test]
fn keep_missing_retains_rows() {
    let (out, stats) = run_stage3(&table(), &[1], false).expect("select");
    assert_eq!(out.n_rows(), 3);
    assert!(stats.dropped_missing.is_empty());
    assert_eq!(out.rows[2].cells[1], Cell::Missing);
}

#[test]
fn requested_order_is_normalized() {
    let (out, stats) = run_stage3(&table(), &[3, 0, 1, 3], false).expect("select");
    assert_eq!(names(&out), vec!["id", "age", "score"]);
    assert_eq!(stats.retained, vec![1, 3]);
}

#[test]
fn out_of_range_index_is_an_error() {
    let err = run_stage3(&table(), &[1, 4], true).err().expect("error");
    match err {
        Stage3Error::IndexOutOfRange { index, n_cols } => {
            assert_eq!(index, 4);
            assert_eq!(n_cols, 4);
        }
    }
}
