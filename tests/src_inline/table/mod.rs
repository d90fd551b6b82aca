use super::*;

fn raw(rows: &[&[&str]]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|r| r.iter().map(|s| s.to_string()).collect())
        .collect()
}

fn header(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn parses_cells() {
    assert_eq!(Cell::parse("12"), Cell::Int(12));
    assert_eq!(Cell::parse("-1.5"), Cell::Float(-1.5));
    assert_eq!(Cell::parse("NA"), Cell::Missing);
    assert_eq!(Cell::parse(""), Cell::Missing);
    assert_eq!(Cell::parse("n/a"), Cell::Missing);
    assert_eq!(Cell::parse("M"), Cell::Text("M".to_string()));
}

#[test]
fn infers_column_kinds() {
    let table = Table::from_raw(
        header(&["id", "age", "score", "sex", "empty"]),
        raw(&[
            &["sub-02", "30", "1.5", "M", ""],
            &["sub-01", "25", "NaN", "F", "NA"],
        ]),
    );
    let kinds: Vec<ColumnKind> = table.columns.iter().map(|c| c.kind).collect();
    assert_eq!(
        kinds,
        vec![
            ColumnKind::Text,
            ColumnKind::Integer,
            ColumnKind::Float,
            ColumnKind::Text,
            ColumnKind::Float,
        ]
    );
    assert_eq!(table.missing_count(2), 1);
    assert_eq!(table.missing_count(4), 2);
}

#[test]
fn text_columns_keep_raw_values() {
    let table = Table::from_raw(
        header(&["id", "site"]),
        raw(&[&["sub-01", "007"], &["sub-02", "A"]]),
    );
    assert_eq!(table.columns[1].kind, ColumnKind::Text);
    assert_eq!(table.rows[0].cells[1], Cell::Text("007".to_string()));
}

#[test]
fn integer_column_with_missing_becomes_float() {
    let table = Table::from_raw(header(&["id", "age"]), raw(&[&["a", "1"], &["b", ""]]));
    assert_eq!(table.columns[1].kind, ColumnKind::Float);
}

#[test]
fn sorts_text_ids_lexicographically() {
    let mut table = Table::from_raw(
        header(&["id", "x"]),
        raw(&[&["sub-10", "1"], &["sub-02", "2"], &["sub-01", "3"]]),
    );
    table.sort_by_id();
    let ids: Vec<&str> = table.rows.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["sub-01", "sub-02", "sub-10"]);
}

#[test]
fn sorts_numeric_ids_numerically_with_missing_last() {
    let mut table = Table::from_raw(
        header(&["id", "x"]),
        raw(&[&["10", "1"], &["", "2"], &["9", "3"]]),
    );
    table.sort_by_id();
    let ids: Vec<&str> = table.rows.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["9", "10", ""]);
    assert!(table.rows[2].id_missing());
    assert_eq!(table.id_set().len(), 2);
}
