use super::*;
use crate::pipeline::stage1_load::run_stage1;
use std::fs;
use tempfile::tempdir;

#[test]
fn lists_columns_with_kinds_and_missing_counts() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("participants.tsv");
    fs::write(&path, "id\tage\tsex\tiq\nsub-01\t20\tM\t\nsub-02\t30\tF\t99.5\n")
        .expect("write file");
    let loaded = run_stage1(&path).expect("load");

    let text = render_overview(&loaded);
    assert!(text.contains("# delimiter\ttab\n"));
    assert!(text.contains("# subjects\t2\n"));
    assert!(text.contains("index\tname\tkind\tmissing\n"));
    assert!(text.contains("0\tid\tid\t0\n"));
    assert!(text.contains("1\tage\tinteger\t0\n"));
    assert!(text.contains("2\tsex\ttext\t0\n"));
    assert!(text.contains("3\tiq\tfloat\t1\n"));
    assert!(!text.contains("duplicate_ids"));
}
