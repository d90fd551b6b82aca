use super::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn empty_argument_is_empty_list() {
    assert!(parse_list("").expect("parse").is_empty());
    assert!(parse_list("   ").expect("parse").is_empty());
}

#[test]
fn splits_inline_string_and_sorts() {
    let got = parse_list("sub-03,sub-01, sub-02,").expect("parse");
    assert_eq!(got, vec!["sub-01", "sub-02", "sub-03"]);
}

#[test]
fn single_inline_entry() {
    assert_eq!(parse_list("sub-01").expect("parse"), vec!["sub-01"]);
}

#[test]
fn reads_list_file() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("rm.txt");
    fs::write(&path, "sub-02\n\nsub-01 \n").expect("write file");
    let got = parse_list(path.to_str().expect("utf8 path")).expect("parse");
    assert_eq!(got, vec!["sub-01", "sub-02"]);
}

#[test]
fn parses_indices_numerically() {
    assert_eq!(parse_index_list("10,2,3").expect("parse"), vec![2, 3, 10]);
}

#[test]
fn rejects_non_numeric_index() {
    let err = parse_index_list("1,age").err().expect("error");
    match err {
        InputError::InvalidIndex { token } => assert_eq!(token, "age"),
        other => panic!("unexpected error: {other}"),
    }
}
