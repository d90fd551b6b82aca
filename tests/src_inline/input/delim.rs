use super::*;

#[test]
fn extension_wins_over_content() {
    assert_eq!(
        detect_file_delimiter(Path::new("design.tsv"), "a,b"),
        Delimiter::Tab
    );
    assert_eq!(
        detect_file_delimiter(Path::new("design.csv"), "a\tb"),
        Delimiter::Comma
    );
    assert_eq!(
        detect_file_delimiter(Path::new("design.tsv.gz"), "a,b"),
        Delimiter::Tab
    );
}

#[test]
fn falls_back_to_first_line() {
    assert_eq!(
        detect_file_delimiter(Path::new("design.txt"), "id,age"),
        Delimiter::Comma
    );
    assert_eq!(
        detect_file_delimiter(Path::new("design.txt"), "id\tage"),
        Delimiter::Tab
    );
    assert_eq!(
        detect_file_delimiter(Path::new("design.txt"), "id age"),
        Delimiter::Space
    );
    assert_eq!(
        detect_file_delimiter(Path::new("subjects.txt"), "sub-01"),
        Delimiter::Newline
    );
}

#[test]
fn detects_inline_delimiters_in_priority_order() {
    assert_eq!(detect_str_delimiter("a,b;c"), Delimiter::Comma);
    assert_eq!(detect_str_delimiter("a\tb"), Delimiter::Tab);
    assert_eq!(detect_str_delimiter("a:b;c"), Delimiter::Colon);
    assert_eq!(detect_str_delimiter("a;b"), Delimiter::Semicolon);
    assert_eq!(detect_str_delimiter("a b"), Delimiter::Space);
    assert_eq!(detect_str_delimiter("single"), Delimiter::Space);
}
