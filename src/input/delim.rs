use std::path::Path;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Delimiter {
    Comma,
    Tab,
    /// One field per line.
    Newline,
    Space,
    Colon,
    Semicolon,
}

impl Delimiter {
    pub fn as_char(self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Tab => '\t',
            Delimiter::Newline => '\n',
            Delimiter::Space => ' ',
            Delimiter::Colon => ':',
            Delimiter::Semicolon => ';',
        }
    }

    pub fn as_byte(self) -> u8 {
        self.as_char() as u8
    }
}

impl std::fmt::Display for Delimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Delimiter::Comma => write!(f, "comma"),
            Delimiter::Tab => write!(f, "tab"),
            Delimiter::Newline => write!(f, "newline"),
            Delimiter::Space => write!(f, "space"),
            Delimiter::Colon => write!(f, "colon"),
            Delimiter::Semicolon => write!(f, "semicolon"),
        }
    }
}

/// Delimiter of a table file: the file name wins, then the content of its first line.
pub fn detect_file_delimiter(path: &Path, first_line: &str) -> Delimiter {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    if name.contains(".tsv") {
        return Delimiter::Tab;
    }
    if name.contains(".csv") {
        return Delimiter::Comma;
    }
    if first_line.contains(',') {
        return Delimiter::Comma;
    }
    if first_line.contains('\t') {
        return Delimiter::Tab;
    }
    if first_line.contains(' ') {
        return Delimiter::Space;
    }
    Delimiter::Newline
}

/// Delimiter of an inline list such as `"sub-01,sub-02"`.
pub fn detect_str_delimiter(s: &str) -> Delimiter {
    [
        Delimiter::Comma,
        Delimiter::Tab,
        Delimiter::Colon,
        Delimiter::Semicolon,
    ]
    .into_iter()
    .find(|d| s.contains(d.as_char()))
    .unwrap_or(Delimiter::Space)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/delim.rs"]
mod tests;
