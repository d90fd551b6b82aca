use std::fmt;
use std::str::FromStr;

use crate::table::{Cell, ColumnKind};

pub const DEFAULT_PRECISION: usize = 3;
pub const DEFAULT_NA_REP: &str = "NaN";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Separator(u8);

impl Separator {
    pub const SPACE: Separator = Separator(b' ');

    pub fn byte(self) -> u8 {
        self.0
    }
}

impl Default for Separator {
    fn default() -> Self {
        Separator::SPACE
    }
}

impl FromStr for Separator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tab" | "\\t" | "\t" => return Ok(Separator(b'\t')),
            "comma" | "," => return Ok(Separator(b',')),
            "space" | " " => return Ok(Separator(b' ')),
            _ => {}
        }
        let bytes = s.as_bytes();
        if bytes.len() != 1
            || !bytes[0].is_ascii()
            || bytes[0].is_ascii_control()
            || bytes[0] == b'"'
        {
            return Err(format!(
                "separator must be a single printable ASCII character (or tab/comma/space), got {s:?}"
            ));
        }
        Ok(Separator(bytes[0]))
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            b'\t' => write!(f, "tab"),
            b' ' => write!(f, "space"),
            other => write!(f, "{}", other as char),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutputFormat {
    pub sep: Separator,
    pub precision: usize,
    pub na_rep: String,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self {
            sep: Separator::default(),
            precision: DEFAULT_PRECISION,
            na_rep: DEFAULT_NA_REP.to_string(),
        }
    }
}

impl OutputFormat {
    pub fn render(&self, cell: &Cell, kind: ColumnKind) -> String {
        match (cell, kind) {
            (Cell::Missing, _) => self.na_rep.clone(),
            (Cell::Text(s), _) => s.clone(),
            (Cell::Int(v), ColumnKind::Integer | ColumnKind::Text) => v.to_string(),
            (Cell::Int(v), ColumnKind::Float) => self.render_float(*v as f64),
            (Cell::Float(v), _) => self.render_float(*v),
        }
    }

    fn render_float(&self, v: f64) -> String {
        if v.is_nan() {
            return self.na_rep.clone();
        }
        if v.is_infinite() {
            return if v > 0.0 { "inf".into() } else { "-inf".into() };
        }
        format!("{:.*}", self.precision, v)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/table/format.rs"]
mod tests;
