use std::io::Read;
use std::path::Path;

use crate::input::delim::detect_str_delimiter;
use crate::input::{InputError, open_reader};

/// Parses a list argument: either a path to a newline-separated file or an
/// inline delimited string. Entries are trimmed, blanks dropped, result sorted.
pub fn parse_list(arg: &str) -> Result<Vec<String>, InputError> {
    let arg = arg.trim();
    if arg.is_empty() {
        return Ok(Vec::new());
    }

    let path = Path::new(arg);
    let mut items = if path.is_file() {
        read_list_file(path)?
    } else {
        let delim = detect_str_delimiter(arg);
        split_entries(arg.split(delim.as_char()))
    };
    items.sort();
    Ok(items)
}

pub fn parse_index_list(arg: &str) -> Result<Vec<usize>, InputError> {
    let mut indices = parse_list(arg)?
        .into_iter()
        .map(|token| {
            token
                .parse::<usize>()
                .map_err(|_| InputError::InvalidIndex { token })
        })
        .collect::<Result<Vec<_>, _>>()?;
    indices.sort_unstable();
    Ok(indices)
}

pub fn read_list_file(path: &Path) -> Result<Vec<String>, InputError> {
    let mut reader = open_reader(path)?;
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(split_entries(text.lines()))
}

fn split_entries<'a>(parts: impl Iterator<Item = &'a str>) -> Vec<String> {
    parts
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/lists.rs"]
mod tests;
