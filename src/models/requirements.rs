use serde::{Deserialize, Serialize};

/// An ordered list of package specifiers read from a requirements file.
///
/// One specifier per non-blank line, whitespace-trimmed, duplicates kept in
/// file order. No comment syntax is recognized: a line starting with `#` is
/// a specifier like any other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirements {
    pub specifiers: Vec<String>,
}

impl Requirements {
    /// Parse requirements from file contents.
    pub fn parse(contents: &str) -> Self {
        let specifiers = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        Self { specifiers }
    }
}
