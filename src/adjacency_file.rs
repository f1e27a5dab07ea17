//! Reader for comma-separated adjacency files.
//!
//! Each non-blank line describes one vertex:
//!
//! ```text
//! A, B, C
//! B, A
//! C, A
//! ```
//!
//! The first field is the vertex key, the remaining fields are its neighbors.
//! Fields are trimmed; empty neighbor fields (e.g. a trailing comma) are dropped.
//! The reader performs no graph validation; that happens in
//! [`Graph::from_adjacency`](crate::Graph::from_adjacency).

use std::io::{self, BufRead};

use thiserror::Error;

/// Errors from [`parse_adjacency`].
#[derive(Error, Debug)]
pub enum ParseError {
    /// A line has neighbors but no vertex key.
    #[error("line {line}: missing vertex key")]
    EmptyKey {
        /// 1-based line number.
        line: usize,
    },
    /// The underlying reader failed.
    #[error("failed to read adjacency input: {0}")]
    Io(#[from] io::Error),
}

/// One parsed line: a vertex key and its neighbor keys.
pub type AdjacencyEntry = (String, Vec<String>);

/// Parses adjacency entries from `reader`, preserving line order.
///
/// # Errors
/// [`ParseError::EmptyKey`] for a line whose first field is empty, and
/// [`ParseError::Io`] if reading fails.
pub fn parse_adjacency<R: BufRead>(reader: R) -> Result<Vec<AdjacencyEntry>, ParseError> {
    let mut entries = Vec::new();
    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let mut fields = line.split(',').map(str::trim);
        let key = fields.next().unwrap_or_default();
        if key.is_empty() {
            return Err(ParseError::EmptyKey { line: number + 1 });
        }
        let neighbors = fields
            .filter(|field| !field.is_empty())
            .map(str::to_owned)
            .collect();
        entries.push((key.to_owned(), neighbors));
    }
    Ok(entries)
}

/// Parses adjacency entries from an in-memory string.
///
/// # Errors
/// See [`parse_adjacency`].
pub fn parse_adjacency_str(input: &str) -> Result<Vec<AdjacencyEntry>, ParseError> {
    parse_adjacency(input.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_lines_in_order() {
        let entries = parse_adjacency_str("A, B, C\nB, A\nC, A\n").unwrap();
        assert_eq!(
            entries,
            vec![
                ("A".to_owned(), vec!["B".to_owned(), "C".to_owned()]),
                ("B".to_owned(), vec!["A".to_owned()]),
                ("C".to_owned(), vec!["A".to_owned()]),
            ]
        );
    }

    #[test]
    fn skips_blank_lines_and_empty_fields() {
        let entries = parse_adjacency_str("\nX,Y,\n   \nY ,X\r\nZ\n").unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0], ("X".to_owned(), vec!["Y".to_owned()]));
        assert_eq!(entries[1], ("Y".to_owned(), vec!["X".to_owned()]));
        assert_eq!(entries[2], ("Z".to_owned(), vec![]));
    }

    #[test]
    fn rejects_missing_key() {
        let err = parse_adjacency_str("A, B\n, A\n").unwrap_err();
        assert!(matches!(err, ParseError::EmptyKey { line: 2 }));
        assert_eq!(err.to_string(), "line 2: missing vertex key");
    }
}
