//! Tabular assignment parsing.
//!
//! The on-disk form produced by clustering tools is a delimited text table:
//! a header row, then one `item_id cluster_id` row per item. Delimiters are
//! any mix of spaces, commas, and tabs; runs of delimiters are collapsed.

use crate::error::{Error, Result};
use crate::partition::Partition;

fn is_separator(c: char) -> bool {
    c == ' ' || c == ',' || c == '\t'
}

/// Parse a tabular assignment text into a [`Partition`].
///
/// The first line is a header and is skipped. Blank lines are skipped. A data
/// row with fewer than two columns is a [`Error::MalformedRow`] with its
/// 1-based line number.
pub(crate) fn parse(text: &str) -> Result<Partition> {
    let mut pairs: Vec<(&str, &str)> = Vec::new();

    for (line_idx, line) in text.lines().enumerate().skip(1) {
        if line.trim().is_empty() {
            continue;
        }

        let mut cols = line.split(is_separator).filter(|c| !c.is_empty());
        let (Some(item), Some(cluster)) = (cols.next(), cols.next()) else {
            return Err(Error::MalformedRow { line: line_idx + 1 });
        };
        pairs.push((item, cluster));
    }

    Ok(Partition::from_assignments(pairs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tab_separated() {
        let p = parse("genome\tcluster\ng1\tA\ng2\tA\ng3\tB\n").unwrap();
        assert_eq!(p.len(), 2);
        assert!(p.clusters()[0].contains("g1"));
        assert!(p.clusters()[0].contains("g2"));
        assert!(p.clusters()[1].contains("g3"));
    }

    #[test]
    fn test_parse_mixed_separators() {
        // Comma, space, and tab rows in one file, plus a run of separators.
        let p = parse("id,cluster\ng1,A\ng2 A\ng3\t\tB\n").unwrap();
        assert_eq!(p.len(), 2);
        assert_eq!(p.n_items(), 3);
        assert!(p.clusters()[1].contains("g3"));
    }

    #[test]
    fn test_parse_header_skipped() {
        // Header tokens must not become an assignment.
        let p = parse("genome cluster\ng1 A\n").unwrap();
        assert_eq!(p.n_items(), 1);
        assert!(!p.clusters()[0].contains("genome"));
    }

    #[test]
    fn test_parse_extra_columns_ignored() {
        let p = parse("id cluster score\ng1 A 0.97\ng2 B 0.99\n").unwrap();
        assert_eq!(p.len(), 2);
        assert_eq!(p.n_items(), 2);
    }

    #[test]
    fn test_parse_blank_lines_skipped() {
        let p = parse("id cluster\n\ng1 A\n\n\ng2 A\n").unwrap();
        assert_eq!(p.len(), 1);
        assert_eq!(p.n_items(), 2);
    }

    #[test]
    fn test_parse_malformed_row() {
        let err = parse("id cluster\ng1 A\ng2\n").unwrap_err();
        match err {
            Error::MalformedRow { line } => assert_eq!(line, 3),
            other => panic!("expected MalformedRow, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_header_only_is_empty() {
        let p = parse("id cluster\n").unwrap();
        assert!(p.is_empty());
    }

    #[test]
    fn test_parse_first_seen_cluster_order() {
        let p = parse("id cluster\ng1 B\ng2 A\ng3 B\n").unwrap();
        // "B" appears first in the data, so it is cluster 0.
        assert!(p.clusters()[0].contains("g1"));
        assert!(p.clusters()[0].contains("g3"));
        assert!(p.clusters()[1].contains("g2"));
    }
}
