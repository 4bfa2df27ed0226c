//! Heading match extraction.

use std::collections::HashSet;

use crate::tokenize::tokenize;

/// Headings sharing at least one token with the query, in original order.
pub fn matched_headings(headings: &[String], query_terms: &HashSet<&str>) -> Vec<String> {
    headings
        .iter()
        .filter(|heading| {
            tokenize(heading)
                .iter()
                .any(|token| query_terms.contains(token.as_str()))
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_overlap_is_enough() {
        let headings = vec![
            "Enabling vim mode".to_string(),
            "Key bindings".to_string(),
            "Mode switching".to_string(),
        ];
        let query: HashSet<&str> = ["vim", "mode"].into_iter().collect();

        assert_eq!(
            matched_headings(&headings, &query),
            vec!["Enabling vim mode", "Mode switching"]
        );
    }

    #[test]
    fn test_no_overlap() {
        let headings = vec!["Install".to_string()];
        let query: HashSet<&str> = ["vim"].into_iter().collect();
        assert!(matched_headings(&headings, &query).is_empty());
        assert!(matched_headings(&[], &query).is_empty());
    }

    #[test]
    fn test_heading_punctuation_is_tokenized() {
        let headings = vec!["`vim`-style keys (advanced)".to_string()];
        let query: HashSet<&str> = ["vim"].into_iter().collect();
        assert_eq!(matched_headings(&headings, &query).len(), 1);
    }
}
