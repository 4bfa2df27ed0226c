//! Term and document frequency counting.

use std::collections::{HashMap, HashSet};

/// Count occurrences of each token, restricted to `relevant`.
///
/// Scoring only ever needs query-term counts, so the full vocabulary of a
/// document is never materialized. An empty `relevant` set counts every token.
pub fn term_counts(tokens: &[String], relevant: &HashSet<&str>) -> HashMap<String, usize> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for token in tokens {
        if relevant.is_empty() || relevant.contains(token.as_str()) {
            *counts.entry(token.clone()).or_default() += 1;
        }
    }
    counts
}

/// Number of count tables in which each term occurs at least once.
pub fn document_frequencies<'a, I>(terms: &[String], counts: I) -> HashMap<String, usize>
where
    I: IntoIterator<Item = &'a HashMap<String, usize>>,
{
    let mut frequencies: HashMap<String, usize> =
        terms.iter().map(|term| (term.clone(), 0)).collect();

    for table in counts {
        for (term, frequency) in frequencies.iter_mut() {
            if table.get(term).is_some_and(|&count| count > 0) {
                *frequency += 1;
            }
        }
    }

    frequencies
}
