//! Result presentation for the terminal.

use std::fmt::Write;

use docsearch_core::SearchResults;

/// Render results as readable text.
pub fn render_text(results: &SearchResults<'_>) -> String {
    if results.is_empty() {
        return format!("No results found for {:?}", results.query);
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "Found {} result(s) for {:?} ({}ms)",
        results.total_results, results.query, results.latency_ms
    );

    for (rank, result) in results.results.iter().enumerate() {
        let doc = result.document;
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "{}. {} [{}] (score: {:.2})",
            rank + 1,
            doc.title,
            doc.category,
            result.relevance_score
        );
        if let Some(url) = &doc.url {
            let _ = writeln!(out, "   {}", url);
        }
        if !result.matched_headings.is_empty() {
            let _ = writeln!(
                out,
                "   Matched headings: {}",
                result.matched_headings.join(", ")
            );
        }
        let _ = writeln!(out);
        for line in result.excerpt.lines() {
            let _ = writeln!(out, "   {}", line);
        }
    }

    out
}

/// Render results as pretty-printed JSON.
pub fn render_json(results: &SearchResults<'_>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(results)
}

/// Render category labels one per line.
pub fn render_categories(categories: &[String]) -> String {
    if categories.is_empty() {
        return "No categories in index".to_string();
    }
    categories.join("\n")
}
