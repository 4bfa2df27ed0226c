//! Excerpt extraction.
//!
//! Excerpts are deliberately large so a caller can quote from them without
//! fetching the whole section. The window is anchored on the first query
//! term in the content, which is not necessarily the densest match.

use std::collections::HashSet;

use crate::tokenize::tokenize;

/// Words kept on each side of the anchor word.
pub const WINDOW_WORDS: usize = 200;

/// Hard cap on excerpt length, in characters.
pub const MAX_EXCERPT_CHARS: usize = 4000;

const ELLIPSIS: &str = "...";

/// Extract an excerpt of `content` around the first query term.
///
/// `content_tokens` may carry the output of [`tokenize`] for `content` to
/// avoid tokenizing it twice.
pub fn extract_excerpt(
    content: &str,
    query_tokens: &[String],
    content_tokens: Option<&[String]>,
) -> String {
    let wanted: HashSet<&str> = query_tokens.iter().map(String::as_str).collect();

    let owned_tokens;
    let tokens = match content_tokens {
        Some(tokens) => tokens,
        None => {
            owned_tokens = tokenize(content);
            &owned_tokens[..]
        }
    };

    let words: Vec<&str> = content.split_whitespace().collect();

    let excerpt = match tokens.iter().position(|t| wanted.contains(t.as_str())) {
        Some(token_index) => around(&words, word_containing_token(&words, token_index)),
        None => leading(&words),
    };

    truncate_chars(excerpt, MAX_EXCERPT_CHARS)
}

/// Index of the whitespace-delimited word that produced token `token_index`.
///
/// Tokenizing word by word yields the same sequence as tokenizing the whole
/// text, so the running token count locates the word.
fn word_containing_token(words: &[&str], token_index: usize) -> usize {
    let mut seen = 0;
    for (index, word) in words.iter().enumerate() {
        seen += tokenize(word).len();
        if seen > token_index {
            return index;
        }
    }
    words.len().saturating_sub(1)
}

fn leading(words: &[&str]) -> String {
    let end = words.len().min(WINDOW_WORDS);
    let mut excerpt = words[..end].join(" ");
    if end < words.len() {
        excerpt.push_str(ELLIPSIS);
    }
    excerpt
}

fn around(words: &[&str], anchor: usize) -> String {
    let start = anchor.saturating_sub(WINDOW_WORDS);
    let end = words.len().min(anchor + WINDOW_WORDS + 1);

    let mut excerpt = String::new();
    if start > 0 {
        excerpt.push_str(ELLIPSIS);
    }
    excerpt.push_str(&words[start..end].join(" "));
    if end < words.len() {
        excerpt.push_str(ELLIPSIS);
    }
    excerpt
}

fn truncate_chars(mut text: String, max_chars: usize) -> String {
    if let Some((byte_index, _)) = text.char_indices().nth(max_chars) {
        text.truncate(byte_index);
        text.push_str(ELLIPSIS);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(q: &str) -> Vec<String> {
        tokenize(q)
    }

    fn numbered_words(count: usize) -> Vec<String> {
        (0..count).map(|i| format!("word{i}")).collect()
    }

    #[test]
    fn test_short_content_returned_whole() {
        let content = "Enable vim keybindings in the prompt.";
        assert_eq!(extract_excerpt(content, &query("vim"), None), content);
    }

    #[test]
    fn test_no_match_returns_leading_words() {
        let content = numbered_words(250).join(" ");
        let excerpt = extract_excerpt(&content, &query("sandbox"), None);

        assert!(excerpt.starts_with("word0 word1"));
        assert!(excerpt.ends_with("word199..."));
        assert!(!excerpt.contains("word200"));
    }

    #[test]
    fn test_no_match_exactly_window_has_no_ellipsis() {
        let content = numbered_words(200).join(" ");
        let excerpt = extract_excerpt(&content, &query("sandbox"), None);
        assert!(excerpt.ends_with("word199"));
        assert!(!excerpt.contains(ELLIPSIS));
    }

    #[test]
    fn test_match_window_is_clamped_both_sides() {
        let mut words = numbered_words(1000);
        words[500] = "sandbox".to_string();
        let content = words.join(" ");

        let excerpt = extract_excerpt(&content, &query("sandbox"), None);
        assert!(excerpt.starts_with("...word300 "));
        assert!(excerpt.ends_with(" word700..."));
        assert!(excerpt.contains("sandbox"));
        assert!(!excerpt.contains("word299 "));
        assert!(!excerpt.contains("word701"));
    }

    #[test]
    fn test_match_near_start_has_no_leading_ellipsis() {
        let mut words = numbered_words(500);
        words[3] = "Sandbox:".to_string();
        let content = words.join(" ");

        let excerpt = extract_excerpt(&content, &query("sandbox"), None);
        assert!(excerpt.starts_with("word0 "));
        assert!(excerpt.ends_with("word203..."));
    }

    #[test]
    fn test_first_match_wins() {
        let mut words = numbered_words(1000);
        words[100] = "sandbox".to_string();
        words[900] = "sandbox".to_string();
        let content = words.join(" ");

        let excerpt = extract_excerpt(&content, &query("sandbox"), None);
        assert!(excerpt.starts_with("word0 "));
        assert!(excerpt.ends_with("word300..."));
        assert_eq!(excerpt.matches("sandbox").count(), 1);
    }

    #[test]
    fn test_anchor_accounts_for_split_and_dropped_tokens() {
        // "a/b/c" contributes no tokens and "foo/bar/baz" contributes three,
        // so token and word positions diverge.
        let mut words: Vec<String> = Vec::new();
        for _ in 0..300 {
            words.push("a/b/c".to_string());
        }
        for _ in 0..100 {
            words.push("foo/bar/baz".to_string());
        }
        words.push("sandbox".to_string());
        words.extend(numbered_words(300));
        let content = words.join(" ");

        let excerpt = extract_excerpt(&content, &query("sandbox"), None);
        assert!(excerpt.contains("sandbox"));
        assert!(excerpt.starts_with("...a/b/c "));
        assert!(excerpt.ends_with(" word199..."));
    }

    #[test]
    fn test_precomputed_tokens_match_fresh_tokenization() {
        let mut words = numbered_words(600);
        words[420] = "hooks".to_string();
        let content = words.join(" ");
        let tokens = tokenize(&content);

        assert_eq!(
            extract_excerpt(&content, &query("hooks"), Some(&tokens)),
            extract_excerpt(&content, &query("hooks"), None)
        );
    }

    #[test]
    fn test_truncates_long_excerpts() {
        let long_word = "x".repeat(100);
        let content = vec![long_word; 100].join(" ");

        let excerpt = extract_excerpt(&content, &query("sandbox"), None);
        assert_eq!(excerpt.chars().count(), MAX_EXCERPT_CHARS + ELLIPSIS.len());
        assert!(excerpt.ends_with(ELLIPSIS));
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        let content = vec!["é".repeat(50); 1000].join(" ");
        let excerpt = extract_excerpt(&content, &query("sandbox"), None);
        assert_eq!(excerpt.chars().count(), MAX_EXCERPT_CHARS + ELLIPSIS.len());
    }

    #[test]
    fn test_empty_content() {
        assert_eq!(extract_excerpt("", &query("vim"), None), "");
    }
}
