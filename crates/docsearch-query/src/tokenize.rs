//! Word tokenizer shared by every scoring field.

/// Tokens of this many characters or fewer are dropped.
const MAX_SHORT_TOKEN_LEN: usize = 2;

/// Split text into lowercase word tokens.
///
/// Anything other than an ASCII word character, whitespace or a hyphen is
/// treated as a separator. Order and duplicates are preserved because the
/// scorer counts occurrences.
pub fn tokenize(text: &str) -> Vec<String> {
    let normalized: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if is_token_char(c) || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    normalized
        .split_whitespace()
        .filter(|token| token.len() > MAX_SHORT_TOKEN_LEN)
        .map(str::to_string)
        .collect()
}

/// Distinct tokens in order of first appearance.
///
/// Summing scores in a fixed order keeps repeated searches bit-identical.
pub fn unique_terms(tokens: &[String]) -> Vec<String> {
    let mut terms: Vec<String> = Vec::with_capacity(tokens.len());
    for token in tokens {
        if !terms.contains(token) {
            terms.push(token.clone());
        }
    }
    terms
}

fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}
