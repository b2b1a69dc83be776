//! Text normalization shared across retrieval, verbalization, and grading.

use std::collections::HashSet;

/// Render a stored graph name for display: `_` becomes a space.
pub fn clean_name(name: &str) -> String {
    name.replace('_', " ")
}

/// Lowercased whitespace tokens.
pub fn lower_tokens(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Fraction of the expected text's distinct tokens that appear in
/// `candidate_text` (case-insensitive). Zero when the expected text has
/// no tokens.
pub fn token_overlap_ratio(candidate_text: &str, expected: &str) -> f64 {
    let expected_tokens: HashSet<String> = lower_tokens(expected).into_iter().collect();
    if expected_tokens.is_empty() {
        return 0.0;
    }
    let candidate_tokens: HashSet<String> = lower_tokens(candidate_text).into_iter().collect();
    let overlap = expected_tokens
        .iter()
        .filter(|t| candidate_tokens.contains(*t))
        .count();
    overlap as f64 / expected_tokens.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_name_replaces_all_underscores() {
        assert_eq!(clean_name("Philippe_of_Belgium"), "Philippe of Belgium");
        assert_eq!(clean_name("no underscores"), "no underscores");
        assert_eq!(clean_name(""), "");
    }

    #[test]
    fn lower_tokens_lowercases_and_splits() {
        assert_eq!(
            lower_tokens("Who is the Leader of Belgium?"),
            vec!["who", "is", "the", "leader", "of", "belgium?"]
        );
    }

    #[test]
    fn overlap_ratio_counts_distinct_expected_tokens() {
        // 2 of 3 expected tokens present.
        let ratio = token_overlap_ratio("philippe of belgium leads", "Philippe of Flanders");
        assert!((ratio - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn overlap_ratio_is_zero_for_empty_expected() {
        assert_eq!(token_overlap_ratio("anything", ""), 0.0);
        assert_eq!(token_overlap_ratio("anything", "   "), 0.0);
    }

    #[test]
    fn overlap_ratio_full_match_is_one() {
        assert!((token_overlap_ratio("Belgium leader", "belgium LEADER") - 1.0).abs() < 1e-9);
    }
}
