//! Text normalization and tokenization

use crate::processing::vocabulary::is_stop_word;
use std::collections::HashSet;

/// Lowercase `text`, replace everything outside `[a-z0-9]` with a space and
/// collapse runs of whitespace. Empty input gives an empty string.
pub fn normalize(text: &str) -> String {
    let mapped: String = text
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_lowercase() || c.is_ascii_digit() { c } else { ' ' })
        .collect();

    mapped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Content-bearing terms of an already normalized text: at least two
/// characters long and not a stop word, in document order.
pub fn content_terms(normalized: &str) -> Vec<&str> {
    normalized
        .split_whitespace()
        .filter(|word| word.len() > 1 && !is_stop_word(word))
        .collect()
}

/// Jaccard similarity of the keyword sets of two texts.
///
/// Keywords are normalized words longer than two characters that are not
/// stop words. Returns 0.0 if either text has no keywords.
pub fn jaccard_similarity(text1: &str, text2: &str) -> f64 {
    let normalized1 = normalize(text1);
    let normalized2 = normalize(text2);

    let set1: HashSet<&str> = content_terms(&normalized1)
        .into_iter()
        .filter(|word| word.len() > 2)
        .collect();
    let set2: HashSet<&str> = content_terms(&normalized2)
        .into_iter()
        .filter(|word| word.len() > 2)
        .collect();

    if set1.is_empty() || set2.is_empty() {
        return 0.0;
    }

    let intersection = set1.intersection(&set2).count();
    let union = set1.union(&set2).count();

    intersection as f64 / union as f64
}
