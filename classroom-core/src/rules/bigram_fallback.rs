use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{HashMap, HashSet};

static NON_TOKEN_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9\s]").expect("token filter pattern is valid"));

/// Frequency-ranked bigram topics for text with no structural markers.
///
/// Only ASCII letters and digits survive tokenisation; everything else becomes
/// a separator. Ranking is by descending count, ties kept in first-occurrence
/// order.
pub struct BigramFallback {
    stopwords: HashSet<String>,
    top_n: usize,
}

impl BigramFallback {
    pub fn new(stopwords: &[String], top_n: usize) -> Self {
        Self {
            stopwords: stopwords.iter().map(|w| w.to_lowercase()).collect(),
            top_n,
        }
    }

    pub fn top_bigrams(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let cleaned = NON_TOKEN_CHARS.replace_all(&lowered, " ");
        let tokens: Vec<&str> = cleaned
            .split_whitespace()
            .filter(|token| !self.stopwords.contains(*token))
            .collect();

        // (bigram, count) in first-occurrence order, with an index for lookups
        let mut counts: Vec<(String, usize)> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();
        for pair in tokens.windows(2) {
            let bigram = format!("{} {}", pair[0], pair[1]);
            match positions.get(&bigram) {
                Some(&slot) => counts[slot].1 += 1,
                None => {
                    positions.insert(bigram.clone(), counts.len());
                    counts.push((bigram, 1));
                }
            }
        }

        // sort_by is stable, so equal counts keep first-occurrence order
        counts.sort_by(|a, b| b.1.cmp(&a.1));

        tracing::debug!(
            "🔤 Bigram fallback: {} tokens, {} distinct bigrams",
            tokens.len(),
            counts.len()
        );

        counts
            .into_iter()
            .take(self.top_n)
            .map(|(bigram, _)| title_case(&bigram))
            .collect()
    }
}

/// Uppercase the first character of each space-separated word
fn title_case(phrase: &str) -> String {
    phrase
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExtractionConfig;

    fn fallback() -> BigramFallback {
        let config = ExtractionConfig::default();
        BigramFallback::new(&config.stopwords, config.fallback_top_n)
    }

    #[test]
    fn test_ranks_by_frequency() {
        let text = "red apple green pear red apple blue sky red apple";
        let topics = fallback().top_bigrams(text);
        assert_eq!(topics[0], "Red Apple");
    }

    #[test]
    fn test_later_frequent_bigram_moves_to_front() {
        let topics = fallback().top_bigrams("alpha beta gamma delta gamma delta");
        assert_eq!(topics, ["Gamma Delta", "Alpha Beta", "Beta Gamma", "Delta Gamma"]);
    }

    #[test]
    fn test_ties_keep_first_occurrence_order() {
        // every bigram appears once
        let topics = fallback().top_bigrams("alpha beta gamma delta");
        assert_eq!(topics, ["Alpha Beta", "Beta Gamma", "Gamma Delta"]);
    }

    #[test]
    fn test_stopwords_removed_before_pairing() {
        // "of the" disappears, so "cell" and "membrane" become adjacent
        let topics = fallback().top_bigrams("cell of the membrane");
        assert_eq!(topics, ["Cell Membrane"]);
    }

    #[test]
    fn test_punctuation_and_case_are_normalised() {
        let topics = fallback().top_bigrams("Photo-Synthesis! PHOTO synthesis.");
        assert_eq!(topics[0], "Photo Synthesis");
        assert_eq!(topics.len(), 2);
    }

    #[test]
    fn test_non_ascii_letters_split_tokens() {
        let topics = fallback().top_bigrams("café latte");
        assert_eq!(topics, ["Caf Latte"]);
    }

    #[test]
    fn test_limits_to_top_n() {
        let text = (0..20).map(|i| format!("w{i}")).collect::<Vec<_>>().join(" ");
        assert_eq!(fallback().top_bigrams(&text).len(), 8);
    }

    #[test]
    fn test_single_token_has_no_bigrams() {
        assert!(fallback().top_bigrams("photosynthesis").is_empty());
        assert!(fallback().top_bigrams("the and of").is_empty());
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("cell membrane"), "Cell Membrane");
        assert_eq!(title_case("3d model"), "3d Model");
    }
}
