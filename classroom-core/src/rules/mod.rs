// Topic extraction rules
// The extractor coordinates the rule system but the actual rules live in:
// - engine.rs: LineRule trait, TopicExtractor and deduplication
// - section_detection.rs: markdown headings, colon labels, ALL CAPS lines
// - list_detection.rs: bullet items
// - bigram_fallback.rs: frequency-ranked bigrams for unstructured text

pub mod bigram_fallback;
pub mod engine;
pub mod list_detection;
pub mod section_detection;

pub use engine::*;
