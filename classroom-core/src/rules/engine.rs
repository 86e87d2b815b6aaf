use crate::config::{ExtractionConfig, PipelineConfig};
use crate::types::Topic;
use std::collections::HashSet;

use super::bigram_fallback::BigramFallback;
use super::list_detection::BulletRule;
use super::section_detection::{HeadingRule, LabelRule, ShoutRule};

// Sequential line classification infrastructure
pub trait LineRule {
    /// Topic text for a matching line, `None` when the line does not qualify.
    /// A match may carry empty text; it still counts as structure.
    fn classify(&self, line: &str) -> Option<String>;
    fn name(&self) -> &str;
}

/// Ordered line rules plus the bigram fallback.
///
/// Each trimmed, non-empty line is offered to the rules in order and the first
/// match wins, so a line contributes at most one topic. When no line matches
/// at all the whole text goes through the fallback instead.
pub struct TopicExtractor {
    rules: Vec<Box<dyn LineRule + Send + Sync>>,
    fallback: Option<BigramFallback>,
    max_topics: usize,
}

impl Default for TopicExtractor {
    fn default() -> Self {
        Self::new(&ExtractionConfig::default())
    }
}

impl TopicExtractor {
    pub fn new(config: &ExtractionConfig) -> Self {
        let rules = Self::build_rules(&config.pipeline, config);
        let fallback = config
            .fallback_enabled
            .then(|| BigramFallback::new(&config.stopwords, config.fallback_top_n));

        Self {
            rules,
            fallback,
            max_topics: config.max_topics,
        }
    }

    fn build_rules(
        pipeline: &PipelineConfig,
        config: &ExtractionConfig,
    ) -> Vec<Box<dyn LineRule + Send + Sync>> {
        let mut rules: Vec<Box<dyn LineRule + Send + Sync>> = Vec::new();
        for rule_config in &pipeline.rules {
            if !rule_config.enabled {
                tracing::debug!("   ⏭️  Skipping disabled rule: {}", rule_config.name);
                continue;
            }
            match rule_config.name.as_str() {
                "MarkdownHeading" => rules.push(Box::new(HeadingRule)),
                "LabelLine" => rules.push(Box::new(LabelRule::new(config.label_max_len))),
                "ShoutLine" => rules.push(Box::new(ShoutRule::new(
                    config.shout_min_len,
                    config.shout_max_len,
                ))),
                "BulletLine" => rules.push(Box::new(BulletRule)),
                other => tracing::warn!("⚠️  Unknown rule: {other}. Skipping..."),
            }
        }
        rules
    }

    /// Names of the active line rules in precedence order
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    pub fn extract(&self, text: &str) -> Vec<Topic> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let candidates: Vec<String> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .filter_map(|line| self.classify_line(line))
            .collect();
        tracing::debug!("📝 Line rules produced {} candidate topics", candidates.len());

        let candidates = match &self.fallback {
            Some(fallback) if candidates.is_empty() => {
                tracing::debug!("🔁 No structural markers found, using bigram fallback");
                fallback.top_bigrams(text)
            }
            _ => candidates,
        };

        let topics = dedupe_topics(candidates, self.max_topics);
        tracing::debug!("✅ Extracted {} topics", topics.len());
        topics
    }

    fn classify_line(&self, line: &str) -> Option<String> {
        self.rules.iter().find_map(|rule| {
            let topic = rule.classify(line)?;
            tracing::trace!("   🔎 [{}] {:?}", rule.name(), topic);
            Some(topic)
        })
    }
}

/// Extract topics using the default extraction settings.
pub fn extract_topics(text: &str) -> Vec<Topic> {
    TopicExtractor::default().extract(text)
}

/// Collapse whitespace, drop empties and case-insensitive repeats (first one
/// wins), and stop after `limit` topics.
pub fn dedupe_topics<I>(candidates: I, limit: usize) -> Vec<Topic>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    let mut topics = Vec::new();
    for candidate in candidates {
        if topics.len() >= limit {
            break;
        }
        let clean = candidate.split_whitespace().collect::<Vec<_>>().join(" ");
        if clean.is_empty() {
            continue;
        }
        if seen.insert(clean.to_lowercase()) {
            topics.push(clean);
        }
    }
    topics
}
