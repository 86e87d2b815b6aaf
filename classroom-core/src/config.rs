use crate::error::ConfigError;
use crate::types::Method;
use serde::{Deserialize, Serialize};
use std::fs;

// Default value functions for serde
fn default_true() -> bool {
    true
}

fn default_max_topics() -> usize {
    8
}

fn default_label_max_len() -> usize {
    120
}

fn default_shout_min_len() -> usize {
    3
}

fn default_shout_max_len() -> usize {
    80
}

fn default_stopwords() -> Vec<String> {
    [
        "the", "and", "or", "of", "in", "to", "a", "is", "for", "that", "with", "as", "on", "by",
        "are", "be", "this", "an", "it", "from", "at", "which", "these", "those",
    ]
    .iter()
    .map(|word| word.to_string())
    .collect()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanningConfig {
    /// Method used when the caller supplies no selector
    #[serde(default)]
    pub default_method: Method,
    #[serde(default)]
    pub extraction: ExtractionConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Upper bound on the number of topics returned
    #[serde(default = "default_max_topics")]
    pub max_topics: usize,
    /// Label lines must be strictly shorter than this (in chars)
    #[serde(default = "default_label_max_len")]
    pub label_max_len: usize,
    /// Shout lines must be strictly longer than this (in chars)
    #[serde(default = "default_shout_min_len")]
    pub shout_min_len: usize,
    /// Shout lines must be strictly shorter than this (in chars)
    #[serde(default = "default_shout_max_len")]
    pub shout_max_len: usize,
    /// Fall back to frequent bigrams when no line rule matches
    #[serde(default = "default_true")]
    pub fallback_enabled: bool,
    /// Number of bigrams kept by the fallback
    #[serde(default = "default_max_topics")]
    pub fallback_top_n: usize,
    /// Tokens discarded before bigram counting
    #[serde(default = "default_stopwords")]
    pub stopwords: Vec<String>,
    /// Line rules to run, in precedence order
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            max_topics: default_max_topics(),
            label_max_len: default_label_max_len(),
            shout_min_len: default_shout_min_len(),
            shout_max_len: default_shout_max_len(),
            fallback_enabled: true,
            fallback_top_n: default_max_topics(),
            stopwords: default_stopwords(),
            pipeline: PipelineConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// List of line rules in precedence order (first match wins)
    pub rules: Vec<RuleConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Name of the rule
    pub name: String,
    /// Whether this rule is enabled
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl RuleConfig {
    fn enabled(name: &str) -> Self {
        Self {
            name: name.to_string(),
            enabled: true,
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            rules: vec![
                RuleConfig::enabled("MarkdownHeading"),
                RuleConfig::enabled("LabelLine"),
                RuleConfig::enabled("ShoutLine"),
                RuleConfig::enabled("BulletLine"),
            ],
        }
    }
}

impl PlanningConfig {
    /// Load config from a YAML file
    pub fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        let config: PlanningConfig = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults when no path is given; a given file must load and validate
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => {
                let config = Self::load_from_file(p)?;
                tracing::debug!("📋 Config {p} loaded and validated");
                Ok(config)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let extraction = &self.extraction;
        if extraction.max_topics == 0 {
            return Err(ConfigError::invalid("extraction.max_topics must be at least 1"));
        }
        if extraction.shout_min_len >= extraction.shout_max_len {
            return Err(ConfigError::invalid(format!(
                "extraction.shout_min_len ({}) must be below shout_max_len ({})",
                extraction.shout_min_len, extraction.shout_max_len
            )));
        }
        if extraction.pipeline.rules.iter().all(|rule| !rule.enabled) && !extraction.fallback_enabled {
            return Err(ConfigError::invalid(
                "at least one line rule or the bigram fallback must be enabled",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_documented_heuristics() {
        let config = PlanningConfig::default();
        assert_eq!(config.default_method, Method::Reading);
        assert_eq!(config.extraction.max_topics, 8);
        assert_eq!(config.extraction.label_max_len, 120);
        assert_eq!(config.extraction.stopwords.len(), 24);
        let names: Vec<_> = config
            .extraction
            .pipeline
            .rules
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, ["MarkdownHeading", "LabelLine", "ShoutLine", "BulletLine"]);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = "default_method: visual\nextraction:\n  max_topics: 5\n";
        let config = PlanningConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.default_method, Method::Visual);
        assert_eq!(config.extraction.max_topics, 5);
        assert_eq!(config.extraction.shout_max_len, 80);
        assert!(config.extraction.fallback_enabled);
    }

    #[test]
    fn test_rule_enabled_defaults_true() {
        let yaml = "extraction:\n  pipeline:\n    rules:\n      - name: BulletLine\n      - name: ShoutLine\n        enabled: false\n";
        let config = PlanningConfig::from_yaml_str(yaml).unwrap();
        let rules = &config.extraction.pipeline.rules;
        assert!(rules[0].enabled);
        assert!(!rules[1].enabled);
    }

    #[test]
    fn test_validate_rejects_zero_topics() {
        let err = PlanningConfig::from_yaml_str("extraction:\n  max_topics: 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_validate_rejects_inverted_shout_bounds() {
        let yaml = "extraction:\n  shout_min_len: 40\n  shout_max_len: 10\n";
        assert!(PlanningConfig::from_yaml_str(yaml).is_err());
    }

    #[test]
    fn test_load_without_path_uses_defaults() {
        let config = PlanningConfig::load(None).unwrap();
        assert_eq!(config.extraction.max_topics, 8);
    }

    #[test]
    fn test_load_reports_missing_file() {
        let err = PlanningConfig::load(Some("/definitely/not/here.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_load_reports_invalid_file() {
        let dir = std::env::temp_dir().join("classroom_config_test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("zero_topics.yaml");
        fs::write(&path, "extraction:\n  max_topics: 0\n").unwrap();

        let err = PlanningConfig::load(path.to_str()).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        fs::remove_dir_all(dir).ok();
    }
}
