use thiserror::Error;

/// A method selector that names none of the four canonical methods.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown learning method '{0}'")]
pub struct UnknownMethod(pub String);

/// Errors raised while loading or validating a [`crate::PlanningConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

impl ConfigError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        ConfigError::Invalid(msg.into())
    }
}

/// Errors surfaced by [`crate::LessonPlanner`].
///
/// The extraction and building functions themselves are total; only the
/// orchestration layer refuses to produce a plan without topics.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("no topics could be extracted from the document text")]
    NoTopics,

    #[error(transparent)]
    Config(#[from] ConfigError),
}
