// Classroom Core Library
//
// Turns assembled document text into an ordered list of topics and then into
// a style-adapted lesson plan. Main interface for the CLI and any other UI.

pub mod config;
pub mod error;
pub mod plan;
pub mod processor;
pub mod rules;
pub mod types;

// Re-export main types and functions for easy use
pub use config::{ExtractionConfig, PlanningConfig};
pub use error::{ConfigError, PlanError, UnknownMethod};
pub use plan::{build_plan, build_plan_for, render_lesson};
pub use processor::{LessonPlanner, PipelineStages, StepProfiler, StepTiming};
pub use rules::{extract_topics, TopicExtractor};
pub use types::*;
