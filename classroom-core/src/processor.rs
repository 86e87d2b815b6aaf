use crate::config::PlanningConfig;
use crate::error::PlanError;
use crate::plan::build_plan;
use crate::rules::TopicExtractor;
use crate::types::*;
use std::time::Instant;

/// Captured intermediate outputs from each pipeline stage
/// Used for diagnostics: lets you inspect the topic list separately from the plan
#[derive(Debug, Clone, serde::Serialize)]
pub struct PipelineStages {
    pub topics: Vec<Topic>,
    pub plan: LearningPlan,
}

/// Wall-clock cost of one pipeline step.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct StepTiming {
    pub step: &'static str,
    pub micros: u128,
}

/// Per-step timings for `--profile`. When profiling is off nothing is
/// recorded and `time_step` just runs the closure.
#[derive(Debug, Default)]
pub struct StepProfiler {
    timings: Option<Vec<StepTiming>>,
}

impl StepProfiler {
    pub fn new(enabled: bool) -> Self {
        Self {
            timings: enabled.then(Vec::new),
        }
    }

    pub fn time_step<R>(&mut self, step: &'static str, f: impl FnOnce() -> R) -> R {
        let Some(timings) = self.timings.as_mut() else {
            return f();
        };

        let start = Instant::now();
        let result = f();
        let micros = start.elapsed().as_micros();
        tracing::debug!("⏱️  {step}: {micros}µs");

        timings.push(StepTiming { step, micros });
        result
    }

    pub fn timings(&self) -> &[StepTiming] {
        self.timings.as_deref().unwrap_or(&[])
    }

    pub fn total_micros(&self) -> u128 {
        self.timings().iter().map(|t| t.micros).sum()
    }

    /// One line per step and a total line; empty when nothing was timed
    pub fn report(&self) -> Vec<String> {
        if self.timings().is_empty() {
            return Vec::new();
        }
        let mut lines: Vec<String> = self
            .timings()
            .iter()
            .map(|t| format!("{:<22} {:>8}µs", t.step, t.micros))
            .collect();
        lines.push(format!("{:<22} {:>8}µs", "total", self.total_micros()));
        lines
    }
}

/// Text + method selector → plan, with the collaborator policy applied:
/// a document with no topics is refused rather than turned into an empty plan.
pub struct LessonPlanner {
    extractor: TopicExtractor,
    config: PlanningConfig,
}

impl Default for LessonPlanner {
    fn default() -> Self {
        Self::new(PlanningConfig::default())
    }
}

impl LessonPlanner {
    pub fn new(config: PlanningConfig) -> Self {
        Self {
            extractor: TopicExtractor::new(&config.extraction),
            config,
        }
    }

    /// Validate the config before building the planner
    pub fn with_config(config: PlanningConfig) -> Result<Self, PlanError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &PlanningConfig {
        &self.config
    }

    /// Explicit selector first, then the configured default method
    pub fn resolve_method(&self, selector: Option<&str>) -> Method {
        match selector {
            Some(_) => Method::resolve(selector),
            None => self.config.default_method,
        }
    }

    pub fn extract_topics(&self, text: &str) -> Vec<Topic> {
        self.extractor.extract(text)
    }

    pub fn generate(&self, text: &str, selector: Option<&str>) -> Result<LearningPlan, PlanError> {
        self.generate_with_profiler(text, selector, &mut StepProfiler::new(false))
    }

    pub fn generate_with_profiler(
        &self,
        text: &str,
        selector: Option<&str>,
        profiler: &mut StepProfiler,
    ) -> Result<LearningPlan, PlanError> {
        let stages = self.run_stages(text, selector, profiler)?;
        Ok(stages.plan)
    }

    /// Run the pipeline and keep every intermediate output
    pub fn capture_stages(
        &self,
        text: &str,
        selector: Option<&str>,
    ) -> Result<PipelineStages, PlanError> {
        self.run_stages(text, selector, &mut StepProfiler::new(false))
    }

    fn run_stages(
        &self,
        text: &str,
        selector: Option<&str>,
        profiler: &mut StepProfiler,
    ) -> Result<PipelineStages, PlanError> {
        tracing::info!("📄 Extracting topics from {} characters of text", text.chars().count());

        // Stage 1: Topic extraction (text → topics)
        let topics = profiler.time_step("1. Topic Extraction", || self.extractor.extract(text));
        if topics.is_empty() {
            tracing::warn!("⚠️  No topics found, refusing to build an empty plan");
            return Err(PlanError::NoTopics);
        }
        tracing::info!("📝 Found {} topics", topics.len());

        // Stage 2: Plan building (topics + method → plan)
        let method = self.resolve_method(selector);
        let plan = profiler.time_step("2. Plan Building", || build_plan(&topics, method));
        tracing::info!("📋 Built {} plan with {} lessons", plan.method, plan.lesson_count());

        Ok(PipelineStages { topics, plan })
    }
}
