use super::render::render_overview;
use crate::types::*;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// The schema version stamped on every exported plan.
/// Bump this when the output shape changes.
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Full export: the plan plus an envelope that says when and in what shape it
/// was written. The timestamp lives here, never on the plan itself.
#[derive(Debug, Clone, Serialize)]
pub struct PlanDocument<'a> {
    pub schema_version: &'static str,
    pub generated_at: DateTime<Utc>,
    pub plan: &'a LearningPlan,
}

/// Table of contents without lesson bodies.
#[derive(Debug, Clone, Serialize)]
pub struct OutlineDocument<'a> {
    pub format: &'static str,
    pub method: Method,
    pub strategy: &'static Strategy,
    pub topics: &'a [Topic],
}

impl LearningPlan {
    pub fn to_plan_document(&self) -> PlanDocument<'_> {
        PlanDocument {
            schema_version: SCHEMA_VERSION,
            generated_at: Utc::now(),
            plan: self,
        }
    }

    pub fn to_outline_format(&self) -> OutlineDocument<'_> {
        OutlineDocument {
            format: "outline",
            method: self.method,
            strategy: self.strategy,
            topics: &self.topics,
        }
    }

    /// One standalone page: the overview followed by every lesson in order.
    pub fn to_html_page(&self) -> String {
        let mut page = String::from("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
        page.push_str(&format!(
            "<title>{} Learning Plan</title>\n</head>\n<body>\n",
            self.method.label()
        ));
        page.push_str(&render_overview(self));
        for lesson in &self.lessons {
            page.push_str(&format!(
                "<section class=\"lesson\" data-index=\"{}\">\n",
                lesson.index
            ));
            page.push_str(&lesson.content);
            page.push_str("</section>\n");
        }
        page.push_str("</body>\n</html>\n");
        page
    }

    pub fn save_to_json(&self, path: &str) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.to_plan_document())
            .context("Failed to serialize learning plan")?;
        std::fs::write(path, json).with_context(|| format!("Failed to write {path}"))?;
        Ok(())
    }

    pub fn save_with_format(&self, path: &str, format: &str) -> Result<()> {
        match format {
            "outline" => {
                let outline = serde_json::to_string_pretty(&self.to_outline_format())?;
                std::fs::write(path, outline).with_context(|| format!("Failed to write {path}"))?;
            }
            "html" => {
                std::fs::write(path, self.to_html_page())
                    .with_context(|| format!("Failed to write {path}"))?;
            }
            "plan" => self.save_to_json(path)?,
            other => {
                tracing::warn!("⚠️  Unknown output format '{other}', using default plan format");
                self.save_to_json(path)?;
            }
        }
        Ok(())
    }
}
