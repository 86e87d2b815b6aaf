pub mod builder;
pub mod progress;
pub mod render;
pub mod serialization;

// Re-export for easy access
pub use builder::{build_plan, build_plan_for};
pub use progress::{lesson_heading, progress_percent};
pub use render::{render_completion, render_lesson, render_overview};
pub use serialization::SCHEMA_VERSION;
