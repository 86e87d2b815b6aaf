use super::render::render_lesson;
use crate::types::{LearningPlan, Lesson, Method, Topic};

/// Build a plan with one lesson per topic, in topic order.
///
/// Pure: identical inputs always give equal plans.
pub fn build_plan(topics: &[Topic], method: Method) -> LearningPlan {
    let total = topics.len();
    let lessons = topics
        .iter()
        .enumerate()
        .map(|(index, topic)| Lesson {
            title: topic.clone(),
            content: render_lesson(topic, method, index, total),
            index,
        })
        .collect();

    LearningPlan {
        method,
        strategy: method.strategy(),
        topics: topics.to_vec(),
        lessons,
    }
}

/// Resolve a raw selector first (absent or unknown means reading), then build.
pub fn build_plan_for(topics: &[Topic], selector: Option<&str>) -> LearningPlan {
    build_plan(topics, Method::resolve(selector))
}
