//! Lesson templates.
//!
//! Topics are substituted verbatim. Nothing here escapes HTML: topics come
//! from arbitrary uploaded text, so whoever puts these fragments into a live
//! page is responsible for sanitising them.

use crate::types::{LearningPlan, Method};

/// Render the lesson page for one topic.
///
/// `index` and `total` are part of the contract so per-position variation can
/// be added later; the current templates read the same at every position.
pub fn render_lesson(topic: &str, method: Method, _index: usize, _total: usize) -> String {
    match method {
        Method::Visual => visual_lesson(topic),
        Method::Auditory => auditory_lesson(topic),
        Method::Reading => reading_lesson(topic),
        Method::Kinesthetic => kinesthetic_lesson(topic),
    }
}

fn visual_lesson(topic: &str) -> String {
    format!(
        r#"<h3>{topic}</h3>
<div class="visual-lesson">
    <p><strong>📊 Key Visual Concepts:</strong></p>
    <ul>
        <li>Visualize the main idea: {topic}</li>
        <li>Create a mental image of how this concept connects to others</li>
        <li>Draw diagrams or mind maps to organize information</li>
    </ul>
    <p><strong>💡 Visual Memory Tip:</strong> Associate this topic with a specific color or symbol.</p>
    <p>Take a moment to sketch out your understanding of <em>{topic}</em> on paper.</p>
</div>
"#
    )
}

fn auditory_lesson(topic: &str) -> String {
    format!(
        r#"<h3>{topic}</h3>
<div class="auditory-lesson">
    <p><strong>🎧 Let's Discuss: {topic}</strong></p>
    <p>Read the following aloud to help reinforce your understanding:</p>
    <blockquote>
        "{topic} is an important concept to understand. Take time to explain it in your own words,
        as if you were teaching it to someone else. Speaking the material aloud helps create stronger
        neural connections and improves retention."
    </blockquote>
    <p><strong>📢 Practice:</strong> Explain this concept to yourself or record yourself teaching it.</p>
</div>
"#
    )
}

fn reading_lesson(topic: &str) -> String {
    format!(
        r#"<h3>{topic}</h3>
<div class="reading-lesson">
    <p><strong>📖 Reading Focus: {topic}</strong></p>
    <p>This section covers the essential information about {topic}. Take detailed notes as you read.</p>
    <div style="background: rgba(255, 255, 255, 0.1); padding: 15px; border-radius: 5px; margin: 15px 0;">
        <p>Key points to remember:</p>
        <ul>
            <li>Main concept: {topic}</li>
            <li>Review your uploaded materials for specific details</li>
            <li>Write down important definitions and examples</li>
            <li>Summarize in your own words</li>
        </ul>
    </div>
    <p><strong>✍️ Writing Exercise:</strong> Create a summary paragraph about this topic.</p>
</div>
"#
    )
}

fn kinesthetic_lesson(topic: &str) -> String {
    format!(
        r#"<h3>{topic}</h3>
<div class="kinesthetic-lesson">
    <p><strong>✋ Interactive Practice: {topic}</strong></p>
    <p>Let's learn by doing! Complete these activities:</p>
    <ol>
        <li><strong>Apply it:</strong> Think of a real-world example of {topic}</li>
        <li><strong>Practice:</strong> Create a practical scenario using this concept</li>
        <li><strong>Test yourself:</strong> How would you use {topic} in a real situation?</li>
    </ol>
    <div style="background: rgba(255, 215, 0, 0.2); padding: 15px; border-radius: 5px; margin: 15px 0;">
        <p><strong>🎯 Quick Exercise:</strong></p>
        <p>Stand up, move around, and physically act out or demonstrate your understanding of this concept.</p>
    </div>
</div>
"#
    )
}

/// Summary fragment shown before the first lesson.
pub fn render_overview(plan: &LearningPlan) -> String {
    let topic_items: String = plan
        .topics
        .iter()
        .map(|topic| format!("        <li>{topic}</li>\n"))
        .collect();

    format!(
        r#"<div class="plan-overview">
    <h3>📋 Learning Method: {label}</h3>
    <p><strong>Strategy:</strong> {description}</p>
    <p><em>{approach}</em></p>
    <h4 style="margin-top: 20px; color: #ffd700;">Topics Covered:</h4>
    <ol style="margin-left: 20px; line-height: 2;">
{topic_items}    </ol>
    <p style="margin-top: 20px;"><strong>Total Lessons:</strong> {total}</p>
</div>
"#,
        label = plan.method.label(),
        description = plan.strategy.description,
        approach = plan.strategy.approach,
        total = plan.lesson_count(),
    )
}

/// Fragment shown once the learner moves past the last lesson.
pub fn render_completion(total: usize, method: Method) -> String {
    format!(
        r#"<div class="completion" style="text-align: center; padding: 50px 20px;">
    <h2 style="color: #ffd700; font-size: 2.5em; margin-bottom: 20px;">🎉 Congratulations!</h2>
    <p style="font-size: 1.3em; margin-bottom: 30px;">You've completed all {total} lessons!</p>
    <p style="font-size: 1.1em; margin-bottom: 20px;">You've successfully learned using the <strong>{method}</strong> method.</p>
    <p style="font-size: 1em; opacity: 0.9;">Keep practicing and reviewing the material to reinforce your understanding.</p>
</div>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::builder::build_plan;

    #[test]
    fn test_each_method_has_its_own_template() {
        let markers = [
            (Method::Visual, "visual-lesson"),
            (Method::Auditory, "auditory-lesson"),
            (Method::Reading, "reading-lesson"),
            (Method::Kinesthetic, "kinesthetic-lesson"),
        ];
        for (method, marker) in markers {
            let html = render_lesson("Osmosis", method, 0, 1);
            assert!(html.starts_with("<h3>Osmosis</h3>"));
            assert!(html.contains(marker), "{method} template missing {marker}");
        }
    }

    #[test]
    fn test_visual_template_structure() {
        let html = render_lesson("Osmosis", Method::Visual, 0, 3);
        assert_eq!(html.matches("<li>").count(), 3);
        assert!(html.contains("Visual Memory Tip"));
        assert!(html.contains("<em>Osmosis</em>"));
    }

    #[test]
    fn test_auditory_template_quotes_topic() {
        let html = render_lesson("Osmosis", Method::Auditory, 0, 1);
        assert!(html.contains("\"Osmosis is an important concept"));
        assert!(html.contains("explain it in your own words"));
        assert!(html.contains("Speaking the material aloud"));
    }

    #[test]
    fn test_reading_template_has_four_prompts() {
        let html = render_lesson("Osmosis", Method::Reading, 0, 1);
        assert_eq!(html.matches("<li>").count(), 4);
        assert!(html.contains("Writing Exercise"));
    }

    #[test]
    fn test_kinesthetic_template_numbered_list() {
        let html = render_lesson("Osmosis", Method::Kinesthetic, 0, 1);
        assert!(html.contains("<ol>"));
        assert_eq!(html.matches("<li>").count(), 3);
        assert!(html.contains("Quick Exercise"));
    }

    #[test]
    fn test_position_does_not_change_wording() {
        let first = render_lesson("Osmosis", Method::Reading, 0, 5);
        let last = render_lesson("Osmosis", Method::Reading, 4, 5);
        assert_eq!(first, last);
    }

    #[test]
    fn test_topic_is_not_escaped() {
        let html = render_lesson("<b>Bold & Brave</b>", Method::Visual, 0, 1);
        assert!(html.contains("<h3><b>Bold & Brave</b></h3>"));
    }

    #[test]
    fn test_overview_lists_topics() {
        let topics = vec!["Topic A".to_string(), "Topic B".to_string()];
        let plan = build_plan(&topics, Method::Kinesthetic);
        let html = render_overview(&plan);
        assert!(html.contains("Learning Method: Kinesthetic"));
        assert!(html.contains("<li>Topic A</li>"));
        assert!(html.contains("<li>Topic B</li>"));
        assert!(html.contains("<strong>Total Lessons:</strong> 2"));
        assert!(html.contains(Method::Kinesthetic.strategy().approach));
    }

    #[test]
    fn test_completion_message() {
        let html = render_completion(6, Method::Auditory);
        assert!(html.contains("completed all 6 lessons"));
        assert!(html.contains("<strong>auditory</strong> method"));
    }
}
