//! Study session state for walking through a plan one lesson at a time.
//!
//! The plan itself is never mutated; the session only tracks where the
//! learner is. Generating a new plan means starting a new session.

use classroom_core::plan::{lesson_heading, progress_percent, render_completion};
use classroom_core::{LearningPlan, Lesson};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Moved to the lesson at this index
    Moved(usize),
    /// Already on the last lesson; the session is complete
    Finished,
}

#[derive(Debug, Clone)]
pub struct StudySession {
    plan: LearningPlan,
    current: usize,
}

impl StudySession {
    pub fn new(plan: LearningPlan) -> Self {
        Self { plan, current: 0 }
    }

    pub fn plan(&self) -> &LearningPlan {
        &self.plan
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> Option<&Lesson> {
        self.plan.lesson(self.current)
    }

    pub fn next(&mut self) -> Step {
        if self.current + 1 < self.plan.lesson_count() {
            self.current += 1;
            Step::Moved(self.current)
        } else {
            Step::Finished
        }
    }

    /// Returns false when already on the first lesson
    pub fn previous(&mut self) -> bool {
        if self.current == 0 {
            return false;
        }
        self.current -= 1;
        true
    }

    pub fn restart(&mut self) {
        self.current = 0;
    }

    pub fn heading(&self) -> String {
        lesson_heading(self.current, self.plan.lesson_count())
    }

    pub fn progress_percent(&self) -> f32 {
        progress_percent(self.current, self.plan.lesson_count())
    }

    pub fn next_label(&self) -> &'static str {
        if self.current + 1 >= self.plan.lesson_count() {
            "Finish"
        } else {
            "Next"
        }
    }

    pub fn completion_message(&self) -> String {
        render_completion(self.plan.lesson_count(), self.plan.method)
    }
}

/// Crude tag stripper for showing lesson fragments in a terminal
pub fn plain_text(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => text.push(c),
            _ => {}
        }
    }
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use classroom_core::{build_plan, Method};

    fn session(n: usize) -> StudySession {
        let topics: Vec<String> = (1..=n).map(|i| format!("Topic {i}")).collect();
        StudySession::new(build_plan(&topics, Method::Reading))
    }

    #[test]
    fn test_walk_forward_to_finish() {
        let mut s = session(3);
        assert_eq!(s.heading(), "Lesson 1 of 3");
        assert_eq!(s.next_label(), "Next");
        assert_eq!(s.next(), Step::Moved(1));
        assert_eq!(s.next(), Step::Moved(2));
        assert_eq!(s.next_label(), "Finish");
        assert_eq!(s.next(), Step::Finished);
        assert_eq!(s.current_index(), 2);
        assert_eq!(s.progress_percent(), 100.0);
    }

    #[test]
    fn test_previous_stops_at_first() {
        let mut s = session(2);
        assert!(!s.previous());
        s.next();
        assert!(s.previous());
        assert_eq!(s.current().unwrap().title, "Topic 1");
    }

    #[test]
    fn test_restart_returns_to_first_lesson() {
        let mut s = session(4);
        s.next();
        s.next();
        s.restart();
        assert_eq!(s.current_index(), 0);
        assert_eq!(s.progress_percent(), 25.0);
    }

    #[test]
    fn test_completion_mentions_count() {
        assert!(session(5).completion_message().contains("completed all 5 lessons"));
    }

    #[test]
    fn test_plain_text_strips_tags() {
        let text = plain_text("<h3>Osmosis</h3>\n<p><strong>Tip:</strong> drink water</p>\n");
        assert_eq!(text, "Osmosis\nTip: drink water");
    }
}
