// Progress helpers for whoever paginates a plan

/// "Lesson 3 of 8" style heading for a 0-based index
pub fn lesson_heading(index: usize, total: usize) -> String {
    format!("Lesson {} of {}", index + 1, total)
}

/// Percentage of the plan covered once the lesson at `index` is shown.
/// Returns 0.0 for an empty plan.
pub fn progress_percent(index: usize, total: usize) -> f32 {
    if total == 0 {
        return 0.0;
    }
    ((index + 1).min(total) as f32 / total as f32) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lesson_heading_is_one_based() {
        assert_eq!(lesson_heading(0, 4), "Lesson 1 of 4");
        assert_eq!(lesson_heading(3, 4), "Lesson 4 of 4");
    }

    #[test]
    fn test_progress_percent() {
        assert_eq!(progress_percent(0, 4), 25.0);
        assert_eq!(progress_percent(3, 4), 100.0);
        assert_eq!(progress_percent(9, 4), 100.0);
        assert_eq!(progress_percent(0, 0), 0.0);
    }
}
