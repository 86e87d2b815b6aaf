use super::engine::LineRule;
use once_cell::sync::Lazy;
use regex::Regex;

static HEADING_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#{1,6}\s+(.*)$").expect("heading pattern is valid"));

// HeadingRule - markdown headings, 1 to 6 '#' followed by whitespace
pub struct HeadingRule;

impl LineRule for HeadingRule {
    fn classify(&self, line: &str) -> Option<String> {
        let captures = HEADING_PATTERN.captures(line)?;
        let title = captures.get(1)?.as_str().trim();
        (!title.is_empty()).then(|| title.to_string())
    }

    fn name(&self) -> &str {
        "MarkdownHeading"
    }
}

// LabelRule - short lines ending in an ASCII or fullwidth colon.
// A bare colon still counts as a match; its empty topic is dropped at dedupe.
pub struct LabelRule {
    max_len: usize,
}

impl LabelRule {
    pub fn new(max_len: usize) -> Self {
        Self { max_len }
    }
}

impl LineRule for LabelRule {
    fn classify(&self, line: &str) -> Option<String> {
        if line.chars().count() >= self.max_len {
            return None;
        }
        let body = line
            .strip_suffix(':')
            .or_else(|| line.strip_suffix('：'))?
            .trim_end();
        Some(body.to_string())
    }

    fn name(&self) -> &str {
        "LabelLine"
    }
}

// ShoutRule - ALL CAPS lines of moderate length, kept verbatim
pub struct ShoutRule {
    min_len: usize,
    max_len: usize,
}

impl ShoutRule {
    /// Both bounds are exclusive
    pub fn new(min_len: usize, max_len: usize) -> Self {
        Self { min_len, max_len }
    }
}

impl LineRule for ShoutRule {
    fn classify(&self, line: &str) -> Option<String> {
        let len = line.chars().count();
        if len <= self.min_len || len >= self.max_len {
            return None;
        }
        // A caseless line (digits, punctuation, CJK) equals its own uppercase
        // too, so at least one cased uppercase letter is required.
        let has_upper = line.chars().any(char::is_uppercase);
        (has_upper && line.to_uppercase() == line).then(|| line.to_string())
    }

    fn name(&self) -> &str {
        "ShoutLine"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# Intro", Some("Intro"))]
    #[case("###### Deepest", Some("Deepest"))]
    #[case("##\tTabbed title", Some("Tabbed title"))]
    #[case("####### Too deep", None)]
    #[case("#NoSpace", None)]
    #[case("#", None)]
    #[case("Not # a heading", None)]
    fn heading_rule(#[case] line: &str, #[case] expected: Option<&str>) {
        assert_eq!(HeadingRule.classify(line).as_deref(), expected);
    }

    #[rstest]
    #[case("Item:", Some("Item"))]
    #[case("Key terms :", Some("Key terms"))]
    #[case("重要事项：", Some("重要事项"))]
    #[case("Ratio: 3:1", None)]
    #[case(":", Some(""))]
    #[case("：", Some(""))]
    #[case("No colon here", None)]
    fn label_rule(#[case] line: &str, #[case] expected: Option<&str>) {
        assert_eq!(LabelRule::new(120).classify(line).as_deref(), expected);
    }

    #[test]
    fn label_rule_enforces_length_limit() {
        let long_line = format!("{}:", "x".repeat(119));
        assert_eq!(long_line.chars().count(), 120);
        assert!(LabelRule::new(120).classify(&long_line).is_none());

        let just_fits = format!("{}:", "x".repeat(118));
        assert!(LabelRule::new(120).classify(&just_fits).is_some());
    }

    #[rstest]
    #[case("DONE DEAL HERE", Some("DONE DEAL HERE"))]
    #[case("ABCD", Some("ABCD"))]
    #[case("ÉTUDE FINALE", Some("ÉTUDE FINALE"))]
    #[case("ABC", None)]
    #[case("AB", None)]
    #[case("1234 5678", None)]
    #[case("Mixed Case Line", None)]
    #[case("标题内容很长", None)]
    fn shout_rule(#[case] line: &str, #[case] expected: Option<&str>) {
        assert_eq!(ShoutRule::new(3, 80).classify(line).as_deref(), expected);
    }

    #[test]
    fn shout_rule_rejects_long_lines() {
        let at_limit = "A".repeat(80);
        assert!(ShoutRule::new(3, 80).classify(&at_limit).is_none());
        let below_limit = "A".repeat(79);
        assert!(ShoutRule::new(3, 80).classify(&below_limit).is_some());
    }
}
