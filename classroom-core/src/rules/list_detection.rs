use super::engine::LineRule;
use once_cell::sync::Lazy;
use regex::Regex;

static BULLET_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[-*•]\s+(.*)$").expect("bullet pattern is valid"));

// BulletRule - list items marked with '-', '*' or '•' followed by whitespace
pub struct BulletRule;

impl LineRule for BulletRule {
    fn classify(&self, line: &str) -> Option<String> {
        let captures = BULLET_PATTERN.captures(line)?;
        let item = captures.get(1)?.as_str().trim();
        (!item.is_empty()).then(|| item.to_string())
    }

    fn name(&self) -> &str {
        "BulletLine"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("- bullet one", Some("bullet one"))]
    #[case("* starred", Some("starred"))]
    #[case("•  dotted item", Some("dotted item"))]
    #[case("-dash without space", None)]
    #[case("-", None)]
    #[case("1. numbered", None)]
    #[case("+ plus sign", None)]
    fn bullet_rule(#[case] line: &str, #[case] expected: Option<&str>) {
        assert_eq!(BulletRule.classify(line).as_deref(), expected);
    }
}
