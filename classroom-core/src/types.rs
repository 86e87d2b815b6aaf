use crate::error::UnknownMethod;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A short display label for one unit of study content.
pub type Topic = String;

// ===== LEARNING METHODS =====

/// Pedagogical style that drives strategy and template selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    Visual,
    Auditory,
    #[default]
    Reading,
    Kinesthetic,
}

impl Method {
    pub const ALL: [Method; 4] = [
        Method::Visual,
        Method::Auditory,
        Method::Reading,
        Method::Kinesthetic,
    ];

    /// Canonical lowercase name, also the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Visual => "visual",
            Method::Auditory => "auditory",
            Method::Reading => "reading",
            Method::Kinesthetic => "kinesthetic",
        }
    }

    /// Capitalised label for headings ("Visual", "Auditory", ...)
    pub fn label(self) -> &'static str {
        match self {
            Method::Visual => "Visual",
            Method::Auditory => "Auditory",
            Method::Reading => "Reading",
            Method::Kinesthetic => "Kinesthetic",
        }
    }

    /// Resolve an optional selector to a method.
    ///
    /// Absent or unrecognised selectors resolve to [`Method::Reading`]. This is
    /// the only fallback rule in the crate; plan building and lesson rendering
    /// both go through it, so they can never disagree.
    pub fn resolve(selector: Option<&str>) -> Method {
        match selector {
            Some(raw) => raw.parse().unwrap_or_else(|err: UnknownMethod| {
                tracing::debug!("{err}, falling back to {}", Method::default());
                Method::default()
            }),
            None => Method::default(),
        }
    }

    /// Static strategy metadata bound to this method.
    pub fn strategy(self) -> &'static Strategy {
        match self {
            Method::Visual => &VISUAL_STRATEGY,
            Method::Auditory => &AUDITORY_STRATEGY,
            Method::Reading => &READING_STRATEGY,
            Method::Kinesthetic => &KINESTHETIC_STRATEGY,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = UnknownMethod;

    /// Only the exact canonical names parse; `"Visual"` or `" visual"` do not.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Method::ALL
            .into_iter()
            .find(|method| method.as_str() == s)
            .ok_or_else(|| UnknownMethod(s.to_string()))
    }
}

// ===== STRATEGIES =====

/// Read-only descriptive metadata for a method, shared by every lesson in a plan.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Strategy {
    pub lesson_style: Method,
    pub description: &'static str,
    pub approach: &'static str,
}

static VISUAL_STRATEGY: Strategy = Strategy {
    lesson_style: Method::Visual,
    description: "Visual learning with diagrams, mind maps, and visual organization",
    approach: "We'll use visual representations and spatial organization to help you understand the material.",
};

static AUDITORY_STRATEGY: Strategy = Strategy {
    lesson_style: Method::Auditory,
    description: "Auditory learning through reading aloud and discussion",
    approach: "We'll present the material in a way that you can read aloud and discuss with yourself.",
};

static READING_STRATEGY: Strategy = Strategy {
    lesson_style: Method::Reading,
    description: "Reading and writing focused learning with detailed notes",
    approach: "We'll present comprehensive written content that you can read and take notes on.",
};

static KINESTHETIC_STRATEGY: Strategy = Strategy {
    lesson_style: Method::Kinesthetic,
    description: "Hands-on learning with interactive practice and exercises",
    approach: "We'll include practice questions and interactive elements to help you learn by doing.",
};

// ===== PLAN OUTPUT =====

/// One rendered study page tied to exactly one topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lesson {
    pub title: Topic,
    pub content: String,
    /// 0-based position, used for progress display only
    pub index: usize,
}

/// Complete output of the generation pipeline for one method/document pair.
///
/// Built once per generate action and replaced wholesale on regeneration.
/// `lessons[i].title == topics[i]` for every `i`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LearningPlan {
    pub method: Method,
    pub strategy: &'static Strategy,
    pub topics: Vec<Topic>,
    pub lessons: Vec<Lesson>,
}

impl LearningPlan {
    pub fn lesson_count(&self) -> usize {
        self.lessons.len()
    }

    pub fn lesson(&self, index: usize) -> Option<&Lesson> {
        self.lessons.get(index)
    }

    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_parses_canonical_names() {
        for method in Method::ALL {
            assert_eq!(method.as_str().parse::<Method>().unwrap(), method);
        }
    }

    #[test]
    fn test_method_names_are_exact() {
        assert!("Visual".parse::<Method>().is_err());
        assert!(" visual ".parse::<Method>().is_err());
        assert!("KINESTHETIC".parse::<Method>().is_err());
        assert_eq!(Method::resolve(Some("Visual")), Method::Reading);
    }

    #[test]
    fn test_method_rejects_unknown_names() {
        let err = "not-a-real-method".parse::<Method>().unwrap_err();
        assert_eq!(err.0, "not-a-real-method");
        assert!("".parse::<Method>().is_err());
    }

    #[test]
    fn test_resolve_falls_back_to_reading() {
        assert_eq!(Method::resolve(None), Method::Reading);
        assert_eq!(Method::resolve(Some("telepathic")), Method::Reading);
        assert_eq!(Method::resolve(Some("kinesthetic")), Method::Kinesthetic);
    }

    #[test]
    fn test_strategy_bound_to_its_method() {
        for method in Method::ALL {
            assert_eq!(method.strategy().lesson_style, method);
        }
        assert!(Method::Auditory.strategy().description.contains("reading aloud"));
    }

    #[test]
    fn test_method_serializes_lowercase() {
        let json = serde_json::to_string(&Method::Kinesthetic).unwrap();
        assert_eq!(json, "\"kinesthetic\"");
        let back: Method = serde_json::from_str("\"visual\"").unwrap();
        assert_eq!(back, Method::Visual);
    }
}
