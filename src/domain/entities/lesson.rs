//! Lesson content entities.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

/// Kind of content a lesson part carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartKind {
    /// Didactic text block.
    Text,
    /// Video reference (URI or bundled resource handle).
    Video,
}

impl std::fmt::Display for PartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Video => write!(f, "video"),
        }
    }
}

/// One segment of a lesson, shown one at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonPart {
    kind: PartKind,
    content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    estimated_minutes: Option<NonZeroU32>,
}

impl LessonPart {
    /// Text part.
    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            kind: PartKind::Text,
            content: content.into(),
            title: None,
            estimated_minutes: None,
        }
    }

    /// Video part; `reference` is shown, not played.
    #[must_use]
    pub fn video(reference: impl Into<String>) -> Self {
        Self {
            kind: PartKind::Video,
            content: reference.into(),
            title: None,
            estimated_minutes: None,
        }
    }

    /// Sets the heading shown above the part.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the display-only duration; zero clears it.
    #[must_use]
    pub const fn with_estimated_minutes(mut self, minutes: u32) -> Self {
        self.estimated_minutes = NonZeroU32::new(minutes);
        self
    }

    /// Whether this is text or video.
    #[must_use]
    pub const fn kind(&self) -> PartKind {
        self.kind
    }

    /// Body text or video reference.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Optional heading.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Display-only duration.
    #[must_use]
    pub const fn estimated_minutes(&self) -> Option<NonZeroU32> {
        self.estimated_minutes
    }

    /// Blank content means the part has not been loaded yet.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        !self.content.trim().is_empty()
    }
}

/// What `advance` does when the cursor already sits on the last part.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum EndOfListPolicy {
    /// Stay on the last part; completion needs an explicit action.
    #[default]
    Clamp,
    /// Advancing past the last part completes the lesson.
    AutoComplete,
}

impl std::fmt::Display for EndOfListPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Clamp => write!(f, "clamp"),
            Self::AutoComplete => write!(f, "auto-complete"),
        }
    }
}

/// Catalog entry describing one lesson.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    /// Unique within the catalog.
    pub id: String,
    /// Title shown on the home screen.
    pub title: String,
    /// Ordered parts; may be empty.
    #[serde(default)]
    pub parts: Vec<LessonPart>,
    /// Overrides the configured completion reward.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reward_points: Option<u32>,
    /// Overrides the configured end-of-list policy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_of_list: Option<EndOfListPolicy>,
}

impl Lesson {
    /// Creates a lesson that uses the configured reward and policy.
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>, parts: Vec<LessonPart>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            parts,
            reward_points: None,
            end_of_list: None,
        }
    }

    /// Sum of the parts' estimated minutes, if any part carries one.
    #[must_use]
    pub fn estimated_minutes(&self) -> Option<u32> {
        self.parts
            .iter()
            .filter_map(LessonPart::estimated_minutes)
            .map(NonZeroU32::get)
            .reduce(u32::saturating_add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_content_not_loaded() {
        assert!(!LessonPart::text("  ").is_loaded());
        assert!(!LessonPart::video("").is_loaded());
        assert!(LessonPart::video("https://cdn.example/intro.mp4").is_loaded());
    }

    #[test]
    fn test_part_from_toml() {
        let part: LessonPart = toml::from_str(
            r#"
            kind = "video"
            title = "Part 1"
            content = "https://cdn.example/intro.mp4"
            estimated_minutes = 4
            "#,
        )
        .unwrap();

        assert_eq!(part.kind(), PartKind::Video);
        assert_eq!(part.title(), Some("Part 1"));
        assert_eq!(part.estimated_minutes().map(NonZeroU32::get), Some(4));
    }

    #[test]
    fn test_zero_minutes_rejected() {
        let result: Result<LessonPart, _> = toml::from_str(
            r#"
            kind = "text"
            content = "hello"
            estimated_minutes = 0
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_lesson_estimated_minutes() {
        let lesson = Lesson::new(
            "l1",
            "Lesson",
            vec![
                LessonPart::text("a").with_estimated_minutes(3),
                LessonPart::text("b"),
                LessonPart::text("c").with_estimated_minutes(3),
            ],
        );
        assert_eq!(lesson.estimated_minutes(), Some(6));
        assert_eq!(Lesson::new("l2", "Empty", Vec::new()).estimated_minutes(), None);
    }

    #[test]
    fn test_policy_kebab_case() {
        #[derive(Deserialize)]
        struct Wrapper {
            policy: EndOfListPolicy,
        }
        let parsed: Wrapper = toml::from_str(r#"policy = "auto-complete""#).unwrap();
        assert_eq!(parsed.policy, EndOfListPolicy::AutoComplete);
    }
}
