//! Quiz entities.

use serde::{Deserialize, Serialize};

/// Multiple-choice question with a single expected answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Position-independent identifier.
    pub id: u32,
    /// Question text.
    pub prompt: String,
    /// Choices in display order.
    pub options: Vec<String>,
    /// Must equal one of `options` exactly.
    pub answer: String,
}

impl Question {
    /// Creates a question.
    #[must_use]
    pub fn new(
        id: u32,
        prompt: impl Into<String>,
        options: Vec<String>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            id,
            prompt: prompt.into(),
            options,
            answer: answer.into(),
        }
    }

    /// Exact, case-sensitive comparison against the expected answer.
    #[must_use]
    pub fn is_correct(&self, option: &str) -> bool {
        option == self.answer
    }
}

/// Catalog entry describing one quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    /// Unique within the catalog.
    pub id: String,
    /// Title shown on the home screen.
    pub title: String,
    /// Questions in order; may be empty.
    #[serde(default)]
    pub questions: Vec<Question>,
}
