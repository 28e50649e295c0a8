//! Past exam papers listed for browsing.

use serde::{Deserialize, Serialize};

/// One past paper, identified by its board and year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exam {
    /// Examining board, e.g. `ENEM`.
    pub board: String,
    /// Year the paper was sat.
    pub year: u16,
    /// Where the paper can be found, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl Exam {
    /// Creates an exam without a link.
    #[must_use]
    pub fn new(board: impl Into<String>, year: u16) -> Self {
        Self {
            board: board.into(),
            year,
            link: None,
        }
    }

    /// Display name such as `ENEM 2023`.
    #[must_use]
    pub fn name(&self) -> String {
        format!("{} {}", self.board, self.year)
    }

    /// Case-insensitive substring match on the display name.
    ///
    /// A blank query matches every exam.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim();
        query.is_empty() || self.name().to_lowercase().contains(&query.to_lowercase())
    }
}

/// Exams matching `query`, grouped by board in first-seen order.
pub(super) fn group_matching<'a>(
    exams: &'a [Exam],
    query: &str,
) -> Vec<(&'a str, Vec<&'a Exam>)> {
    let mut groups: Vec<(&str, Vec<&Exam>)> = Vec::new();
    for exam in exams.iter().filter(|exam| exam.matches(query)) {
        match groups.iter_mut().find(|(board, _)| *board == exam.board) {
            Some((_, group)) => group.push(exam),
            None => groups.push((exam.board.as_str(), vec![exam])),
        }
    }
    groups
}
