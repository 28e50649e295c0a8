//! Study content catalog.

use serde::{Deserialize, Serialize};

use super::exam::group_matching;
use super::{Exam, Lesson, Quiz};

/// Lessons and quizzes offered on the home screen, plus browsable past exams.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Lessons in display order.
    #[serde(default)]
    pub lessons: Vec<Lesson>,
    /// Quizzes in display order.
    #[serde(default)]
    pub quizzes: Vec<Quiz>,
    /// Past papers for the exam browser.
    #[serde(default)]
    pub exams: Vec<Exam>,
}

impl Catalog {
    /// Looks up a lesson by id.
    #[must_use]
    pub fn lesson(&self, id: &str) -> Option<&Lesson> {
        self.lessons.iter().find(|lesson| lesson.id == id)
    }

    /// Looks up a quiz by id.
    #[must_use]
    pub fn quiz(&self, id: &str) -> Option<&Quiz> {
        self.quizzes.iter().find(|quiz| quiz.id == id)
    }

    /// Exams whose name matches `query`, grouped by board in catalog order.
    #[must_use]
    pub fn search_exams(&self, query: &str) -> Vec<(&str, Vec<&Exam>)> {
        group_matching(&self.exams, query)
    }

    /// Returns `true` when there is nothing to show.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty() && self.quizzes.is_empty() && self.exams.is_empty()
    }

    /// Number of entries across all lists.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lessons.len() + self.quizzes.len() + self.exams.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::LessonPart;

    #[test]
    fn test_lookup_by_id() {
        let catalog = Catalog {
            lessons: vec![Lesson::new("algebra", "Algebra", vec![LessonPart::text("x")])],
            quizzes: vec![Quiz {
                id: "concursos".into(),
                title: "Quiz".into(),
                questions: Vec::new(),
            }],
            exams: Vec::new(),
        };

        assert!(catalog.lesson("algebra").is_some());
        assert!(catalog.lesson("missing").is_none());
        assert!(catalog.quiz("concursos").is_some());
        assert_eq!(catalog.len(), 2);
        assert!(!catalog.is_empty());
    }

    fn exams() -> Catalog {
        Catalog {
            exams: vec![
                Exam::new("ENEM", 2023),
                Exam::new("Unicamp", 2023),
                Exam::new("ENEM", 2022),
                Exam::new("BDB", 2020),
            ],
            ..Catalog::default()
        }
    }

    #[test]
    fn test_search_groups_by_board_in_order() {
        let catalog = exams();
        let groups = catalog.search_exams("");
        let boards: Vec<&str> = groups.iter().map(|(board, _)| *board).collect();
        assert_eq!(boards, ["ENEM", "Unicamp", "BDB"]);
        assert_eq!(groups[0].1.len(), 2);
    }

    #[test]
    fn test_search_filters_by_name() {
        let catalog = exams();
        let groups = catalog.search_exams("2023");
        assert_eq!(groups.len(), 2);
        assert!(groups.iter().all(|(_, exams)| exams.iter().all(|e| e.year == 2023)));

        assert!(catalog.search_exams("fuvest").is_empty());
    }

    #[test]
    fn test_exam_only_catalog_is_not_empty() {
        assert!(!exams().is_empty());
        assert_eq!(exams().len(), 4);
    }
}
