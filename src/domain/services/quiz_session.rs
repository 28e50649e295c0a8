//! Multiple-choice quiz progression.

use crate::domain::entities::Question;

use super::StepCursor;

/// Verdict for a submitted option.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum AnswerOutcome {
    /// Matched the expected answer.
    Correct,
    /// Wrong; carries the expected answer for feedback.
    Incorrect { expected: String },
}

impl AnswerOutcome {
    /// Returns `true` for [`AnswerOutcome::Correct`].
    #[must_use]
    pub const fn is_correct(&self) -> bool {
        matches!(self, Self::Correct)
    }
}

/// Answer awaiting its feedback delay before the quiz moves on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingAnswer {
    /// Option the learner picked.
    pub selected: String,
    /// How it was graded.
    pub outcome: AnswerOutcome,
}

/// Cursor over quiz questions with a running score.
///
/// The quiz never terminates: after the last question it wraps to the first.
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: StepCursor<Question>,
    score: u32,
    pending: Option<PendingAnswer>,
}

impl QuizSession {
    /// Starts on the first question with a zero score.
    #[must_use]
    pub const fn new(questions: Vec<Question>) -> Self {
        Self {
            questions: StepCursor::new(questions),
            score: 0,
            pending: None,
        }
    }

    /// Correct answers so far, across wraps.
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Number of questions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Returns `true` for a quiz without questions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Question under the cursor, `None` for an empty quiz.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.current()
    }

    /// One-based position for display.
    #[must_use]
    pub const fn question_number(&self) -> usize {
        self.questions.index() + 1
    }

    /// Answer shown as feedback, if any.
    #[must_use]
    pub const fn pending(&self) -> Option<&PendingAnswer> {
        self.pending.as_ref()
    }

    /// Share of the current round answered.
    #[must_use]
    pub fn progress_fraction(&self) -> f64 {
        let answered = usize::from(self.pending.is_some());
        self.questions.fraction(self.questions.index() + answered)
    }

    /// Grades an option for the current question.
    ///
    /// Returns `None` while a previous answer is still being shown, or when the
    /// quiz has no questions.
    pub fn answer(&mut self, option: &str) -> Option<AnswerOutcome> {
        if self.pending.is_some() {
            return None;
        }
        let question = self.questions.current()?;

        let outcome = if question.is_correct(option) {
            self.score += 1;
            AnswerOutcome::Correct
        } else {
            AnswerOutcome::Incorrect {
                expected: question.answer.clone(),
            }
        };

        self.pending = Some(PendingAnswer {
            selected: option.to_string(),
            outcome: outcome.clone(),
        });
        Some(outcome)
    }

    /// Ends the feedback display and moves to the next question, wrapping around.
    ///
    /// Returns `false` when no answer was pending.
    pub fn finish_feedback(&mut self) -> bool {
        if self.pending.take().is_none() {
            return false;
        }
        self.questions.advance_wrapping();
        true
    }
}
