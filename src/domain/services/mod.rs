//! Pure domain services.

mod lesson_player;
mod quiz_session;
mod step_cursor;

pub use lesson_player::{
    DEFAULT_REWARD_POINTS, LessonConfig, LessonPlayer, LessonState, Transition,
};
pub use quiz_session::{AnswerOutcome, PendingAnswer, QuizSession};
pub use step_cursor::StepCursor;
