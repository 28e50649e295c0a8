//! Lesson step-progression state machine.

use crate::domain::entities::{EndOfListPolicy, Lesson, LessonPart};

use super::StepCursor;

/// Reward granted on completion unless configured otherwise.
pub const DEFAULT_REWARD_POINTS: u32 = 75;

/// Parameters of one lesson attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonConfig {
    /// Parts in order.
    pub parts: Vec<LessonPart>,
    /// Granted once on completion.
    pub reward_points: u32,
    /// Behaviour when advancing past the last part.
    pub end_of_list: EndOfListPolicy,
}

impl LessonConfig {
    /// Creates config with the default reward and clamping policy.
    #[must_use]
    pub fn new(parts: Vec<LessonPart>) -> Self {
        Self {
            parts,
            reward_points: DEFAULT_REWARD_POINTS,
            end_of_list: EndOfListPolicy::default(),
        }
    }

    /// Builds config from a catalog lesson, applying its overrides over the defaults.
    #[must_use]
    pub fn for_lesson(lesson: &Lesson, reward_points: u32, end_of_list: EndOfListPolicy) -> Self {
        Self {
            parts: lesson.parts.clone(),
            reward_points: lesson.reward_points.unwrap_or(reward_points),
            end_of_list: lesson.end_of_list.unwrap_or(end_of_list),
        }
    }

    /// Replaces the completion reward.
    #[must_use]
    pub const fn with_reward_points(mut self, reward_points: u32) -> Self {
        self.reward_points = reward_points;
        self
    }

    /// Replaces the end-of-list policy.
    #[must_use]
    pub const fn with_end_of_list(mut self, end_of_list: EndOfListPolicy) -> Self {
        self.end_of_list = end_of_list;
        self
    }
}

/// Observable state of the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum LessonState {
    /// Viewing the part at `cursor`.
    InProgress { cursor: usize },
    /// Finished; holds the granted reward.
    Completed { reward_points: u32 },
}

/// Result of a player operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum Transition {
    /// Cursor moved to a new part.
    Moved { cursor: usize },
    /// Cursor was already at the boundary.
    Clamped,
    /// Lesson became complete; the reward should be acknowledged.
    Completed { reward_points: u32 },
    /// Player returned to the first part.
    Reset,
    /// Operation not valid in the current state.
    Ignored,
}

/// Tracks position within a lesson and gates its completion.
#[derive(Debug, Clone)]
pub struct LessonPlayer {
    parts: StepCursor<LessonPart>,
    configured_reward: u32,
    end_of_list: EndOfListPolicy,
    completed: bool,
    reward_points: u32,
}

impl LessonPlayer {
    /// Starts on the first part, not completed.
    #[must_use]
    pub fn new(config: LessonConfig) -> Self {
        Self {
            parts: StepCursor::new(config.parts),
            configured_reward: config.reward_points,
            end_of_list: config.end_of_list,
            completed: false,
            reward_points: 0,
        }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> LessonState {
        if self.completed {
            LessonState::Completed {
                reward_points: self.reward_points,
            }
        } else {
            LessonState::InProgress {
                cursor: self.parts.index(),
            }
        }
    }

    /// Index of the current part.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.parts.index()
    }

    /// Number of parts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Returns `true` for a lesson without parts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Returns `true` once completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Reward granted so far; `0` until completion.
    #[must_use]
    pub const fn reward_points(&self) -> u32 {
        self.reward_points
    }

    /// Policy applied on the last part.
    #[must_use]
    pub const fn end_of_list(&self) -> EndOfListPolicy {
        self.end_of_list
    }

    /// Part under the cursor, `None` for an empty lesson.
    #[must_use]
    pub fn current_part(&self) -> Option<&LessonPart> {
        self.parts.current()
    }

    /// Returns `true` when completion is the next step.
    #[must_use]
    pub fn is_on_last_part(&self) -> bool {
        !self.parts.is_empty() && self.parts.is_last()
    }

    /// Display-only progress, `(cursor + 1) / len` while in progress.
    #[must_use]
    pub fn progress_fraction(&self) -> f64 {
        if self.completed {
            return 1.0;
        }
        self.parts.fraction(self.parts.index() + 1)
    }

    /// Moves to the next part.
    ///
    /// On the last part the outcome depends on the end-of-list policy.
    pub fn advance(&mut self) -> Transition {
        if self.completed || self.parts.is_empty() {
            return Transition::Ignored;
        }

        if self.parts.advance() {
            return Transition::Moved {
                cursor: self.parts.index(),
            };
        }

        match self.end_of_list {
            EndOfListPolicy::Clamp => Transition::Clamped,
            EndOfListPolicy::AutoComplete => self.complete(),
        }
    }

    /// Moves to the previous part, clamping at the first.
    pub fn retreat(&mut self) -> Transition {
        if self.completed || self.parts.is_empty() {
            return Transition::Ignored;
        }

        if self.parts.retreat() {
            Transition::Moved {
                cursor: self.parts.index(),
            }
        } else {
            Transition::Clamped
        }
    }

    /// Marks the lesson complete. A second call is a no-op.
    pub fn complete(&mut self) -> Transition {
        if self.completed || self.parts.is_empty() {
            return Transition::Ignored;
        }

        self.completed = true;
        self.reward_points = self.configured_reward;

        Transition::Completed {
            reward_points: self.reward_points,
        }
    }

    /// Discards progress and returns to the first part. Only valid once completed.
    pub fn reset(&mut self) -> Transition {
        if !self.completed {
            return Transition::Ignored;
        }

        self.completed = false;
        self.reward_points = 0;
        self.parts.rewind();

        Transition::Reset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn sample_parts() -> Vec<LessonPart> {
        vec![
            LessonPart::text("Variables hold values."),
            LessonPart::video("https://cdn.example/algebra.mp4"),
            LessonPart::text("Expressions combine variables."),
            LessonPart::text("Equations state equality."),
        ]
    }

    fn player(policy: EndOfListPolicy) -> LessonPlayer {
        LessonPlayer::new(LessonConfig::new(sample_parts()).with_end_of_list(policy))
    }

    #[test]
    fn test_initial_state() {
        let player = player(EndOfListPolicy::Clamp);
        assert_eq!(player.state(), LessonState::InProgress { cursor: 0 });
        assert!(!player.is_completed());
        assert_eq!(player.reward_points(), 0);
    }

    #[test]
    fn test_clamp_policy_reaches_last_part_in_progress() {
        let mut player = player(EndOfListPolicy::Clamp);
        for expected in 1..player.len() {
            assert_eq!(player.advance(), Transition::Moved { cursor: expected });
            assert_eq!(player.state(), LessonState::InProgress { cursor: expected });
        }
        assert_eq!(player.cursor(), 3);
        assert_eq!(player.advance(), Transition::Clamped);
        assert_eq!(player.state(), LessonState::InProgress { cursor: 3 });
    }

    #[test]
    fn test_auto_complete_policy_completes_past_last_part() {
        let mut player = player(EndOfListPolicy::AutoComplete);
        for _ in 1..player.len() {
            player.advance();
        }
        assert_eq!(player.state(), LessonState::InProgress { cursor: 3 });
        assert_eq!(
            player.advance(),
            Transition::Completed {
                reward_points: DEFAULT_REWARD_POINTS
            }
        );
        assert!(player.is_completed());
    }

    #[test]
    fn test_retreat_at_first_part_is_noop() {
        let mut player = player(EndOfListPolicy::Clamp);
        assert_eq!(player.retreat(), Transition::Clamped);
        assert_eq!(player.state(), LessonState::InProgress { cursor: 0 });
    }

    #[test_case(1 ; "second part")]
    #[test_case(2 ; "third part")]
    fn test_advance_then_retreat_round_trips(start: usize) {
        let mut player = player(EndOfListPolicy::Clamp);
        for _ in 0..start {
            player.advance();
        }
        player.advance();
        player.retreat();
        assert_eq!(player.cursor(), start);
    }

    #[test]
    fn test_complete_is_idempotent() {
        let mut player = player(EndOfListPolicy::Clamp);
        assert_eq!(
            player.complete(),
            Transition::Completed { reward_points: 75 }
        );
        let once = (player.state(), player.reward_points(), player.is_completed());

        assert_eq!(player.complete(), Transition::Ignored);
        let twice = (player.state(), player.reward_points(), player.is_completed());
        assert_eq!(once, twice);
    }

    #[test_case(0 ; "from first part")]
    #[test_case(3 ; "from last part")]
    fn test_reset_after_complete(steps: usize) {
        let mut player = player(EndOfListPolicy::Clamp);
        for _ in 0..steps {
            player.advance();
        }
        player.complete();

        assert_eq!(player.reset(), Transition::Reset);
        assert_eq!(player.cursor(), 0);
        assert!(!player.is_completed());
        assert_eq!(player.reward_points(), 0);
    }

    #[test]
    fn test_reset_ignored_while_in_progress() {
        let mut player = player(EndOfListPolicy::Clamp);
        player.advance();
        assert_eq!(player.reset(), Transition::Ignored);
        assert_eq!(player.cursor(), 1);
    }

    #[test]
    fn test_navigation_ignored_once_completed() {
        let mut player = player(EndOfListPolicy::Clamp);
        player.advance();
        player.complete();
        assert_eq!(player.advance(), Transition::Ignored);
        assert_eq!(player.retreat(), Transition::Ignored);
    }

    #[test]
    fn test_progress_fraction_half_way() {
        let mut player = player(EndOfListPolicy::Clamp);
        player.advance();
        assert!((player.progress_fraction() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_full_lesson_scenario() {
        let mut player = player(EndOfListPolicy::Clamp);
        player.advance();
        player.advance();
        player.advance();
        assert_eq!(player.state(), LessonState::InProgress { cursor: 3 });

        player.complete();
        assert_eq!(player.state(), LessonState::Completed { reward_points: 75 });

        player.reset();
        assert_eq!(player.state(), LessonState::InProgress { cursor: 0 });
        assert_eq!(player.reward_points(), 0);
    }

    #[test]
    fn test_empty_lesson_is_safe() {
        let mut player = LessonPlayer::new(LessonConfig::new(Vec::new()));
        assert!(player.progress_fraction().abs() < f64::EPSILON);
        assert!(player.current_part().is_none());
        assert_eq!(player.advance(), Transition::Ignored);
        assert_eq!(player.retreat(), Transition::Ignored);
        assert_eq!(player.complete(), Transition::Ignored);
        assert_eq!(player.state(), LessonState::InProgress { cursor: 0 });
    }

    #[test]
    fn test_configured_reward() {
        let mut player =
            LessonPlayer::new(LessonConfig::new(sample_parts()).with_reward_points(100));
        assert_eq!(
            player.complete(),
            Transition::Completed { reward_points: 100 }
        );
    }

    #[test]
    fn test_lesson_overrides_apply() {
        let mut lesson = Lesson::new("intro", "Intro", sample_parts());
        lesson.reward_points = Some(100);

        let config = LessonConfig::for_lesson(&lesson, 75, EndOfListPolicy::AutoComplete);
        assert_eq!(config.reward_points, 100);
        assert_eq!(config.end_of_list, EndOfListPolicy::AutoComplete);
    }
}
