//! Lesson player screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Gauge, Paragraph, Widget, Wrap},
};
use tracing::debug;

use crate::domain::entities::{Lesson, PartKind};
use crate::domain::services::{LessonConfig, LessonPlayer, LessonState, Transition};
use crate::presentation::events::is_submit_event;
use crate::presentation::widgets::StatusBar;

/// What the lesson screen asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum LessonAction {
    None,
    /// Lesson just completed; the reward should be acknowledged.
    Completed { reward_points: u32 },
    /// Return to the catalog.
    Back,
}

/// Plays one lesson.
pub struct LessonScreen {
    lesson_id: String,
    title: String,
    player: LessonPlayer,
}

impl LessonScreen {
    /// Starts a player for `lesson`.
    #[must_use]
    pub fn new(lesson: &Lesson, config: LessonConfig) -> Self {
        Self {
            lesson_id: lesson.id.clone(),
            title: lesson.title.clone(),
            player: LessonPlayer::new(config),
        }
    }

    /// Underlying player.
    #[must_use]
    pub const fn player(&self) -> &LessonPlayer {
        &self.player
    }

    fn apply(&self, transition: Transition) -> LessonAction {
        debug!(
            lesson = %self.lesson_id,
            ?transition,
            state = ?self.player.state(),
            "Lesson transition"
        );
        match transition {
            Transition::Completed { reward_points } => LessonAction::Completed { reward_points },
            Transition::Moved { .. }
            | Transition::Clamped
            | Transition::Reset
            | Transition::Ignored => LessonAction::None,
        }
    }

    /// Maps keys onto player operations.
    pub fn handle_key(&mut self, key: KeyEvent) -> LessonAction {
        if key.code == KeyCode::Esc {
            return LessonAction::Back;
        }

        if self.player.is_completed() {
            if is_submit_event(&key) {
                let transition = self.player.reset();
                self.apply(transition);
                return LessonAction::Back;
            }
            return LessonAction::None;
        }

        let transition = match key.code {
            KeyCode::Right | KeyCode::Char('l' | ' ') => self.player.advance(),
            KeyCode::Left | KeyCode::Char('h') => self.player.retreat(),
            KeyCode::Char('c') => self.player.complete(),
            KeyCode::Enter if self.player.is_on_last_part() => self.player.complete(),
            KeyCode::Enter => self.player.advance(),
            _ => return LessonAction::None,
        };
        self.apply(transition)
    }

    fn part_view(&self) -> Paragraph<'_> {
        let Some(part) = self.player.current_part() else {
            return Paragraph::new("This lesson has no content yet.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
        };

        let mut lines = Vec::new();
        if let Some(title) = part.title() {
            lines.push(Line::from(Span::styled(
                title,
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )));
        }
        if let Some(minutes) = part.estimated_minutes() {
            lines.push(Line::from(Span::styled(
                format!("~{minutes} min"),
                Style::default().fg(Color::DarkGray),
            )));
        }
        lines.push(Line::default());

        if !part.is_loaded() {
            lines.push(Line::from(Span::styled(
                "Loading content...",
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            )));
        } else {
            match part.kind() {
                PartKind::Text => lines.extend(Text::raw(part.content()).lines),
                PartKind::Video => {
                    lines.push(Line::from(vec![
                        Span::styled("▶ Video  ", Style::default().fg(Color::Magenta)),
                        Span::raw(part.content()),
                    ]));
                    lines.push(Line::from(Span::styled(
                        "Open the link in your media player.",
                        Style::default().fg(Color::DarkGray),
                    )));
                }
            }
        }

        Paragraph::new(lines).wrap(Wrap { trim: false })
    }

    fn render_completed(&self, area: Rect, buf: &mut Buffer, reward_points: u32) {
        let text = vec![
            Line::from(Span::styled(
                "Lesson Complete!",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(format!("You earned {reward_points} XP")),
            Line::default(),
            Line::from(Span::styled(
                "Press Enter to continue",
                Style::default().fg(Color::DarkGray),
            )),
        ];
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(format!(" {} ", self.title)))
            .render(area, buf);
    }

    fn render_inner(&self, area: Rect, buf: &mut Buffer) {
        let [header, gauge, body, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);

        Paragraph::new(Span::styled(
            self.title.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .render(header, buf);

        let ratio = self.player.progress_fraction().clamp(0.0, 1.0);
        let label = if self.player.is_empty() {
            "0/0".to_string()
        } else {
            format!("{}/{}", self.player.cursor() + 1, self.player.len())
        };
        Gauge::default()
            .gauge_style(Style::default().fg(Color::Green).bg(Color::DarkGray))
            .ratio(ratio)
            .label(label)
            .render(gauge, buf);

        match self.player.state() {
            LessonState::Completed { reward_points } => {
                self.render_completed(body, buf, reward_points);
                let status = StatusBar::success("Completed").right("Enter: Continue | Esc: Back");
                (&status).render(footer, buf);
            }
            LessonState::InProgress { .. } => {
                self.part_view()
                    .block(Block::default().borders(Borders::ALL))
                    .render(body, buf);
                let hints = if self.player.is_on_last_part() {
                    "←: Previous | Enter/c: Complete lesson | Esc: Back"
                } else {
                    "←/→: Previous/Next | c: Complete | Esc: Back"
                };
                (&StatusBar::new().right(hints)).render(footer, buf);
            }
        }
    }
}

impl Widget for &LessonScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.render_inner(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{EndOfListPolicy, LessonPart};
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn screen(policy: EndOfListPolicy) -> LessonScreen {
        let lesson = Lesson::new(
            "algebra",
            "Algebra",
            vec![
                LessonPart::text("one"),
                LessonPart::video("https://cdn.example/two.mp4"),
                LessonPart::text("three"),
            ],
        );
        let config = LessonConfig::for_lesson(&lesson, 75, policy);
        LessonScreen::new(&lesson, config)
    }

    #[test]
    fn test_arrows_move_between_parts() {
        let mut screen = screen(EndOfListPolicy::Clamp);
        screen.handle_key(key(KeyCode::Right));
        screen.handle_key(key(KeyCode::Right));
        assert_eq!(screen.player().cursor(), 2);
        screen.handle_key(key(KeyCode::Left));
        assert_eq!(screen.player().cursor(), 1);
    }

    #[test]
    fn test_next_on_last_part_clamps() {
        let mut screen = screen(EndOfListPolicy::Clamp);
        for _ in 0..5 {
            assert_eq!(screen.handle_key(key(KeyCode::Right)), LessonAction::None);
        }
        assert_eq!(screen.player().cursor(), 2);
        assert!(!screen.player().is_completed());
    }

    #[test]
    fn test_auto_complete_reports_reward() {
        let mut screen = screen(EndOfListPolicy::AutoComplete);
        screen.handle_key(key(KeyCode::Right));
        screen.handle_key(key(KeyCode::Right));
        assert_eq!(
            screen.handle_key(key(KeyCode::Right)),
            LessonAction::Completed { reward_points: 75 }
        );
    }

    #[test]
    fn test_enter_on_last_part_completes() {
        let mut screen = screen(EndOfListPolicy::Clamp);
        screen.handle_key(key(KeyCode::Enter));
        screen.handle_key(key(KeyCode::Enter));
        assert_eq!(
            screen.handle_key(key(KeyCode::Enter)),
            LessonAction::Completed { reward_points: 75 }
        );
    }

    #[test]
    fn test_continue_after_completion_resets_and_leaves() {
        let mut screen = screen(EndOfListPolicy::Clamp);
        screen.handle_key(key(KeyCode::Right));
        screen.handle_key(key(KeyCode::Char('c')));
        assert_eq!(screen.handle_key(key(KeyCode::Right)), LessonAction::None);

        assert_eq!(screen.handle_key(key(KeyCode::Enter)), LessonAction::Back);
        assert_eq!(screen.player().state(), LessonState::InProgress { cursor: 0 });
        assert_eq!(screen.player().reward_points(), 0);
    }

    #[test]
    fn test_escape_goes_back() {
        let mut screen = screen(EndOfListPolicy::Clamp);
        assert_eq!(screen.handle_key(key(KeyCode::Esc)), LessonAction::Back);
    }

    #[test]
    fn test_empty_lesson_renders_placeholder() {
        let lesson = Lesson::new("empty", "Empty", Vec::new());
        let screen = LessonScreen::new(&lesson, LessonConfig::new(Vec::new()));

        let area = Rect::new(0, 0, 50, 10);
        let mut buf = Buffer::empty(area);
        (&screen).render(area, &mut buf);
        let text: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("no content yet"));
    }
}
