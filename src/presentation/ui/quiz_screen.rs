//! Multiple-choice quiz screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Widget, Wrap},
};
use tracing::debug;

use crate::domain::entities::Quiz;
use crate::domain::services::{AnswerOutcome, QuizSession};
use crate::presentation::events::is_submit_event;
use crate::presentation::widgets::StatusBar;

/// What the quiz screen asks the app to do.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum QuizAction {
    None,
    /// Answer graded; feedback stays up until the delay elapses.
    Answered(AnswerOutcome),
    Back,
}

/// Runs one quiz.
pub struct QuizScreen {
    quiz_id: String,
    title: String,
    session: QuizSession,
    highlighted: usize,
}

impl QuizScreen {
    /// Starts a session on the first question.
    #[must_use]
    pub fn new(quiz: &Quiz) -> Self {
        Self {
            quiz_id: quiz.id.clone(),
            title: quiz.title.clone(),
            session: QuizSession::new(quiz.questions.clone()),
            highlighted: 0,
        }
    }

    /// Underlying session.
    #[must_use]
    pub const fn session(&self) -> &QuizSession {
        &self.session
    }

    /// Leaves the feedback state and shows the next question.
    pub fn finish_feedback(&mut self) {
        if self.session.finish_feedback() {
            self.highlighted = 0;
            debug!(
                quiz = %self.quiz_id,
                question = self.session.question_number(),
                "Next question"
            );
        }
    }

    fn option_count(&self) -> usize {
        self.session
            .current_question()
            .map_or(0, |question| question.options.len())
    }

    fn submit(&mut self, index: usize) -> QuizAction {
        let Some(option) = self
            .session
            .current_question()
            .and_then(|question| question.options.get(index))
            .cloned()
        else {
            return QuizAction::None;
        };

        self.highlighted = index;
        match self.session.answer(&option) {
            Some(outcome) => {
                debug!(
                    quiz = %self.quiz_id,
                    correct = outcome.is_correct(),
                    score = self.session.score(),
                    "Answer graded"
                );
                QuizAction::Answered(outcome)
            }
            None => QuizAction::None,
        }
    }

    /// Number keys answer directly, arrows move the highlight.
    pub fn handle_key(&mut self, key: KeyEvent) -> QuizAction {
        if key.code == KeyCode::Esc {
            return QuizAction::Back;
        }
        if self.session.pending().is_some() {
            return QuizAction::None;
        }
        if is_submit_event(&key) {
            return self.submit(self.highlighted);
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.highlighted = self.highlighted.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.highlighted + 1 < self.option_count() {
                    self.highlighted += 1;
                }
            }
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                return self.submit(index);
            }
            _ => {}
        }
        QuizAction::None
    }

    fn option_style(&self, index: usize, option: &str) -> Style {
        match self.session.pending() {
            Some(pending) if pending.selected == option => {
                if pending.outcome.is_correct() {
                    Style::default().fg(Color::Black).bg(Color::Green)
                } else {
                    Style::default().fg(Color::White).bg(Color::Red)
                }
            }
            Some(_) => Style::default().fg(Color::DarkGray),
            None if index == self.highlighted => Style::default().add_modifier(Modifier::REVERSED),
            None => Style::default(),
        }
    }

    fn render_inner(&self, area: Rect, buf: &mut Buffer) {
        let [header, gauge, body, feedback, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        let Some(question) = self.session.current_question() else {
            Paragraph::new(self.title.as_str()).render(header, buf);
            Paragraph::new("This quiz has no questions yet.")
                .style(Style::default().fg(Color::DarkGray))
                .block(Block::default().borders(Borders::ALL))
                .render(body, buf);
            (&StatusBar::new().right("Esc: Back")).render(footer, buf);
            return;
        };

        Paragraph::new(Line::from(vec![
            Span::styled(self.title.as_str(), Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(format!(
                "   Question {}/{}   Score: {}",
                self.session.question_number(),
                self.session.len(),
                self.session.score()
            )),
        ]))
        .render(header, buf);

        Gauge::default()
            .gauge_style(Style::default().fg(Color::Magenta).bg(Color::DarkGray))
            .ratio(self.session.progress_fraction().clamp(0.0, 1.0))
            .label("")
            .render(gauge, buf);

        let mut lines = vec![
            Line::from(Span::styled(
                question.prompt.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::default(),
        ];
        lines.extend(question.options.iter().enumerate().map(|(index, option)| {
            Line::from(Span::styled(
                format!(" {}. {option} ", index + 1),
                self.option_style(index, option),
            ))
        }));
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL))
            .render(body, buf);

        match self.session.pending().map(|pending| &pending.outcome) {
            Some(AnswerOutcome::Correct) => {
                (&StatusBar::success("Correct!")).render(feedback, buf);
            }
            Some(AnswerOutcome::Incorrect { expected }) => {
                let status = StatusBar::error(format!("Incorrect. Answer: {expected}"));
                (&status).render(feedback, buf);
            }
            None => {}
        }

        let hints = "1-9/Enter: Answer | ↑/↓: Select | Esc: Back";
        (&StatusBar::new().right(hints)).render(footer, buf);
    }
}

impl Widget for &QuizScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.render_inner(area, buf);
    }
}
