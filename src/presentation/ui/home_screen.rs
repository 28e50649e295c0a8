//! Catalog list shown after sign-in.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

use crate::domain::entities::Catalog;
use crate::presentation::events::{is_quit_event, is_submit_event};
use crate::presentation::widgets::StatusBar;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    Lesson,
    Quiz,
}

#[derive(Debug, Clone)]
struct Entry {
    kind: EntryKind,
    id: String,
    title: String,
    detail: String,
}

/// Navigation chosen on the home screen.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomeAction {
    None,
    OpenLesson(String),
    OpenQuiz(String),
    OpenExams,
    OpenProfile,
    Quit,
}

/// Lessons and quizzes with a selection.
pub struct HomeScreen {
    entries: Vec<Entry>,
    selected: usize,
    greeting: Option<String>,
}

impl HomeScreen {
    /// Lists lessons first, then quizzes.
    #[must_use]
    pub fn new(catalog: &Catalog) -> Self {
        let lessons = catalog.lessons.iter().map(|lesson| {
            let parts = lesson.parts.len();
            let detail = match lesson.estimated_minutes() {
                Some(minutes) => format!("{parts} parts, ~{minutes} min"),
                None => format!("{parts} parts"),
            };
            Entry {
                kind: EntryKind::Lesson,
                id: lesson.id.clone(),
                title: lesson.title.clone(),
                detail,
            }
        });
        let quizzes = catalog.quizzes.iter().map(|quiz| Entry {
            kind: EntryKind::Quiz,
            id: quiz.id.clone(),
            title: quiz.title.clone(),
            detail: format!("{} questions", quiz.questions.len()),
        });

        Self {
            entries: lessons.chain(quizzes).collect(),
            selected: 0,
            greeting: None,
        }
    }

    /// Shows the signed-in learner's name in the header.
    pub fn set_greeting(&mut self, name: Option<String>) {
        self.greeting = name.filter(|n| !n.is_empty());
    }

    /// Index of the highlighted entry.
    #[must_use]
    pub const fn selected(&self) -> usize {
        self.selected
    }

    /// Moves the selection or returns the chosen action.
    pub fn handle_key(&mut self, key: KeyEvent) -> HomeAction {
        if is_quit_event(&key) {
            return HomeAction::Quit;
        }
        if is_submit_event(&key) {
            return self.entries.get(self.selected).map_or(HomeAction::None, |entry| {
                match entry.kind {
                    EntryKind::Lesson => HomeAction::OpenLesson(entry.id.clone()),
                    EntryKind::Quiz => HomeAction::OpenQuiz(entry.id.clone()),
                }
            });
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < self.entries.len() {
                    self.selected += 1;
                }
            }
            KeyCode::Char('e') => return HomeAction::OpenExams,
            KeyCode::Char('p') => return HomeAction::OpenProfile,
            _ => {}
        }
        HomeAction::None
    }

    fn render_inner(&self, area: Rect, buf: &mut Buffer) {
        let [header, body, footer] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);

        let greeting = self
            .greeting
            .as_deref()
            .map_or_else(|| "Welcome!".to_string(), |name| format!("Welcome, {name}!"));
        Paragraph::new(Line::from(vec![
            Span::styled(
                "Studyline",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::raw(greeting),
        ]))
        .block(Block::default().borders(Borders::BOTTOM))
        .render(header, buf);

        let block = Block::default().borders(Borders::ALL).title(" Study plan ");
        if self.entries.is_empty() {
            Paragraph::new("No lessons available.")
                .style(Style::default().fg(Color::DarkGray))
                .block(block)
                .render(body, buf);
        } else {
            let items: Vec<ListItem> = self
                .entries
                .iter()
                .map(|entry| {
                    let tag = match entry.kind {
                        EntryKind::Lesson => {
                            Span::styled("[lesson] ", Style::default().fg(Color::Green))
                        }
                        EntryKind::Quiz => {
                            Span::styled("[quiz]   ", Style::default().fg(Color::Magenta))
                        }
                    };
                    ListItem::new(Line::from(vec![
                        tag,
                        Span::raw(entry.title.as_str()),
                        Span::styled(
                            format!("  ({})", entry.detail),
                            Style::default().fg(Color::DarkGray),
                        ),
                    ]))
                })
                .collect();

            let list = List::new(items)
                .block(block)
                .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
                .highlight_symbol("> ");
            let mut state = ListState::default().with_selected(Some(self.selected));
            StatefulWidget::render(list, body, buf, &mut state);
        }

        (&StatusBar::new().right("↑/↓: Select | Enter: Open | e: Exams | p: Profile | q: Quit"))
            .render(footer, buf);
    }
}

impl Widget for &HomeScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.render_inner(area, buf);
    }
}
