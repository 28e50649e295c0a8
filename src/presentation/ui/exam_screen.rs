//! Past exam browser with name search.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::domain::entities::{Catalog, Exam};
use crate::presentation::widgets::{StatusBar, TextInput};

/// What the exam browser asks the app to do.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExamAction {
    None,
    Back,
}

/// Searchable list of past papers.
pub struct ExamScreen {
    exams: Catalog,
    search: TextInput,
}

impl ExamScreen {
    /// Lists every exam with an empty, focused search.
    #[must_use]
    pub fn new(catalog: &Catalog) -> Self {
        let mut search = TextInput::new("Search").placeholder("Search by exam name");
        search.set_focused(true);
        Self {
            exams: Catalog {
                exams: catalog.exams.clone(),
                ..Catalog::default()
            },
            search,
        }
    }

    /// Current search text.
    #[must_use]
    pub fn query(&self) -> &str {
        self.search.value()
    }

    /// Exams matching the current query, grouped by board.
    #[must_use]
    pub fn results(&self) -> Vec<(&str, Vec<&Exam>)> {
        self.exams.search_exams(self.search.value())
    }

    /// Edits the search or leaves on Esc.
    pub fn handle_key(&mut self, key: KeyEvent) -> ExamAction {
        match key.code {
            KeyCode::Esc => return ExamAction::Back,
            KeyCode::Char(c) => self.search.input_char(c),
            KeyCode::Backspace => self.search.backspace(),
            KeyCode::Delete => self.search.delete(),
            KeyCode::Left => self.search.move_left(),
            KeyCode::Right => self.search.move_right(),
            KeyCode::Home => self.search.move_start(),
            KeyCode::End => self.search.move_end(),
            _ => {}
        }
        ExamAction::None
    }

    fn result_lines(&self) -> Vec<Line<'_>> {
        let mut lines = Vec::new();
        for (board, exams) in self.results() {
            lines.push(Line::from(Span::styled(
                board,
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )));
            let years: Vec<String> = exams.iter().map(|exam| exam.year.to_string()).collect();
            lines.push(Line::from(format!("  {}", years.join("  "))));
            lines.push(Line::default());
        }
        lines
    }
}

impl Widget for &ExamScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [header, search, body, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);

        Paragraph::new(Span::styled(
            "Exams",
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .render(header, buf);
        (&self.search).render(search, buf);

        let block = Block::default().borders(Borders::ALL).title(" Past papers ");
        let lines = self.result_lines();
        if lines.is_empty() {
            let message = if self.exams.exams.is_empty() {
                "No exams available."
            } else {
                "No exam matches this name."
            };
            Paragraph::new(message)
                .style(Style::default().fg(Color::DarkGray))
                .block(block)
                .render(body, buf);
        } else {
            Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .block(block)
                .render(body, buf);
        }

        (&StatusBar::new().right("Type to search | Esc: Back")).render(footer, buf);
    }
}
