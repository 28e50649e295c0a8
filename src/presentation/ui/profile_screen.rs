//! Profile editing screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::application::dto::ProfileForm;
use crate::domain::entities::UserProfile;
use crate::domain::ports::ProfileUpdate;
use crate::presentation::events::{is_ctrl_char, is_submit_event};
use crate::presentation::widgets::{StatusBar, TextInput};

/// Whether the form is editable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum ProfileState {
    Loading,
    Ready,
    Saving,
}

/// What the profile screen asks the app to do.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum ProfileAction {
    None,
    Save(ProfileForm),
    RequestLogout,
    Back,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Name,
    Email,
}

/// Profile form with save and logout.
pub struct ProfileScreen {
    name_input: TextInput,
    email_input: TextInput,
    focus: Field,
    form: ProfileForm,
    state: ProfileState,
}

impl ProfileScreen {
    /// Empty form waiting for the profile.
    #[must_use]
    pub fn new() -> Self {
        let mut name_input = TextInput::new("Name");
        name_input.set_focused(true);

        Self {
            name_input,
            email_input: TextInput::new("Email"),
            focus: Field::Name,
            form: ProfileForm::default(),
            state: ProfileState::Loading,
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> ProfileState {
        self.state
    }

    /// Populates the fields from a fetched profile.
    pub fn set_profile(&mut self, profile: &UserProfile) {
        self.form = ProfileForm::from_profile(profile);
        self.name_input.set_value(profile.name());
        self.email_input.set_value(profile.email());
        self.state = ProfileState::Ready;
    }

    /// Empties the form when no profile could be shown.
    pub fn clear(&mut self) {
        self.form = ProfileForm::default();
        self.name_input.clear();
        self.email_input.clear();
        self.state = ProfileState::Ready;
    }

    /// Accepts a save and makes the sent values the new baseline.
    pub fn mark_saved(&mut self, update: &ProfileUpdate) {
        self.form.apply_saved(update);
        self.name_input.set_value(self.form.name.clone());
        self.email_input.set_value(self.form.email.clone());
        self.state = ProfileState::Ready;
    }

    /// Unlocks the form after a failed save.
    pub fn set_ready(&mut self) {
        self.state = ProfileState::Ready;
    }

    fn current_form(&self) -> ProfileForm {
        ProfileForm {
            name: self.name_input.value().to_string(),
            email: self.email_input.value().to_string(),
            ..self.form.clone()
        }
    }

    fn focused_input(&mut self) -> &mut TextInput {
        match self.focus {
            Field::Name => &mut self.name_input,
            Field::Email => &mut self.email_input,
        }
    }

    fn switch_focus(&mut self) {
        self.focus = match self.focus {
            Field::Name => Field::Email,
            Field::Email => Field::Name,
        };
        self.name_input.set_focused(self.focus == Field::Name);
        self.email_input.set_focused(self.focus == Field::Email);
    }

    /// Tab switches fields, Enter saves, Ctrl+L asks to log out.
    pub fn handle_key(&mut self, key: KeyEvent) -> ProfileAction {
        if key.code == KeyCode::Esc {
            return ProfileAction::Back;
        }
        if is_ctrl_char(&key, 'l') {
            return ProfileAction::RequestLogout;
        }
        if self.state != ProfileState::Ready {
            return ProfileAction::None;
        }
        if is_submit_event(&key) {
            self.state = ProfileState::Saving;
            return ProfileAction::Save(self.current_form());
        }

        match key.code {
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => self.switch_focus(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.focused_input().input_char(c);
            }
            KeyCode::Backspace => self.focused_input().backspace(),
            KeyCode::Delete => self.focused_input().delete(),
            KeyCode::Left => self.focused_input().move_left(),
            KeyCode::Right => self.focused_input().move_right(),
            KeyCode::Home => self.focused_input().move_start(),
            KeyCode::End => self.focused_input().move_end(),
            _ => {}
        }
        ProfileAction::None
    }

    fn render_inner(&self, area: Rect, buf: &mut Buffer) {
        let [header, body, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);

        Paragraph::new(Span::styled(
            "Edit profile",
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .render(header, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(body);
        block.render(body, buf);

        let [name, email, _, status] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        (&self.name_input).render(name, buf);
        (&self.email_input).render(email, buf);

        let status_bar = match self.state {
            ProfileState::Loading => StatusBar::info("Loading profile..."),
            ProfileState::Saving => StatusBar::info("Saving..."),
            ProfileState::Ready if self.current_form().is_dirty() => {
                StatusBar::warning("Unsaved changes")
            }
            ProfileState::Ready => StatusBar::new(),
        };
        (&status_bar).render(status, buf);

        (&StatusBar::new().right("Tab: Switch | Enter: Save | Ctrl+L: Log out | Esc: Back"))
            .render(footer, buf);
    }
}

impl Default for ProfileScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for &ProfileScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.render_inner(area, buf);
    }
}
