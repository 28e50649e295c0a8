//! Login screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::application::dto::LoginRequest;
use crate::presentation::events::{is_ctrl_char, is_submit_event};
use crate::presentation::widgets::{StatusBar, TextInput};

/// Form state.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginState {
    Input,
    Submitting,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Email,
    Password,
}

/// Result of a key press on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum LoginAction {
    None,
    Submit,
}

/// Email and password form.
pub struct LoginScreen {
    email_input: TextInput,
    password_input: TextInput,
    focus: Field,
    state: LoginState,
    error_message: Option<String>,
    persist_token: bool,
}

impl LoginScreen {
    /// Empty form with email focused and "remember me" on.
    #[must_use]
    pub fn new() -> Self {
        let mut email_input = TextInput::new("Email").placeholder("you@example.com");
        email_input.set_focused(true);
        let password_input = TextInput::new("Password").password();

        Self {
            email_input,
            password_input,
            focus: Field::Email,
            state: LoginState::Input,
            error_message: None,
            persist_token: true,
        }
    }

    /// Current form state.
    #[must_use]
    pub const fn state(&self) -> LoginState {
        self.state
    }

    /// Whether the token will be stored after login.
    #[must_use]
    pub const fn should_persist(&self) -> bool {
        self.persist_token
    }

    /// Email as typed.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email_input.value()
    }

    /// Builds the submission. The password stays in the field until the
    /// attempt fails with something other than a form error.
    #[must_use]
    pub fn request(&self) -> LoginRequest {
        let request = LoginRequest::new(self.email_input.value(), self.password_input.value());
        if self.persist_token {
            request
        } else {
            request.without_persistence()
        }
    }

    /// Marks the attempt as in flight.
    pub fn set_submitting(&mut self) {
        self.state = LoginState::Submitting;
        self.error_message = None;
    }

    /// Shows `message` under the form.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.state = LoginState::Error;
        self.error_message = Some(message.into());
    }

    /// Wipes the password after a rejected attempt.
    pub fn clear_password(&mut self) {
        self.password_input.clear();
    }

    /// Returns `true` when a password is typed.
    #[must_use]
    pub fn has_password(&self) -> bool {
        !self.password_input.value().is_empty()
    }

    /// Back to input, dropping any error.
    pub fn reset(&mut self) {
        self.state = LoginState::Input;
        self.error_message = None;
    }

    fn focused_input(&mut self) -> &mut TextInput {
        match self.focus {
            Field::Email => &mut self.email_input,
            Field::Password => &mut self.password_input,
        }
    }

    fn switch_focus(&mut self) {
        self.focus = match self.focus {
            Field::Email => Field::Password,
            Field::Password => Field::Email,
        };
        self.email_input.set_focused(self.focus == Field::Email);
        self.password_input.set_focused(self.focus == Field::Password);
    }

    /// Handles key event, returns action.
    pub fn handle_key(&mut self, key: KeyEvent) -> LoginAction {
        if self.state == LoginState::Submitting {
            return LoginAction::None;
        }

        if self.state == LoginState::Error {
            self.reset();
        }

        if is_submit_event(&key) {
            return LoginAction::Submit;
        }
        if is_ctrl_char(&key, 'r') {
            self.persist_token = !self.persist_token;
            return LoginAction::None;
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

        LoginAction::None
    }

    fn render_inner(&self, area: Rect, buf: &mut Buffer) {
        let [_, center, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(15),
            Constraint::Fill(1),
        ])
        .areas(area);
        let [_, content_area, _] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Min(50),
            Constraint::Fill(1),
        ])
        .areas(center);

        Clear.render(content_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Studyline Login ");

        let inner = block.inner(content_area);
        block.render(content_area, buf);

        let [title, _, email, password, _, persist, _, status] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new("Sign in to continue studying")
            .style(Style::default().fg(Color::White))
            .render(title, buf);

        (&self.email_input).render(email, buf);
        (&self.password_input).render(password, buf);

        let checkbox = if self.persist_token { "[x]" } else { "[ ]" };
        Paragraph::new(Line::from(vec![
            Span::styled(checkbox, Style::default().fg(Color::Yellow)),
            Span::raw(" Remember me (Ctrl+R to toggle)"),
        ]))
        .render(persist, buf);

        match self.state {
            LoginState::Input => {
                (&StatusBar::new().right("Tab: Switch | Enter: Login | Ctrl+C: Quit"))
                    .render(status, buf);
            }
            LoginState::Submitting => {
                Paragraph::new(Span::styled(
                    "Signing in...",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::ITALIC),
                ))
                .render(status, buf);
            }
            LoginState::Error => {
                let msg = self.error_message.as_deref().unwrap_or("Unknown error");
                (&StatusBar::error(format!("Error: {msg}"))).render(status, buf);
            }
        }
    }
}

impl Default for LoginScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for &LoginScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.render_inner(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(screen: &mut LoginScreen, text: &str) {
        for c in text.chars() {
            screen.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_initial_state() {
        let screen = LoginScreen::new();
        assert_eq!(screen.state(), LoginState::Input);
        assert!(screen.email().is_empty());
        assert!(screen.should_persist());
    }

    #[test]
    fn test_tab_switches_fields() {
        let mut screen = LoginScreen::new();
        type_text(&mut screen, "ana@example.org");
        screen.handle_key(key(KeyCode::Tab));
        type_text(&mut screen, "senha");

        assert_eq!(screen.email(), "ana@example.org");
        let request = screen.request();
        assert_eq!(request.email, "ana@example.org");
        assert_eq!(request.password.as_str(), "senha");
        assert!(request.persist_token);
    }

    #[test]
    fn test_request_keeps_password_until_cleared() {
        let mut screen = LoginScreen::new();
        screen.handle_key(key(KeyCode::Tab));
        type_text(&mut screen, "senha");

        assert_eq!(screen.request().password.as_str(), "senha");
        assert!(screen.has_password());

        screen.clear_password();
        assert!(!screen.has_password());
        assert!(screen.request().password.is_empty());
    }

    #[test]
    fn test_toggle_persist() {
        let mut screen = LoginScreen::new();
        let toggle = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL);

        screen.handle_key(toggle);
        assert!(!screen.should_persist());
        assert!(!screen.request().persist_token);

        screen.handle_key(toggle);
        assert!(screen.should_persist());
    }

    #[test]
    fn test_enter_submits_even_when_empty() {
        let mut screen = LoginScreen::new();
        assert_eq!(screen.handle_key(key(KeyCode::Enter)), LoginAction::Submit);
    }

    #[test]
    fn test_keys_ignored_while_submitting() {
        let mut screen = LoginScreen::new();
        screen.set_submitting();
        assert_eq!(screen.handle_key(key(KeyCode::Enter)), LoginAction::None);
        screen.handle_key(key(KeyCode::Char('x')));
        assert!(screen.email().is_empty());
    }

    #[test]
    fn test_error_clears_on_next_key() {
        let mut screen = LoginScreen::new();
        screen.set_error("Incorrect password.");
        screen.handle_key(key(KeyCode::Char('a')));
        assert_eq!(screen.state(), LoginState::Input);
        assert_eq!(screen.email(), "a");
    }
}
