//! Authentication screen with login and register tabs.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::application::dto::{LoginRequest, RegisterRequest};
use crate::presentation::widgets::{InputFilter, TextInput};

/// Active sub-tab of the unauthenticated view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthTab {
    /// Credential check for an existing account.
    Login,
    /// New account creation.
    Register,
}

/// What the app should do after a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthAction {
    /// Nothing; the screen consumed the key.
    None,
    /// Submit the active tab's form.
    Submit,
    /// Quit the application.
    Quit,
}

/// Authentication screen UI.
pub struct AuthScreen {
    tab: AuthTab,
    login_username: TextInput,
    login_pin: TextInput,
    reg_username: TextInput,
    reg_pin: TextInput,
    reg_balance: TextInput,
    focus: usize,
    error_message: Option<String>,
}

fn pin_input() -> TextInput {
    TextInput::new("PIN")
        .masked()
        .filter(InputFilter::Digits)
        .max_len(4)
}

impl AuthScreen {
    /// Creates the screen with the login tab active.
    #[must_use]
    pub fn new() -> Self {
        let mut login_username = TextInput::new("Username");
        login_username.set_focused(true);

        Self {
            tab: AuthTab::Login,
            login_username,
            login_pin: pin_input(),
            reg_username: TextInput::new("Username"),
            reg_pin: pin_input(),
            reg_balance: TextInput::new("Starting balance (optional)")
                .filter(InputFilter::Decimal),
            focus: 0,
            error_message: None,
        }
    }

    /// Returns the active tab.
    #[must_use]
    pub const fn tab(&self) -> AuthTab {
        self.tab
    }

    /// Returns the login form contents.
    #[must_use]
    pub fn login_request(&self) -> LoginRequest {
        LoginRequest::new(
            self.login_username.value().to_string(),
            self.login_pin.value().to_string(),
        )
    }

    /// Returns the register form contents.
    #[must_use]
    pub fn register_request(&self) -> RegisterRequest {
        RegisterRequest::new(
            self.reg_username.value().to_string(),
            self.reg_pin.value().to_string(),
            self.reg_balance.value().to_string(),
        )
    }

    /// Returns the error slot contents.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Fills the error slot.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(message.into());
    }

    /// Clears the error slot; called at the start of every attempt.
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Switches between the login and register tabs.
    pub fn switch_tab(&mut self) {
        self.tab = match self.tab {
            AuthTab::Login => AuthTab::Register,
            AuthTab::Register => AuthTab::Login,
        };
        self.focus = 0;
        self.error_message = None;
        self.sync_focus();
    }

    fn field_count(&self) -> usize {
        match self.tab {
            AuthTab::Login => 2,
            AuthTab::Register => 3,
        }
    }

    fn active_fields_mut(&mut self) -> Vec<&mut TextInput> {
        match self.tab {
            AuthTab::Login => vec![&mut self.login_username, &mut self.login_pin],
            AuthTab::Register => vec![
                &mut self.reg_username,
                &mut self.reg_pin,
                &mut self.reg_balance,
            ],
        }
    }

    fn active_fields(&self) -> Vec<&TextInput> {
        match self.tab {
            AuthTab::Login => vec![&self.login_username, &self.login_pin],
            AuthTab::Register => vec![&self.reg_username, &self.reg_pin, &self.reg_balance],
        }
    }

    fn sync_focus(&mut self) {
        let focus = self.focus;
        for (i, field) in self.active_fields_mut().into_iter().enumerate() {
            field.set_focused(i == focus);
        }
    }

    fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.field_count();
        self.sync_focus();
    }

    fn focus_prev(&mut self) {
        self.focus = (self.focus + self.field_count() - 1) % self.field_count();
        self.sync_focus();
    }

    fn active_field_mut(&mut self) -> Option<&mut TextInput> {
        let focus = self.focus;
        self.active_fields_mut().into_iter().nth(focus)
    }

    /// Handles a key event, returning the resulting action.
    pub fn handle_key(&mut self, key: KeyEvent) -> AuthAction {
        match key.code {
            KeyCode::Esc => return AuthAction::Quit,
            KeyCode::Enter => return AuthAction::Submit,
            KeyCode::Tab => self.focus_next(),
            KeyCode::BackTab => self.focus_prev(),
            KeyCode::Char('t') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.switch_tab();
            }
            KeyCode::Char(c) => {
                if let Some(field) = self.active_field_mut() {
                    field.input_char(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = self.active_field_mut() {
                    field.backspace();
                }
            }
            KeyCode::Delete => {
                if let Some(field) = self.active_field_mut() {
                    field.delete();
                }
            }
            KeyCode::Left => {
                if let Some(field) = self.active_field_mut() {
                    field.move_left();
                }
            }
            KeyCode::Right => {
                if let Some(field) = self.active_field_mut() {
                    field.move_right();
                }
            }
            KeyCode::Home => {
                if let Some(field) = self.active_field_mut() {
                    field.move_start();
                }
            }
            KeyCode::End => {
                if let Some(field) = self.active_field_mut() {
                    field.move_end();
                }
            }
            _ => {}
        }

        AuthAction::None
    }

    fn tab_line(&self) -> Line<'static> {
        let active = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let inactive = Style::default().fg(Color::DarkGray);

        let (login_style, register_style) = match self.tab {
            AuthTab::Login => (active, inactive),
            AuthTab::Register => (inactive, active),
        };

        Line::from(vec![
            Span::styled(" Login ", login_style),
            Span::raw("  "),
            Span::styled(" Register ", register_style),
        ])
    }

    fn hint_line(&self) -> Line<'static> {
        let dim = Style::default().fg(Color::DarkGray);
        let submit = match self.tab {
            AuthTab::Login => "Enter: Log in",
            AuthTab::Register => "Enter: Create account",
        };
        Line::from(vec![
            Span::styled(submit, dim),
            Span::raw(" | "),
            Span::styled("Tab: Next field", dim),
            Span::raw(" | "),
            Span::styled("Ctrl+T: Switch tab", dim),
            Span::raw(" | "),
            Span::styled("Esc: Quit", dim),
        ])
    }

    fn render_inner(&self, area: Rect, buf: &mut Buffer) {
        #[allow(clippy::cast_possible_truncation)]
        let card_height = (self.field_count() as u16) * 3 + 6;

        let vertical = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(card_height),
            Constraint::Fill(1),
        ]);
        let [_, center, _] = vertical.areas(area);

        let horizontal = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Min(54),
            Constraint::Fill(1),
        ]);
        let [_, content_area, _] = horizontal.areas(center);

        Clear.render(content_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Oxiteller ATM ");

        let inner = block.inner(content_area);
        block.render(content_area, buf);

        let mut constraints = vec![Constraint::Length(1), Constraint::Length(1)];
        for _ in 0..self.field_count() {
            constraints.push(Constraint::Length(3));
        }
        constraints.push(Constraint::Length(1));
        constraints.push(Constraint::Length(1));
        let areas = Layout::vertical(constraints).split(inner);

        Paragraph::new(self.tab_line()).render(areas[0], buf);

        for (i, field) in self.active_fields().into_iter().enumerate() {
            field.render(areas[2 + i], buf);
        }

        Paragraph::new(self.hint_line()).render(areas[2 + self.field_count()], buf);

        if let Some(message) = &self.error_message {
            Paragraph::new(Line::from(Span::styled(
                format!("Error: {message}"),
                Style::default().fg(Color::Red),
            )))
            .render(areas[3 + self.field_count()], buf);
        }
    }
}

impl Default for AuthScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for &AuthScreen {
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

    fn type_str(screen: &mut AuthScreen, s: &str) {
        for c in s.chars() {
            screen.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_initial_state_is_login_tab() {
        let screen = AuthScreen::new();
        assert_eq!(screen.tab(), AuthTab::Login);
        assert!(screen.login_request().username.is_empty());
    }

    #[test]
    fn test_typing_fills_the_focused_field() {
        let mut screen = AuthScreen::new();
        type_str(&mut screen, "demo");
        screen.handle_key(key(KeyCode::Tab));
        type_str(&mut screen, "1234");

        let request = screen.login_request();
        assert_eq!(request.username, "demo");
        assert_eq!(request.pin, "1234");
    }

    #[test]
    fn test_pin_field_drops_non_digits_and_caps_at_four() {
        let mut screen = AuthScreen::new();
        screen.handle_key(key(KeyCode::Tab));
        type_str(&mut screen, "12ab345");

        assert_eq!(screen.login_request().pin, "1234");
    }

    #[test]
    fn test_tab_moves_focus_to_the_pin_field() {
        let mut screen = AuthScreen::new();
        assert!(screen.login_username.is_focused());

        screen.handle_key(key(KeyCode::Tab));
        assert!(!screen.login_username.is_focused());
        assert!(screen.login_pin.is_focused());
    }

    #[test]
    fn test_tab_wraps_around_the_fields() {
        let mut screen = AuthScreen::new();
        screen.handle_key(key(KeyCode::Tab));
        screen.handle_key(key(KeyCode::Tab));
        type_str(&mut screen, "back-at-username");

        assert!(!screen.login_request().username.is_empty());
    }

    #[test]
    fn test_ctrl_t_switches_tab_and_clears_error() {
        let mut screen = AuthScreen::new();
        screen.set_error("wrong username or PIN");

        screen.handle_key(KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL));

        assert_eq!(screen.tab(), AuthTab::Register);
        assert!(screen.error_message.is_none());
    }

    #[test]
    fn test_register_form_collects_three_fields() {
        let mut screen = AuthScreen::new();
        screen.switch_tab();

        type_str(&mut screen, "alice");
        screen.handle_key(key(KeyCode::Tab));
        type_str(&mut screen, "4321");
        screen.handle_key(key(KeyCode::Tab));
        type_str(&mut screen, "100");

        let request = screen.register_request();
        assert_eq!(request.username, "alice");
        assert_eq!(request.pin, "4321");
        assert_eq!(request.starting_balance, "100");
    }

    #[test]
    fn test_enter_submits_and_esc_quits() {
        let mut screen = AuthScreen::new();
        assert_eq!(screen.handle_key(key(KeyCode::Enter)), AuthAction::Submit);
        assert_eq!(screen.handle_key(key(KeyCode::Esc)), AuthAction::Quit);
    }
}
