//! Authenticated ATM screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::application::services::format_amount;
use crate::presentation::widgets::{InputFilter, TextInput};

/// What the app should do after a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AtmAction {
    /// Nothing; the screen consumed the key.
    None,
    /// Refresh the balance display.
    ShowBalance,
    /// Deposit the entered amount.
    Deposit,
    /// Withdraw the entered amount.
    Withdraw,
    /// Log out and return to the auth screen.
    Logout,
    /// Quit the application.
    Quit,
}

/// ATM screen UI for the authenticated view.
pub struct AtmScreen {
    username: String,
    balance: f64,
    amount_input: TextInput,
    error_message: Option<String>,
    success_message: Option<String>,
}

impl AtmScreen {
    /// Creates the screen for an authenticated user.
    #[must_use]
    pub fn new(username: String, balance: f64) -> Self {
        let mut amount_input = TextInput::new("Amount").filter(InputFilter::Decimal);
        amount_input.set_focused(true);

        Self {
            username,
            balance,
            amount_input,
            error_message: None,
            success_message: None,
        }
    }

    /// Returns the displayed username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the raw amount field contents.
    #[must_use]
    pub fn amount(&self) -> &str {
        self.amount_input.value()
    }

    /// Returns the displayed balance.
    #[must_use]
    pub const fn balance(&self) -> f64 {
        self.balance
    }

    /// Updates the balance display.
    pub fn set_balance(&mut self, balance: f64) {
        self.balance = balance;
    }

    /// Clears the amount field after a completed transaction.
    pub fn clear_amount(&mut self) {
        self.amount_input.clear();
    }

    /// Clears both message slots; called at the start of every attempt.
    pub fn clear_messages(&mut self) {
        self.error_message = None;
        self.success_message = None;
    }

    /// Returns the error slot contents.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Returns the success slot contents.
    #[must_use]
    pub fn success_message(&self) -> Option<&str> {
        self.success_message.as_deref()
    }

    /// Fills the error slot.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(message.into());
    }

    /// Fills the success slot.
    pub fn set_success(&mut self, message: impl Into<String>) {
        self.success_message = Some(message.into());
    }

    /// Handles a key event, returning the resulting action.
    ///
    /// Letters are free for actions because the amount field only accepts
    /// digits and a decimal point.
    pub fn handle_key(&mut self, key: KeyEvent) -> AtmAction {
        match key.code {
            KeyCode::Esc => return AtmAction::Quit,
            KeyCode::Char('s') => return AtmAction::ShowBalance,
            KeyCode::Char('d') => return AtmAction::Deposit,
            KeyCode::Char('w') => return AtmAction::Withdraw,
            KeyCode::Char('l') => return AtmAction::Logout,
            KeyCode::Char(c) => self.amount_input.input_char(c),
            KeyCode::Backspace => self.amount_input.backspace(),
            KeyCode::Delete => self.amount_input.delete(),
            KeyCode::Left => self.amount_input.move_left(),
            KeyCode::Right => self.amount_input.move_right(),
            KeyCode::Home => self.amount_input.move_start(),
            KeyCode::End => self.amount_input.move_end(),
            _ => {}
        }

        AtmAction::None
    }

    fn render_inner(&self, area: Rect, buf: &mut Buffer) {
        let vertical = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(12),
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

        let areas = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

        Paragraph::new(Line::from(vec![
            Span::raw("Logged in as "),
            Span::styled(
                self.username.clone(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ]))
        .render(areas[0], buf);

        Paragraph::new(Line::from(vec![
            Span::raw("Balance: "),
            Span::styled(
                format_amount(self.balance),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" SEK"),
        ]))
        .render(areas[1], buf);

        (&self.amount_input).render(areas[3], buf);

        let dim = Style::default().fg(Color::DarkGray);
        Paragraph::new(Line::from(vec![
            Span::styled("s: Show balance", dim),
            Span::raw(" | "),
            Span::styled("d: Deposit", dim),
            Span::raw(" | "),
            Span::styled("w: Withdraw", dim),
            Span::raw(" | "),
            Span::styled("l: Log out", dim),
            Span::raw(" | "),
            Span::styled("Esc: Quit", dim),
        ]))
        .render(areas[4], buf);

        if let Some(message) = &self.success_message {
            Paragraph::new(Line::from(Span::styled(
                message.clone(),
                Style::default().fg(Color::Green),
            )))
            .render(areas[5], buf);
        }

        if let Some(message) = &self.error_message {
            Paragraph::new(Line::from(Span::styled(
                format!("Error: {message}"),
                Style::default().fg(Color::Red),
            )))
            .render(areas[6], buf);
        }
    }
}

impl Widget for &AtmScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.render_inner(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn screen() -> AtmScreen {
        AtmScreen::new("demo".to_string(), 1500.0)
    }

    #[test]
    fn test_digits_go_to_the_amount_field() {
        let mut screen = screen();
        screen.handle_key(key(KeyCode::Char('5')));
        screen.handle_key(key(KeyCode::Char('0')));

        assert_eq!(screen.amount(), "50");
    }

    #[test]
    fn test_action_letters_do_not_touch_the_amount_field() {
        let mut screen = screen();

        assert_eq!(screen.handle_key(key(KeyCode::Char('s'))), AtmAction::ShowBalance);
        assert_eq!(screen.handle_key(key(KeyCode::Char('d'))), AtmAction::Deposit);
        assert_eq!(screen.handle_key(key(KeyCode::Char('w'))), AtmAction::Withdraw);
        assert_eq!(screen.handle_key(key(KeyCode::Char('l'))), AtmAction::Logout);
        assert_eq!(screen.handle_key(key(KeyCode::Esc)), AtmAction::Quit);
        assert_eq!(screen.amount(), "");
    }

    #[test]
    fn test_stray_letters_are_dropped_by_the_filter() {
        let mut screen = screen();
        screen.handle_key(key(KeyCode::Char('x')));

        assert_eq!(screen.amount(), "");
    }

    #[test]
    fn test_message_slots() {
        let mut screen = screen();
        screen.set_success("Deposited 50.00 SEK.");
        screen.set_error("insufficient balance");

        screen.clear_messages();

        assert!(screen.success_message.is_none());
        assert!(screen.error_message.is_none());
    }
}
