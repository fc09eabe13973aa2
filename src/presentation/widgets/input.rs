//! Text input widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// What a field accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFilter {
    /// Any printable character.
    #[default]
    FreeText,
    /// ASCII digits only (PIN entry).
    Digits,
    /// ASCII digits with at most one decimal point (amount entry).
    Decimal,
}

impl InputFilter {
    fn accepts(self, c: char, current: &str) -> bool {
        match self {
            Self::FreeText => !c.is_control(),
            Self::Digits => c.is_ascii_digit(),
            Self::Decimal => {
                c.is_ascii_digit() || (c == '.' && !current.contains('.'))
            }
        }
    }
}

/// Single-line labeled input field.
#[derive(Debug, Clone)]
pub struct TextInput {
    value: String,
    /// Byte offset into `value`, always on a char boundary.
    cursor: usize,
    focused: bool,
    masked: bool,
    filter: InputFilter,
    max_len: Option<usize>,
    label: String,
}

impl TextInput {
    /// Creates a new input with a label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            value: String::new(),
            cursor: 0,
            focused: false,
            masked: false,
            filter: InputFilter::default(),
            max_len: None,
            label: label.into(),
        }
    }

    /// Enables masked display (PIN entry).
    #[must_use]
    pub const fn masked(mut self) -> Self {
        self.masked = true;
        self
    }

    /// Restricts accepted characters.
    #[must_use]
    pub const fn filter(mut self, filter: InputFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Caps the value length.
    #[must_use]
    pub const fn max_len(mut self, max: usize) -> Self {
        self.max_len = Some(max);
        self
    }

    /// Sets focus state.
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Returns focus state.
    #[must_use]
    pub const fn is_focused(&self) -> bool {
        self.focused
    }

    /// Returns the current value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Clears the value.
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Inserts a character at the cursor if the filter accepts it.
    pub fn input_char(&mut self, c: char) {
        if let Some(max) = self.max_len {
            if self.value.chars().count() >= max {
                return;
            }
        }
        if !self.filter.accepts(c, &self.value) {
            return;
        }
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Deletes the character before the cursor.
    pub fn backspace(&mut self) {
        if let Some((idx, _)) = self.value[..self.cursor].char_indices().next_back() {
            self.value.remove(idx);
            self.cursor = idx;
        }
    }

    /// Deletes the character at the cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.value.len() {
            self.value.remove(self.cursor);
        }
    }

    /// Moves the cursor left.
    pub fn move_left(&mut self) {
        if let Some((idx, _)) = self.value[..self.cursor].char_indices().next_back() {
            self.cursor = idx;
        }
    }

    /// Moves the cursor right.
    pub fn move_right(&mut self) {
        if let Some(c) = self.value[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    /// Moves the cursor to the start.
    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    /// Moves the cursor to the end.
    pub fn move_end(&mut self) {
        self.cursor = self.value.len();
    }

    fn display_text(&self) -> String {
        if self.masked {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }
}

impl Widget for &TextInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(self.label.as_str());

        let inner = block.inner(area);

        let paragraph =
            Paragraph::new(self.display_text()).style(Style::default().fg(Color::White));

        block.render(area, buf);
        paragraph.render(inner, buf);

        if self.focused && inner.width > 0 {
            let chars_before_cursor = self.value[..self.cursor].chars().count();
            #[allow(clippy::cast_possible_truncation)]
            let cursor_x = inner.x + chars_before_cursor as u16;
            if cursor_x < inner.x + inner.width {
                buf[(cursor_x, inner.y)]
                    .set_style(Style::default().bg(Color::White).fg(Color::Black));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(input: &mut TextInput, s: &str) {
        for c in s.chars() {
            input.input_char(c);
        }
    }

    #[test]
    fn test_free_text_input() {
        let mut input = TextInput::new("Username");
        type_str(&mut input, "alice");
        assert_eq!(input.value(), "alice");

        input.backspace();
        assert_eq!(input.value(), "alic");
    }

    #[test]
    fn test_multibyte_char_then_ascii() {
        let mut input = TextInput::new("Username");
        type_str(&mut input, "josé1");

        assert_eq!(input.value(), "josé1");
    }

    #[test]
    fn test_backspace_removes_whole_multibyte_char() {
        let mut input = TextInput::new("Username");
        type_str(&mut input, "josé");

        input.backspace();
        assert_eq!(input.value(), "jos");
        input.input_char('h');
        assert_eq!(input.value(), "josh");
    }

    #[test]
    fn test_cursor_moves_over_multibyte_chars() {
        let mut input = TextInput::new("Username");
        type_str(&mut input, "éé");

        input.move_left();
        input.input_char('x');
        assert_eq!(input.value(), "éxé");

        input.move_right();
        input.move_left();
        input.delete();
        assert_eq!(input.value(), "éx");
    }

    #[test]
    fn test_digit_filter_drops_non_digits() {
        let mut input = TextInput::new("PIN").filter(InputFilter::Digits).max_len(4);
        type_str(&mut input, "12a34");

        assert_eq!(input.value(), "1234");
    }

    #[test]
    fn test_max_len_caps_the_value() {
        let mut input = TextInput::new("PIN").filter(InputFilter::Digits).max_len(4);
        type_str(&mut input, "123456");

        assert_eq!(input.value(), "1234");
    }

    #[test]
    fn test_decimal_filter_allows_one_point() {
        let mut input = TextInput::new("Amount").filter(InputFilter::Decimal);
        type_str(&mut input, "12.5.0x");

        assert_eq!(input.value(), "12.50");
    }

    #[test]
    fn test_masked_display_hides_digits() {
        let mut input = TextInput::new("PIN").masked();
        type_str(&mut input, "1234");

        assert_eq!(input.display_text(), "••••");
    }

    #[test]
    fn test_clear_resets_cursor() {
        let mut input = TextInput::new("Amount");
        type_str(&mut input, "50");
        input.clear();

        assert_eq!(input.value(), "");
        input.input_char('7');
        assert_eq!(input.value(), "7");
    }
}
