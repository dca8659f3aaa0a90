//! Single-line text input
//!
//! The cursor counts characters, not bytes, so customer names with accented
//! letters edit correctly.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Editable text with a cursor, label and placeholder
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    content: String,
    cursor: usize,
    placeholder: String,
    label: String,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the placeholder shown while empty
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Current content
    pub fn value(&self) -> &str {
        &self.content
    }

    fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    /// Delete the character under the cursor
    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_count());
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Render as `label: content`, padding the label to `label_width`
    pub fn line(&self, label_width: usize, focused: bool) -> Line<'_> {
        let label_style = if focused {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };
        let mut spans = vec![Span::styled(
            format!("{:<width$} ", format!("{}:", self.label), width = label_width + 1),
            label_style,
        )];

        if self.content.is_empty() && !focused {
            spans.push(Span::styled(
                self.placeholder.as_str(),
                Style::default().fg(Color::DarkGray),
            ));
            return Line::from(spans);
        }

        if !focused {
            spans.push(Span::raw(self.content.as_str()));
            return Line::from(spans);
        }

        let before: String = self.content.chars().take(self.cursor).collect();
        let under = self.content.chars().nth(self.cursor);
        let after: String = self.content.chars().skip(self.cursor + 1).collect();
        let cursor_style = Style::default().fg(Color::Black).bg(Color::Cyan);

        spans.push(Span::raw(before));
        spans.push(Span::styled(
            under.map(String::from).unwrap_or_else(|| " ".to_string()),
            cursor_style,
        ));
        spans.push(Span::raw(after));
        Line::from(spans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_backspace() {
        let mut input = TextInput::new();
        for c in "acme".chars() {
            input.insert(c);
        }
        assert_eq!(input.value(), "acme");
        input.backspace();
        assert_eq!(input.value(), "acm");
        assert_eq!(input.cursor, 3);
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = TextInput::new();
        for c in "Zoë".chars() {
            input.insert(c);
        }
        input.move_left();
        input.insert('e');
        assert_eq!(input.value(), "Zoeë");
        input.move_end();
        input.backspace();
        assert_eq!(input.value(), "Zoe");
        input.move_start();
        input.delete();
        assert_eq!(input.value(), "oe");
    }

    #[test]
    fn test_cursor_bounds() {
        let mut input = TextInput::new();
        input.move_left();
        assert_eq!(input.cursor, 0);
        input.insert('x');
        input.move_right();
        input.move_right();
        assert_eq!(input.cursor, 1);
        input.backspace();
        input.backspace();
        assert_eq!(input.value(), "");
        assert_eq!(input.cursor, 0);
    }

    #[test]
    fn test_placeholder_line() {
        let input = TextInput::new().label("Start date").placeholder("YYYY-MM-DD");
        let text: String = input
            .line(12, false)
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect();
        assert_eq!(text, "Start date:   YYYY-MM-DD");
    }
}
