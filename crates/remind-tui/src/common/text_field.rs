use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

/// Single-line editable text with a cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    value: String,
    /// Cursor position in chars.
    cursor: usize,
    masked: bool,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    /// A field whose contents render as `•`.
    pub fn masked() -> Self {
        Self {
            masked: true,
            ..Self::default()
        }
    }

    pub fn with_value(value: &str) -> Self {
        Self {
            value: value.to_string(),
            cursor: value.chars().count(),
            masked: false,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn trimmed(&self) -> &str {
        self.value.trim()
    }

    pub fn is_blank(&self) -> bool {
        self.trimmed().is_empty()
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    pub fn insert_str(&mut self, text: &str) {
        for ch in text.chars().filter(|c| !c.is_control()) {
            self.insert_char(ch);
        }
    }

    fn insert_char(&mut self, ch: char) {
        let idx = self.byte_index();
        self.value.insert(idx, ch);
        self.cursor += 1;
    }

    fn byte_index(&self) -> usize {
        self.value
            .char_indices()
            .nth(self.cursor)
            .map_or(self.value.len(), |(idx, _)| idx)
    }

    /// Applies an editing key. Returns false for keys the field ignores.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('u') if ctrl => {
                self.clear();
                true
            }
            KeyCode::Char(c) if !ctrl => {
                self.insert_char(c);
                true
            }
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    let idx = self.byte_index();
                    self.value.remove(idx);
                }
                true
            }
            KeyCode::Delete => {
                if self.cursor < self.value.chars().count() {
                    let idx = self.byte_index();
                    self.value.remove(idx);
                }
                true
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                true
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.value.chars().count());
                true
            }
            KeyCode::Home => {
                self.cursor = 0;
                true
            }
            KeyCode::End => {
                self.cursor = self.value.chars().count();
                true
            }
            _ => false,
        }
    }

    /// Spans for display; the cursor cell is reversed when `focused`.
    pub fn spans(&self, focused: bool, style: Style) -> Vec<Span<'static>> {
        let shown: String = if self.masked {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        };

        if !focused {
            return vec![Span::styled(shown, style)];
        }

        let before: String = shown.chars().take(self.cursor).collect();
        let at: String = shown.chars().nth(self.cursor).map_or_else(|| " ".to_string(), String::from);
        let after: String = shown.chars().skip(self.cursor + 1).collect();
        vec![
            Span::styled(before, style),
            Span::styled(at, style.add_modifier(Modifier::REVERSED)),
            Span::styled(after, style),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_and_backspace() {
        let mut field = TextField::new();
        for c in "Trash".chars() {
            field.handle_key(key(KeyCode::Char(c)));
        }
        field.handle_key(key(KeyCode::Backspace));
        assert_eq!(field.value(), "Tras");
    }

    #[test]
    fn test_insert_at_cursor() {
        let mut field = TextField::with_value("ac");
        field.handle_key(key(KeyCode::Left));
        field.handle_key(key(KeyCode::Char('b')));
        assert_eq!(field.value(), "abc");
    }

    #[test]
    fn test_multibyte_editing() {
        let mut field = TextField::with_value("café");
        field.handle_key(key(KeyCode::Backspace));
        assert_eq!(field.value(), "caf");
        field.handle_key(key(KeyCode::Home));
        field.handle_key(key(KeyCode::Delete));
        assert_eq!(field.value(), "af");
    }

    #[test]
    fn test_paste_drops_control_chars() {
        let mut field = TextField::new();
        field.insert_str("alice\n");
        assert_eq!(field.value(), "alice");
    }

    #[test]
    fn test_masked_spans_hide_value() {
        let mut field = TextField::masked();
        field.insert_str("pw");
        let text: String = field
            .spans(false, Style::default())
            .iter()
            .map(|s| s.content.to_string())
            .collect();
        assert_eq!(text, "••");
    }

    #[test]
    fn test_blank_detection() {
        assert!(TextField::with_value("   ").is_blank());
        assert!(!TextField::with_value(" x ").is_blank());
    }
}
