//! # TextField Component
//!
//! A single-line, bordered text input used by every form.
//!
//! ## Responsibilities
//!
//! - Capture typed and pasted text (newlines are dropped)
//! - Handle editing (backspace, delete, cursor movement)
//! - Optionally mask the value (password)
//! - Scroll horizontally so the cursor stays visible
//!
//! ## State Management
//!
//! The buffer and cursor are internal state. `focused` is a prop set by the
//! owning form; only a focused field draws the terminal cursor.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Borders take one column/row on each side.
const BORDER_OFFSET: u16 = 1;
const MASK_CHAR: char = '•';

/// High-level events emitted by a TextField
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEvent {
    /// The text changed
    Changed,
    /// Only the cursor moved
    CursorMoved,
}

pub struct TextField {
    pub label: &'static str,
    pub placeholder: &'static str,
    /// Prop: whether this field has keyboard focus.
    pub focused: bool,
    masked: bool,
    buffer: String,
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    cursor: usize,
    /// Columns scrolled off the left edge at last render.
    scroll: u16,
}

impl TextField {
    pub fn new(label: &'static str, placeholder: &'static str) -> Self {
        Self {
            label,
            placeholder,
            focused: false,
            masked: false,
            buffer: String::new(),
            cursor: 0,
            scroll: 0,
        }
    }

    /// Show bullets instead of the typed characters.
    pub fn masked(mut self) -> Self {
        self.masked = true;
        self
    }

    pub fn value(&self) -> &str {
        &self.buffer
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
        self.scroll = 0;
    }

    /// Text as displayed: either the buffer or one bullet per char.
    fn display_text(&self) -> String {
        if self.masked {
            MASK_CHAR.to_string().repeat(self.buffer.chars().count())
        } else {
            self.buffer.clone()
        }
    }

    /// Display column of the cursor, before scrolling.
    fn cursor_column(&self) -> u16 {
        let before = &self.buffer[..self.cursor];
        let width = if self.masked {
            before.chars().count()
        } else {
            before.width()
        };
        width as u16
    }

    fn insert_str(&mut self, text: &str) -> Option<FieldEvent> {
        let clean: String = text.chars().filter(|c| *c != '\n' && *c != '\r').collect();
        if clean.is_empty() {
            return None;
        }
        self.buffer.insert_str(self.cursor, &clean);
        self.cursor += clean.len();
        Some(FieldEvent::Changed)
    }
}

fn prev_char_boundary(s: &str, pos: usize) -> usize {
    s[..pos].char_indices().next_back().map(|(i, _)| i).unwrap_or(0)
}

fn next_char_boundary(s: &str, pos: usize) -> usize {
    s[pos..].chars().next().map(|c| pos + c.len_utf8()).unwrap_or(pos)
}

impl Component for TextField {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let inner_width = area.width.saturating_sub(BORDER_OFFSET * 2);
        let cursor_col = self.cursor_column();

        // Keep the cursor inside the visible window
        if cursor_col < self.scroll {
            self.scroll = cursor_col;
        } else if inner_width > 0 && cursor_col >= self.scroll + inner_width {
            self.scroll = cursor_col + 1 - inner_width;
        }

        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(self.label);

        let paragraph = if self.buffer.is_empty() {
            Paragraph::new(self.placeholder).style(Style::default().fg(Color::DarkGray))
        } else {
            Paragraph::new(self.display_text())
                .style(Style::default().fg(Color::White))
                .scroll((0, self.scroll))
        };
        frame.render_widget(paragraph.block(block), area);

        if self.focused {
            let x = area.x + BORDER_OFFSET + cursor_col.saturating_sub(self.scroll);
            frame.set_cursor_position((x, area.y + BORDER_OFFSET));
        }
    }
}

impl EventHandler for TextField {
    type Event = FieldEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => self.insert_str(c.encode_utf8(&mut [0; 4])),
            TuiEvent::Paste(text) => self.insert_str(text),
            TuiEvent::Backspace => {
                if self.cursor > 0 {
                    let prev = prev_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(prev..self.cursor);
                    self.cursor = prev;
                    Some(FieldEvent::Changed)
                } else {
                    None
                }
            }
            TuiEvent::Delete => {
                if self.cursor < self.buffer.len() {
                    let next = next_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(self.cursor..next);
                    Some(FieldEvent::Changed)
                } else {
                    None
                }
            }
            TuiEvent::CursorLeft => (self.cursor > 0).then(|| {
                self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                FieldEvent::CursorMoved
            }),
            TuiEvent::CursorRight => (self.cursor < self.buffer.len()).then(|| {
                self.cursor = next_char_boundary(&self.buffer, self.cursor);
                FieldEvent::CursorMoved
            }),
            TuiEvent::CursorHome => (self.cursor != 0).then(|| {
                self.cursor = 0;
                FieldEvent::CursorMoved
            }),
            TuiEvent::CursorEnd => (self.cursor != self.buffer.len()).then(|| {
                self.cursor = self.buffer.len();
                FieldEvent::CursorMoved
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn type_str(field: &mut TextField, s: &str) {
        for c in s.chars() {
            field.handle_event(&TuiEvent::InputChar(c));
        }
    }

    fn rendered(field: &mut TextField, width: u16) -> String {
        let backend = TestBackend::new(width, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| field.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_typing_and_backspace() {
        let mut field = TextField::new("Make", "e.g. Toyota");
        assert_eq!(field.handle_event(&TuiEvent::InputChar('a')), Some(FieldEvent::Changed));
        type_str(&mut field, "bc");
        assert_eq!(field.value(), "abc");

        assert_eq!(field.handle_event(&TuiEvent::Backspace), Some(FieldEvent::Changed));
        assert_eq!(field.value(), "ab");
    }

    #[test]
    fn test_cursor_editing_mid_buffer() {
        let mut field = TextField::new("Model", "");
        type_str(&mut field, "Cvic");
        field.handle_event(&TuiEvent::CursorHome);
        assert_eq!(field.handle_event(&TuiEvent::CursorRight), Some(FieldEvent::CursorMoved));
        field.handle_event(&TuiEvent::InputChar('i'));
        assert_eq!(field.value(), "Civic");

        field.handle_event(&TuiEvent::CursorEnd);
        assert_eq!(field.handle_event(&TuiEvent::Delete), None);
        assert_eq!(field.handle_event(&TuiEvent::CursorRight), None);
    }

    #[test]
    fn test_multibyte_chars() {
        let mut field = TextField::new("Make", "");
        type_str(&mut field, "Citroën");
        field.handle_event(&TuiEvent::CursorLeft);
        field.handle_event(&TuiEvent::Backspace);
        assert_eq!(field.value(), "Citron");
    }

    #[test]
    fn test_paste_strips_newlines() {
        let mut field = TextField::new("Image URL", "");
        field.handle_event(&TuiEvent::Paste("https://a.example/\ncar.jpg\n".into()));
        assert_eq!(field.value(), "https://a.example/car.jpg");
        assert_eq!(field.handle_event(&TuiEvent::Paste("\n".into())), None);
    }

    #[test]
    fn test_clear() {
        let mut field = TextField::new("Days", "");
        type_str(&mut field, "12");
        field.clear();
        assert_eq!(field.value(), "");
        assert_eq!(field.handle_event(&TuiEvent::Backspace), None);
    }

    #[test]
    fn test_render_shows_label_and_placeholder() {
        let mut field = TextField::new("Make", "e.g. Toyota");
        let text = rendered(&mut field, 30);
        assert!(text.contains("Make"));
        assert!(text.contains("e.g. Toyota"));
    }

    #[test]
    fn test_masked_render_hides_value() {
        let mut field = TextField::new("Password", "").masked();
        type_str(&mut field, "hunter2");
        let text = rendered(&mut field, 30);
        assert!(!text.contains("hunter2"));
        assert!(text.contains("•••••••"));
        assert_eq!(field.value(), "hunter2");
    }

    #[test]
    fn test_long_value_scrolls_to_cursor() {
        let mut field = TextField::new("URL", "");
        field.focused = true;
        type_str(&mut field, "abcdefghijklmnopqrstuvwxyz");
        let text = rendered(&mut field, 12);
        // 10 inner columns; the tail of the value must be visible
        assert!(text.contains("rstuvwxyz"));
        assert!(!text.contains("abc"));
    }
}
