//! # TitleBar Component
//!
//! Top status bar: app name, who is logged in, and the latest status
//! message.
//!
//! TitleBar is purely presentational. It receives all data as props and has
//! no internal state:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(Some("alice (admin)".into()), app.status_message.clone());
//! title_bar.render(frame, title_area);
//! ```
//!
//! The text changes with state:
//!
//! 1. **Logged in + status**: `"ICE Car Booking | alice (admin) | Added Honda Civic"`
//! 2. **Status only**: `"ICE Car Booking | Logged out"`
//! 3. **Default**: `"ICE Car Booking"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub const APP_TITLE: &str = "ICE Car Booking";

pub struct TitleBar {
    /// "user (role)" when someone is logged in
    pub user_label: Option<String>,
    /// Transient status, e.g. "Added Honda Civic"
    pub status_message: String,
}

impl TitleBar {
    pub fn new(user_label: Option<String>, status_message: String) -> Self {
        Self {
            user_label,
            status_message,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let separator = Span::styled(" | ", Style::default().fg(Color::DarkGray));
        let mut spans = vec![Span::styled(
            APP_TITLE,
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )];
        if let Some(user) = &self.user_label {
            spans.push(separator.clone());
            spans.push(Span::styled(user.clone(), Style::default().fg(Color::Cyan)));
        }
        if !self.status_message.is_empty() {
            spans.push(separator);
            spans.push(Span::raw(self.status_message.clone()));
        }
        frame.render_widget(Line::from(spans), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_text(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| title_bar.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_title_bar_with_user_and_status() {
        let mut title_bar =
            TitleBar::new(Some("alice (admin)".into()), "Added Honda Civic".into());
        let text = render_text(&mut title_bar);
        assert!(text.contains("ICE Car Booking | alice (admin) | Added Honda Civic"));
    }

    #[test]
    fn test_title_bar_status_only() {
        let mut title_bar = TitleBar::new(None, "Logged out".into());
        let text = render_text(&mut title_bar);
        assert!(text.contains("ICE Car Booking | Logged out"));
    }

    #[test]
    fn test_title_bar_default_no_status() {
        let mut title_bar = TitleBar::new(None, String::new());
        let text = render_text(&mut title_bar);
        assert!(text.contains("ICE Car Booking"));
        assert!(!text.contains('|'));
    }
}
