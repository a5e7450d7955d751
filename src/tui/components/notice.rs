//! # Notice Component
//!
//! Blocking message popup for validation failures. Enter or Esc dismisses
//! it. The popup grows to fit the wrapped message.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Clear, Padding, Paragraph};

use crate::core::state::Notice;
use crate::tui::components::popup::centered_fixed;
use crate::tui::event::TuiEvent;

const MAX_TEXT_WIDTH: usize = 40;
/// Border plus padding on each side.
const FRAME_COLUMNS: u16 = 6;
const FRAME_ROWS: u16 = 4;

pub fn dismisses(event: &TuiEvent) -> bool {
    matches!(event, TuiEvent::Submit | TuiEvent::Escape)
}

pub struct NoticePopup<'a> {
    pub notice: &'a Notice,
}

impl NoticePopup<'_> {
    fn wrapped_lines(&self) -> Vec<String> {
        textwrap::wrap(&self.notice.message, MAX_TEXT_WIDTH)
            .into_iter()
            .map(|line| line.into_owned())
            .collect()
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let lines = self.wrapped_lines();
        let text_width = lines
            .iter()
            .map(|l| textwrap::core::display_width(l))
            .chain(std::iter::once(self.notice.title.len() + 2))
            .max()
            .unwrap_or(0) as u16;
        let popup = centered_fixed(
            text_width + FRAME_COLUMNS,
            lines.len() as u16 + FRAME_ROWS,
            area,
        );
        frame.render_widget(Clear, popup);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Red))
            .title(format!(" {} ", self.notice.title))
            .title_alignment(Alignment::Center)
            .title_bottom(Line::from(" Enter OK ").centered())
            .padding(Padding::new(2, 2, 1, 1));
        let body = Paragraph::new(lines.into_iter().map(Line::from).collect::<Vec<_>>())
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(body, popup);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_text(notice: &Notice, width: u16) -> String {
        let backend = TestBackend::new(width, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| NoticePopup { notice }.render(f, f.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_dismiss_keys() {
        assert!(dismisses(&TuiEvent::Submit));
        assert!(dismisses(&TuiEvent::Escape));
        assert!(!dismisses(&TuiEvent::InputChar('a')));
    }

    #[test]
    fn test_render_title_and_message() {
        let notice = Notice::new("Select a car", "Please select a car to rent.");
        let text = render_text(&notice, 60);
        assert!(text.contains("Select a car"));
        assert!(text.contains("Please select a car to rent."));
    }

    #[test]
    fn test_long_message_wraps() {
        let notice = Notice::new("Validation", "Please fill make, model and cost per day.");
        let popup = NoticePopup { notice: &notice };
        assert_eq!(popup.wrapped_lines().len(), 2);
        let text = render_text(&notice, 60);
        assert!(text.contains("Please fill make, model and cost per"));
        assert!(text.contains("day."));
    }
}
