//! # Booking Modal Component
//!
//! "Booking Summary" overlay on the rent screen: car, days and total, with
//! Confirm and Cancel. The total is recomputed from the draft on every frame.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Clear, Padding, Paragraph};

use crate::core::booking::{BookingError, BookingQuote, format_money};
use crate::tui::components::popup::centered_fixed;
use crate::tui::event::TuiEvent;

const MODAL_WIDTH: u16 = 44;
const MODAL_HEIGHT: u16 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalEvent {
    Confirm,
    Cancel,
}

/// Enter or `y` confirms, Esc or `n` cancels. Everything else is swallowed.
pub fn modal_event(event: &TuiEvent) -> Option<ModalEvent> {
    match event {
        TuiEvent::Submit | TuiEvent::InputChar('y') | TuiEvent::InputChar('Y') => {
            Some(ModalEvent::Confirm)
        }
        TuiEvent::Escape | TuiEvent::InputChar('n') | TuiEvent::InputChar('N') => {
            Some(ModalEvent::Cancel)
        }
        _ => None,
    }
}

pub struct BookingModal<'a> {
    pub quote: &'a Result<BookingQuote, BookingError>,
    pub currency: &'a str,
}

impl BookingModal<'_> {
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let overlay = centered_fixed(MODAL_WIDTH, MODAL_HEIGHT, area);
        frame.render_widget(Clear, overlay);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" Booking Summary ")
            .title_alignment(Alignment::Center)
            .title_bottom(Line::from(" Enter Confirm  Esc Cancel ").centered())
            .padding(Padding::uniform(1));

        let label = Style::default().fg(Color::Gray);
        let lines = match self.quote {
            Ok(quote) => vec![
                Line::from(Span::styled(
                    quote.car.display_name(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(vec![
                    Span::styled("Days: ", label),
                    Span::raw(quote.days.to_string()),
                ]),
                Line::from(vec![
                    Span::styled("Total: ", label),
                    Span::styled(
                        format_money(self.currency, quote.total),
                        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                    ),
                ]),
            ],
            Err(e) => vec![Line::from(Span::styled(
                e.to_string(),
                Style::default().fg(Color::Red),
            ))],
        };

        let body = Paragraph::new(lines).alignment(Alignment::Center).block(block);
        frame.render_widget(body, overlay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::booking::quote;
    use crate::core::catalog::CarCatalog;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_text(modal: &BookingModal) -> String {
        let backend = TestBackend::new(60, 14);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| modal.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_keys() {
        assert_eq!(modal_event(&TuiEvent::Submit), Some(ModalEvent::Confirm));
        assert_eq!(modal_event(&TuiEvent::InputChar('y')), Some(ModalEvent::Confirm));
        assert_eq!(modal_event(&TuiEvent::Escape), Some(ModalEvent::Cancel));
        assert_eq!(modal_event(&TuiEvent::InputChar('n')), Some(ModalEvent::Cancel));
        assert_eq!(modal_event(&TuiEvent::InputChar('4')), None);
    }

    #[test]
    fn test_render_summary() {
        let catalog = CarCatalog::seeded();
        let quote = quote(catalog.get("1"), "3");
        let text = render_text(&BookingModal {
            quote: &quote,
            currency: "R",
        });
        assert!(text.contains("Booking Summary"));
        assert!(text.contains("Toyota Corolla"));
        assert!(text.contains("Days: 3"));
        assert!(text.contains("Total: R900"));
    }

    #[test]
    fn test_render_invalid_quote() {
        let quote = quote(None, "3");
        let text = render_text(&BookingModal {
            quote: &quote,
            currency: "R",
        });
        assert!(text.contains("Booking Summary"));
        assert!(!text.contains("Total:"));
    }
}
