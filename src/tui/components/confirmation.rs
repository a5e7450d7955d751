//! # Confirmation Component
//!
//! Shown after a booking is confirmed. Renders a degraded view when the
//! screen was reached without a booking payload.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Wrap};

use crate::core::booking::{BookingResult, format_money};
use crate::tui::components::popup::{centered_fixed, truncate_to_width};
use crate::tui::event::TuiEvent;

const CARD_WIDTH: u16 = 60;
const CARD_HEIGHT: u16 = 14;

pub const MISSING_DETAILS_MESSAGE: &str = "No booking details found.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmationEvent {
    BackToHome,
    GoBack,
}

pub fn confirmation_event(event: &TuiEvent) -> Option<ConfirmationEvent> {
    match event {
        TuiEvent::Submit => Some(ConfirmationEvent::BackToHome),
        TuiEvent::Escape => Some(ConfirmationEvent::GoBack),
        _ => None,
    }
}

pub struct Confirmation<'a> {
    pub booking: Option<&'a BookingResult>,
    pub currency: &'a str,
}

impl Confirmation<'_> {
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let card = centered_fixed(CARD_WIDTH, CARD_HEIGHT, area);
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Green))
            .title(" Booking Confirmed ")
            .title_alignment(Alignment::Center)
            .title_bottom(Line::from(" Enter Back to Home  Esc Back ").centered())
            .padding(Padding::uniform(1));

        let Some(booking) = self.booking else {
            let missing = Paragraph::new(MISSING_DETAILS_MESSAGE)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(missing, card);
            return;
        };

        let label = Style::default().fg(Color::Gray);
        let lines = vec![
            Line::from(Span::styled(
                booking.car.display_name(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                truncate_to_width(&booking.car.image, card.width.saturating_sub(4) as usize),
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Days booked: ", label),
                Span::raw(booking.days.to_string()),
            ]),
            Line::from(vec![
                Span::styled("Amount Due on pickup: ", label),
                Span::styled(
                    format_money(self.currency, booking.total),
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                format!("Confirmed {}", booking.confirmed_at.format("%Y-%m-%d %H:%M")),
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let body = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(body, card);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::booking::quote;
    use crate::core::catalog::CarCatalog;
    use chrono::{Local, TimeZone};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_text(confirmation: &Confirmation) -> String {
        let backend = TestBackend::new(70, 16);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| confirmation.render(f, f.area())).unwrap();
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
        assert_eq!(
            confirmation_event(&TuiEvent::Submit),
            Some(ConfirmationEvent::BackToHome)
        );
        assert_eq!(confirmation_event(&TuiEvent::Escape), Some(ConfirmationEvent::GoBack));
        assert_eq!(confirmation_event(&TuiEvent::InputChar('x')), None);
    }

    #[test]
    fn test_render_booking() {
        let catalog = CarCatalog::seeded();
        let confirmed_at = Local.with_ymd_and_hms(2026, 3, 14, 9, 30, 0).unwrap();
        let booking = quote(catalog.get("2"), "2").unwrap().confirm(confirmed_at);
        let text = render_text(&Confirmation {
            booking: Some(&booking),
            currency: "R",
        });
        assert!(text.contains("Booking Confirmed"));
        assert!(text.contains("BMW 1 Series"));
        assert!(text.contains("Days booked: 2"));
        assert!(text.contains("Amount Due on pickup: R560"));
        assert!(text.contains("Confirmed 2026-03-14 09:30"));
    }

    #[test]
    fn test_render_missing_payload() {
        let text = render_text(&Confirmation {
            booking: None,
            currency: "R",
        });
        assert!(text.contains("No booking details found."));
        assert!(!text.contains("Days booked"));
    }
}
