//! # Car List Component
//!
//! Bordered list of catalog cars: name, daily rate and image reference.
//! Used read-only on the admin screen and as the picker on the rent screen.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `CarListState` lives in `TuiState`
//! - `CarList` is created each frame with borrowed state and catalog

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, List, ListItem, ListState, Padding, Paragraph};

use crate::core::booking::format_money;
use crate::core::catalog::Car;
use crate::tui::component::EventHandler;
use crate::tui::components::popup::truncate_to_width;
use crate::tui::event::TuiEvent;

/// Persistent state for a car list.
pub struct CarListState {
    /// Highlighted row (not the same as the selected car)
    pub highlighted: usize,
    /// Prop: number of cars currently in the catalog
    pub len: usize,
    pub list_state: ListState,
}

impl CarListState {
    pub fn new() -> Self {
        Self {
            highlighted: 0,
            len: 0,
            list_state: ListState::default(),
        }
    }

    /// Sync the catalog size, keeping the highlight in range.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        if len == 0 {
            self.highlighted = 0;
            self.list_state.select(None);
        } else {
            self.highlighted = self.highlighted.min(len - 1);
            self.list_state.select(Some(self.highlighted));
        }
    }
}

impl Default for CarListState {
    fn default() -> Self {
        Self::new()
    }
}

/// Events emitted by the car list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarListEvent {
    /// Pick the car at this catalog index.
    Select(usize),
}

impl EventHandler for CarListState {
    type Event = CarListEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<CarListEvent> {
        if self.len == 0 {
            return None;
        }
        match event {
            TuiEvent::CursorUp => {
                self.highlighted = self.highlighted.saturating_sub(1);
                self.list_state.select(Some(self.highlighted));
                None
            }
            TuiEvent::CursorDown => {
                self.highlighted = (self.highlighted + 1).min(self.len - 1);
                self.list_state.select(Some(self.highlighted));
                None
            }
            TuiEvent::Submit | TuiEvent::InputChar(' ') => {
                Some(CarListEvent::Select(self.highlighted))
            }
            _ => None,
        }
    }
}

/// Transient render wrapper for a car list.
pub struct CarList<'a> {
    pub state: &'a mut CarListState,
    pub cars: &'a [Car],
    pub title: &'a str,
    pub currency: &'a str,
    /// Id of the car in the booking draft, marked with a bullet.
    pub selected_id: Option<&'a str>,
    pub focused: bool,
    pub empty_message: &'a str,
}

impl CarList<'_> {
    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(format!(" {} ({}) ", self.title, self.cars.len()))
            .padding(Padding::horizontal(1));

        if self.cars.is_empty() {
            let empty = Paragraph::new(self.empty_message)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        // borders + padding
        let inner_width = area.width.saturating_sub(4) as usize;
        let items: Vec<ListItem> = self
            .cars
            .iter()
            .map(|car| {
                let is_selected = self.selected_id == Some(car.id.as_str());
                let marker = if is_selected { "● " } else { "  " };
                let rate = format!("{} / day", format_money(self.currency, car.cost_per_day));
                let name_width = inner_width.saturating_sub(marker.len() + rate.len() + 2);
                let name = truncate_to_width(&car.display_name(), name_width);
                let padded_name = format!("{:<width$}", name, width = name_width);

                let name_style = if is_selected {
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                let image = truncate_to_width(&car.image, inner_width.saturating_sub(2));

                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(marker, name_style),
                        Span::styled(padded_name, name_style),
                        Span::raw("  "),
                        Span::styled(rate, Style::default().fg(Color::Green)),
                    ]),
                    Line::from(Span::styled(
                        format!("  {image}"),
                        Style::default().fg(Color::DarkGray),
                    )),
                ])
            })
            .collect();

        let highlight = if self.focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        let list = List::new(items).block(block).highlight_style(highlight);
        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}
