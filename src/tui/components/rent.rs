//! # Rent View Component
//!
//! The customer screen: pick a car from the catalog, enter a day count and
//! press Enter to open the booking summary.
//!
//! Focus moves between the car list and the days field with Tab. Typing a
//! digit while the list has focus jumps to the days field.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `RentState` lives in `TuiState` and is rebuilt on every navigation
//! - `RentView` is created each frame with borrowed state and the draft

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Wrap};

use crate::core::booking::BookingDraft;
use crate::core::catalog::Car;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::car_list::{CarList, CarListEvent, CarListState};
use crate::tui::components::text_field::{FieldEvent, TextField};
use crate::tui::event::TuiEvent;

pub const EMPTY_CATALOG_MESSAGE: &str = "No cars available yet. Ask admin to add cars.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RentFocus {
    CarList,
    Days,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RentEvent {
    /// Select the car at this catalog index.
    Select(usize),
    DaysChanged(String),
    /// "Rent Car": ask for the booking summary.
    Rent,
}

pub struct RentState {
    pub car_list: CarListState,
    pub days: TextField,
    pub focus: RentFocus,
}

impl RentState {
    pub fn new() -> Self {
        Self {
            car_list: CarListState::new(),
            days: TextField::new(" Days ", "Number of days"),
            focus: RentFocus::CarList,
        }
    }

    fn set_focus(&mut self, focus: RentFocus) {
        self.focus = focus;
        self.days.focused = focus == RentFocus::Days;
    }

    fn edit_days(&mut self, event: &TuiEvent) -> Option<RentEvent> {
        match self.days.handle_event(event) {
            Some(FieldEvent::Changed) => {
                Some(RentEvent::DaysChanged(self.days.value().to_string()))
            }
            _ => None,
        }
    }
}

impl Default for RentState {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler for RentState {
    type Event = RentEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<RentEvent> {
        if matches!(event, TuiEvent::NextField | TuiEvent::PrevField) {
            let next = match self.focus {
                RentFocus::CarList => RentFocus::Days,
                RentFocus::Days => RentFocus::CarList,
            };
            self.set_focus(next);
            return None;
        }

        match self.focus {
            RentFocus::CarList => match event {
                TuiEvent::InputChar(c) if c.is_ascii_digit() => {
                    self.set_focus(RentFocus::Days);
                    self.edit_days(event)
                }
                TuiEvent::Paste(_) => {
                    self.set_focus(RentFocus::Days);
                    self.edit_days(event)
                }
                _ => self.car_list.handle_event(event).map(|e| match e {
                    CarListEvent::Select(index) => RentEvent::Select(index),
                }),
            },
            RentFocus::Days => match event {
                TuiEvent::Submit => Some(RentEvent::Rent),
                TuiEvent::CursorUp | TuiEvent::CursorDown => {
                    self.set_focus(RentFocus::CarList);
                    None
                }
                _ => self.edit_days(event),
            },
        }
    }
}

/// Transient render wrapper for the customer screen.
pub struct RentView<'a> {
    pub state: &'a mut RentState,
    pub user: &'a str,
    pub cars: &'a [Car],
    pub draft: &'a BookingDraft,
    pub currency: &'a str,
}

impl RentView<'_> {
    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        use Constraint::{Length, Min, Percentage};
        let [header, body] = Layout::vertical([Length(2), Min(0)]).areas(area);

        let greeting = Paragraph::new(vec![
            Line::from(Span::styled(
                format!("Welcome, {}", self.user),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Pick a car, enter the number of days, then press Enter to rent.",
                Style::default().fg(Color::DarkGray),
            )),
        ]);
        frame.render_widget(greeting, header);

        let [list_area, side_area] =
            Layout::horizontal([Percentage(60), Percentage(40)]).areas(body);

        self.state.car_list.set_len(self.cars.len());
        CarList {
            state: &mut self.state.car_list,
            cars: self.cars,
            title: "Available Cars",
            currency: self.currency,
            selected_id: self.draft.selected_car.as_ref().map(|car| car.id.as_str()),
            focused: self.state.focus == RentFocus::CarList,
            empty_message: EMPTY_CATALOG_MESSAGE,
        }
        .render(frame, list_area);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Your Booking ")
            .title_bottom(Line::from(" Tab Switch  Enter Rent Car ").centered())
            .padding(Padding::horizontal(1));
        let inner = block.inner(side_area);
        frame.render_widget(block, side_area);

        let [selected_area, days_area] = Layout::vertical([Length(2), Length(3)]).areas(inner);
        let selected = match &self.draft.selected_car {
            Some(car) => Span::styled(
                car.display_name(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            None => Span::styled("None", Style::default().fg(Color::DarkGray)),
        };
        let selected_line = Paragraph::new(Line::from(vec![Span::raw("Selected: "), selected]))
            .wrap(Wrap { trim: true });
        frame.render_widget(selected_line, selected_area);

        self.state.days.render(frame, days_area);
    }
}
