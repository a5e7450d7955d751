//! # Car Form Component
//!
//! The admin's "Add a Car" form: make, model, cost per day and an optional
//! image URL. Validation happens in `core`; the form only collects text.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Padding};

use crate::core::catalog::NewCar;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::text_field::TextField;
use crate::tui::event::TuiEvent;

const FIELD_COUNT: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CarFormEvent {
    Submit(NewCar),
}

pub struct CarForm {
    fields: [TextField; FIELD_COUNT],
    focus: usize,
}

impl CarForm {
    pub fn new() -> Self {
        let mut form = Self {
            fields: [
                TextField::new(" Make ", "e.g. Toyota"),
                TextField::new(" Model ", "e.g. Corolla"),
                TextField::new(" Cost per day ", "e.g. 300"),
                TextField::new(" Image URL (optional) ", "https://..."),
            ],
            focus: 0,
        };
        form.sync_focus();
        form
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Current field values as an unvalidated `NewCar`.
    pub fn values(&self) -> NewCar {
        let [make, model, cost, image] = &self.fields;
        NewCar {
            make: make.value().to_string(),
            model: model.value().to_string(),
            cost_per_day: cost.value().to_string(),
            image_url: image.value().to_string(),
        }
    }

    /// Empty every field and focus the first one.
    pub fn clear(&mut self) {
        for field in &mut self.fields {
            field.clear();
        }
        self.focus = 0;
        self.sync_focus();
    }

    fn sync_focus(&mut self) {
        for (i, field) in self.fields.iter_mut().enumerate() {
            field.focused = i == self.focus;
        }
    }
}

impl Default for CarForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for CarForm {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Add a Car ")
            .title_bottom(Line::from(" Tab Next  Enter Add Car ").centered())
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let areas = Layout::vertical([Constraint::Length(3); FIELD_COUNT]).split(inner);
        for (field, field_area) in self.fields.iter_mut().zip(areas.iter()) {
            field.render(frame, *field_area);
        }
    }
}

impl EventHandler for CarForm {
    type Event = CarFormEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<CarFormEvent> {
        match event {
            TuiEvent::Submit => return Some(CarFormEvent::Submit(self.values())),
            TuiEvent::NextField | TuiEvent::CursorDown => {
                self.focus = (self.focus + 1) % FIELD_COUNT;
                self.sync_focus();
            }
            TuiEvent::PrevField | TuiEvent::CursorUp => {
                self.focus = (self.focus + FIELD_COUNT - 1) % FIELD_COUNT;
                self.sync_focus();
            }
            _ => {
                self.fields[self.focus].handle_event(event);
            }
        }
        None
    }
}
