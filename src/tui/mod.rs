//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Routing
//!
//! `dispatch` is the single entry point for a terminal event:
//!
//! 1. Ctrl+C quits from anywhere.
//! 2. A visible notice swallows every key; Enter/Esc dismiss it.
//! 3. Ctrl+L logs out (ignored on screens without a session).
//! 4. Everything else goes to the current screen's component, and the
//!    component's high-level event becomes an `Action`.
//!
//! ## View State
//!
//! Form contents, focus and list highlight live in `TuiState`, not in `App`.
//! They are reset whenever the navigator's revision changes, so a screen
//! always starts clean after a transition.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps up to 500ms waiting for input and
//! only redraws after an event. All pending events are drained before the
//! next frame.
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor because
//! ratatui's `set_cursor_position` resets the terminal's blink timer on every
//! `draw()` call.

mod component;
pub mod components;
pub mod event;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::time::Duration;

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::flow::{ModalState, ScreenKind};
use crate::core::session::Role;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::booking_modal::modal_event;
use crate::tui::components::confirmation::confirmation_event;
use crate::tui::components::notice;
use crate::tui::components::{
    CarForm, CarFormEvent, CarListState, ConfirmationEvent, LoginEvent, LoginForm, ModalEvent,
    RentEvent, RentState,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub login: LoginForm,
    pub car_form: CarForm,
    pub admin_list: CarListState,
    pub rent: RentState,
    default_role: Role,
    /// Navigator revision the view state was built for.
    seen_revision: u64,
}

impl TuiState {
    pub fn new(default_role: Role) -> Self {
        Self {
            login: LoginForm::new(default_role),
            car_form: CarForm::new(),
            admin_list: CarListState::new(),
            rent: RentState::new(),
            default_role,
            seen_revision: 0,
        }
    }

    /// Bring view state in line with `App` after an update.
    pub fn sync(&mut self, app: &App) {
        let revision = app.navigator.revision();
        if revision != self.seen_revision {
            debug!(
                "Screen changed to {:?} (revision {revision}), resetting view state",
                app.navigator.kind()
            );
            self.login.reset(self.default_role);
            self.car_form.clear();
            self.admin_list = CarListState::new();
            self.rent = RentState::new();
            self.seen_revision = revision;
        }
        self.admin_list.set_len(app.catalog.len());
        self.rent.car_list.set_len(app.catalog.len());
    }
}

/// Route one terminal event through the current screen into `update`.
pub fn dispatch(app: &mut App, tui: &mut TuiState, event: &TuiEvent) -> Effect {
    let effect = match event {
        TuiEvent::ForceQuit => update(app, Action::Quit),
        TuiEvent::Resize => Effect::None,
        _ if app.notice.is_some() => {
            if notice::dismisses(event) {
                update(app, Action::DismissNotice)
            } else {
                Effect::None
            }
        }
        TuiEvent::Logout => update(app, Action::Logout),
        _ => match screen_action(app, tui, event) {
            Some(action) => {
                debug!("Dispatching {:?}", action);
                update(app, action)
            }
            None => Effect::None,
        },
    };

    if effect == Effect::ClearCarForm {
        tui.car_form.clear();
    }
    tui.sync(app);
    effect
}

/// Let the current screen's component turn `event` into an `Action`.
fn screen_action(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    match app.navigator.kind() {
        ScreenKind::Login => match tui.login.handle_event(event)? {
            LoginEvent::Submit { username, role } => Some(Action::Login { username, role }),
        },
        ScreenKind::AdminAddCar => match tui.car_form.handle_event(event)? {
            CarFormEvent::Submit(car) => Some(Action::AddCar(car)),
        },
        ScreenKind::CustomerRent => {
            let modal_open = app
                .rent_screen()
                .is_some_and(|rent| rent.modal == ModalState::Visible);
            if modal_open {
                return match modal_event(event)? {
                    ModalEvent::Confirm => Some(Action::ConfirmBooking),
                    ModalEvent::Cancel => Some(Action::CancelBooking),
                };
            }
            match tui.rent.handle_event(event)? {
                RentEvent::Select(index) => app
                    .catalog
                    .list_cars()
                    .get(index)
                    .map(|car| Action::SelectCar(car.id.clone())),
                RentEvent::DaysChanged(text) => Some(Action::SetDays(text)),
                RentEvent::Rent => Some(Action::RequestRent),
            }
        }
        ScreenKind::Confirmation => match confirmation_event(event)? {
            ConfirmationEvent::BackToHome => Some(Action::BackToHome),
            ConfirmationEvent::GoBack => Some(Action::GoBack),
        },
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,                        // Show cursor for field editing
            SetCursorStyle::SteadyBlock, // Non-blinking: avoids blink timer reset on redraw
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableBracketedPaste,
            SetCursorStyle::DefaultUserShape,
            Hide
        );
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new(app.default_role);
    info!(
        "Starting with {} cars, default role {}",
        app.catalog.len(),
        app.default_role
    );

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();
    let mut needs_redraw = true; // Force first frame

    let result = loop {
        if needs_redraw {
            if let Err(e) = terminal.draw(|f| ui::draw_ui(f, &app, &mut tui)) {
                break Err(e);
            }
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(IDLE_POLL);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if dispatch(&mut app, &mut tui, &event) == Effect::Quit {
                should_quit = true;
                break;
            }
        }

        if should_quit {
            info!("Quit requested");
            break Ok(());
        }
    };

    ratatui::restore();
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::flow::Screen;
    use crate::test_support::{login_as, test_app};

    fn press(app: &mut App, tui: &mut TuiState, events: &[TuiEvent]) -> Effect {
        let mut last = Effect::None;
        for event in events {
            last = dispatch(app, tui, event);
        }
        last
    }

    fn type_text(app: &mut App, tui: &mut TuiState, text: &str) {
        for c in text.chars() {
            dispatch(app, tui, &TuiEvent::InputChar(c));
        }
    }

    #[test]
    fn test_ctrl_c_quits_even_behind_notice() {
        let mut app = test_app();
        app.show_notice("Validation", "Please enter a username.");
        let mut tui = TuiState::new(Role::Customer);
        assert_eq!(dispatch(&mut app, &mut tui, &TuiEvent::ForceQuit), Effect::Quit);
    }

    #[test]
    fn test_empty_login_shows_notice_then_dismisses() {
        let mut app = test_app();
        let mut tui = TuiState::new(Role::Customer);
        press(&mut app, &mut tui, &[TuiEvent::Submit]);
        assert!(app.notice.is_some());

        // Typing is swallowed by the notice
        type_text(&mut app, &mut tui, "x");
        assert_eq!(tui.login.username.value(), "");

        press(&mut app, &mut tui, &[TuiEvent::Escape]);
        assert!(app.notice.is_none());
        assert_eq!(app.navigator.kind(), ScreenKind::Login);
    }

    #[test]
    fn test_admin_adds_car_and_form_clears() {
        let mut app = test_app();
        let mut tui = TuiState::new(Role::Admin);
        type_text(&mut app, &mut tui, "alice");
        press(&mut app, &mut tui, &[TuiEvent::Submit]);
        assert_eq!(app.navigator.kind(), ScreenKind::AdminAddCar);

        type_text(&mut app, &mut tui, "Honda");
        press(&mut app, &mut tui, &[TuiEvent::NextField]);
        type_text(&mut app, &mut tui, "Civic");
        press(&mut app, &mut tui, &[TuiEvent::NextField]);
        type_text(&mut app, &mut tui, "250");
        let effect = press(&mut app, &mut tui, &[TuiEvent::Submit]);

        assert_eq!(effect, Effect::ClearCarForm);
        assert_eq!(app.catalog.len(), 3);
        assert_eq!(app.catalog.list_cars()[0].display_name(), "Honda Civic");
        assert_eq!(tui.car_form.values().make, "");
    }

    #[test]
    fn test_bad_cost_keeps_form_values() {
        let mut app = test_app();
        login_as(&mut app, "alice", Role::Admin);
        let mut tui = TuiState::new(Role::Customer);
        tui.sync(&app);

        type_text(&mut app, &mut tui, "Honda");
        press(&mut app, &mut tui, &[TuiEvent::NextField]);
        type_text(&mut app, &mut tui, "Civic");
        press(&mut app, &mut tui, &[TuiEvent::NextField]);
        type_text(&mut app, &mut tui, "-5");
        press(&mut app, &mut tui, &[TuiEvent::Submit]);

        let notice = app.notice.as_ref().map(|n| n.message.as_str());
        assert_eq!(notice, Some("Cost per day must be a positive number."));
        assert_eq!(app.catalog.len(), 2);
        assert_eq!(tui.car_form.values().cost_per_day, "-5");
    }

    #[test]
    fn test_customer_books_through_keys() {
        let mut app = test_app();
        login_as(&mut app, "bob", Role::Customer);
        let mut tui = TuiState::new(Role::Customer);
        tui.sync(&app);

        // Second row is the BMW at R280
        press(&mut app, &mut tui, &[TuiEvent::CursorDown, TuiEvent::Submit]);
        type_text(&mut app, &mut tui, "2");
        press(&mut app, &mut tui, &[TuiEvent::Submit]);
        let modal = app.rent_screen().map(|rent| rent.modal);
        assert_eq!(modal, Some(ModalState::Visible));

        press(&mut app, &mut tui, &[TuiEvent::Submit]);
        match app.screen() {
            Screen::Confirmation(Some(booking)) => {
                assert_eq!(booking.car.display_name(), "BMW 1 Series");
                assert_eq!(booking.days, 2);
                assert_eq!(booking.total, rust_decimal::Decimal::from(560));
            }
            other => panic!("expected confirmation, got {other:?}"),
        }

        // Esc goes back to an empty rent screen
        press(&mut app, &mut tui, &[TuiEvent::Escape]);
        assert_eq!(app.navigator.kind(), ScreenKind::CustomerRent);
        assert_eq!(tui.rent.days.value(), "");
        assert!(app.rent_screen().is_some_and(|rent| rent.draft.selected_car.is_none()));
    }

    #[test]
    fn test_modal_cancel_keeps_draft() {
        let mut app = test_app();
        login_as(&mut app, "bob", Role::Customer);
        let mut tui = TuiState::new(Role::Customer);
        tui.sync(&app);

        press(&mut app, &mut tui, &[TuiEvent::Submit]);
        type_text(&mut app, &mut tui, "3");
        press(&mut app, &mut tui, &[TuiEvent::Submit, TuiEvent::Escape]);

        let rent = app.rent_screen().map(|rent| (rent.modal, rent.draft.days.clone()));
        assert_eq!(rent, Some((ModalState::Hidden, "3".to_string())));
        assert_eq!(tui.rent.days.value(), "3");
    }

    #[test]
    fn test_ctrl_l_logs_out_and_resets_login_form() {
        let mut app = test_app();
        let mut tui = TuiState::new(Role::Customer);
        type_text(&mut app, &mut tui, "carol");
        press(&mut app, &mut tui, &[TuiEvent::Submit]);
        assert_eq!(app.navigator.kind(), ScreenKind::CustomerRent);

        press(&mut app, &mut tui, &[TuiEvent::Logout]);
        assert_eq!(app.navigator.kind(), ScreenKind::Login);
        assert!(app.session.is_none());
        assert_eq!(tui.login.username.value(), "");
    }
}
