//! # Actions
//!
//! Everything that can happen in the app becomes an `Action`.
//! User submits the login form? That's `Action::Login { .. }`.
//! User confirms the booking modal? That's `Action::ConfirmBooking`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` telling the adapter if it has anything
//! else to do. No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State (+ Effect)
//! ```
//!
//! While a notice is showing, every action except `DismissNotice` and `Quit`
//! is dropped: the notice blocks the screen underneath.

use chrono::Local;
use log::{debug, info, warn};

use crate::core::booking::{BookingError, format_money};
use crate::core::catalog::NewCar;
use crate::core::flow::{LoginParams, ModalState, RentScreen, Screen};
use crate::core::session::{Role, Session};
use crate::core::state::App;
use crate::core::validation::{self, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Login { username: String, role: Role },
    AddCar(NewCar),
    /// Select a car on the rent screen, by catalog id.
    SelectCar(String),
    /// The day count text changed.
    SetDays(String),
    /// "Rent Car": validate the draft and open the summary modal.
    RequestRent,
    ConfirmBooking,
    CancelBooking,
    /// Pop the confirmation screen, back to the rent screen.
    GoBack,
    BackToHome,
    Logout,
    DismissNotice,
    Quit,
}

/// Follow-up work for the adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    /// A car was added; the add-car form can be emptied.
    ClearCarForm,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    if app.notice.is_some() && !matches!(action, Action::DismissNotice | Action::Quit) {
        debug!("Notice showing, dropping {:?}", action);
        return Effect::None;
    }

    match action {
        Action::Login { username, role } => login(app, &username, role),
        Action::AddCar(input) => add_car(app, input),
        Action::SelectCar(id) => select_car(app, &id),
        Action::SetDays(text) => {
            if let Some(rent) = app.rent_screen_mut() {
                rent.draft.days = text;
            }
            Effect::None
        }
        Action::RequestRent => request_rent(app),
        Action::ConfirmBooking => confirm_booking(app),
        Action::CancelBooking => {
            if let Some(rent) = app.rent_screen_mut() {
                rent.modal = ModalState::Hidden;
                debug!("Booking modal cancelled, draft kept: {:?}", rent.draft.days);
            }
            Effect::None
        }
        Action::GoBack => {
            if matches!(app.screen(), Screen::Confirmation(_)) && app.navigator.pop() {
                app.status_message = String::from("Back to car list");
            }
            Effect::None
        }
        Action::BackToHome => {
            if matches!(app.screen(), Screen::Confirmation(_)) {
                // The root was itself a replacement of Login, so land on Login explicitly.
                app.navigator.pop_to_top();
                app.navigator.replace(Screen::Login);
                sign_out(app);
            }
            Effect::None
        }
        Action::Logout => {
            if matches!(app.screen(), Screen::AdminAddCar(_) | Screen::CustomerRent(_)) {
                app.navigator.replace(Screen::Login);
                sign_out(app);
            }
            Effect::None
        }
        Action::DismissNotice => {
            app.notice = None;
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

fn login(app: &mut App, username: &str, role: Role) -> Effect {
    if !matches!(app.screen(), Screen::Login) {
        debug!("Login ignored on {:?}", app.navigator.kind());
        return Effect::None;
    }
    if !validation::validate_non_empty(username) {
        app.show_notice("Validation", "Please enter a username.");
        return Effect::None;
    }

    let username = username.trim().to_string();
    info!("Login: {username} as {role}");
    let params = LoginParams {
        user: username.clone(),
    };
    let target = match role {
        Role::Admin => Screen::AdminAddCar(params),
        Role::Customer => Screen::CustomerRent(RentScreen::new(params)),
    };
    app.navigator.replace(target);
    app.status_message = format!("Logged in as {username} ({role})");
    app.session = Some(Session { username, role });
    Effect::None
}

fn select_car(app: &mut App, id: &str) -> Effect {
    let kind = app.navigator.kind();
    let car = app.catalog.get(id).cloned();
    let Some(rent) = app.rent_screen_mut() else {
        debug!("SelectCar ignored on {kind:?}");
        return Effect::None;
    };
    if rent.modal == ModalState::Visible {
        debug!("SelectCar ignored while booking modal is open");
        return Effect::None;
    }
    match car {
        Some(car) => {
            debug!("Selected {} (id={})", car.display_name(), car.id);
            rent.draft.selected_car = Some(car);
        }
        None => warn!("SelectCar: no car with id {id}"),
    }
    Effect::None
}

fn sign_out(app: &mut App) {
    if let Some(session) = app.session.take() {
        info!("Logout: {}", session.username);
    }
    app.status_message = String::from("Logged out");
}

fn add_car(app: &mut App, input: NewCar) -> Effect {
    if !matches!(app.screen(), Screen::AdminAddCar(_)) {
        debug!("AddCar ignored on {:?}", app.navigator.kind());
        return Effect::None;
    }
    match app.catalog.add_car(input) {
        Ok(car) => {
            app.status_message = format!("Added {}", car.display_name());
            Effect::ClearCarForm
        }
        Err(e) => {
            debug!("AddCar rejected: {e}");
            let message = match e {
                ValidationError::Required { .. } => "Please fill make, model and cost per day.",
                _ => "Cost per day must be a positive number.",
            };
            app.show_notice("Validation", message);
            Effect::None
        }
    }
}

fn show_booking_error(app: &mut App, error: &BookingError) {
    debug!("Rent rejected: {error}");
    match error {
        BookingError::NoCarSelected => {
            app.show_notice("Select a car", "Please select a car to rent.")
        }
        BookingError::InvalidDays(_) => {
            app.show_notice("Enter days", "Please enter a valid number of days (>=1).")
        }
    }
}

fn request_rent(app: &mut App) -> Effect {
    let Some(rent) = app.rent_screen_mut() else {
        return Effect::None;
    };
    match rent.draft.quote() {
        Ok(quote) => {
            debug!(
                "Opening booking modal: {} x {} days = {}",
                quote.car.display_name(),
                quote.days,
                quote.total
            );
            rent.modal = ModalState::Visible;
        }
        Err(e) => show_booking_error(app, &e),
    }
    Effect::None
}

fn confirm_booking(app: &mut App) -> Effect {
    let Some(rent) = app.rent_screen_mut() else {
        return Effect::None;
    };
    if rent.modal != ModalState::Visible {
        debug!("ConfirmBooking ignored, modal not open");
        return Effect::None;
    }
    rent.modal = ModalState::Hidden;

    let quote = match rent.draft.quote() {
        Ok(quote) => quote,
        Err(e) => {
            show_booking_error(app, &e);
            return Effect::None;
        }
    };
    rent.draft.clear();

    let result = quote.confirm(Local::now());
    match serde_json::to_string(&result) {
        Ok(json) => info!("Booking confirmed: {json}"),
        Err(e) => warn!("Could not serialize booking for log: {e}"),
    }
    app.status_message = format!(
        "Booked {} for {}",
        result.car.display_name(),
        format_money(&app.currency_symbol, result.total)
    );
    app.navigator.push(Screen::Confirmation(Some(result)));
    Effect::None
}
