//! # Application State
//!
//! Core business state for the booking app. This module contains domain
//! logic only, no TUI-specific types. Presentation state lives in the `tui`
//! module.
//!
//! ```text
//! App
//! ├── catalog: CarCatalog           // shared car list (admin writes, all read)
//! ├── navigator: Navigator          // screen stack + screen-local state
//! ├── session: Option<Session>      // who is logged in
//! ├── notice: Option<Notice>        // blocking validation message
//! ├── status_message: String        // title bar text
//! ├── currency_symbol: String       // prefix for money
//! └── default_role: Role            // preselected on the login screen
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::catalog::CarCatalog;
use crate::core::config::ResolvedConfig;
use crate::core::flow::{Navigator, RentScreen, Screen};
use crate::core::session::{Role, Session};

/// A blocking message shown over the current screen until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

pub struct App {
    pub catalog: CarCatalog,
    pub navigator: Navigator,
    pub session: Option<Session>,
    pub notice: Option<Notice>,
    pub status_message: String,
    pub currency_symbol: String,
    pub default_role: Role,
}

impl App {
    pub fn new(catalog: CarCatalog, currency_symbol: impl Into<String>) -> Self {
        Self {
            catalog,
            navigator: Navigator::new(),
            session: None,
            notice: None,
            status_message: String::from("Welcome to ICE Car Booking!"),
            currency_symbol: currency_symbol.into(),
            default_role: Role::default(),
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        let mut app = Self::new(config.build_catalog(), config.currency_symbol.clone());
        app.default_role = config.default_role;
        app
    }

    pub fn screen(&self) -> &Screen {
        self.navigator.current()
    }

    /// The rent screen's state, if that is the current screen.
    pub fn rent_screen(&self) -> Option<&RentScreen> {
        match self.navigator.current() {
            Screen::CustomerRent(rent) => Some(rent),
            _ => None,
        }
    }

    pub fn rent_screen_mut(&mut self) -> Option<&mut RentScreen> {
        match self.navigator.current_mut() {
            Screen::CustomerRent(rent) => Some(rent),
            _ => None,
        }
    }

    pub fn show_notice(&mut self, title: &str, message: &str) {
        self.notice = Some(Notice::new(title, message));
    }
}
