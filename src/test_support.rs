//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::action::{Action, update};
use crate::core::catalog::CarCatalog;
use crate::core::session::Role;
use crate::core::state::App;

/// Creates a test App with the two demo cars and the default currency.
pub fn test_app() -> App {
    App::new(CarCatalog::seeded(), "R")
}

/// Submits the login form.
pub fn login_as(app: &mut App, username: &str, role: Role) {
    update(
        app,
        Action::Login {
            username: username.to_string(),
            role,
        },
    );
}
