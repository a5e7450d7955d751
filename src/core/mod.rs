//! # Core Application Logic
//!
//! This module contains the booking app's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`catalog`]: The shared car list
//! - [`booking`]: Booking draft and price calculation
//! - [`flow`]: Screens and the navigation stack
//! - [`validation`]: Form field rules
//! - [`session`]: Logged-in user and role
//! - [`config`]: Layered settings

pub mod action;
pub mod booking;
pub mod catalog;
pub mod config;
pub mod flow;
pub mod session;
pub mod state;
pub mod validation;
