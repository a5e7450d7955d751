//! # TUI Components
//!
//! One file per component. Each file holds its state type, its event type,
//! rendering, event handling and tests.
//!
//! ## Component Patterns
//!
//! ### Stateless (props only)
//!
//! Receive everything they draw as fields and are rebuilt every frame:
//! - `TitleBar`: app name, logged-in user and status message
//! - `BookingModal`: booking summary overlay
//! - `Confirmation`: booking confirmation card
//! - `NoticePopup`: blocking validation message
//!
//! ### Stateful (event-driven)
//!
//! Own their local state, live in `TuiState` and emit high-level events:
//! - `TextField`: single-line input shared by every form
//! - `LoginForm`: username, password and role toggle
//! - `CarForm`: the admin's add-car form
//! - `CarListState`: highlighted row of a car list
//! - `RentState`: car picker plus days field
//!
//! Components never touch `App` directly. The adapter reads `App`, passes
//! what a component needs as props, and turns the emitted events into
//! `core::Action` values.
//!
//! ```text
//! components/
//! ├── mod.rs            (this file)
//! ├── popup.rs          (layout helpers)
//! ├── text_field.rs     (single-line input)
//! ├── title_bar.rs      (top status bar)
//! ├── car_list.rs       (catalog list)
//! ├── login.rs          (login card)
//! ├── car_form.rs       (add-car form)
//! ├── rent.rs           (customer screen)
//! ├── booking_modal.rs  (summary overlay)
//! ├── confirmation.rs   (confirmation card)
//! └── notice.rs         (validation popup)
//! ```

pub mod booking_modal;
pub mod car_form;
pub mod car_list;
pub mod confirmation;
pub mod login;
pub mod notice;
pub mod popup;
pub mod rent;
pub mod text_field;
pub mod title_bar;

pub use booking_modal::{BookingModal, ModalEvent};
pub use car_form::{CarForm, CarFormEvent};
pub use car_list::{CarList, CarListState};
pub use confirmation::{Confirmation, ConfirmationEvent};
pub use login::{LoginEvent, LoginForm};
pub use notice::NoticePopup;
pub use rent::{RentEvent, RentState, RentView};
pub use text_field::TextField;
pub use title_bar::TitleBar;
