//! # Screen Flow
//!
//! Four screens and the stack that moves between them.
//!
//! ```text
//! Login ──login(admin)────► AdminAddCar ──logout──► Login        (replace)
//! Login ──login(customer)─► CustomerRent ──logout─► Login        (replace)
//! CustomerRent ──confirm──► Confirmation                         (push)
//! Confirmation ──back─────► CustomerRent                         (pop)
//! Confirmation ──home─────► Login                    (pop to top, replace)
//! ```
//!
//! Every screen carries a typed parameter record. Screen-local state such as
//! the booking draft lives inside its screen, so replacing or popping a screen
//! throws that state away with it.

use log::debug;

use crate::core::booking::{BookingDraft, BookingResult};

/// Carried from Login to whichever screen the role leads to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginParams {
    pub user: String,
}

pub type ConfirmationParams = BookingResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Hidden,
    Visible,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RentScreen {
    pub params: LoginParams,
    pub draft: BookingDraft,
    pub modal: ModalState,
}

impl RentScreen {
    pub fn new(params: LoginParams) -> Self {
        Self {
            params,
            draft: BookingDraft::default(),
            modal: ModalState::Hidden,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Login,
    AdminAddCar(LoginParams),
    CustomerRent(RentScreen),
    /// `None` when reached without a booking payload.
    Confirmation(Option<ConfirmationParams>),
}

/// Discriminant-only view of `Screen`, for comparisons and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenKind {
    Login,
    AdminAddCar,
    CustomerRent,
    Confirmation,
}

impl Screen {
    pub fn kind(&self) -> ScreenKind {
        match self {
            Screen::Login => ScreenKind::Login,
            Screen::AdminAddCar(_) => ScreenKind::AdminAddCar,
            Screen::CustomerRent(_) => ScreenKind::CustomerRent,
            Screen::Confirmation(_) => ScreenKind::Confirmation,
        }
    }
}

/// Navigation stack. Never empty; starts at `Login`.
#[derive(Debug, Clone)]
pub struct Navigator {
    stack: Vec<Screen>,
    revision: u64,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            stack: vec![Screen::Login],
            revision: 0,
        }
    }

    pub fn current(&self) -> &Screen {
        // stack is never empty
        &self.stack[self.stack.len() - 1]
    }

    pub fn current_mut(&mut self) -> &mut Screen {
        let last = self.stack.len() - 1;
        &mut self.stack[last]
    }

    pub fn kind(&self) -> ScreenKind {
        self.current().kind()
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Bumped on every transition, so adapters can reset view state.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Swap the current screen out; there is no way back to it.
    pub fn replace(&mut self, screen: Screen) {
        debug!("Navigate: replace {:?} with {:?}", self.kind(), screen.kind());
        let last = self.stack.len() - 1;
        self.stack[last] = screen;
        self.revision += 1;
    }

    /// Open `screen` on top, keeping the current one underneath.
    pub fn push(&mut self, screen: Screen) {
        debug!("Navigate: push {:?} over {:?}", screen.kind(), self.kind());
        self.stack.push(screen);
        self.revision += 1;
    }

    /// Return to the screen underneath. False if already at the root.
    pub fn pop(&mut self) -> bool {
        if self.stack.len() <= 1 {
            return false;
        }
        let popped = self.stack.pop().map(|s| s.kind());
        debug!("Navigate: pop {:?}, now at {:?}", popped, self.kind());
        self.revision += 1;
        true
    }

    /// Drop everything above the root screen.
    pub fn pop_to_top(&mut self) {
        if self.stack.len() > 1 {
            self.stack.truncate(1);
            debug!("Navigate: pop to top, now at {:?}", self.kind());
            self.revision += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> LoginParams {
        LoginParams { user: "alice".into() }
    }

    #[test]
    fn test_starts_at_login() {
        let nav = Navigator::new();
        assert_eq!(nav.kind(), ScreenKind::Login);
        assert_eq!(nav.depth(), 1);
        assert_eq!(nav.revision(), 0);
    }

    #[test]
    fn test_replace_keeps_depth() {
        let mut nav = Navigator::new();
        nav.replace(Screen::AdminAddCar(alice()));
        assert_eq!(nav.kind(), ScreenKind::AdminAddCar);
        assert_eq!(nav.depth(), 1);
        assert!(!nav.pop(), "replaced screen must not be reachable");
        assert_eq!(nav.kind(), ScreenKind::AdminAddCar);
    }

    #[test]
    fn test_push_then_pop() {
        let mut nav = Navigator::new();
        nav.replace(Screen::CustomerRent(RentScreen::new(alice())));
        nav.push(Screen::Confirmation(None));
        assert_eq!(nav.depth(), 2);
        assert!(nav.pop());
        assert_eq!(nav.kind(), ScreenKind::CustomerRent);
    }

    #[test]
    fn test_pop_to_top() {
        let mut nav = Navigator::new();
        nav.push(Screen::Confirmation(None));
        nav.push(Screen::Confirmation(None));
        nav.pop_to_top();
        assert_eq!(nav.depth(), 1);
        assert_eq!(nav.kind(), ScreenKind::Login);
    }

    #[test]
    fn test_revision_tracks_transitions() {
        let mut nav = Navigator::new();
        nav.replace(Screen::AdminAddCar(alice()));
        nav.replace(Screen::Login);
        assert_eq!(nav.revision(), 2);
        nav.pop_to_top(); // no-op at root
        assert!(!nav.pop());
        assert_eq!(nav.revision(), 2);
    }

    #[test]
    fn test_current_mut_edits_screen_state() {
        let mut nav = Navigator::new();
        nav.replace(Screen::CustomerRent(RentScreen::new(alice())));
        if let Screen::CustomerRent(rent) = nav.current_mut() {
            rent.draft.days = "3".into();
        }
        match nav.current() {
            Screen::CustomerRent(rent) => assert_eq!(rent.draft.days, "3"),
            other => panic!("unexpected screen {other:?}"),
        }
    }
}
