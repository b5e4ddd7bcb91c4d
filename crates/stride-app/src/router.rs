//! # Screen Router
//!
//! The pure mapping from session state to the top-level screen identifier.
//! The presentation layer performs the actual transition; this module has
//! no state and no failure modes.

use crate::session::SessionState;
use serde::{Deserialize, Serialize};

/// Top-level screen identifier consumed by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Screen {
    /// The login screen.
    Login,
    /// The onboarding flow.
    Onboarding,
    /// The main tabbed navigation.
    MainNavigation,
}

/// Derive the visible screen from the session state. Total and pure.
#[must_use]
pub fn route(state: SessionState) -> Screen {
    match state {
        SessionState::LoggedOut => Screen::Login,
        SessionState::Onboarding => Screen::Onboarding,
        SessionState::Active => Screen::MainNavigation,
    }
}
