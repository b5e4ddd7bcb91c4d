//! Stride App - Portable Headless Application Core
//!
//! This crate contains every piece of the Stride walking-challenge client
//! that has real state or algorithmic content, with no rendering attached:
//!
//! - **Session core** ([`session`]): the finite state machine deciding which
//!   top-level mode the app is in (logged out / onboarding / active), driven
//!   by discrete events from the excluded presentation and auth layers.
//! - **Router** ([`router`]): the pure mapping from session state to the
//!   screen the presentation layer should show.
//! - **View state** ([`views`]): the bucketed friend roster for the indexed
//!   team picker, and the bounded team selection.
//! - **Workflows** ([`workflows`]): async coordinators that own the
//!   external-service seams (identity, onboarding flag, health probe,
//!   participant creation, friend source) and feed their outcomes back into
//!   the session core as events.
//!
//! The core never performs I/O itself; all asynchronous work lives behind
//! the [`services`] traits and re-enters as events or executed effects.

pub mod errors;
pub mod router;
pub mod services;
pub mod session;
pub mod views;
pub mod workflows;

pub use errors::{AppError, SelectionError};
pub use router::{route, Screen};
pub use session::{Session, SessionEffect, SessionEvent, SessionState};
pub use views::roster::{BucketKey, Friend, Roster};
pub use views::selection::{TeamSelection, MAX_TEAM_SIZE};
