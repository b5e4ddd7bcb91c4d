//! # Workflows - Portable Business Logic
//!
//! Async coordinators that sit between the pure core and the external
//! services. Workflows own the service trait objects, run the asynchronous
//! work, and feed outcomes back into the session core as events. They
//! return domain types; display formatting belongs to the frontends.

pub mod launch;
pub mod roster;

pub use launch::SessionDriver;
pub use roster::load_roster;
