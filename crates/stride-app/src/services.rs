//! # External Service Seams
//!
//! Trait boundaries for every external collaborator the workflow layer
//! talks to. Frontends and the network layer implement these; the core
//! only ever sees their success/failure outcomes.
//!
//! All traits are object-safe and `Send + Sync` so a driver can hold them
//! as `Arc<dyn ...>` across await points.

use crate::errors::AppError;
use crate::views::roster::Friend;
use async_trait::async_trait;
use stride_core::UserId;
use tokio::sync::mpsc;

/// Outcome of the one-shot launch health probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthStatus {
    /// The backend answered.
    Reachable,
    /// The backend could not be reached.
    Unreachable,
}

/// User-visible notices the core asks the frontend to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// The launch health probe failed; the app cannot reach the backend.
    ConnectivityFailure,
}

/// Read/clear access to the stored authenticated identity.
///
/// The identity itself is written by the external login SDK; the core only
/// reads it at launch and clears it on logout.
#[async_trait]
pub trait IdentityStore: Send + Sync {
    /// The stored identity, if the user is logged in.
    async fn stored_identity(&self) -> Option<UserId>;

    /// Forget the stored identity.
    async fn clear_identity(&self);
}

/// Persistence of the onboarding-complete flag.
#[async_trait]
pub trait OnboardingStore: Send + Sync {
    /// Whether the user has finished onboarding on this install.
    async fn onboarding_complete(&self) -> bool;

    /// Record that onboarding is finished.
    async fn set_onboarding_complete(&self);
}

/// One-shot backend reachability probe, fired at launch.
#[async_trait]
pub trait HealthProbe: Send + Sync {
    /// Check whether the backend is reachable. Never retried by the core.
    async fn check(&self) -> HealthStatus;
}

/// Backend registration of a freshly logged-in user.
#[async_trait]
pub trait ParticipantService: Send + Sync {
    /// Create the participant record for a user. Fire-and-forget from the
    /// session core's perspective; errors are logged, never fed back.
    async fn create_participant(&self, user: &UserId) -> Result<(), AppError>;
}

/// Push-style source of friend records.
///
/// Records arrive one at a time, in no particular order and at any rate;
/// the returned channel closes when the source is exhausted.
#[async_trait]
pub trait FriendSource: Send + Sync {
    /// Start a fetch and return the stream of incoming records.
    async fn subscribe(&self) -> mpsc::Receiver<Friend>;
}

/// Sink for user-visible notices.
pub trait NoticeSink: Send + Sync {
    /// Display a notice to the user.
    fn notify(&self, notice: Notice);
}
