//! # Session Core
//!
//! The finite state machine over the app's coarse-grained modes. All
//! asynchronous work (identity lookup, health probe, participant creation,
//! onboarding persistence) happens outside the machine and re-enters as
//! discrete [`SessionEvent`]s; transitions are synchronous, total, and
//! atomic. Events that are not valid for the current state are ignored so
//! duplicate or late delivery from the async layer is harmless.
//!
//! The machine performs no side effects itself. Each transition returns the
//! [`SessionEffect`]s the caller must run; the workflow layer executes them
//! through the service traits.

use serde::{Deserialize, Serialize};

/// Coarse-grained application mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionState {
    /// No authenticated identity; the login screen is shown.
    LoggedOut,
    /// Freshly logged in, onboarding not yet finished.
    Onboarding,
    /// Authenticated and onboarded; the main navigation is shown.
    Active,
}

/// Events delivered to the session core by the excluded presentation and
/// auth layers. This enum is their contract surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// The login provider reported success.
    LoginSucceeded,
    /// The user backed out of the login flow.
    LoginCancelled,
    /// The login provider reported a failure.
    LoginFailed {
        /// Provider-supplied reason, surfaced to the user by the frontend.
        reason: String,
    },
    /// The launch health probe reached the backend.
    HealthCheckSucceeded,
    /// The launch health probe could not reach the backend.
    HealthCheckFailed,
    /// The user finished the onboarding flow.
    OnboardingFinished,
    /// The user asked to log out.
    LogoutRequested,
}

/// External work a transition requires.
///
/// Descriptions only; the session core never performs them inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEffect {
    /// Register the freshly logged-in user with the backend
    /// (fire-and-forget; failures never re-enter the machine).
    CreateParticipant,
    /// Persist the onboarding-complete flag in the host store.
    PersistOnboardingComplete,
    /// Clear the stored identity.
    ClearIdentity,
    /// Surface a connectivity notice to the user. Emitted at most once per
    /// launch.
    NotifyConnectivityFailure,
}

/// The session state machine.
///
/// Constructed explicitly at launch and passed by reference to its
/// consumers; there is no ambient singleton. Single writer (the event
/// dispatcher), many readers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    state: SessionState,
    onboarding_complete: bool,
    launched_with_identity: bool,
    // One-shot latch for the launch health probe. Starts settled when the
    // probe is skipped (no identity), so stray health events are ignored.
    probe_settled: bool,
}

impl Session {
    /// Resolve the initial state from the two launch facts.
    ///
    /// Without a stored identity the session starts logged out and the
    /// health probe is skipped entirely. With one, the session enters
    /// `Active` immediately; a later [`SessionEvent::HealthCheckFailed`]
    /// kicks it back to `LoggedOut` for this launch.
    pub fn at_launch(has_identity: bool, onboarding_complete: bool) -> Self {
        let state = if has_identity {
            SessionState::Active
        } else {
            SessionState::LoggedOut
        };
        tracing::info!(?state, has_identity, onboarding_complete, "session launched");
        Self {
            state,
            onboarding_complete,
            launched_with_identity: has_identity,
            probe_settled: !has_identity,
        }
    }

    /// Current state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Whether onboarding has been completed (launch fact, updated when
    /// [`SessionEvent::OnboardingFinished`] is handled).
    pub fn onboarding_complete(&self) -> bool {
        self.onboarding_complete
    }

    /// Apply one event, returning the effects the caller must run.
    ///
    /// Total over every (state, event) combination; invalid combinations
    /// are no-ops that return no effects.
    pub fn handle(&mut self, event: SessionEvent) -> Vec<SessionEffect> {
        let before = self.state;
        let effects = match (self.state, event) {
            (SessionState::LoggedOut, SessionEvent::LoginSucceeded) => {
                if self.onboarding_complete {
                    self.state = SessionState::Active;
                    vec![]
                } else {
                    self.state = SessionState::Onboarding;
                    vec![SessionEffect::CreateParticipant]
                }
            }

            (SessionState::Onboarding, SessionEvent::OnboardingFinished) => {
                self.state = SessionState::Active;
                self.onboarding_complete = true;
                vec![SessionEffect::PersistOnboardingComplete]
            }

            (SessionState::Active, SessionEvent::LogoutRequested) => {
                self.state = SessionState::LoggedOut;
                vec![SessionEffect::ClearIdentity]
            }

            (_, SessionEvent::HealthCheckSucceeded) => {
                if self.launched_with_identity && !self.probe_settled {
                    self.probe_settled = true;
                }
                vec![]
            }

            (_, SessionEvent::HealthCheckFailed) => {
                if self.launched_with_identity && !self.probe_settled {
                    self.probe_settled = true;
                    self.state = SessionState::LoggedOut;
                    vec![SessionEffect::NotifyConnectivityFailure]
                } else {
                    vec![]
                }
            }

            // Login failures and cancellations are reported upward by the
            // frontend; the machine only reacts to explicit success.
            (_, SessionEvent::LoginFailed { reason }) => {
                tracing::warn!(%reason, "login failed, state unchanged");
                vec![]
            }
            (_, SessionEvent::LoginCancelled) => vec![],

            // Late or duplicate delivery of anything else.
            (state, event) => {
                tracing::debug!(?state, ?event, "ignoring event not valid for state");
                vec![]
            }
        };

        if self.state != before {
            // Any transition supersedes the launch probe: a late outcome
            // must not kick a session the user has since moved elsewhere.
            self.probe_settled = true;
            tracing::info!(from = ?before, to = ?self.state, "session transition");
        }
        effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_identity_starts_logged_out_and_skips_probe() {
        let mut session = Session::at_launch(false, false);
        assert_eq!(session.state(), SessionState::LoggedOut);

        // Stray probe events change nothing and emit no notice.
        assert!(session.handle(SessionEvent::HealthCheckFailed).is_empty());
        assert_eq!(session.state(), SessionState::LoggedOut);
        assert!(session.handle(SessionEvent::HealthCheckSucceeded).is_empty());
    }

    #[test]
    fn test_identity_with_healthy_backend_stays_active() {
        let mut session = Session::at_launch(true, true);
        assert_eq!(session.state(), SessionState::Active);
        assert!(session.handle(SessionEvent::HealthCheckSucceeded).is_empty());
        assert_eq!(session.state(), SessionState::Active);
    }

    #[test]
    fn test_probe_failure_forces_logged_out_with_single_notice() {
        let mut session = Session::at_launch(true, true);
        let effects = session.handle(SessionEvent::HealthCheckFailed);
        assert_eq!(effects, vec![SessionEffect::NotifyConnectivityFailure]);
        assert_eq!(session.state(), SessionState::LoggedOut);

        // The latch makes a duplicate failure a no-op: exactly one notice.
        assert!(session.handle(SessionEvent::HealthCheckFailed).is_empty());
        assert_eq!(session.state(), SessionState::LoggedOut);
    }

    #[test]
    fn test_first_login_goes_through_onboarding() {
        let mut session = Session::at_launch(false, false);

        let effects = session.handle(SessionEvent::LoginSucceeded);
        assert_eq!(effects, vec![SessionEffect::CreateParticipant]);
        assert_eq!(session.state(), SessionState::Onboarding);

        let effects = session.handle(SessionEvent::OnboardingFinished);
        assert_eq!(effects, vec![SessionEffect::PersistOnboardingComplete]);
        assert_eq!(session.state(), SessionState::Active);
        assert!(session.onboarding_complete());
    }

    #[test]
    fn test_returning_login_skips_onboarding() {
        let mut session = Session::at_launch(false, true);
        let effects = session.handle(SessionEvent::LoginSucceeded);
        assert!(effects.is_empty());
        assert_eq!(session.state(), SessionState::Active);
    }

    #[test]
    fn test_logout_cycles_back_to_logged_out() {
        let mut session = Session::at_launch(true, true);
        let effects = session.handle(SessionEvent::LogoutRequested);
        assert_eq!(effects, vec![SessionEffect::ClearIdentity]);
        assert_eq!(session.state(), SessionState::LoggedOut);

        // The machine has no terminal state: login works again.
        assert!(session.handle(SessionEvent::LoginSucceeded).is_empty());
        assert_eq!(session.state(), SessionState::Active);
    }

    #[test]
    fn test_login_failure_and_cancel_leave_state_unchanged() {
        let mut session = Session::at_launch(false, false);
        assert!(session
            .handle(SessionEvent::LoginFailed {
                reason: "denied".into()
            })
            .is_empty());
        assert!(session.handle(SessionEvent::LoginCancelled).is_empty());
        assert_eq!(session.state(), SessionState::LoggedOut);
    }

    #[test]
    fn test_every_combination_is_total() {
        // No (state, event) pair may panic, whatever the current state.
        let events = || {
            vec![
                SessionEvent::LoginSucceeded,
                SessionEvent::LoginCancelled,
                SessionEvent::LoginFailed {
                    reason: "x".into(),
                },
                SessionEvent::HealthCheckSucceeded,
                SessionEvent::HealthCheckFailed,
                SessionEvent::OnboardingFinished,
                SessionEvent::LogoutRequested,
            ]
        };

        for has_identity in [false, true] {
            for onboarded in [false, true] {
                for first in events() {
                    for second in events() {
                        let mut session = Session::at_launch(has_identity, onboarded);
                        session.handle(first.clone());
                        session.handle(second);
                    }
                }
            }
        }
    }

    #[test]
    fn test_duplicate_login_success_is_ignored() {
        let mut session = Session::at_launch(false, true);
        session.handle(SessionEvent::LoginSucceeded);
        assert_eq!(session.state(), SessionState::Active);

        // A duplicate success while already active must not re-trigger
        // participant creation.
        assert!(session.handle(SessionEvent::LoginSucceeded).is_empty());
        assert_eq!(session.state(), SessionState::Active);
    }

    #[test]
    fn test_onboarding_finished_outside_onboarding_is_noop() {
        let mut session = Session::at_launch(true, true);
        assert!(session.handle(SessionEvent::OnboardingFinished).is_empty());
        assert_eq!(session.state(), SessionState::Active);
    }

    #[test]
    fn test_late_probe_failure_after_relogin_is_ignored() {
        // Launch with identity but resolve the probe only after the user
        // has logged out and back in; the stale failure must not eject the
        // fresh session.
        let mut session = Session::at_launch(true, false);
        session.handle(SessionEvent::LogoutRequested);
        session.handle(SessionEvent::LoginSucceeded);
        assert_eq!(session.state(), SessionState::Onboarding);

        assert!(session.handle(SessionEvent::HealthCheckFailed).is_empty());
        assert_eq!(session.state(), SessionState::Onboarding);
    }

    #[test]
    fn test_event_serde_roundtrip() {
        // Events cross the frontend boundary; their wire shape must survive
        // a serialize-deserialize cycle.
        let events = vec![
            SessionEvent::LoginSucceeded,
            SessionEvent::LoginFailed {
                reason: "denied".into(),
            },
            SessionEvent::HealthCheckFailed,
            SessionEvent::LogoutRequested,
        ];
        let json = serde_json::to_string(&events).unwrap();
        let back: Vec<SessionEvent> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, events);
    }
}
