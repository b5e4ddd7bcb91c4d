//! Launch and session-event workflow
//!
//! [`SessionDriver`] is the single writer of the session state machine. It
//! resolves the two launch facts, runs the health probe at most once, and
//! executes the effects each transition returns through the service traits.
//! Consumers read the current screen from the driver; the driver never
//! renders anything.

use crate::router::{route, Screen};
use crate::services::{
    HealthProbe, HealthStatus, IdentityStore, Notice, NoticeSink, OnboardingStore,
    ParticipantService,
};
use crate::session::{Session, SessionEffect, SessionEvent, SessionState};
use std::sync::Arc;

/// Owns the session state machine and the external services its effects
/// touch. Passed by reference to every consumer; there is no ambient
/// singleton session.
pub struct SessionDriver {
    session: Session,
    identity: Arc<dyn IdentityStore>,
    onboarding: Arc<dyn OnboardingStore>,
    participants: Arc<dyn ParticipantService>,
    notices: Arc<dyn NoticeSink>,
}

impl SessionDriver {
    /// Resolve the launch facts, construct the session, and run the
    /// one-shot health probe (skipped entirely when no identity is stored).
    pub async fn launch(
        identity: Arc<dyn IdentityStore>,
        onboarding: Arc<dyn OnboardingStore>,
        probe: Arc<dyn HealthProbe>,
        participants: Arc<dyn ParticipantService>,
        notices: Arc<dyn NoticeSink>,
    ) -> Self {
        let has_identity = identity.stored_identity().await.is_some();
        let onboarding_complete = onboarding.onboarding_complete().await;

        let mut driver = Self {
            session: Session::at_launch(has_identity, onboarding_complete),
            identity,
            onboarding,
            participants,
            notices,
        };

        if has_identity {
            let outcome = probe.check().await;
            tracing::info!(?outcome, "launch health probe settled");
            let event = match outcome {
                HealthStatus::Reachable => SessionEvent::HealthCheckSucceeded,
                HealthStatus::Unreachable => SessionEvent::HealthCheckFailed,
            };
            driver.dispatch(event).await;
        }

        driver
    }

    /// Apply one event to the session and execute the resulting effects.
    pub async fn dispatch(&mut self, event: SessionEvent) {
        let effects = self.session.handle(event);
        for effect in effects {
            self.run_effect(effect).await;
        }
    }

    /// Current session state.
    pub fn state(&self) -> SessionState {
        self.session.state()
    }

    /// The screen the presentation layer should show right now.
    pub fn screen(&self) -> Screen {
        route(self.session.state())
    }

    async fn run_effect(&mut self, effect: SessionEffect) {
        match effect {
            SessionEffect::CreateParticipant => {
                // Fire-and-forget: a failure here must not disturb the
                // session, the user retries nothing.
                match self.identity.stored_identity().await {
                    Some(user) => {
                        if let Err(err) = self.participants.create_participant(&user).await {
                            tracing::warn!(%user, %err, "participant creation failed");
                        }
                    }
                    None => {
                        tracing::warn!("login succeeded but no identity is stored");
                    }
                }
            }
            SessionEffect::PersistOnboardingComplete => {
                self.onboarding.set_onboarding_complete().await;
            }
            SessionEffect::ClearIdentity => {
                self.identity.clear_identity().await;
            }
            SessionEffect::NotifyConnectivityFailure => {
                self.notices.notify(Notice::ConnectivityFailure);
            }
        }
    }
}
