//! Registration state machine.
//!
//! Pure state transition function for the OTP-gated enrollment flow. Side
//! effects come out as [`SessionAction`] values; the session executes them
//! and feeds the outcomes back in as events.

use chrono::{DateTime, Utc};
use tracing::warn;

use crate::registration::action::SessionAction;
use crate::registration::challenge::OtpChallenge;
use crate::registration::event::SessionEvent;
use crate::registration::flow_error::FlowError;
use crate::registration::state::SessionState;

/// Minimum enforced interval between successive OTP resend requests.
pub const RESEND_COOLDOWN_SECS: u32 = 30;

pub struct RegistrationStateMachine;

impl RegistrationStateMachine {
    pub fn transition(
        state: SessionState,
        event: SessionEvent,
    ) -> (SessionState, Vec<SessionAction>) {
        Self::transition_at(state, event, Utc::now())
    }

    pub(crate) fn transition_at(
        state: SessionState,
        event: SessionEvent,
        now: DateTime<Utc>,
    ) -> (SessionState, Vec<SessionAction>) {
        match (state, event) {
            // ===== Submit =====
            (SessionState::Idle { .. }, SessionEvent::Submit) => {
                (SessionState::Validating, vec![SessionAction::RunValidation])
            }
            (SessionState::RequestFailed { .. }, SessionEvent::Submit) => {
                (SessionState::Validating, vec![SessionAction::RunValidation])
            }

            // ===== Validation outcome =====
            (SessionState::Validating, SessionEvent::ValidationPassed { email }) => (
                SessionState::RequestingOtp { email },
                vec![SessionAction::SendOtpRequest],
            ),
            (SessionState::Validating, SessionEvent::ValidationFailed { error }) => (
                SessionState::Idle {
                    error: Some(FlowError::Validation(error)),
                },
                Vec::new(),
            ),

            // ===== OTP request outcome =====
            (SessionState::RequestingOtp { email }, SessionEvent::OtpRequestAccepted) => (
                SessionState::AwaitingOtp {
                    challenge: OtpChallenge::issued(email, now, RESEND_COOLDOWN_SECS),
                    error: None,
                },
                vec![SessionAction::StartResendCooldown {
                    seconds: RESEND_COOLDOWN_SECS,
                }],
            ),
            (SessionState::RequestingOtp { .. }, SessionEvent::OtpRequestFailed { error }) => {
                (SessionState::RequestFailed { error }, Vec::new())
            }

            // ===== Resend =====
            (
                SessionState::AwaitingOtp { challenge, .. },
                SessionEvent::Resend {
                    cooldown_remaining: 0,
                },
            ) => (
                SessionState::RequestingOtp {
                    email: challenge.email,
                },
                vec![SessionAction::SendOtpRequest],
            ),
            // cooldown still running: silently disabled, never reaches the gateway
            (state @ SessionState::AwaitingOtp { .. }, SessionEvent::Resend { .. }) => {
                (state, Vec::new())
            }

            // ===== Verify =====
            (
                SessionState::AwaitingOtp { challenge, .. },
                SessionEvent::Verify { code },
            ) => (
                SessionState::Verifying { challenge },
                vec![SessionAction::SendVerifyRequest { code }],
            ),
            (SessionState::Verifying { .. }, SessionEvent::VerifyAccepted { account }) => (
                SessionState::Committed,
                vec![
                    SessionAction::StopResendCooldown,
                    SessionAction::AnnounceCommitted { account },
                ],
            ),
            // the challenge survives a failed verify; the cooldown is untouched
            (SessionState::Verifying { challenge }, SessionEvent::VerifyFailed { error }) => (
                SessionState::AwaitingOtp {
                    challenge,
                    error: Some(error),
                },
                Vec::new(),
            ),

            // ===== Cancel =====
            (SessionState::AwaitingOtp { .. }, SessionEvent::Cancel) => (
                SessionState::idle(),
                vec![SessionAction::StopResendCooldown],
            ),

            // ===== Terminal =====
            (state @ SessionState::Committed, _) => (state, Vec::new()),

            // ===== Invalid =====
            (state, event) => {
                warn!(?state, ?event, "invalid registration transition");
                (state, Vec::new())
            }
        }
    }
}
