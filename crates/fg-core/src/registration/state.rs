use serde::Serialize;

use crate::registration::{FlowError, OtpChallenge};

/// Registration session state.
///
/// Invariant: only `AwaitingOtp` and `Verifying` carry an [`OtpChallenge`];
/// every other state carries none.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SessionState {
    /// Collecting draft fields; `error` holds the last surfaced failure.
    Idle { error: Option<FlowError> },
    /// Draft checks are running; no network call has been made yet.
    Validating,
    /// An OTP request is in flight for `email`.
    RequestingOtp { email: String },
    /// A code was delivered; waiting for the user to enter it.
    AwaitingOtp {
        challenge: OtpChallenge,
        error: Option<FlowError>,
    },
    /// A verify-and-register call is in flight.
    Verifying { challenge: OtpChallenge },
    /// Terminal success; the session is inert from here on.
    Committed,
    /// The OTP request failed; the user may resubmit to re-enter the flow.
    RequestFailed { error: FlowError },
}

impl SessionState {
    pub fn idle() -> Self {
        Self::Idle { error: None }
    }

    /// The outstanding challenge, if the state carries one.
    pub fn challenge(&self) -> Option<&OtpChallenge> {
        match self {
            Self::AwaitingOtp { challenge, .. } | Self::Verifying { challenge } => Some(challenge),
            _ => None,
        }
    }

    pub fn is_committed(&self) -> bool {
        matches!(self, Self::Committed)
    }
}

#[cfg(test)]
mod tests {
    use super::SessionState;
    use crate::registration::OtpChallenge;
    use chrono::{TimeZone, Utc};

    #[test]
    fn only_challenge_states_carry_a_challenge() {
        let challenge = OtpChallenge::issued(
            "a@b.com",
            Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
            30,
        );
        assert!(SessionState::idle().challenge().is_none());
        assert!(SessionState::Validating.challenge().is_none());
        assert!(SessionState::Committed.challenge().is_none());
        let awaiting = SessionState::AwaitingOtp {
            challenge: challenge.clone(),
            error: None,
        };
        assert_eq!(awaiting.challenge(), Some(&challenge));
        let verifying = SessionState::Verifying { challenge };
        assert!(verifying.challenge().is_some());
    }

    #[test]
    fn states_serialize_for_the_presentation_layer() {
        let json = serde_json::to_value(SessionState::idle()).unwrap();
        assert_eq!(json, serde_json::json!({ "Idle": { "error": null } }));
        assert!(SessionState::Committed.is_committed());
    }
}
