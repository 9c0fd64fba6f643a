use chrono::{DateTime, Utc};
use serde::Serialize;

/// One outstanding server-issued verification code.
///
/// Created when an OTP request is accepted and destroyed when verification
/// succeeds, the user cancels, or a resend mints a replacement. At most one
/// challenge exists per session at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OtpChallenge {
    /// Address the code was delivered to; must equal the draft email at
    /// verification time.
    pub email: String,
    pub issued_at: DateTime<Utc>,
    pub cooldown_seconds: u32,
}

impl OtpChallenge {
    pub fn issued(email: impl Into<String>, now: DateTime<Utc>, cooldown_seconds: u32) -> Self {
        Self {
            email: email.into(),
            issued_at: now,
            cooldown_seconds,
        }
    }
}
