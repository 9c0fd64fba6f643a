use crate::registration::{FlowError, RegisteredAccount, ValidationError};

/// Events that drive the registration flow.
///
/// `Submit`, `Resend`, `Verify` and `Cancel` are user intents forwarded by
/// the presentation layer; the rest are outcomes fed back by the session
/// (validation results and gateway completions).
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// User submits the draft.
    Submit,
    /// Draft checks passed; `email` is the address to challenge.
    ValidationPassed { email: String },
    /// Draft checks failed.
    ValidationFailed { error: ValidationError },
    /// The server accepted the OTP request and sent a code.
    OtpRequestAccepted,
    /// The OTP request failed.
    OtpRequestFailed { error: FlowError },
    /// User asks for the code to be sent again. The session samples its
    /// cooldown timer when translating the intent; the guard stays in the
    /// machine.
    Resend { cooldown_remaining: u32 },
    /// User submits a code for verification.
    Verify { code: String },
    /// The server verified the code and created the account.
    VerifyAccepted { account: RegisteredAccount },
    /// Verification failed (wrong code, rejection, or transport failure).
    VerifyFailed { error: FlowError },
    /// User abandons the OTP challenge.
    Cancel,
}
