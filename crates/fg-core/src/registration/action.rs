use crate::registration::RegisteredAccount;

/// Side-effects produced by state transitions.
///
/// The machine never performs these itself; the session executes them and
/// feeds outcomes back in as events.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionAction {
    /// Run the synchronous draft checks and feed the outcome back.
    RunValidation,
    /// Call the gateway's OTP request for the current draft.
    SendOtpRequest,
    /// Call the gateway's verify-and-register with the entered code.
    SendVerifyRequest { code: String },
    /// Arm the resend cooldown, replacing any previous countdown.
    StartResendCooldown { seconds: u32 },
    /// Stop the cooldown tick source; no further decrements.
    StopResendCooldown,
    /// Notify the presentation layer that enrollment committed.
    AnnounceCommitted { account: RegisteredAccount },
}
