//! Registration gateway port.
//!
//! Abstract network boundary for the OTP and registration requests. The
//! transport, timeouts, and response decoding live behind this trait;
//! implementations are provided by the infrastructure layer and swapped for
//! mocks in tests.

use async_trait::async_trait;

use crate::registration::{RegisteredAccount, RegistrationDraft};

/// Server acknowledgement for an accepted OTP request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpRequestAck {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    #[error("invalid verification code")]
    InvalidOtp,

    #[error("server rejected the request: {message}")]
    ServerRejection { message: String },

    #[error("network failure: {message}")]
    Network { message: String },
}

/// Both operations are asynchronous and carry no cancellation primitive:
/// the session discards late resolutions by request token instead. Neither
/// is safe to fire twice concurrently; the cooldown guard prevents that for
/// resends.
#[async_trait]
pub trait RegistrationGatewayPort: Send + Sync {
    /// Ask the server to email a one-time passcode to `email`.
    async fn request_otp(
        &self,
        email: &str,
        first_name: &str,
    ) -> Result<OtpRequestAck, GatewayError>;

    /// Submit the draft plus the entered code; on success the account is
    /// created server-side.
    async fn verify_and_register(
        &self,
        draft: &RegistrationDraft,
        otp: &str,
    ) -> Result<RegisteredAccount, GatewayError>;
}
