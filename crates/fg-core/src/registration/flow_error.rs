use serde::Serialize;

use crate::ports::gateway::GatewayError;
use crate::registration::ValidationError;

/// A failure surfaced to the presentation layer as a displayable message.
///
/// Every variant leaves the session in a retryable state; none is fatal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize)]
pub enum FlowError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("The verification code is incorrect or has expired")]
    InvalidOtp,
    /// Business-rule rejection, surfaced verbatim.
    #[error("{message}")]
    ServerRejection { message: String },
    #[error("Could not reach the server. Please try again.")]
    Network { message: String },
}

impl From<GatewayError> for FlowError {
    fn from(error: GatewayError) -> Self {
        match error {
            GatewayError::InvalidOtp => Self::InvalidOtp,
            GatewayError::ServerRejection { message } => Self::ServerRejection { message },
            GatewayError::Network { message } => Self::Network { message },
        }
    }
}
