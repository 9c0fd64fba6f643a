//! Port interfaces for the application layer.
//!
//! Ports define the contract between the registration session and
//! infrastructure implementations, keeping the core independent of any
//! transport or runtime.

pub mod events;
pub mod gateway;
pub mod ticker;

pub use events::SessionEventPort;
pub use gateway::{GatewayError, OtpRequestAck, RegistrationGatewayPort};
pub use ticker::ResendTickerPort;
