//! # fg-infra
//!
//! Infrastructure adapters for FaceGate registration: the HTTP gateway,
//! the cooldown tick source, and settings loading.

pub mod http;
pub mod settings;
pub mod time;

pub use http::HttpRegistrationGateway;
pub use settings::GatewaySettings;
pub use time::IntervalTicker;
