//! # fg-core
//!
//! Core domain models and business logic for FaceGate registration.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod cooldown;
pub mod ports;
pub mod registration;
pub mod security;

// Re-export commonly used types at the crate root
pub use cooldown::CooldownTimer;
pub use registration::{
    FlowError, OtpChallenge, RegisteredAccount, RegistrationDraft, RegistrationStateMachine,
    SessionAction, SessionEvent, SessionState, ValidationError, Validator, RESEND_COOLDOWN_SECS,
};
pub use security::Secret;
