//! Registration domain module.
//!
//! Defines the registration draft, its validation rules, the OTP challenge
//! lifecycle, and the state machine that drives an enrollment attempt.

pub mod account;
pub mod action;
pub mod challenge;
pub mod draft;
pub mod event;
pub mod flow_error;
pub mod state;
pub mod state_machine;
pub mod validator;

pub use account::RegisteredAccount;
pub use action::SessionAction;
pub use challenge::OtpChallenge;
pub use draft::RegistrationDraft;
pub use event::SessionEvent;
pub use flow_error::FlowError;
pub use state::SessionState;
pub use state_machine::{RegistrationStateMachine, RESEND_COOLDOWN_SECS};
pub use validator::{ValidationError, Validator};
