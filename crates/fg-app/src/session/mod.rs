//! Registration session orchestration.

pub mod registration_session;

pub use registration_session::RegistrationSession;
