//! Presentation notification port.
//!
//! The UI layer renders fields bound to the draft, forwards user intents
//! into the session, and observes the session through these emissions. It
//! decides nothing itself: validation and cooldown eligibility live in the
//! core.

use async_trait::async_trait;

use crate::registration::{RegisteredAccount, SessionState};

#[async_trait]
pub trait SessionEventPort: Send + Sync {
    /// The session state changed.
    async fn emit_state_changed(&self, state: SessionState);

    /// The resend cooldown count changed.
    async fn emit_cooldown_changed(&self, remaining: u32);

    /// Enrollment committed; the listener is expected to navigate away.
    async fn emit_committed(&self, account: RegisteredAccount);
}
