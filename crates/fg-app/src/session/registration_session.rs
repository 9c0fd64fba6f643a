//! Registration session orchestrator.
//!
//! Coordinates the registration state machine and its side effects: draft
//! ownership, validation, gateway calls, the resend cooldown, and
//! presentation notifications. One instance exists per registration
//! attempt; it is created when the registration surface mounts and shut
//! down when the user navigates away or enrollment commits.

use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use tokio::sync::Mutex;
use tracing::{debug, info_span, warn, Instrument};

use fg_core::ports::{
    GatewayError, OtpRequestAck, RegistrationGatewayPort, ResendTickerPort, SessionEventPort,
};
use fg_core::registration::{
    RegisteredAccount, RegistrationDraft, RegistrationStateMachine, SessionAction, SessionEvent,
    SessionState, Validator,
};
use fg_core::CooldownTimer;

/// Orchestrator that drives registration state and side effects.
///
/// Event processing is serialized behind a single dispatch lock: every
/// transition runs to completion before the next event is handled. Gateway
/// calls are spawned with a monotonic request token; completions whose
/// token no longer matches the current sequence are discarded, which stands
/// in for transport-level cancellation.
pub struct RegistrationSession {
    weak: Weak<RegistrationSession>,

    draft: Mutex<RegistrationDraft>,
    state: Mutex<SessionState>,
    cooldown: Mutex<CooldownTimer>,
    dispatch_lock: Mutex<()>,
    request_seq: AtomicU64,
    closed: AtomicBool,

    gateway: Arc<dyn RegistrationGatewayPort>,
    ticker: Arc<dyn ResendTickerPort>,
    events: Arc<dyn SessionEventPort>,
}

impl RegistrationSession {
    pub fn new(
        gateway: Arc<dyn RegistrationGatewayPort>,
        ticker: Arc<dyn ResendTickerPort>,
        events: Arc<dyn SessionEventPort>,
    ) -> Arc<Self> {
        Arc::new_cyclic(|weak| Self {
            weak: weak.clone(),
            draft: Mutex::new(RegistrationDraft::default()),
            state: Mutex::new(SessionState::idle()),
            cooldown: Mutex::new(CooldownTimer::new()),
            dispatch_lock: Mutex::new(()),
            request_seq: AtomicU64::new(0),
            closed: AtomicBool::new(false),
            gateway,
            ticker,
            events,
        })
    }

    /// Replace the draft wholesale with the presentation layer's bound
    /// field values.
    pub async fn update_draft(&self, draft: RegistrationDraft) {
        *self.draft.lock().await = draft;
    }

    pub async fn state(&self) -> SessionState {
        self.state.lock().await.clone()
    }

    pub async fn cooldown_remaining(&self) -> u32 {
        self.cooldown.lock().await.remaining()
    }

    // ===== User intents =====

    pub async fn submit(&self) -> SessionState {
        self.dispatch(SessionEvent::Submit).await
    }

    pub async fn resend(&self) -> SessionState {
        let cooldown_remaining = self.cooldown_remaining().await;
        self.dispatch(SessionEvent::Resend { cooldown_remaining })
            .await
    }

    pub async fn verify(&self, code: &str) -> SessionState {
        self.dispatch(SessionEvent::Verify {
            code: code.trim().to_string(),
        })
        .await
    }

    pub async fn cancel(&self) -> SessionState {
        self.dispatch(SessionEvent::Cancel).await
    }

    /// Tear the session down: in-flight gateway completions become stale,
    /// the tick source is released, and every later intent is a no-op.
    pub async fn shutdown(&self) {
        self.closed.store(true, Ordering::SeqCst);
        self.request_seq.fetch_add(1, Ordering::SeqCst);
        self.ticker.stop().await;
        self.cooldown.lock().await.cancel();
        debug!("registration session shut down");
    }

    // ===== Dispatch =====

    // Returns a boxed future so the recursive dispatch cycle
    // (dispatch -> execute_action -> spawn -> complete_* -> dispatch) has a
    // concrete `Send` type; this breaks the compiler's auto-trait inference
    // loop without changing any behavior.
    fn dispatch<'a>(
        &'a self,
        event: SessionEvent,
    ) -> Pin<Box<dyn Future<Output = SessionState> + Send + 'a>> {
        Box::pin(async move {
            if self.closed.load(Ordering::SeqCst) {
                return self.state().await;
            }
            let _dispatch_guard = self.dispatch_lock.lock().await;

            let span = info_span!("session.registration.dispatch", event = ?event);
            async {
                // Synchronous follow-up events (validation outcomes) are drained
                // within the same dispatch: run-to-completion, no interleaving.
                let mut queue = VecDeque::from([event]);
                while let Some(event) = queue.pop_front() {
                    let current = self.state.lock().await.clone();
                    let (next, actions) =
                        RegistrationStateMachine::transition(current.clone(), event);
                    if next != current {
                        *self.state.lock().await = next.clone();
                        self.events.emit_state_changed(next).await;
                    }
                    for action in actions {
                        self.execute_action(action, &mut queue).await;
                    }
                }
                self.state.lock().await.clone()
            }
            .instrument(span)
            .await
        })
    }

    async fn execute_action(&self, action: SessionAction, queue: &mut VecDeque<SessionEvent>) {
        match action {
            SessionAction::RunValidation => {
                let draft = self.draft.lock().await.clone();
                match Validator::validate(&draft) {
                    Ok(()) => queue.push_back(SessionEvent::ValidationPassed {
                        email: draft.email.clone(),
                    }),
                    Err(error) => queue.push_back(SessionEvent::ValidationFailed { error }),
                }
            }
            SessionAction::SendOtpRequest => {
                let token = self.next_token();
                let draft = self.draft.lock().await.clone();
                let gateway = Arc::clone(&self.gateway);
                let session = self.weak.clone();
                tokio::spawn(async move {
                    let result = gateway.request_otp(&draft.email, &draft.first_name).await;
                    if let Some(session) = session.upgrade() {
                        session.complete_otp_request(token, result).await;
                    }
                });
            }
            SessionAction::SendVerifyRequest { code } => {
                let token = self.next_token();
                let draft = self.draft.lock().await.clone();
                let gateway = Arc::clone(&self.gateway);
                let session = self.weak.clone();
                tokio::spawn(async move {
                    let result = gateway.verify_and_register(&draft, &code).await;
                    if let Some(session) = session.upgrade() {
                        session.complete_verify(token, result).await;
                    }
                });
            }
            SessionAction::StartResendCooldown { seconds } => {
                self.cooldown.lock().await.start(seconds);
                self.events.emit_cooldown_changed(seconds).await;
                match self.ticker.start().await {
                    Ok(mut ticks) => {
                        let session = self.weak.clone();
                        tokio::spawn(async move {
                            while ticks.recv().await.is_some() {
                                let Some(session) = session.upgrade() else { break };
                                session.handle_tick().await;
                            }
                        });
                    }
                    Err(error) => {
                        warn!(%error, "failed to start resend ticker");
                        // without ticks the countdown would never expire; fail open
                        self.cooldown.lock().await.cancel();
                        self.events.emit_cooldown_changed(0).await;
                    }
                }
            }
            SessionAction::StopResendCooldown => {
                self.ticker.stop().await;
                self.cooldown.lock().await.cancel();
                self.events.emit_cooldown_changed(0).await;
            }
            SessionAction::AnnounceCommitted { account } => {
                self.events.emit_committed(account).await;
            }
        }
    }

    // ===== Gateway completions =====

    async fn complete_otp_request(
        &self,
        token: u64,
        result: Result<OtpRequestAck, GatewayError>,
    ) {
        if !self.token_is_current(token) {
            debug!(token, "discarding stale otp request completion");
            return;
        }
        match result {
            Ok(ack) => {
                debug!(message = %ack.message, "otp request accepted");
                self.dispatch(SessionEvent::OtpRequestAccepted).await;
            }
            Err(error) => {
                self.dispatch(SessionEvent::OtpRequestFailed {
                    error: error.into(),
                })
                .await;
            }
        }
    }

    async fn complete_verify(
        &self,
        token: u64,
        result: Result<RegisteredAccount, GatewayError>,
    ) {
        if !self.token_is_current(token) {
            debug!(token, "discarding stale verify completion");
            return;
        }
        match result {
            Ok(account) => {
                self.dispatch(SessionEvent::VerifyAccepted { account }).await;
            }
            Err(error) => {
                self.dispatch(SessionEvent::VerifyFailed {
                    error: error.into(),
                })
                .await;
            }
        }
    }

    // ===== Cooldown ticks =====

    async fn handle_tick(&self) {
        if self.closed.load(Ordering::SeqCst) {
            return;
        }
        // ticks are serialized with event dispatch
        let _dispatch_guard = self.dispatch_lock.lock().await;
        let remaining = self.cooldown.lock().await.tick();
        self.events.emit_cooldown_changed(remaining).await;
        if remaining == 0 {
            self.ticker.stop().await;
        }
    }

    // ===== Request tokens =====

    fn next_token(&self) -> u64 {
        self.request_seq.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn token_is_current(&self, token: u64) -> bool {
        self.request_seq.load(Ordering::SeqCst) == token
    }
}
