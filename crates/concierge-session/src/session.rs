//! The chat session: transcript ownership, welcome seeding, reply scheduling.
//!
//! Business rules:
//!
//! - **One message per accepted submission**: blank input appends nothing.
//! - **Single reply in flight**: submissions while composing are rejected.
//! - **Seeded welcome**: an empty transcript gets one localized bot message
//!   on open; this is per-session state, not a classifier invocation.
//! - **Teardown safety**: the cosmetic reply delay races a session-scoped
//!   cancellation token, so closing the session drops pending replies
//!   instead of mutating a discarded transcript.

use std::ops::RangeInclusive;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use rand::Rng;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use concierge_core::{Lang, Message, Transcript};
use concierge_rules::catalog;

use crate::config::SessionConfig;
use crate::errors::SubmitError;

/// One visitor's chat session.
///
/// Cheap to move, not clonable: the handle owns the session lifetime and
/// dropping it cancels any in-flight reply.
pub struct ChatSession {
    inner: Arc<Inner>,
}

struct Inner {
    reply_delay_ms: RangeInclusive<u64>,
    state: Mutex<State>,
    /// Bumped after every transcript or composing-flag change so observers
    /// can await updates instead of polling.
    revision: watch::Sender<u64>,
    cancel: CancellationToken,
}

struct State {
    lang: Lang,
    transcript: Transcript,
    composing: bool,
}

impl Inner {
    fn bump(&self) {
        self.revision.send_modify(|rev| *rev += 1);
    }
}

impl ChatSession {
    /// Open a session, seeding the localized welcome message into the
    /// (necessarily empty) transcript.
    #[must_use]
    pub fn open(config: SessionConfig) -> Self {
        let (revision, _) = watch::channel(0);
        let mut state = State {
            lang: config.lang,
            transcript: Transcript::new(),
            composing: false,
        };
        if state.transcript.is_empty() {
            let seed = catalog::welcome(config.lang);
            state.transcript.push(Message::bot(seed.text, seed.links));
        }
        info!(lang = %config.lang, "chat session opened");
        Self {
            inner: Arc::new(Inner {
                reply_delay_ms: config.reply_delay_ms,
                state: Mutex::new(state),
                revision,
                cancel: CancellationToken::new(),
            }),
        }
    }

    /// Submit visitor input.
    ///
    /// On success the user message is already in the transcript and a bot
    /// reply will be appended after the typing delay. Must be called from
    /// within a tokio runtime.
    ///
    /// # Errors
    ///
    /// [`SubmitError::EmptyInput`] for blank input,
    /// [`SubmitError::ReplyInFlight`] while a reply is composing, and
    /// [`SubmitError::Closed`] after [`close`](Self::close).
    pub fn submit(&self, raw: &str) -> Result<(), SubmitError> {
        if raw.trim().is_empty() {
            warn!("rejected blank submission");
            return Err(SubmitError::EmptyInput);
        }
        if self.inner.cancel.is_cancelled() {
            return Err(SubmitError::Closed);
        }

        {
            let mut state = self.inner.state.lock();
            if state.composing {
                debug!("rejected submission while composing");
                return Err(SubmitError::ReplyInFlight);
            }
            state.composing = true;
            // The stored message keeps the visitor's original casing.
            state.transcript.push(Message::user(raw));
        }
        self.inner.bump();

        let delay = Duration::from_millis(
            rand::rng().random_range(self.inner.reply_delay_ms.clone()),
        );
        let input = raw.to_owned();
        let inner = Arc::clone(&self.inner);
        debug!(delay_ms = delay.as_millis() as u64, "composing reply");

        let _ = tokio::spawn(async move {
            tokio::select! {
                () = inner.cancel.cancelled() => {
                    debug!("reply cancelled by session teardown");
                    inner.state.lock().composing = false;
                }
                () = tokio::time::sleep(delay) => {
                    let lang = inner.state.lock().lang;
                    let reply = concierge_rules::classify(&input, lang);
                    {
                        let mut state = inner.state.lock();
                        state.transcript.push(Message::bot(reply.text, reply.links));
                        state.composing = false;
                    }
                    inner.bump();
                }
            }
        });

        Ok(())
    }

    /// Snapshot of the transcript.
    #[must_use]
    pub fn transcript(&self) -> Transcript {
        self.inner.state.lock().transcript.clone()
    }

    /// Whether the assistant is currently composing a reply.
    #[must_use]
    pub fn is_composing(&self) -> bool {
        self.inner.state.lock().composing
    }

    /// The active display language.
    #[must_use]
    pub fn language(&self) -> Lang {
        self.inner.state.lock().lang
    }

    /// Switch the display language. Applies to replies composed from now
    /// on; already-appended messages are immutable.
    pub fn set_language(&self, lang: Lang) {
        self.inner.state.lock().lang = lang;
        self.inner.bump();
    }

    /// Observer handle: the value increments on every transcript or
    /// composing-flag change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.inner.revision.subscribe()
    }

    /// Close the session: cancels any in-flight reply and freezes the
    /// transcript. Idempotent; also invoked on drop.
    pub fn close(&self) {
        self.inner.cancel.cancel();
    }
}

impl Drop for ChatSession {
    fn drop(&mut self) {
        self.inner.cancel.cancel();
    }
}
