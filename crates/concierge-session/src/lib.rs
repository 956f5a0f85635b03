//! # concierge-session
//!
//! Chat session orchestration for the CodeMarket site assistant.
//!
//! A [`ChatSession`] owns one append-only transcript. Submitting visitor
//! input appends a user message synchronously, then produces the bot reply
//! on a detached task after a short randomized "typing" delay (purely
//! cosmetic; classification itself is synchronous and local). The delay
//! task is bound to the session lifetime: closing or dropping the session
//! cancels any in-flight reply, so no deferred callback ever mutates a
//! torn-down transcript.
//!
//! Exactly one reply may be in flight at a time; a second submit while the
//! assistant is composing is rejected with [`SubmitError::ReplyInFlight`].
//!
//! ## Crate Position
//!
//! Depends on `concierge-core` and `concierge-rules`. Depended on by
//! `concierge-cli` (and whatever host embeds the widget core).

#![deny(unsafe_code)]

pub mod config;
pub mod errors;
pub mod session;

pub use config::SessionConfig;
pub use errors::SubmitError;
pub use session::ChatSession;
