//! Submission errors.
//!
//! The broader session has no failure taxonomy: the classifier is total and
//! there is no I/O. The only rejections are input-validation ones, surfaced
//! as typed errors so the embedding layer can decide how (or whether) to
//! show them.

/// Why a submission was rejected. The transcript is untouched in every case.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SubmitError {
    /// Blank or whitespace-only input. The widget treats this as a silent
    /// no-op.
    #[error("empty input")]
    EmptyInput,

    /// A reply is already being composed for an earlier submission. One
    /// reply may be in flight per session; concurrent submissions are
    /// rejected rather than queued.
    #[error("a reply is already in flight")]
    ReplyInFlight,

    /// The session was closed; its transcript is frozen.
    #[error("session closed")]
    Closed,
}
