//! Chat messages: sender, text, timestamp, suggested links.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::link::Link;

/// Who authored a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// The site visitor.
    User,
    /// The assistant.
    Bot,
}

/// A single chat message. Immutable once appended to a transcript.
///
/// Field names are camelCase on the wire so the widget front end can
/// consume the transcript JSON directly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Unique message ID (UUID v7, so IDs sort by creation time).
    pub id: Uuid,
    /// Message text, original casing preserved.
    pub text: String,
    /// Message author.
    pub sender: Sender,
    /// Wall-clock creation time.
    pub timestamp: DateTime<Utc>,
    /// Suggested navigation links (empty for user messages).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
}

impl Message {
    /// A user message. Never carries links.
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            text: text.into(),
            sender: Sender::User,
            timestamp: Utc::now(),
            links: Vec::new(),
        }
    }

    /// A bot message with optional suggested links.
    #[must_use]
    pub fn bot(text: impl Into<String>, links: Vec<Link>) -> Self {
        Self {
            id: Uuid::now_v7(),
            text: text.into(),
            sender: Sender::Bot,
            timestamp: Utc::now(),
            links,
        }
    }
}
