//! The classifier output: canned text plus suggested links.

use serde::{Deserialize, Serialize};

use concierge_core::Link;

/// A canned bot reply.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reply {
    /// Fully formed, possibly multi-line reply text.
    pub text: String,
    /// Suggested navigation links, in render order. May be empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
}

impl Reply {
    /// A reply with suggested links.
    #[must_use]
    pub fn new(text: impl Into<String>, links: Vec<Link>) -> Self {
        Self {
            text: text.into(),
            links,
        }
    }

    /// A reply without links (acknowledgments, goodbyes).
    #[must_use]
    pub fn text_only(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            links: Vec::new(),
        }
    }
}
