//! Suggested navigation links attached to bot replies.

use serde::{Deserialize, Serialize};

/// A quick link rendered under a bot message.
///
/// The core only produces these; the presentation layer decides whether to
/// navigate in-app (`external == false`) or open a new browsing context.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    /// Localized display label.
    pub label: String,
    /// In-app path (`/services`, `/#contact`) or absolute URL.
    pub target: String,
    /// Whether following the link leaves the application.
    #[serde(default)]
    pub external: bool,
}

impl Link {
    /// An in-app navigation link.
    #[must_use]
    pub fn internal(label: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: target.into(),
            external: false,
        }
    }

    /// A link that opens a new external browsing context.
    #[must_use]
    pub fn external(label: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: target.into(),
            external: true,
        }
    }
}
