//! Per-session configuration.

use std::ops::RangeInclusive;

use concierge_core::Lang;

/// Delay window for the simulated typing pause, in milliseconds.
pub const DEFAULT_REPLY_DELAY_MS: RangeInclusive<u64> = 800..=1300;

/// Configuration for one chat session.
#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// Display language for bot replies and link labels.
    pub lang: Lang,
    /// Window for the cosmetic typing delay, in milliseconds. The actual
    /// delay is drawn uniformly from this range per reply. Tests pin it to
    /// `0..=0` for determinism.
    pub reply_delay_ms: RangeInclusive<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            lang: Lang::default(),
            reply_delay_ms: DEFAULT_REPLY_DELAY_MS,
        }
    }
}

impl SessionConfig {
    /// Config with the given display language and the default delay window.
    #[must_use]
    pub fn for_lang(lang: Lang) -> Self {
        Self {
            lang,
            ..Self::default()
        }
    }

    /// Config with no typing delay. Replies land as soon as the runtime
    /// schedules the reply task.
    #[must_use]
    pub fn immediate(lang: Lang) -> Self {
        Self {
            lang,
            reply_delay_ms: 0..=0,
        }
    }
}
