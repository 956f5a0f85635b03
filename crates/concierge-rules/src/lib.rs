//! # concierge-rules
//!
//! Rule-based response classifier for the CodeMarket site assistant.
//!
//! Free-text visitor input is matched against an ordered table of rules
//! (keyword containment, one anchored greeting regex, and a final
//! unconditional catch-all). The first matching rule wins and produces a
//! canned [`Reply`]: localized text plus suggested navigation [`Link`]s.
//!
//! Arabic-script input is detected by Unicode-block inspection and routed
//! through the Arabic-scoped rules at the top of the table, regardless of
//! the site's configured display language.
//!
//! ## Module Overview
//!
//! - [`matcher`] — predicate kinds a rule can use
//! - [`table`] — the ordered rule table and [`classify`]
//! - [`catalog`] — every canned reply (EN/FR/AR) and link target
//! - [`reply`] — the `(text, links)` classifier output
//!
//! ## Crate Position
//!
//! Depends only on `concierge-core`. Depended on by `concierge-session`.

#![deny(unsafe_code)]

pub mod catalog;
pub mod matcher;
pub mod reply;
pub mod table;

pub use reply::Reply;
pub use table::{Rule, RuleScope, classify, rules};

#[doc(no_inline)]
pub use concierge_core::Link;
