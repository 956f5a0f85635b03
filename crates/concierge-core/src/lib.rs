//! # concierge-core
//!
//! Foundation types for the CodeMarket site assistant.
//!
//! This crate provides the shared vocabulary the other concierge crates
//! depend on:
//!
//! - **Languages**: [`lang::Lang`] display-language code (`en` / `fr`)
//! - **Links**: [`link::Link`] suggested navigation targets attached to replies
//! - **Messages**: [`message::Message`] with sender, timestamp, and links
//! - **Transcript**: [`transcript::Transcript`] append-only message history
//! - **Script detection**: [`script`] Arabic-block inspection and matching
//!   normalization
//!
//! ## Crate Position
//!
//! Foundation crate. Depended on by all other concierge crates.

#![deny(unsafe_code)]

pub mod lang;
pub mod link;
pub mod message;
pub mod script;
pub mod transcript;

pub use lang::{Lang, ParseLangError};
pub use link::Link;
pub use message::{Message, Sender};
pub use transcript::Transcript;
