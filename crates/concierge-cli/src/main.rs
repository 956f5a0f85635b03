//! Interactive terminal front end for the site assistant.
//!
//! Dev-tool stand-in for the browser widget: opens one chat session, reads
//! visitor lines from stdin, and prints the transcript as it grows, links
//! included. `RUST_LOG=concierge_rules=debug` shows which rule each input
//! hit.

#![deny(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use tokio::io::AsyncBufReadExt;
use tracing_subscriber::EnvFilter;

use concierge_core::{Lang, Message, Sender};
use concierge_session::{ChatSession, SessionConfig, SubmitError};

#[derive(Debug, Parser)]
#[command(
    name = "concierge",
    about = "Chat with the CodeMarket site assistant from the terminal"
)]
struct Args {
    /// Display language: `en` or `fr`.
    #[arg(long, default_value = "en")]
    lang: Lang,

    /// Skip the cosmetic typing delay.
    #[arg(long, default_value_t = false)]
    no_delay: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = if args.no_delay {
        SessionConfig::immediate(args.lang)
    } else {
        SessionConfig::for_lang(args.lang)
    };
    let session = ChatSession::open(config);
    let mut rx = session.subscribe();

    // Welcome message.
    let mut printed = print_new(&session, 0);

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    while let Some(line) = lines.next_line().await? {
        match session.submit(&line) {
            Ok(()) => {
                printed = print_new(&session, printed);
                while session.is_composing() {
                    rx.changed().await?;
                }
                printed = print_new(&session, printed);
            }
            // Same silent no-op the widget performs on blank input.
            Err(SubmitError::EmptyInput) => {}
            Err(err) => anyhow::bail!(err),
        }
    }

    session.close();
    Ok(())
}

/// Print messages appended since the last call; returns the new count.
fn print_new(session: &ChatSession, printed: usize) -> usize {
    let transcript = session.transcript();
    for message in &transcript.messages()[printed..] {
        render(message);
    }
    transcript.len()
}

fn render(message: &Message) {
    let who = match message.sender {
        Sender::Bot => "assistant",
        Sender::User => "you",
    };
    println!("[{} {who}] {}", message.timestamp.format("%H:%M"), message.text);
    for link in &message.links {
        let marker = if link.external { " (external)" } else { "" };
        println!("  -> {}: {}{marker}", link.label, link.target);
    }
    println!();
}
