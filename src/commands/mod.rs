//! Slash-command recognition and execution.
//!
//! This module turns a raw chat line into side effects on the chat session and
//! the character store, and tells the caller what became of the line.
//!
//! # Architecture
//!
//! ```text
//! Chat line
//!      │
//!      ▼
//! ┌─────────────┐
//! │ Dispatcher  │  ← tokenize, look up first token
//! └─────────────┘
//!      │
//!      ├── not in table ─────────────▶ DispatchResult::NotRecognized
//!      │
//!      ▼
//! ┌──────────────────────┐
//! │ Action Handlers      │
//! │  - handle_broadcast  │
//! │  - handle_away/back  │
//! │  - handle_ping       │
//! │  - handle_become     │
//! │  - handle_slap       │
//! │  - handle_macro      │
//! │  - handle_youre      │
//! │  - handle_token_count│
//! │  - handle_lighack    │
//! └──────────────────────┘
//!      │
//!      ▼
//! ChatSession / CharacterStore side effects
//! ```
//!
//! # Available Commands
//!
//! | Command | Arguments | Description |
//! |---------|-----------|-------------|
//! | `/ligrev` | `<text>` | Admin only: the bot says `text` |
//! | `/away` | None | Mark yourself away |
//! | `/online`, `/here`, `/back`, `/return` | None | Mark yourself back |
//! | `/ping` | None | Report the request lag |
//! | `/become` | `<name>` | Change your displayed name |
//! | `/slap` | `[target] [object]` | Slap someone with a fish |
//! | `/ofb`, `/noponies`, `/punpolice`, `/yes`, `/si`, `/buzzard` | None | Post an image |
//! | `/youre` | `<word>` | Post a correction link |
//! | `/cah` | any | Privately count the words of the line |
//! | `/lighack`, `/lh` | `character create\|select <name>` | Character mini-game |
//!
//! # Error Handling
//!
//! User mistakes (wrong argument count, unknown character, taken name) are
//! answered in the chat and the line counts as consumed. Storage and session
//! failures are returned as [`DispatchError`]; the caller is expected to stop
//! processing the request, and no invariant is guaranteed after such a failure.

use thiserror::Error;

use crate::{session::SessionError, store::StoreError};

mod actions;
pub mod bbcode_response;
mod command;
mod dispatcher;

pub use crate::commands::{
    command::{Command, command_table},
    dispatcher::Dispatcher,
};

/// What became of a chat line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DispatchResult {
    /// Not a command, the line is an ordinary chat message
    NotRecognized,
    /// Handled, nothing to echo back
    Consumed,
    /// Handled, and this text should be echoed back to the user
    ConsumedWithReplacement(String),
}

/// Failures that abort the current request.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("storage failure: {0}")]
    Storage(#[from] StoreError),
    #[error("chat session failure: {0}")]
    Session(#[from] SessionError),
}
