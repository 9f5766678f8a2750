//! Ligrev - Slash-command layer of a forum-embedded chat.
//!
//! Ligrev recognizes slash commands typed in chat lines and runs them against
//! the chat session and a small character database. Anything it does not
//! recognize is left to the chat as an ordinary message.
//!
//! # Features
//!
//! - **Presence**: `/away` and `/back` (with aliases) announce and record away status
//! - **Fun commands**: `/slap`, `/youre` and configurable image macros
//! - **Renaming**: `/become` changes the displayed name for the session
//! - **Broadcast**: administrators make the bot speak with `/ligrev`
//! - **Lighack**: `/lighack character create|select <name>` manages game characters
//! - **Forum identity**: login and channel lists derived from forum accounts and categories
//!
//! # Architecture
//!
//! - [`commands`] - Command table, dispatcher and action handlers
//! - [`config`] - YAML configuration with environment variable overrides
//! - [`identity`] - Forum principal to chat user mapping, channel directory
//! - [`session`] - The chat session seam and its console implementation
//! - [`store`] - Character persistence, backed by SQLite
//! - [`utils`] - Tokenizing and name normalization

pub mod commands;
pub mod config;
pub mod identity;
pub mod session;
pub mod store;
pub mod utils;
