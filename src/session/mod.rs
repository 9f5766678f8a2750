//! Chat engine session abstraction.
//!
//! The command layer never talks to the chat engine directly. Everything it needs
//! from the engine (who is speaking, where, and how to post messages or update
//! the online list) goes through the [`ChatSession`] trait, so the engine can be
//! swapped for a mock in tests or for the [`ConsoleSession`] in the console host.
//!
//! # Identifiers
//!
//! Users and channels are identified by plain integers, matching the numeric ids
//! the forum hands out for accounts and categories.

use std::time::Instant;

use mockall::automock;
use serde::Deserialize;
use thiserror::Error;

mod console;

pub use crate::session::console::{ConsoleSession, OnlineUser};

/// Numeric id of a chat user (the forum account id).
pub type UserId = i64;

/// Numeric id of a channel, or of a private destination.
pub type ChannelId = i64;

/// Chat roles, ordered from the least to the most privileged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    Guest,
    User,
    Moderator,
    Admin,
}

/// A chat participant as seen by the chat engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatUser {
    /// Forum account id
    pub id: UserId,
    /// Displayed name, without whitespace
    pub name: String,
    /// Role used for command authorization
    pub role: ChatRole,
}

/// Errors raised by a chat session when it cannot deliver a side effect.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The session output could not be written.
    #[error("failed to write chat output: {0}")]
    Io(#[from] std::io::Error),
}

/// Operations the command layer needs from the chat engine for the current request.
///
/// Accessors describe the user issuing the command and where they are. The async
/// methods are side effects; each one is awaited to completion before the next
/// is issued.
#[automock]
pub trait ChatSession {
    /// Id of the user issuing the current line.
    fn user_id(&self) -> UserId;
    /// Current displayed name of that user.
    fn user_name(&self) -> String;
    /// Chat role of that user.
    fn user_role(&self) -> ChatRole;
    /// Channel the line was posted in.
    fn channel(&self) -> ChannelId;
    /// Destination whose messages are only visible to the issuing user.
    fn private_destination(&self) -> ChannelId;
    /// Moment the chat engine started handling the current request.
    fn request_started(&self) -> Instant;

    /// Posts a message authored by the chat bot.
    async fn insert_bot_message(
        &mut self,
        destination: ChannelId,
        text: &str,
    ) -> Result<(), SessionError>;
    /// Posts a message authored by `author`.
    async fn insert_message(
        &mut self,
        author: &ChatUser,
        destination: ChannelId,
        text: &str,
    ) -> Result<(), SessionError>;
    /// Renames the issuing user.
    async fn set_user_name(&mut self, name: &str) -> Result<(), SessionError>;
    /// Tells the issuing user's client about its new name.
    async fn announce_user_name(&mut self, name: &str) -> Result<(), SessionError>;
    /// Rewrites the issuing user's entry in the online list.
    async fn refresh_online_list(&mut self) -> Result<(), SessionError>;
    /// Sets the away flag of `user_id` in the online list.
    async fn set_away(&mut self, user_id: UserId, away: bool) -> Result<(), SessionError>;
}

/// Snapshot of the user issuing the current line.
pub fn current_user<S: ChatSession>(session: &S) -> ChatUser {
    ChatUser {
        id: session.user_id(),
        name: session.user_name(),
        role: session.user_role(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roles_are_ordered_by_privilege() {
        assert!(ChatRole::Guest < ChatRole::User);
        assert!(ChatRole::User < ChatRole::Moderator);
        assert!(ChatRole::Moderator < ChatRole::Admin);
    }

    #[test]
    fn test_current_user_reads_session_identity() {
        let mut session = MockChatSession::new();
        session.expect_user_id().return_const(42);
        session
            .expect_user_name()
            .returning(|| "Alice".to_string());
        session.expect_user_role().return_const(ChatRole::Moderator);

        assert_eq!(
            current_user(&session),
            ChatUser {
                id: 42,
                name: "Alice".to_string(),
                role: ChatRole::Moderator,
            }
        );
    }
}
