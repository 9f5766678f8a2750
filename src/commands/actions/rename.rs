//! Become command handler.
//!
//! Renames the caller for the rest of their chat session.
//!
//! # Name rule
//!
//! The new name is the rest of the line after `/become`, normalized the same
//! way as forum user names at login: surrounding whitespace is dropped and every
//! inner whitespace run becomes a single `_`. `/become The White Rabbit` renames
//! the caller to `The_White_Rabbit`, so chat names never contain whitespace.

use log::debug;

use crate::{
    commands::{DispatchError, DispatchResult, bbcode_response::format_become_usage},
    session::ChatSession,
    utils::{strip_command, trim_name},
};

/// Renames the caller, refreshes the online list and tells the client.
///
/// A line without a name only gets a private usage reminder.
pub async fn handle_become<S: ChatSession>(
    text: &str,
    session: &mut S,
) -> Result<DispatchResult, DispatchError> {
    let name = trim_name(strip_command(text));
    debug!("handling become command, new name {:?}", name);

    if name.is_empty() {
        let destination = session.private_destination();
        session
            .insert_bot_message(destination, &format_become_usage())
            .await?;
        return Ok(DispatchResult::Consumed);
    }

    session.set_user_name(&name).await?;
    session.refresh_online_list().await?;
    session.announce_user_name(&name).await?;

    Ok(DispatchResult::Consumed)
}
