//! Away and back command handlers.
//!
//! Both announce the change in the current channel, then flip the away flag of
//! the caller in the online list. The flag is an upsert, so repeating a command
//! leaves a single entry.

use log::debug;

use crate::{
    commands::{
        DispatchError, DispatchResult,
        bbcode_response::{format_away, format_returned},
    },
    session::ChatSession,
};

/// Announces that the caller is away and flags them as such.
pub async fn handle_away<S: ChatSession>(session: &mut S) -> Result<DispatchResult, DispatchError> {
    debug!("handling away command");
    set_presence(session, true).await
}

/// Announces that the caller is back and clears their away flag.
pub async fn handle_back<S: ChatSession>(session: &mut S) -> Result<DispatchResult, DispatchError> {
    debug!("handling back command");
    set_presence(session, false).await
}

async fn set_presence<S: ChatSession>(
    session: &mut S,
    away: bool,
) -> Result<DispatchResult, DispatchError> {
    let user_name = session.user_name();
    let notice = if away {
        format_away(&user_name)
    } else {
        format_returned(&user_name)
    };

    let channel = session.channel();
    session.insert_bot_message(channel, &notice).await?;

    let user_id = session.user_id();
    session.set_away(user_id, away).await?;

    Ok(DispatchResult::Consumed)
}
