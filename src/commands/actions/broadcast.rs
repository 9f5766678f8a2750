//! Broadcast command handler.
//!
//! Lets an administrator make the chat bot say something in the current
//! channel. The command is refused, as if it did not exist, for any other role
//! and in the configured excluded channel.

use log::debug;

use crate::{
    commands::{DispatchError, DispatchResult},
    session::{ChannelId, ChatRole, ChatSession},
    utils::strip_command,
};

/// Posts the text following the command as a bot message.
///
/// # Returns
///
/// - `NotRecognized` when the caller is not an admin or sits in `excluded_channel`
/// - `Consumed` otherwise, even when there was nothing to say
pub async fn handle_broadcast<S: ChatSession>(
    text: &str,
    excluded_channel: Option<ChannelId>,
    session: &mut S,
) -> Result<DispatchResult, DispatchError> {
    debug!("handling broadcast command");

    let role = session.user_role();
    if role != ChatRole::Admin {
        debug!("broadcast refused for role {:?}", role);
        return Ok(DispatchResult::NotRecognized);
    }

    let channel = session.channel();
    if excluded_channel == Some(channel) {
        debug!("broadcast refused in excluded channel {}", channel);
        return Ok(DispatchResult::NotRecognized);
    }

    let body = strip_command(text);
    if body.is_empty() {
        debug!("nothing to broadcast");
        return Ok(DispatchResult::Consumed);
    }

    session.insert_bot_message(channel, body).await?;

    Ok(DispatchResult::Consumed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::actions::test_helpers::{CHANNEL, mock_session};

    #[tokio::test]
    async fn test_admin_broadcasts_rest_of_line() {
        let mut session = mock_session(ChatRole::Admin);
        session
            .expect_insert_bot_message()
            .withf(|destination, text| *destination == CHANNEL && text == "hello   world")
            .times(1)
            .returning(|_, _| Ok(()));

        let result = handle_broadcast("/ligrev hello   world", None, &mut session).await;
        assert!(matches!(result, Ok(DispatchResult::Consumed)));
    }

    #[tokio::test]
    async fn test_non_admin_roles_are_refused() {
        for role in [ChatRole::Guest, ChatRole::User, ChatRole::Moderator] {
            // No insert expectation: any message would make the mock panic
            let mut session = mock_session(role);

            let result = handle_broadcast("/ligrev hello", None, &mut session).await;
            assert!(matches!(result, Ok(DispatchResult::NotRecognized)));
        }
    }

    #[tokio::test]
    async fn test_non_admin_is_refused_outside_excluded_channel() {
        let mut session = mock_session(ChatRole::Moderator);

        let result = handle_broadcast("/ligrev hello", Some(CHANNEL + 1), &mut session).await;
        assert!(matches!(result, Ok(DispatchResult::NotRecognized)));
    }

    #[tokio::test]
    async fn test_admin_is_refused_in_excluded_channel() {
        let mut session = mock_session(ChatRole::Admin);

        let result = handle_broadcast("/ligrev hello", Some(CHANNEL), &mut session).await;
        assert!(matches!(result, Ok(DispatchResult::NotRecognized)));
    }

    #[tokio::test]
    async fn test_admin_allowed_in_other_channel_than_excluded() {
        let mut session = mock_session(ChatRole::Admin);
        session
            .expect_insert_bot_message()
            .times(1)
            .returning(|_, _| Ok(()));

        let result = handle_broadcast("/ligrev hello", Some(18), &mut session).await;
        assert!(matches!(result, Ok(DispatchResult::Consumed)));
    }

    #[tokio::test]
    async fn test_empty_broadcast_posts_nothing() {
        let mut session = mock_session(ChatRole::Admin);

        let result = handle_broadcast("/ligrev   ", None, &mut session).await;
        assert!(matches!(result, Ok(DispatchResult::Consumed)));
    }
}
