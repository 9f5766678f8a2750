//! Ping command handler.

use log::debug;

use crate::{
    commands::{DispatchError, DispatchResult, bbcode_response::format_lag},
    session::ChatSession,
};

/// Posts how many whole seconds went by since the request started.
pub async fn handle_ping<S: ChatSession>(session: &mut S) -> Result<DispatchResult, DispatchError> {
    let lag = session.request_started().elapsed().as_secs();
    debug!("handling ping command, lag {}s", lag);

    let channel = session.channel();
    session.insert_bot_message(channel, &format_lag(lag)).await?;

    Ok(DispatchResult::Consumed)
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::*;
    use crate::{
        commands::actions::test_helpers::{CHANNEL, mock_session},
        session::ChatRole,
    };

    #[tokio::test]
    async fn test_ping_reports_zero_lag_for_fresh_request() {
        let mut session = mock_session(ChatRole::Guest);
        session.expect_request_started().return_const(Instant::now());
        session
            .expect_insert_bot_message()
            .withf(|destination, text| *destination == CHANNEL && text == "Lag: 0 seconds.")
            .times(1)
            .returning(|_, _| Ok(()));

        let result = handle_ping(&mut session).await;
        assert!(matches!(result, Ok(DispatchResult::Consumed)));
    }

    #[tokio::test]
    async fn test_ping_reports_elapsed_seconds() {
        let mut session = mock_session(ChatRole::User);
        let Some(started) = Instant::now().checked_sub(Duration::from_secs(3)) else {
            // Monotonic clock too close to its origin to go back in time
            return;
        };
        session.expect_request_started().return_const(started);
        session
            .expect_insert_bot_message()
            .withf(|_, text| text == "Lag: 3 seconds.")
            .times(1)
            .returning(|_, _| Ok(()));

        let result = handle_ping(&mut session).await;
        assert!(matches!(result, Ok(DispatchResult::Consumed)));
    }
}
