//! Slap command handler.
//!
//! `/slap [target] [object]` posts a third-person action. A missing target
//! defaults to the bot, a missing object to a random fish.

use log::debug;
use rand::Rng;

use crate::{
    commands::{DispatchError, DispatchResult, bbcode_response::format_slap},
    session::ChatSession,
};

/// Objects picked from when `/slap` is given no object.
pub const SLAP_OBJECTS: [&str; 5] = ["poach", "salmon", "greyling", "coelecanth", "trout"];

/// Posts the slap action as a bot message and hands it back to the caller.
pub async fn handle_slap<S: ChatSession, R: Rng>(
    tokens: &[&str],
    default_target: &str,
    rng: &mut R,
    session: &mut S,
) -> Result<DispatchResult, DispatchError> {
    let target = tokens.get(1).copied().unwrap_or(default_target);
    let object = match tokens.get(2) {
        Some(object) => *object,
        None => SLAP_OBJECTS[rng.random_range(0..SLAP_OBJECTS.len())],
    };
    debug!("handling slap command, target {} object {}", target, object);

    let action = format_slap(&session.user_name(), target, object);
    let channel = session.channel();
    session.insert_bot_message(channel, &action).await?;

    Ok(DispatchResult::ConsumedWithReplacement(action))
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::{
        commands::actions::test_helpers::{CHANNEL, mock_session},
        session::ChatRole,
    };

    #[tokio::test]
    async fn test_slap_with_target_and_object() {
        let mut session = mock_session(ChatRole::User);
        session
            .expect_insert_bot_message()
            .withf(|destination, text| {
                *destination == CHANNEL && text == "[i]Alice slaps Bob with a large carp.[/i]"
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let result = handle_slap(
            &["/slap", "Bob", "carp"],
            "Ligrev",
            &mut StdRng::seed_from_u64(1),
            &mut session,
        )
        .await;

        assert_eq!(
            result.unwrap(),
            DispatchResult::ConsumedWithReplacement(
                "[i]Alice slaps Bob with a large carp.[/i]".to_string()
            )
        );
    }

    #[tokio::test]
    async fn test_slap_defaults_target_and_object() {
        let mut session = mock_session(ChatRole::User);
        session
            .expect_insert_bot_message()
            .times(1)
            .returning(|_, _| Ok(()));

        let result = handle_slap(
            &["/slap"],
            "Ligrev",
            &mut StdRng::seed_from_u64(1),
            &mut session,
        )
        .await;

        let Ok(DispatchResult::ConsumedWithReplacement(action)) = result else {
            panic!("Expected ConsumedWithReplacement");
        };
        assert!(action.starts_with("[i]Alice slaps Ligrev with a large "));
        assert!(
            SLAP_OBJECTS
                .iter()
                .any(|object| action == format_slap("Alice", "Ligrev", object))
        );
    }

    #[tokio::test]
    async fn test_slap_defaults_object_only() {
        let mut session = mock_session(ChatRole::User);
        session
            .expect_insert_bot_message()
            .times(1)
            .returning(|_, _| Ok(()));

        let result = handle_slap(
            &["/slap", "Bob"],
            "Ligrev",
            &mut StdRng::seed_from_u64(1),
            &mut session,
        )
        .await;

        let Ok(DispatchResult::ConsumedWithReplacement(action)) = result else {
            panic!("Expected ConsumedWithReplacement");
        };
        assert!(action.starts_with("[i]Alice slaps Bob with a large "));
    }

    #[tokio::test]
    async fn test_slap_is_deterministic_for_a_seed() {
        let mut picks = Vec::new();

        for _ in 0..2 {
            let mut rng = StdRng::seed_from_u64(42);
            let mut run = Vec::new();
            for _ in 0..10 {
                let mut session = mock_session(ChatRole::User);
                session
                    .expect_insert_bot_message()
                    .returning(|_, _| Ok(()));
                let result = handle_slap(&["/slap"], "Ligrev", &mut rng, &mut session).await;
                run.push(result.unwrap());
            }
            picks.push(run);
        }

        assert_eq!(picks[0], picks[1]);
    }
}
