//! Image macro, `/youre` and `/cah` handlers.
//!
//! Image macros and `/youre` post in the caller's name, not the bot's: they
//! stand for something the user wanted to say.

use log::debug;

use crate::{
    commands::{
        DispatchError, DispatchResult,
        bbcode_response::{format_image, format_youre, format_youre_usage},
    },
    session::{ChatSession, current_user},
};

/// Posts the image at `url` as the caller.
pub async fn handle_macro<S: ChatSession>(
    url: &str,
    session: &mut S,
) -> Result<DispatchResult, DispatchError> {
    debug!("handling image macro {}", url);

    let author = current_user(&*session);
    let channel = session.channel();
    session
        .insert_message(&author, channel, &format_image(url))
        .await?;

    Ok(DispatchResult::Consumed)
}

/// Posts a `/youre` link for the first argument as the caller.
pub async fn handle_youre<S: ChatSession>(
    tokens: &[&str],
    url_prefix: &str,
    session: &mut S,
) -> Result<DispatchResult, DispatchError> {
    debug!("handling youre command: {:?}", tokens);

    let Some(word) = tokens.get(1) else {
        let destination = session.private_destination();
        session
            .insert_bot_message(destination, &format_youre_usage())
            .await?;
        return Ok(DispatchResult::Consumed);
    };

    let author = current_user(&*session);
    let channel = session.channel();
    session
        .insert_message(&author, channel, &format_youre(url_prefix, word))
        .await?;

    Ok(DispatchResult::Consumed)
}

/// Privately tells the caller how many tokens the line had.
pub async fn handle_token_count<S: ChatSession>(
    tokens: &[&str],
    session: &mut S,
) -> Result<DispatchResult, DispatchError> {
    debug!("handling cah command");

    let destination = session.private_destination();
    session
        .insert_bot_message(destination, &tokens.len().to_string())
        .await?;

    Ok(DispatchResult::Consumed)
}
