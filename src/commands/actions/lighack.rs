//! Lighack command handler.
//!
//! `/lighack` (or `/lh`) manages the caller's character:
//!
//! - `character create <name>` creates a character with a unique name
//! - `character select <name>` makes an existing character the caller's current one
//!
//! Every reply, success or error, goes to the caller's private destination.
//! `help` and any unknown verb get the same generic hint.
//!
//! # Errors
//!
//! Usage mistakes, taken names and unknown characters are answered in the chat.
//! Storage failures abort the request without cleaning up, so a failure between
//! the delete and the insert of a selection leaves the caller without any.

use log::debug;

use crate::{
    commands::{
        DispatchError, DispatchResult,
        bbcode_response::{
            format_character_created, format_character_selected, format_create_usage,
            format_invalid_character, format_name_taken, format_select_usage,
            format_unknown_lighack,
        },
    },
    session::{ChatSession, UserId},
    store::{CharacterStore, StoreError},
};

/// Character verbs, used to pick the right usage message.
#[derive(Debug, Clone, Copy)]
enum CharacterVerb {
    Create,
    Select,
}

/// Errors that can occur while handling a character verb.
#[derive(Debug)]
enum LighackError {
    /// Wrong number of arguments
    Usage(CharacterVerb),
    /// A character already has this name
    NameTaken,
    /// No character, or more than one, has this name
    InvalidCharacter,
    /// The store failed, fatal for the request
    Storage(StoreError),
}

impl From<StoreError> for LighackError {
    fn from(error: StoreError) -> Self {
        LighackError::Storage(error)
    }
}

/// Formats a recoverable error into the reply sent to the caller.
fn format_lighack_error(error: LighackError) -> Result<String, StoreError> {
    match error {
        LighackError::Usage(CharacterVerb::Create) => Ok(format_create_usage()),
        LighackError::Usage(CharacterVerb::Select) => Ok(format_select_usage()),
        LighackError::NameTaken => Ok(format_name_taken()),
        LighackError::InvalidCharacter => Ok(format_invalid_character()),
        LighackError::Storage(error) => Err(error),
    }
}

/// Runs a lighack sub-command and replies privately.
///
/// # Returns
///
/// - `Ok(Consumed)` whatever the sub-command, including user mistakes
/// - `Err(DispatchError::Storage)` when the store failed
pub async fn handle_lighack<S: ChatSession, C: CharacterStore>(
    tokens: &[&str],
    session: &mut S,
    store: &C,
) -> Result<DispatchResult, DispatchError> {
    debug!("handling lighack command: {:?}", tokens);

    let user_id = session.user_id();
    let outcome = match (tokens.get(1).copied(), tokens.get(2).copied()) {
        (Some("character"), Some("create")) => create_character(tokens, user_id, store).await,
        (Some("character"), Some("select")) => select_character(tokens, user_id, store).await,
        _ => Ok(format_unknown_lighack()),
    };

    let reply = match outcome {
        Ok(reply) => reply,
        Err(error) => format_lighack_error(error)?,
    };

    let destination = session.private_destination();
    session.insert_bot_message(destination, &reply).await?;

    Ok(DispatchResult::Consumed)
}

async fn create_character<C: CharacterStore>(
    tokens: &[&str],
    user_id: UserId,
    store: &C,
) -> Result<String, LighackError> {
    let [_, _, _, name] = tokens else {
        return Err(LighackError::Usage(CharacterVerb::Create));
    };

    if !store.find_characters(name).await?.is_empty() {
        debug!("character name {} already taken", name);
        return Err(LighackError::NameTaken);
    }

    let id = store.insert_character(name, user_id).await?;
    debug!("user {} created character {} ({})", user_id, id, name);

    Ok(format_character_created())
}

async fn select_character<C: CharacterStore>(
    tokens: &[&str],
    user_id: UserId,
    store: &C,
) -> Result<String, LighackError> {
    let [_, _, _, name] = tokens else {
        return Err(LighackError::Usage(CharacterVerb::Select));
    };

    let characters = store.find_characters(name).await?;
    let [character] = characters.as_slice() else {
        debug!("{} characters named {}", characters.len(), name);
        return Err(LighackError::InvalidCharacter);
    };

    store.delete_selection(user_id).await?;
    store.insert_selection(user_id, character.id).await?;
    debug!("user {} selected character {}", user_id, character.id);

    Ok(format_character_selected(character.id, name))
}
