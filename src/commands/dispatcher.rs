//! Command dispatching.
//!
//! This module provides the [`Dispatcher`], the entry point of the command
//! layer. It looks the first token of a line up in the command table and routes
//! the line to the matching handler.
//!
//! # Flow
//!
//! ```text
//! Chat line → tokenize() → command table → handler → DispatchResult
//! ```
//!
//! # Examples
//!
//! ```no_run
//! # use ligrev::commands::{Dispatcher, DispatchResult};
//! # use ligrev::config::CommandSettings;
//! # use ligrev::session::ChatSession;
//! # use ligrev::store::CharacterStore;
//! # async fn example<S: ChatSession, C: CharacterStore>(session: &mut S, store: &C) {
//! let mut dispatcher = Dispatcher::new(CommandSettings::default());
//!
//! match dispatcher.dispatch("/away", session, store).await {
//!     Ok(DispatchResult::NotRecognized) => { /* post as a regular message */ }
//!     Ok(_) => { /* handled */ }
//!     Err(e) => { /* stop processing the request */ }
//! }
//! # }
//! ```

use std::collections::HashMap;

use log::debug;
use rand::{SeedableRng, rngs::StdRng};

use crate::{
    commands::{
        DispatchError, DispatchResult,
        actions::{
            handle_away, handle_back, handle_become, handle_broadcast, handle_lighack,
            handle_macro, handle_ping, handle_slap, handle_token_count, handle_youre,
        },
        command::{Command, command_table},
    },
    config::CommandSettings,
    session::ChatSession,
    store::CharacterStore,
    utils::tokenize,
};

/// Routes chat lines to command handlers.
///
/// The dispatcher owns the command table and the random source used by
/// `/slap`. It holds no per-user state: everything about the caller comes from
/// the [`ChatSession`] given to [`Dispatcher::dispatch`].
pub struct Dispatcher {
    settings: CommandSettings,
    commands: HashMap<String, Command>,
    rng: StdRng,
}

impl Dispatcher {
    /// Creates a dispatcher with an OS-seeded random source.
    pub fn new(settings: CommandSettings) -> Self {
        Self::with_rng(settings, StdRng::from_os_rng())
    }

    /// Creates a dispatcher whose random picks are reproducible.
    pub fn with_seed(settings: CommandSettings, seed: u64) -> Self {
        Self::with_rng(settings, StdRng::seed_from_u64(seed))
    }

    fn with_rng(settings: CommandSettings, rng: StdRng) -> Self {
        let commands = command_table(&settings);
        Dispatcher {
            settings,
            commands,
            rng,
        }
    }

    /// Looks up the command named by `name`, which must start with `/`.
    fn command(&self, name: &str) -> Option<&Command> {
        if !name.starts_with('/') {
            return None;
        }
        self.commands.get(name)
    }

    /// Handles one chat line.
    ///
    /// # Returns
    ///
    /// - `Ok(NotRecognized)` - The line is not a command (or a refused one), nothing happened
    /// - `Ok(Consumed)` - The command ran, including when it only answered a user mistake
    /// - `Ok(ConsumedWithReplacement(text))` - The command ran and `text` should be echoed back
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError`] when the session or the store fails. Side effects
    /// performed before the failure are not rolled back.
    pub async fn dispatch<S: ChatSession, C: CharacterStore>(
        &mut self,
        text: &str,
        session: &mut S,
        store: &C,
    ) -> Result<DispatchResult, DispatchError> {
        let tokens = tokenize(text);

        let Some(command) = tokens.first().and_then(|name| self.command(name)) else {
            return Ok(DispatchResult::NotRecognized);
        };

        debug!("dispatching {:?}", command);

        match command {
            Command::Broadcast => {
                handle_broadcast(text, self.settings.excluded_channel, session).await
            }
            Command::Away => handle_away(session).await,
            Command::Back => handle_back(session).await,
            Command::Ping => handle_ping(session).await,
            Command::Become => handle_become(text, session).await,
            Command::Slap => {
                handle_slap(&tokens, &self.settings.bot_name, &mut self.rng, session).await
            }
            Command::ImageMacro(url) => handle_macro(url, session).await,
            Command::Youre => handle_youre(&tokens, &self.settings.youre_url, session).await,
            Command::TokenCount => handle_token_count(&tokens, session).await,
            Command::Lighack => handle_lighack(&tokens, session, store).await,
        }
    }
}
