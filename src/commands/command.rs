//! Command vocabulary and lookup table.
//!
//! Recognition is purely syntactic: the first token of a line, compared
//! case-sensitively, is looked up in a table built once from the
//! [`CommandSettings`]. Aliases are several names pointing at the same
//! [`Command`].

use std::collections::HashMap;

use log::warn;

use crate::config::CommandSettings;

/// A recognized slash-command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Admin-only: make the bot say the rest of the line
    Broadcast,
    /// Mark the user away
    Away,
    /// Mark the user back
    Back,
    /// Report the request lag
    Ping,
    /// Rename the user
    Become,
    /// Slap someone with a fish
    Slap,
    /// Post a fixed image
    ///
    /// # Fields
    ///
    /// * `String` - Image URL
    ImageMacro(String),
    /// Post a `/youre` correction link
    Youre,
    /// Privately report the number of tokens of the line
    TokenCount,
    /// Lighack character mini-game
    Lighack,
}

const BACK_ALIASES: [&str; 4] = ["/online", "/here", "/back", "/return"];
const LIGHACK_ALIASES: [&str; 2] = ["/lighack", "/lh"];

/// Builds the command table.
///
/// Image macros are registered first, so a macro cannot shadow a built-in
/// command. The broadcast command name comes from the settings. Configured
/// names that do not start with `/` are skipped.
pub fn command_table(settings: &CommandSettings) -> HashMap<String, Command> {
    let mut table: HashMap<String, Command> = settings
        .image_macros
        .iter()
        .filter(|(name, _)| is_command_name(name))
        .map(|(name, url)| (name.clone(), Command::ImageMacro(url.clone())))
        .collect();

    table.insert("/away".to_owned(), Command::Away);
    for alias in BACK_ALIASES {
        table.insert(alias.to_owned(), Command::Back);
    }
    table.insert("/ping".to_owned(), Command::Ping);
    table.insert("/become".to_owned(), Command::Become);
    table.insert("/slap".to_owned(), Command::Slap);
    table.insert("/youre".to_owned(), Command::Youre);
    table.insert("/cah".to_owned(), Command::TokenCount);
    for alias in LIGHACK_ALIASES {
        table.insert(alias.to_owned(), Command::Lighack);
    }
    if is_command_name(&settings.broadcast_command) {
        table.insert(settings.broadcast_command.clone(), Command::Broadcast);
    }

    table
}

fn is_command_name(name: &str) -> bool {
    if name.starts_with('/') {
        return true;
    }
    warn!("ignoring command name {:?}, it does not start with '/'", name);
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_contains_builtins() {
        let table = command_table(&CommandSettings::default());

        assert_eq!(table.get("/ligrev"), Some(&Command::Broadcast));
        assert_eq!(table.get("/away"), Some(&Command::Away));
        assert_eq!(table.get("/ping"), Some(&Command::Ping));
        assert_eq!(table.get("/become"), Some(&Command::Become));
        assert_eq!(table.get("/slap"), Some(&Command::Slap));
        assert_eq!(table.get("/youre"), Some(&Command::Youre));
        assert_eq!(table.get("/cah"), Some(&Command::TokenCount));
    }

    #[test]
    fn test_aliases_share_a_command() {
        let table = command_table(&CommandSettings::default());

        for alias in BACK_ALIASES {
            assert_eq!(table.get(alias), Some(&Command::Back));
        }
        for alias in LIGHACK_ALIASES {
            assert_eq!(table.get(alias), Some(&Command::Lighack));
        }
    }

    #[test]
    fn test_default_image_macros() {
        let table = command_table(&CommandSettings::default());

        for name in ["/ofb", "/noponies", "/punpolice", "/yes", "/si", "/buzzard"] {
            assert!(matches!(table.get(name), Some(Command::ImageMacro(_))));
        }
        assert_eq!(
            table.get("/yes"),
            Some(&Command::ImageMacro(
                "http://cdn.calref.net/sylae/images/misc/yes.png".to_string()
            ))
        );
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let table = command_table(&CommandSettings::default());
        assert!(table.get("/AWAY").is_none());
        assert!(table.get("away").is_none());
    }

    #[test]
    fn test_macro_cannot_shadow_builtin() {
        let mut settings = CommandSettings::default();
        settings
            .image_macros
            .insert("/away".to_string(), "http://example.com/away.png".to_string());

        let table = command_table(&settings);
        assert_eq!(table.get("/away"), Some(&Command::Away));
    }

    #[test]
    fn test_custom_broadcast_command() {
        let settings = CommandSettings {
            broadcast_command: "/say".to_string(),
            ..CommandSettings::default()
        };

        let table = command_table(&settings);
        assert_eq!(table.get("/say"), Some(&Command::Broadcast));
        assert!(table.get("/ligrev").is_none());
    }

    #[test]
    fn test_names_without_slash_are_skipped() {
        let mut settings = CommandSettings::default();
        settings
            .image_macros
            .insert("hello".to_string(), "http://example.com/hello.png".to_string());
        settings.broadcast_command = "ligrev".to_string();

        let table = command_table(&settings);

        assert_eq!(table.get("hello"), None);
        assert_eq!(table.get("ligrev"), None);
        assert!(!table.values().any(|command| *command == Command::Broadcast));
        assert_eq!(
            table.get("/buzzard"),
            Some(&Command::ImageMacro(
                "http://cdn.calref.net/sylae/images/misc/buzzard.png".to_string()
            ))
        );
    }
}
