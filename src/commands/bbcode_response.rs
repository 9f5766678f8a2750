//! BBCode response formatters for slash-commands.
//!
//! The chat renders BBCode, so every message produced by a command is built
//! here: `[i]` for actions, `[img]` and `[url]` for macros, `[code]` for usage.

/// Notice posted when a user goes away.
pub fn format_away(user_name: &str) -> String {
    format!("{} is away.", user_name)
}

/// Notice posted when a user comes back.
pub fn format_returned(user_name: &str) -> String {
    format!("{} has returned.", user_name)
}

/// Lag report of `/ping`.
///
/// # Examples
///
/// ```
/// # use ligrev::commands::bbcode_response::format_lag;
/// assert_eq!(format_lag(2), "Lag: 2 seconds.");
/// ```
pub fn format_lag(seconds: u64) -> String {
    format!("Lag: {} seconds.", seconds)
}

/// Third-person action of `/slap`.
pub fn format_slap(user_name: &str, target: &str, object: &str) -> String {
    format!("[i]{} slaps {} with a large {}.[/i]", user_name, target, object)
}

/// Inline image.
pub fn format_image(url: &str) -> String {
    format!("[img]{}[/img]", url)
}

/// `/youre` correction link, the word is used both in the link and as its label.
pub fn format_youre(url_prefix: &str, word: &str) -> String {
    format!("[url={}{}]*{}[/url]", url_prefix, word, word)
}

pub fn format_become_usage() -> String {
    "Usage: [code]/become <name>[/code]".to_owned()
}

pub fn format_youre_usage() -> String {
    "Usage: [code]/youre <word>[/code]".to_owned()
}

pub fn format_create_usage() -> String {
    "Usage: [code]/lighack character create <name>[/code]".to_owned()
}

pub fn format_select_usage() -> String {
    "Usage: [code]/lighack character select <name>[/code]".to_owned()
}

pub fn format_name_taken() -> String {
    "Error: Name already taken.".to_owned()
}

pub fn format_character_created() -> String {
    "Character created.".to_owned()
}

pub fn format_invalid_character() -> String {
    "Error: Invalid character. Either they don't exist yet, or there's a database issue."
        .to_owned()
}

/// Confirmation of `/lighack character select`.
///
/// # Examples
///
/// ```
/// # use ligrev::commands::bbcode_response::format_character_selected;
/// assert_eq!(format_character_selected(3, "Zed"), "Selected lhcid 3 ([i]Zed[/i]).");
/// ```
pub fn format_character_selected(id: i64, name: &str) -> String {
    format!("Selected lhcid {} ([i]{}[/i]).", id, name)
}

/// Fallback of `/lighack` for help and unknown verbs.
pub fn format_unknown_lighack() -> String {
    "Unknown command, try [code]/lighack help[/code].".to_owned()
}
