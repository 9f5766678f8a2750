//! Text helpers shared by the command and identity layers.

/// Splits a chat line into whitespace-delimited tokens.
///
/// # Examples
///
/// ```
/// # use ligrev::utils::tokenize;
/// assert_eq!(tokenize("  /slap  Bob trout "), vec!["/slap", "Bob", "trout"]);
/// ```
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Returns what follows the first token of `text`, without surrounding whitespace.
///
/// # Examples
///
/// ```
/// # use ligrev::utils::strip_command;
/// assert_eq!(strip_command("/become  Mad Hatter "), "Mad Hatter");
/// assert_eq!(strip_command("/become"), "");
/// ```
pub fn strip_command(text: &str) -> &str {
    let text = text.trim_start();
    match text.find(char::is_whitespace) {
        Some(end) => text[end..].trim(),
        None => "",
    }
}

/// Normalizes a user or channel name: trimmed, inner whitespace runs replaced with `_`.
///
/// # Examples
///
/// ```
/// # use ligrev::utils::trim_name;
/// assert_eq!(trim_name(" General  Chat "), "General_Chat");
/// ```
pub fn trim_name(name: &str) -> String {
    name.split_whitespace().collect::<Vec<&str>>().join("_")
}
