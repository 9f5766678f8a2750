//! Configuration file structures for ligrev.
//!
//! The configuration is a YAML file split into three sections: chat engine
//! settings, command settings, and settings of the console host. Every field
//! has a default, so an empty file is a valid configuration.
//!
//! # Configuration File Format
//!
//! ```yaml
//! chat:
//!   default_channel_id: 0
//!   default_channel_name: "Public"
//!   # Only list these forums as channels (the default channel is always kept)
//!   limit_channel_list: [2, 5, 18]
//!   private_message_diff: 2000000000
//!   guest_name_prefix: "Guest-"
//!
//! commands:
//!   bot_name: "Ligrev"
//!   broadcast_command: "/ligrev"
//!   # Channel where the broadcast command is refused
//!   excluded_channel: 18
//!   youre_url: "http://calref.net/~sylae/youre.php?word="
//!   image_macros:
//!     "/yes": "http://cdn.calref.net/sylae/images/misc/yes.png"
//!
//! host:
//!   database: "ligrev.db"
//!   channel: 2
//!   principal:
//!     id: 7
//!     name: "Alice"
//!     tier: admin
//!     registered: true
//!   forums:
//!     - { id: 2, name: "General Chat" }
//!     - { id: 18, name: "Announcements" }
//!   denied_forums: [18]
//! ```
//!
//! # Environment Variable Overrides
//!
//! Any value can be overridden with a `LIGREV_` prefixed variable, using `__` to
//! reach nested fields:
//!
//! ```bash
//! export LIGREV_COMMANDS__EXCLUDED_CHANNEL=18
//! export LIGREV_HOST__DATABASE=/var/lib/ligrev/ligrev.db
//! ```

use std::collections::BTreeMap;

use figment::{
    Figment,
    providers::{Env, Format, Yaml},
};
use serde::Deserialize;

use crate::{
    identity::{Forum, Principal, RoleTier},
    session::ChannelId,
};

/// Root configuration structure.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Chat engine settings
    pub chat: ChatSettings,
    /// Slash-command settings
    pub commands: CommandSettings,
    /// Console host settings
    pub host: HostSettings,
}

impl Config {
    /// Loads the YAML file at `path`, then applies `LIGREV_` environment overrides.
    pub fn load(path: &str) -> Result<Config, figment::Error> {
        Figment::new()
            .merge(Yaml::file(path))
            .merge(Env::prefixed("LIGREV_").split("__"))
            .extract()
    }
}

/// Settings shared with the chat engine.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ChatSettings {
    /// Channel every user can join.
    pub default_channel_id: ChannelId,
    /// Name of the default channel, used when no forum carries its id.
    pub default_channel_name: String,
    /// When set, only these forums are offered as channels.
    pub limit_channel_list: Option<Vec<ChannelId>>,
    /// Offset added to a user id to get their private destination.
    pub private_message_diff: ChannelId,
    /// Prefix of guest user names.
    pub guest_name_prefix: String,
}

impl Default for ChatSettings {
    fn default() -> Self {
        ChatSettings {
            default_channel_id: 0,
            default_channel_name: "Public".to_owned(),
            limit_channel_list: None,
            private_message_diff: 2_000_000_000,
            guest_name_prefix: "Guest-".to_owned(),
        }
    }
}

/// Settings of the slash-commands.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct CommandSettings {
    /// Name of the chat bot, also the default `/slap` target.
    pub bot_name: String,
    /// Admin-only command that makes the bot say something.
    pub broadcast_command: String,
    /// Channel where the broadcast command is refused.
    pub excluded_channel: Option<ChannelId>,
    /// URL prefix of the `/youre` link, the word is appended.
    pub youre_url: String,
    /// Image commands, from command name to image URL.
    pub image_macros: BTreeMap<String, String>,
}

impl Default for CommandSettings {
    fn default() -> Self {
        let image_macros = [
            ("/ofb", "http://24.media.tumblr.com/tumblr_lm9i7aJaR61qjr62mo1_500.jpg"),
            ("/noponies", "http://25.media.tumblr.com/tumblr_m1fdwgueip1rs686jo1_400.png"),
            ("/punpolice", "http://cdn.calref.net/tyran/images/punpolice.gif"),
            ("/yes", "http://cdn.calref.net/sylae/images/misc/yes.png"),
            (
                "/si",
                "http://cdn.calref.net/files.calref/fed924925590a5199af6507cb1d60d60bac4c8fe.png",
            ),
            ("/buzzard", "http://cdn.calref.net/sylae/images/misc/buzzard.png"),
        ]
        .into_iter()
        .map(|(name, url)| (name.to_owned(), url.to_owned()))
        .collect();

        CommandSettings {
            bot_name: "Ligrev".to_owned(),
            broadcast_command: "/ligrev".to_owned(),
            excluded_channel: None,
            youre_url: "http://calref.net/~sylae/youre.php?word=".to_owned(),
            image_macros,
        }
    }
}

/// Settings of the console host, standing in for the forum.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct HostSettings {
    /// SQLite database path, `:memory:` for a throwaway database.
    pub database: String,
    /// Channel to start in, the default channel when unset or not allowed.
    pub channel: Option<ChannelId>,
    /// Forum account logged into the chat.
    pub principal: Principal,
    /// Forum categories.
    pub forums: Vec<Forum>,
    /// Forums the principal is not allowed to read.
    pub denied_forums: Vec<ChannelId>,
}

impl Default for HostSettings {
    fn default() -> Self {
        HostSettings {
            database: "ligrev.db".to_owned(),
            channel: None,
            principal: Principal {
                id: 1,
                name: "admin".to_owned(),
                tier: RoleTier::Admin,
                registered: true,
                bot: false,
            },
            forums: Vec::new(),
            denied_forums: Vec::new(),
        }
    }
}
