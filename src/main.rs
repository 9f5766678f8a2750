//! Ligrev console host.
//!
//! Runs the command layer against a local chat session: every line read from
//! stdin is one chat request from the configured forum principal, and every
//! chat message is written to stdout.
//!
//! # Configuration
//!
//! Create a `config.yaml` file with your settings:
//!
//! ```yaml
//! chat:
//!   default_channel_id: 0
//!   default_channel_name: "Public"
//!
//! commands:
//!   bot_name: "Ligrev"
//!   excluded_channel: 18
//!
//! host:
//!   database: "ligrev.db"
//!   channel: 3
//!   principal:
//!     id: 7
//!     name: "Alice Liddell"
//!     tier: member
//!   forums:
//!     - id: 3
//!       name: "Tea Party"
//! ```
//!
//! # Environment Variable Overrides
//!
//! Override any configuration value using environment variables with the `LIGREV_` prefix:
//!
//! ```bash
//! export LIGREV_COMMANDS__BOT_NAME="Sylae"
//! export LIGREV_HOST__DATABASE=":memory:"
//! ```
//!
//! # Usage
//!
//! ```bash
//! ligrev --config config.yaml
//! ligrev --config config.yaml --database ./lighack.db
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG` - Controls logging level (default: `info`)

use anyhow::{Context, bail};
use clap::Parser;
use env_logger::Env;
use log::{error, info, warn};
use tokio::io::{AsyncBufReadExt, BufReader, stdin, stdout};

use ligrev::{
    commands::{DispatchResult, Dispatcher},
    config::Config,
    identity::{ChannelDirectory, IdentityProvider, StaticIdentity, login_user, revalidate},
    session::{ChatSession, ConsoleSession, current_user},
    store::SqliteStore,
};

/// Command-line arguments for the Ligrev console host.
///
/// # Examples
///
/// ```bash
/// ligrev --config config.yaml --database :memory:
/// ```
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the YAML configuration file.
    #[arg(short, long)]
    config: String,

    /// SQLite database path, overrides `host.database` from the configuration.
    ///
    /// Use `:memory:` for a database that lives as long as the process.
    #[arg(short, long)]
    database: Option<String>,
}

#[tokio::main]
async fn main() {
    // Put logger at info level by default
    let env = Env::default().filter_or("RUST_LOG", "info");
    env_logger::init_from_env(env);

    info!("Starting ligrev {}...", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();

    let mut config = match Config::load(&args.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load config file: {}", e);
            return;
        }
    };

    if let Some(database) = args.database {
        config.host.database = database;
    }

    if let Err(e) = run(config).await {
        error!("{:#}", e);
    }
}

/// Logs the configured principal in and serves stdin lines until end of input.
///
/// # Errors
///
/// Fails when the store cannot be opened, the principal may not chat, or a
/// request hits a storage or session failure.
async fn run(config: Config) -> anyhow::Result<()> {
    let store = SqliteStore::open(&config.host.database)
        .await
        .with_context(|| format!("Failed to open database {}", config.host.database))?;
    info!("Character database {} ready", config.host.database);

    let identity = StaticIdentity::new(&config.host);
    let principal = identity.principal();
    let Some(user) = login_user(&principal, &config.chat.guest_name_prefix) else {
        bail!("Principal {} is not allowed to chat", principal.id);
    };
    info!("Logged in as {} ({:?})", user.name, user.role);

    let channel = {
        let directory = ChannelDirectory::new(&identity, &config.chat);
        for channel in directory.channels() {
            info!("Channel {}: {}", channel.id, channel.name);
        }

        match config.host.channel {
            Some(channel) if directory.is_allowed(channel) => channel,
            Some(channel) => {
                warn!(
                    "Channel {} is not allowed, joining the default channel",
                    channel
                );
                config.chat.default_channel_id
            }
            None => config.chat.default_channel_id,
        }
    };

    let mut session = ConsoleSession::new(
        user,
        channel,
        &config.chat,
        &config.commands.bot_name,
        stdout(),
    );
    let mut dispatcher = Dispatcher::new(config.commands.clone());

    let mut lines = BufReader::new(stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        session.begin_request();
        if !revalidate(session.user(), &identity.principal()) {
            bail!("Session no longer matches the forum principal");
        }

        match dispatcher.dispatch(&line, &mut session, &store).await? {
            DispatchResult::NotRecognized => {
                let author = current_user(&session);
                let channel = session.channel();
                session.insert_message(&author, channel, &line).await?;
            }
            DispatchResult::Consumed => {}
            DispatchResult::ConsumedWithReplacement(text) => session.echo(&text).await?,
        }
    }

    info!("End of input, bye");
    Ok(())
}
