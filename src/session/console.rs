//! Line-oriented chat session used by the console host.
//!
//! Messages are written to any [`AsyncWrite`] as one line each, prefixed with the
//! destination and author. The online list is kept in memory, one entry per user.

use std::{collections::BTreeMap, time::Instant};

use log::debug;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::{
    config::ChatSettings,
    session::{ChannelId, ChatRole, ChatSession, ChatUser, SessionError, UserId},
};

/// Entry of the online list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OnlineUser {
    pub name: String,
    pub role: ChatRole,
    pub channel: ChannelId,
    pub away: bool,
}

/// A [`ChatSession`] for a single local user, writing every message to `out`.
pub struct ConsoleSession<W> {
    user: ChatUser,
    channel: ChannelId,
    private_message_diff: ChannelId,
    bot_name: String,
    started: Instant,
    online: BTreeMap<UserId, OnlineUser>,
    out: W,
}

impl<W: AsyncWrite + Unpin> ConsoleSession<W> {
    /// Creates a session for `user` sitting in `channel`, and lists them as online.
    pub fn new(
        user: ChatUser,
        channel: ChannelId,
        settings: &ChatSettings,
        bot_name: &str,
        out: W,
    ) -> Self {
        let mut session = ConsoleSession {
            user,
            channel,
            private_message_diff: settings.private_message_diff,
            bot_name: bot_name.to_owned(),
            started: Instant::now(),
            online: BTreeMap::new(),
            out,
        };
        session.upsert_online(None);
        session
    }

    /// Marks the start of a new request, for lag measurement.
    pub fn begin_request(&mut self) {
        self.started = Instant::now();
    }

    /// The user this session belongs to.
    pub fn user(&self) -> &ChatUser {
        &self.user
    }

    /// Looks up a user in the online list.
    pub fn online_user(&self, user_id: UserId) -> Option<&OnlineUser> {
        self.online.get(&user_id)
    }

    /// Number of entries in the online list.
    pub fn online_count(&self) -> usize {
        self.online.len()
    }

    /// Writes `text` back to the local user only, outside of any channel.
    pub async fn echo(&mut self, text: &str) -> Result<(), SessionError> {
        self.write_line(&format!("> {}", text)).await
    }

    /// Gives back the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn destination_label(&self, destination: ChannelId) -> String {
        if destination >= self.private_message_diff {
            "private".to_owned()
        } else {
            format!("#{}", destination)
        }
    }

    // Keeps the current away flag unless `away` is given.
    fn upsert_online(&mut self, away: Option<bool>) {
        let entry = self.online.entry(self.user.id).or_insert_with(|| OnlineUser {
            name: self.user.name.clone(),
            role: self.user.role,
            channel: self.channel,
            away: false,
        });
        entry.name = self.user.name.clone();
        entry.role = self.user.role;
        entry.channel = self.channel;
        if let Some(away) = away {
            entry.away = away;
        }
    }

    async fn write_line(&mut self, line: &str) -> Result<(), SessionError> {
        self.out.write_all(line.as_bytes()).await?;
        self.out.write_all(b"\n").await?;
        self.out.flush().await?;
        Ok(())
    }
}

impl<W: AsyncWrite + Unpin> ChatSession for ConsoleSession<W> {
    fn user_id(&self) -> UserId {
        self.user.id
    }

    fn user_name(&self) -> String {
        self.user.name.clone()
    }

    fn user_role(&self) -> ChatRole {
        self.user.role
    }

    fn channel(&self) -> ChannelId {
        self.channel
    }

    fn private_destination(&self) -> ChannelId {
        self.private_message_diff.saturating_add(self.user.id)
    }

    fn request_started(&self) -> Instant {
        self.started
    }

    async fn insert_bot_message(
        &mut self,
        destination: ChannelId,
        text: &str,
    ) -> Result<(), SessionError> {
        let line = format!(
            "[{}] <{}> {}",
            self.destination_label(destination),
            self.bot_name,
            text
        );
        self.write_line(&line).await
    }

    async fn insert_message(
        &mut self,
        author: &ChatUser,
        destination: ChannelId,
        text: &str,
    ) -> Result<(), SessionError> {
        let line = format!(
            "[{}] <{}> {}",
            self.destination_label(destination),
            author.name,
            text
        );
        self.write_line(&line).await
    }

    async fn set_user_name(&mut self, name: &str) -> Result<(), SessionError> {
        debug!("renaming user {} to {}", self.user.id, name);
        self.user.name = name.to_owned();
        Ok(())
    }

    async fn announce_user_name(&mut self, name: &str) -> Result<(), SessionError> {
        self.write_line(&format!("* you are now known as {}", name))
            .await
    }

    async fn refresh_online_list(&mut self) -> Result<(), SessionError> {
        self.upsert_online(None);
        Ok(())
    }

    async fn set_away(&mut self, user_id: UserId, away: bool) -> Result<(), SessionError> {
        match self.online.get_mut(&user_id) {
            Some(entry) => entry.away = away,
            None if user_id == self.user.id => self.upsert_online(Some(away)),
            None => debug!("user {} is not online, ignoring away flag", user_id),
        }
        Ok(())
    }
}
