//! Chat channels derived from forum categories.

use std::cell::OnceCell;

use log::debug;

use crate::{
    config::ChatSettings,
    identity::IdentityProvider,
    session::ChannelId,
    utils::trim_name,
};

/// A chat channel, one per postable forum.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Channel {
    pub id: ChannelId,
    /// Forum name without whitespace
    pub name: String,
}

/// Channel lists of one request.
///
/// Both lists are computed on first access and kept for the lifetime of the
/// directory. A new directory is built for every request, so forum changes are
/// picked up on the next one.
pub struct ChannelDirectory<'a, P> {
    provider: &'a P,
    settings: &'a ChatSettings,
    all_channels: OnceCell<Vec<Channel>>,
    channels: OnceCell<Vec<Channel>>,
}

impl<'a, P: IdentityProvider> ChannelDirectory<'a, P> {
    pub fn new(provider: &'a P, settings: &'a ChatSettings) -> Self {
        ChannelDirectory {
            provider,
            settings,
            all_channels: OnceCell::new(),
            channels: OnceCell::new(),
        }
    }

    /// Every channel of the board, the default channel first when no forum has its id.
    ///
    /// Only postable forums without a password are listed. When two forums trim
    /// to the same name, the first position is kept with the last id.
    pub fn all_channels(&self) -> &[Channel] {
        self.all_channels.get_or_init(|| self.load_all_channels())
    }

    /// Channels the current principal may join.
    ///
    /// The default channel is always allowed. Other channels must be in
    /// `limit_channel_list` when it is set, and readable by the principal.
    pub fn channels(&self) -> &[Channel] {
        self.channels.get_or_init(|| {
            let limit = self.settings.limit_channel_list.as_deref();
            self.all_channels()
                .iter()
                .filter(|channel| {
                    channel.id == self.settings.default_channel_id
                        || (limit.is_none_or(|limit| limit.contains(&channel.id))
                            && self.provider.can_read(channel.id))
                })
                .cloned()
                .collect()
        })
    }

    /// Whether the current principal may join `channel_id`.
    pub fn is_allowed(&self, channel_id: ChannelId) -> bool {
        self.channels().iter().any(|channel| channel.id == channel_id)
    }

    fn load_all_channels(&self) -> Vec<Channel> {
        let mut channels: Vec<Channel> = Vec::new();
        let mut default_found = false;

        for forum in self.provider.forums() {
            if !forum.postable || forum.password_protected {
                continue;
            }

            let name = trim_name(&forum.name);
            match channels.iter_mut().find(|channel| channel.name == name) {
                Some(channel) => channel.id = forum.id,
                None => channels.push(Channel { id: forum.id, name }),
            }

            if forum.id == self.settings.default_channel_id {
                default_found = true;
            }
        }

        if !default_found {
            let name = trim_name(&self.settings.default_channel_name);
            channels.retain(|channel| channel.name != name);
            channels.insert(
                0,
                Channel {
                    id: self.settings.default_channel_id,
                    name,
                },
            );
        }

        debug!("loaded {} channels", channels.len());

        channels
    }
}
