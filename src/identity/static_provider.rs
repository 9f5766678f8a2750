//! Identity provider backed by the configuration file.

use crate::{
    config::HostSettings,
    identity::{Forum, IdentityProvider, Principal},
    session::ChannelId,
};

/// Serves a fixed principal and forum list, as declared in the `host` section.
pub struct StaticIdentity {
    principal: Principal,
    forums: Vec<Forum>,
    denied_forums: Vec<ChannelId>,
}

impl StaticIdentity {
    pub fn new(settings: &HostSettings) -> Self {
        StaticIdentity {
            principal: settings.principal.clone(),
            forums: settings.forums.clone(),
            denied_forums: settings.denied_forums.clone(),
        }
    }
}

impl IdentityProvider for StaticIdentity {
    fn principal(&self) -> Principal {
        self.principal.clone()
    }

    fn forums(&self) -> Vec<Forum> {
        self.forums.clone()
    }

    fn can_read(&self, forum_id: ChannelId) -> bool {
        !self.denied_forums.contains(&forum_id)
    }
}
