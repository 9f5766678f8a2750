//! Forum identity integration.
//!
//! The forum authenticates people; the chat only needs to know who they are and
//! which role they get. This module maps a forum [`Principal`] onto a chat user
//! and derives the chat channels from the forum categories through a
//! [`ChannelDirectory`].
//!
//! # Role Mapping
//!
//! | Forum | Chat |
//! |-------|------|
//! | bot account | refused |
//! | anonymous visitor | [`ChatRole::Guest`] |
//! | administrator | [`ChatRole::Admin`] |
//! | moderator | [`ChatRole::Moderator`] |
//! | member | [`ChatRole::User`] |

use log::debug;
use mockall::automock;
use serde::Deserialize;

use crate::{
    session::{ChannelId, ChatRole, ChatUser, UserId},
    utils::trim_name,
};

mod channels;
mod static_provider;

pub use crate::identity::{
    channels::{Channel, ChannelDirectory},
    static_provider::StaticIdentity,
};

/// Highest permission set a forum account holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleTier {
    Admin,
    Moderator,
    Member,
}

/// An account authenticated by the forum, fixed for the duration of a request.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Principal {
    pub id: UserId,
    pub name: String,
    pub tier: RoleTier,
    /// `false` for anonymous visitors
    #[serde(default = "default_true")]
    pub registered: bool,
    /// Search engine and other automated accounts
    #[serde(default)]
    pub bot: bool,
}

/// A forum as listed by the forum database.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Forum {
    pub id: ChannelId,
    pub name: String,
    /// Only forums accepting posts become channels, not link or category forums
    #[serde(default = "default_true")]
    pub postable: bool,
    #[serde(default)]
    pub password_protected: bool,
}

fn default_true() -> bool {
    true
}

/// Source of the authenticated principal and of the forum structure.
#[automock]
pub trait IdentityProvider {
    /// The principal making the current request.
    fn principal(&self) -> Principal;
    /// Every forum of the board.
    fn forums(&self) -> Vec<Forum>;
    /// Whether the principal may read `forum_id`.
    fn can_read(&self, forum_id: ChannelId) -> bool;
}

/// Maps a principal onto a chat user.
///
/// Returns `None` for bot accounts, which may not join the chat. Anonymous
/// visitors become guests named after `guest_prefix`.
pub fn login_user(principal: &Principal, guest_prefix: &str) -> Option<ChatUser> {
    if principal.bot {
        debug!("refusing chat login for bot account {}", principal.id);
        return None;
    }

    if !principal.registered {
        return Some(ChatUser {
            id: principal.id,
            name: format!("{}{}", guest_prefix, principal.id),
            role: ChatRole::Guest,
        });
    }

    let role = match principal.tier {
        RoleTier::Admin => ChatRole::Admin,
        RoleTier::Moderator => ChatRole::Moderator,
        RoleTier::Member => ChatRole::User,
    };

    Some(ChatUser {
        id: principal.id,
        name: trim_name(&principal.name),
        role,
    })
}

/// Checks that a chat user still matches the forum principal.
///
/// Holds when both sides are anonymous, or when the ids are the same.
pub fn revalidate(user: &ChatUser, principal: &Principal) -> bool {
    (user.role == ChatRole::Guest && !principal.registered) || user.id == principal.id
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_principal(tier: RoleTier) -> Principal {
        Principal {
            id: 7,
            name: "Alice Liddell".to_string(),
            tier,
            registered: true,
            bot: false,
        }
    }

    #[test]
    fn test_login_maps_tiers_to_roles() {
        let cases = [
            (RoleTier::Admin, ChatRole::Admin),
            (RoleTier::Moderator, ChatRole::Moderator),
            (RoleTier::Member, ChatRole::User),
        ];

        for (tier, role) in cases {
            let user = login_user(&create_principal(tier), "Guest-").unwrap();
            assert_eq!(user.role, role);
            assert_eq!(user.id, 7);
        }
    }

    #[test]
    fn test_login_trims_user_name() {
        let user = login_user(&create_principal(RoleTier::Member), "Guest-").unwrap();
        assert_eq!(user.name, "Alice_Liddell");
    }

    #[test]
    fn test_login_refuses_bots() {
        let mut principal = create_principal(RoleTier::Admin);
        principal.bot = true;
        assert!(login_user(&principal, "Guest-").is_none());
    }

    #[test]
    fn test_login_anonymous_becomes_guest() {
        let mut principal = create_principal(RoleTier::Admin);
        principal.registered = false;

        let user = login_user(&principal, "Guest-").unwrap();
        assert_eq!(user.role, ChatRole::Guest);
        assert_eq!(user.name, "Guest-7");
    }

    #[test]
    fn test_revalidate_same_id() {
        let principal = create_principal(RoleTier::Member);
        let user = login_user(&principal, "Guest-").unwrap();
        assert!(revalidate(&user, &principal));
    }

    #[test]
    fn test_revalidate_other_account() {
        let principal = create_principal(RoleTier::Member);
        let user = login_user(&principal, "Guest-").unwrap();

        let mut other = principal.clone();
        other.id = 8;
        assert!(!revalidate(&user, &other));
    }

    #[test]
    fn test_revalidate_guest_against_anonymous() {
        let mut principal = create_principal(RoleTier::Member);
        principal.registered = false;
        let user = ChatUser {
            id: 1234,
            name: "Guest-1234".to_string(),
            role: ChatRole::Guest,
        };
        assert!(revalidate(&user, &principal));
    }
}
