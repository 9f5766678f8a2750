//! Persistence of lighack characters and character selections.
//!
//! The [`CharacterStore`] trait is the only storage surface the command layer
//! uses. [`SqliteStore`] implements it on top of two tables:
//!
//! - `lighack_characters(lhcid, name UNIQUE, creator)`
//! - `lighack_users(user_id PRIMARY KEY, lhcid)`
//!
//! Name uniqueness and the one-selection-per-user rule are checked by the
//! command layer with a read before the write; the table constraints are what
//! settle two concurrent requests racing through that window.

use mockall::automock;
use thiserror::Error;

use crate::session::UserId;

mod sqlite;

pub use crate::store::sqlite::SqliteStore;

/// Id of a character row (`lhcid`).
pub type CharacterId = i64;

/// A lighack character.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Character {
    pub id: CharacterId,
    /// Unique, compared case-sensitively
    pub name: String,
    /// User who created the character
    pub creator: UserId,
}

/// Storage failures. These abort the current request.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

/// Character and selection storage.
#[automock]
pub trait CharacterStore {
    /// Returns every character whose name is exactly `name`.
    async fn find_characters(&self, name: &str) -> Result<Vec<Character>, StoreError>;
    /// Creates a character and returns its id.
    async fn insert_character(
        &self,
        name: &str,
        creator: UserId,
    ) -> Result<CharacterId, StoreError>;
    /// Removes the selection of `user_id`. Removing nothing is not an error.
    async fn delete_selection(&self, user_id: UserId) -> Result<(), StoreError>;
    /// Binds `user_id` to `character_id`.
    async fn insert_selection(
        &self,
        user_id: UserId,
        character_id: CharacterId,
    ) -> Result<(), StoreError>;
    /// Currently selected character of `user_id`, if any.
    async fn selection(&self, user_id: UserId) -> Result<Option<CharacterId>, StoreError>;
}
