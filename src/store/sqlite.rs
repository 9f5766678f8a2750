//! SQLite implementation of [`CharacterStore`].

use std::{str::FromStr, time::Duration};

use log::info;
use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};

use crate::{
    session::UserId,
    store::{Character, CharacterId, CharacterStore, StoreError},
};

const CREATE_CHARACTERS: &str = r#"
    CREATE TABLE IF NOT EXISTS lighack_characters (
        lhcid INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL UNIQUE,
        creator INTEGER NOT NULL
    )
"#;

const CREATE_SELECTIONS: &str = r#"
    CREATE TABLE IF NOT EXISTS lighack_users (
        user_id INTEGER PRIMARY KEY,
        lhcid INTEGER NOT NULL REFERENCES lighack_characters (lhcid)
    )
"#;

/// Character store backed by a SQLite connection pool.
///
/// # Examples
///
/// ```no_run
/// use ligrev::store::SqliteStore;
///
/// # async fn example() -> Result<(), ligrev::store::StoreError> {
/// let store = SqliteStore::open("ligrev.db").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Maximum time to wait for a pooled connection.
    const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

    /// Opens (or creates) the database at `path` and makes sure the tables exist.
    ///
    /// `":memory:"` opens a private in-memory database held by a single connection
    /// that is never recycled, so its content lives as long as the store.
    pub async fn open(path: &str) -> Result<Self, StoreError> {
        let pool = if path == ":memory:" {
            let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .acquire_timeout(Self::ACQUIRE_TIMEOUT)
                .connect_with(options)
                .await?
        } else {
            let options = SqliteConnectOptions::new()
                .filename(path)
                .create_if_missing(true);
            SqlitePoolOptions::new()
                .max_connections(5)
                .acquire_timeout(Self::ACQUIRE_TIMEOUT)
                .connect_with(options)
                .await?
        };

        sqlx::query(CREATE_CHARACTERS).execute(&pool).await?;
        sqlx::query(CREATE_SELECTIONS).execute(&pool).await?;

        info!("character store ready at {}", path);

        Ok(SqliteStore { pool })
    }
}

impl CharacterStore for SqliteStore {
    async fn find_characters(&self, name: &str) -> Result<Vec<Character>, StoreError> {
        let rows = sqlx::query_as::<_, (i64, String, i64)>(
            "SELECT lhcid, name, creator FROM lighack_characters WHERE name = ?",
        )
        .bind(name)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(id, name, creator)| Character { id, name, creator })
            .collect())
    }

    async fn insert_character(
        &self,
        name: &str,
        creator: UserId,
    ) -> Result<CharacterId, StoreError> {
        let result = sqlx::query("INSERT INTO lighack_characters (name, creator) VALUES (?, ?)")
            .bind(name)
            .bind(creator)
            .execute(&self.pool)
            .await?;

        Ok(result.last_insert_rowid())
    }

    async fn delete_selection(&self, user_id: UserId) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM lighack_users WHERE user_id = ?")
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn insert_selection(
        &self,
        user_id: UserId,
        character_id: CharacterId,
    ) -> Result<(), StoreError> {
        sqlx::query("INSERT INTO lighack_users (user_id, lhcid) VALUES (?, ?)")
            .bind(user_id)
            .bind(character_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn selection(&self, user_id: UserId) -> Result<Option<CharacterId>, StoreError> {
        let row = sqlx::query_as::<_, (i64,)>("SELECT lhcid FROM lighack_users WHERE user_id = ?")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|(id,)| id))
    }
}
