// ABOUTME: SQLite persistence layer built on sqlx with idempotent schema setup
// ABOUTME: Holds the pool plus user bootstrap; pantry, donations, and lessons live in submodules
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `SQLite` persistence.
//!
//! Single-pool wrapper around sqlx. Schema creation runs at startup and is
//! idempotent, so restarting against an existing file is safe. The demo
//! deployment has exactly one user; [`Database::ensure_demo_user`] makes
//! sure it exists before any pantry write.

/// Donation record storage
pub mod donations;

/// Lesson content storage
pub mod lessons;

/// Pantry item storage
pub mod pantry;

use nutriscan_core::constants::demo_user;
use nutriscan_core::errors::{AppError, AppResult};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use tracing::info;

/// Database connection pool wrapper
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Connect to the given `SQLite` URL, creating the file if missing
    ///
    /// # Errors
    ///
    /// Returns a database error when the URL is malformed or the pool
    /// cannot be established
    pub async fn new(database_url: &str) -> AppResult<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| AppError::database(format!("Invalid database URL: {e}")))?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .map_err(|e| AppError::database(format!("Failed to connect to database: {e}")))?;

        Ok(Self { pool })
    }

    /// Access the underlying pool
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create all tables if they do not exist
    ///
    /// # Errors
    ///
    /// Returns a database error when a DDL statement fails
    pub async fn migrate(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                email TEXT NOT NULL UNIQUE,
                name TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create users table: {e}")))?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS pantry_items (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id INTEGER NOT NULL,
                name TEXT NOT NULL,
                quantity REAL NOT NULL DEFAULT 1,
                FOREIGN KEY (user_id) REFERENCES users (id)
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create pantry_items table: {e}")))?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS donations (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_name TEXT NOT NULL,
                item TEXT NOT NULL,
                quantity TEXT NOT NULL,
                lat REAL NOT NULL,
                lng REAL NOT NULL,
                note TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create donations table: {e}")))?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS lessons (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                content TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create lessons table: {e}")))?;

        info!("database schema ready");
        Ok(())
    }

    /// Insert the single demo user if it is not already present
    ///
    /// # Errors
    ///
    /// Returns a database error when the insert fails
    pub async fn ensure_demo_user(&self) -> AppResult<()> {
        sqlx::query("INSERT OR IGNORE INTO users (id, email, name) VALUES (?1, ?2, ?3)")
            .bind(demo_user::ID)
            .bind(demo_user::EMAIL)
            .bind(demo_user::NAME)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to ensure demo user: {e}")))?;

        Ok(())
    }
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database").finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    async fn test_db() -> Database {
        let db = Database::new("sqlite::memory:").await.unwrap();
        db.migrate().await.unwrap();
        db
    }

    #[tokio::test]
    async fn test_migrate_is_idempotent() {
        let db = test_db().await;
        db.migrate().await.unwrap();
    }

    #[tokio::test]
    async fn test_ensure_demo_user_twice() {
        let db = test_db().await;
        db.ensure_demo_user().await.unwrap();
        db.ensure_demo_user().await.unwrap();

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(db.pool())
            .await
            .unwrap();
        assert_eq!(count, 1);
    }
}
