// ABOUTME: Lesson content queries for the nutrition education surface
// ABOUTME: Insert and list operations returning core Lesson models
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Lesson content storage operations

use super::Database;
use nutriscan_core::errors::{AppError, AppResult};
use nutriscan_core::models::Lesson;
use sqlx::Row;

impl Database {
    /// List all lessons in insertion order
    ///
    /// # Errors
    ///
    /// Returns a database error when the query fails
    pub async fn list_lessons(&self) -> AppResult<Vec<Lesson>> {
        let rows = sqlx::query("SELECT id, title, content FROM lessons ORDER BY id")
            .fetch_all(self.pool())
            .await
            .map_err(|e| AppError::database(format!("Failed to list lessons: {e}")))?;

        Ok(rows
            .into_iter()
            .map(|row| Lesson {
                id: row.get("id"),
                title: row.get("title"),
                content: row.get("content"),
            })
            .collect())
    }

    /// Insert a lesson and return its id
    ///
    /// # Errors
    ///
    /// Returns a database error when the insert fails
    pub async fn insert_lesson(&self, title: &str, content: &str) -> AppResult<i64> {
        let row =
            sqlx::query("INSERT INTO lessons (title, content) VALUES (?1, ?2) RETURNING id")
                .bind(title)
                .bind(content)
                .fetch_one(self.pool())
                .await
                .map_err(|e| AppError::database(format!("Failed to insert lesson: {e}")))?;

        Ok(row.get("id"))
    }
}
