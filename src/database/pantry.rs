// ABOUTME: Pantry item queries for the demo user
// ABOUTME: Insert, list, and delete operations returning core PantryItem models
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pantry item storage operations

use super::Database;
use nutriscan_core::errors::{AppError, AppResult};
use nutriscan_core::models::PantryItem;
use sqlx::Row;

impl Database {
    /// Add a pantry item for a user and return the stored row
    ///
    /// # Errors
    ///
    /// Returns a database error when the insert fails
    pub async fn add_pantry_item(
        &self,
        user_id: i64,
        name: &str,
        quantity: f64,
    ) -> AppResult<PantryItem> {
        let row = sqlx::query(
            "INSERT INTO pantry_items (user_id, name, quantity) VALUES (?1, ?2, ?3) RETURNING id",
        )
        .bind(user_id)
        .bind(name)
        .bind(quantity)
        .fetch_one(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to add pantry item: {e}")))?;

        Ok(PantryItem {
            id: row.get("id"),
            name: name.to_owned(),
            quantity,
        })
    }

    /// List all pantry items for a user in insertion order
    ///
    /// # Errors
    ///
    /// Returns a database error when the query fails
    pub async fn list_pantry_items(&self, user_id: i64) -> AppResult<Vec<PantryItem>> {
        let rows = sqlx::query(
            "SELECT id, name, quantity FROM pantry_items WHERE user_id = ?1 ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to list pantry items: {e}")))?;

        Ok(rows
            .into_iter()
            .map(|row| PantryItem {
                id: row.get("id"),
                name: row.get("name"),
                quantity: row.get("quantity"),
            })
            .collect())
    }

    /// Delete a pantry item by id. Deleting a missing id is not an error.
    ///
    /// # Errors
    ///
    /// Returns a database error when the delete fails
    pub async fn delete_pantry_item(&self, user_id: i64, item_id: i64) -> AppResult<()> {
        sqlx::query("DELETE FROM pantry_items WHERE id = ?1 AND user_id = ?2")
            .bind(item_id)
            .bind(user_id)
            .execute(self.pool())
            .await
            .map_err(|e| AppError::database(format!("Failed to delete pantry item: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use nutriscan_core::constants::demo_user;

    async fn test_db() -> Database {
        let db = Database::new("sqlite::memory:").await.unwrap();
        db.migrate().await.unwrap();
        db.ensure_demo_user().await.unwrap();
        db
    }

    #[tokio::test]
    async fn test_add_and_list_round_trip() {
        let db = test_db().await;
        let added = db
            .add_pantry_item(demo_user::ID, "banana", 2.0)
            .await
            .unwrap();
        assert_eq!(added.name, "banana");

        let items = db.list_pantry_items(demo_user::ID).await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, added.id);
        assert!((items[0].quantity - 2.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let db = test_db().await;
        for name in ["rice", "egg", "onion"] {
            db.add_pantry_item(demo_user::ID, name, 1.0).await.unwrap();
        }

        let names: Vec<String> = db
            .list_pantry_items(demo_user::ID)
            .await
            .unwrap()
            .into_iter()
            .map(|i| i.name)
            .collect();
        assert_eq!(names, ["rice", "egg", "onion"]);
    }

    #[tokio::test]
    async fn test_delete_missing_item_is_ok() {
        let db = test_db().await;
        db.delete_pantry_item(demo_user::ID, 9999).await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_removes_item() {
        let db = test_db().await;
        let added = db
            .add_pantry_item(demo_user::ID, "oats", 1.0)
            .await
            .unwrap();
        db.delete_pantry_item(demo_user::ID, added.id).await.unwrap();
        assert!(db.list_pantry_items(demo_user::ID).await.unwrap().is_empty());
    }
}
