// ABOUTME: Donation record queries for the community sharing map
// ABOUTME: Insert and list operations returning core Donation models
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Donation record storage operations

use super::Database;
use nutriscan_core::errors::{AppError, AppResult};
use nutriscan_core::models::Donation;
use sqlx::Row;

impl Database {
    /// Record a donation and return its id
    ///
    /// # Errors
    ///
    /// Returns a database error when the insert fails
    pub async fn insert_donation(&self, donation: &Donation) -> AppResult<i64> {
        let row = sqlx::query(
            r"
            INSERT INTO donations (user_name, item, quantity, lat, lng, note)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            RETURNING id
            ",
        )
        .bind(&donation.user_name)
        .bind(&donation.item)
        .bind(&donation.quantity)
        .bind(donation.lat)
        .bind(donation.lng)
        .bind(&donation.note)
        .fetch_one(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to insert donation: {e}")))?;

        Ok(row.get("id"))
    }

    /// List all donations in insertion order
    ///
    /// # Errors
    ///
    /// Returns a database error when the query fails
    pub async fn list_donations(&self) -> AppResult<Vec<Donation>> {
        let rows = sqlx::query(
            "SELECT id, user_name, item, quantity, lat, lng, note FROM donations ORDER BY id",
        )
        .fetch_all(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to list donations: {e}")))?;

        Ok(rows
            .into_iter()
            .map(|row| Donation {
                id: row.get("id"),
                user_name: row.get("user_name"),
                item: row.get("item"),
                quantity: row.get("quantity"),
                lat: row.get("lat"),
                lng: row.get("lng"),
                note: row.get("note"),
            })
            .collect())
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

    fn sample_donation() -> Donation {
        Donation {
            id: 0,
            user_name: "Ada".to_owned(),
            item: "canned beans".to_owned(),
            quantity: "3".to_owned(),
            lat: 48.85,
            lng: 2.35,
            note: "pickup after 6pm".to_owned(),
        }
    }

    #[tokio::test]
    async fn test_insert_and_list() {
        let db = test_db().await;
        let id = db.insert_donation(&sample_donation()).await.unwrap();
        assert!(id > 0);

        let donations = db.list_donations().await.unwrap();
        assert_eq!(donations.len(), 1);
        assert_eq!(donations[0].id, id);
        assert_eq!(donations[0].item, "canned beans");
        assert!((donations[0].lat - 48.85).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_ids_are_sequential() {
        let db = test_db().await;
        let first = db.insert_donation(&sample_donation()).await.unwrap();
        let second = db.insert_donation(&sample_donation()).await.unwrap();
        assert!(second > first);
    }
}
