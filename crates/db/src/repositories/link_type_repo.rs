//! Repository for the `link_types` table.

use sqlx::SqlitePool;
use trackboard_core::types::DbId;

use crate::models::link_type::{CreateLinkType, LinkType, UpdateLinkType};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, light_icon, dark_icon, color";

/// Provides CRUD operations for link types.
pub struct LinkTypeRepo;

impl LinkTypeRepo {
    /// Insert a new link type, returning the created row.
    ///
    /// If `dark_icon` is `None`, the light icon filename is stored for both.
    pub async fn create(
        pool: &SqlitePool,
        input: &CreateLinkType,
    ) -> Result<LinkType, sqlx::Error> {
        let query = format!(
            "INSERT INTO link_types (title, light_icon, dark_icon, color)
             VALUES (?1, ?2, COALESCE(?3, ?2), ?4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LinkType>(&query)
            .bind(&input.title)
            .bind(&input.light_icon)
            .bind(&input.dark_icon)
            .bind(&input.color)
            .fetch_one(pool)
            .await
    }

    /// Find a link type by its internal ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<LinkType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM link_types WHERE id = ?1");
        sqlx::query_as::<_, LinkType>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all link types in creation order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<LinkType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM link_types ORDER BY id");
        sqlx::query_as::<_, LinkType>(&query).fetch_all(pool).await
    }

    /// Update a link type.
    ///
    /// `dark_icon` resolves to the supplied dark icon, else the supplied light
    /// icon, else the currently stored light icon. The reset happens even when
    /// no icon is supplied at all.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateLinkType,
    ) -> Result<Option<LinkType>, sqlx::Error> {
        // Column references on the right-hand side see the pre-update row.
        let query = format!(
            "UPDATE link_types SET
                title = ?2,
                color = ?3,
                light_icon = COALESCE(?4, light_icon),
                dark_icon = COALESCE(?5, ?4, light_icon)
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LinkType>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.color)
            .bind(&input.light_icon)
            .bind(&input.dark_icon)
            .fetch_optional(pool)
            .await
    }

    /// Delete a link type and every link that uses it.
    ///
    /// Returns `true` if the link type existed. Icon files are left in place.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let result = sqlx::query("DELETE FROM link_types WHERE id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        if result.rows_affected() == 0 {
            return Ok(false);
        }

        // Already gone via ON DELETE CASCADE when foreign keys are enforced.
        sqlx::query("DELETE FROM links WHERE link_type_id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(true)
    }
}
