//! Repository for the `links` table.
//!
//! Read methods return [`LinkWithType`], joining the referenced link type
//! so callers never see a bare `link_type_id`.

use sqlx::{FromRow, SqlitePool};
use trackboard_core::types::DbId;

use crate::models::link::{CreateLink, Link, LinkWithType, UpdateLink};
use crate::models::link_type::LinkType;
use crate::repositories::placeholders;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, url, link_type_id, project_id";

/// Select over `links` joined with `link_types`, aliased to match
/// [`LinkWithTypeRow`].
const JOINED_SELECT: &str = "SELECT l.id, l.title, l.url, l.link_type_id, l.project_id, \
     t.title AS type_title, t.light_icon AS type_light_icon, \
     t.dark_icon AS type_dark_icon, t.color AS type_color \
     FROM links l JOIN link_types t ON t.id = l.link_type_id";

#[derive(FromRow)]
struct LinkWithTypeRow {
    id: DbId,
    title: String,
    url: String,
    link_type_id: DbId,
    project_id: DbId,
    type_title: String,
    type_light_icon: String,
    type_dark_icon: String,
    type_color: String,
}

impl From<LinkWithTypeRow> for LinkWithType {
    fn from(row: LinkWithTypeRow) -> Self {
        LinkWithType {
            id: row.id,
            title: row.title,
            url: row.url,
            link_type_id: row.link_type_id,
            project_id: row.project_id,
            link_type: LinkType {
                id: row.link_type_id,
                title: row.type_title,
                light_icon: row.type_light_icon,
                dark_icon: row.type_dark_icon,
                color: row.type_color,
            },
        }
    }
}

/// Provides CRUD operations for links.
pub struct LinkRepo;

impl LinkRepo {
    /// Insert a new link, returning the created row.
    ///
    /// Fails with a foreign key violation if the project or link type does
    /// not exist.
    pub async fn create(pool: &SqlitePool, input: &CreateLink) -> Result<Link, sqlx::Error> {
        let query = format!(
            "INSERT INTO links (title, url, link_type_id, project_id)
             VALUES (?1, ?2, ?3, ?4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Link>(&query)
            .bind(&input.title)
            .bind(&input.url)
            .bind(input.link_type_id)
            .bind(input.project_id)
            .fetch_one(pool)
            .await
    }

    /// Find a bare link row by its internal ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Link>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM links WHERE id = ?1");
        sqlx::query_as::<_, Link>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a link by ID with its link type embedded.
    pub async fn find_with_type(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<LinkWithType>, sqlx::Error> {
        let query = format!("{JOINED_SELECT} WHERE l.id = ?1");
        let row = sqlx::query_as::<_, LinkWithTypeRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(LinkWithType::from))
    }

    /// List all links in creation order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<LinkWithType>, sqlx::Error> {
        let query = format!("{JOINED_SELECT} ORDER BY l.id");
        let rows = sqlx::query_as::<_, LinkWithTypeRow>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(LinkWithType::from).collect())
    }

    /// List the links belonging to any of `project_ids`, ordered by ID.
    pub async fn list_by_projects(
        pool: &SqlitePool,
        project_ids: &[DbId],
    ) -> Result<Vec<LinkWithType>, sqlx::Error> {
        if project_ids.is_empty() {
            return Ok(Vec::new());
        }
        let query = format!(
            "{JOINED_SELECT} WHERE l.project_id IN ({}) ORDER BY l.id",
            placeholders(project_ids.len())
        );
        let mut q = sqlx::query_as::<_, LinkWithTypeRow>(&query);
        for id in project_ids {
            q = q.bind(*id);
        }
        let rows = q.fetch_all(pool).await?;
        Ok(rows.into_iter().map(LinkWithType::from).collect())
    }

    /// List the links of one project.
    pub async fn list_by_project(
        pool: &SqlitePool,
        project_id: DbId,
    ) -> Result<Vec<LinkWithType>, sqlx::Error> {
        let query = format!("{JOINED_SELECT} WHERE l.project_id = ?1 ORDER BY l.id");
        let rows = sqlx::query_as::<_, LinkWithTypeRow>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(LinkWithType::from).collect())
    }

    /// Partially update a link. Empty strings and zero ids count as absent.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateLink,
    ) -> Result<Option<LinkWithType>, sqlx::Error> {
        let query = format!(
            "UPDATE links SET
                title = COALESCE(NULLIF(?2, ''), title),
                url = COALESCE(NULLIF(?3, ''), url),
                link_type_id = COALESCE(NULLIF(?4, 0), link_type_id),
                project_id = COALESCE(NULLIF(?5, 0), project_id)
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Link>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.url)
            .bind(input.link_type_id)
            .bind(input.project_id)
            .fetch_optional(pool)
            .await?;

        match updated {
            Some(link) => Self::find_with_type(pool, link.id).await,
            None => Ok(None),
        }
    }

    /// Delete a link by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM links WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
