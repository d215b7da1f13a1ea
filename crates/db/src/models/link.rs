//! Link entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use trackboard_core::types::DbId;
use validator::Validate;

use crate::models::link_type::LinkType;

/// A link row from the `links` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Link {
    pub id: DbId,
    pub title: String,
    pub url: String,
    pub link_type_id: DbId,
    pub project_id: DbId,
}

/// A link with its link type embedded, as returned by the API.
#[derive(Debug, Clone, Serialize)]
pub struct LinkWithType {
    pub id: DbId,
    pub title: String,
    pub url: String,
    pub link_type_id: DbId,
    pub project_id: DbId,
    pub link_type: LinkType,
}

/// DTO for creating a new link.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateLink {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "url must not be empty"))]
    pub url: String,
    pub link_type_id: DbId,
    pub project_id: DbId,
}

/// DTO for updating a link.
///
/// A field is applied only if present and truthy: empty strings and zero
/// ids leave the stored value untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateLink {
    pub title: Option<String>,
    pub url: Option<String>,
    pub link_type_id: Option<DbId>,
    pub project_id: Option<DbId>,
}
