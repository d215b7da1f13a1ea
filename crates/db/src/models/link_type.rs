//! Link type entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use trackboard_core::types::DbId;
use validator::Validate;

/// A link type row from the `link_types` table.
///
/// Icon columns hold filenames inside the icon store. `dark_icon` is never
/// empty: it falls back to `light_icon` when no dark variant was uploaded.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct LinkType {
    pub id: DbId,
    pub title: String,
    #[serde(rename = "lightIcon")]
    pub light_icon: String,
    #[serde(rename = "darkIcon")]
    pub dark_icon: String,
    pub color: String,
}

impl LinkType {
    /// Icon filename to serve for the given theme.
    pub fn icon_for(&self, theme: IconTheme) -> &str {
        match theme {
            IconTheme::Light => &self.light_icon,
            IconTheme::Dark => &self.dark_icon,
        }
    }
}

/// Display theme selecting which icon variant to serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    Light,
    Dark,
}

/// DTO for creating a link type, after icons have been stored.
#[derive(Debug, Clone, Validate)]
pub struct CreateLinkType {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "color must not be empty"))]
    pub color: String,
    pub light_icon: String,
    /// Falls back to `light_icon` when `None`.
    pub dark_icon: Option<String>,
}

/// DTO for updating a link type, after any new icons have been stored.
///
/// `title` and `color` are always overwritten. A new `light_icon` replaces
/// the stored one; `dark_icon` is reset to the (possibly new) light icon
/// whenever no dark icon is supplied.
#[derive(Debug, Clone)]
pub struct UpdateLinkType {
    pub title: String,
    pub color: String,
    pub light_icon: Option<String>,
    pub dark_icon: Option<String>,
}
