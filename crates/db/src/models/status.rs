//! Closed status enums stored as their display strings.
//!
//! The TEXT tokens written to the database and the JSON tokens on the wire
//! are the same (`"Active"`, `"Not Done"`, ...), so a stored value can be
//! compared directly against a bound enum.

use serde::{Deserialize, Serialize};

/// Project lifecycle status. New projects always start `Active`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum ProjectStatus {
    Active,
    Archived,
    Completed,
}

impl ProjectStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectStatus::Active => "Active",
            ProjectStatus::Archived => "Archived",
            ProjectStatus::Completed => "Completed",
        }
    }
}

/// Filter accepted by the project status listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectStatusFilter {
    All,
    Active,
    Archived,
    Completed,
}

impl ProjectStatusFilter {
    /// The exact status to match, or `None` for `All`.
    pub fn status(self) -> Option<ProjectStatus> {
        match self {
            ProjectStatusFilter::All => None,
            ProjectStatusFilter::Active => Some(ProjectStatus::Active),
            ProjectStatusFilter::Archived => Some(ProjectStatus::Archived),
            ProjectStatusFilter::Completed => Some(ProjectStatus::Completed),
        }
    }
}

/// Task completion status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum TaskStatus {
    Done,
    #[serde(rename = "Not Done", alias = "NotDone")]
    #[sqlx(rename = "Not Done")]
    NotDone,
}

impl TaskStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Done => "Done",
            TaskStatus::NotDone => "Not Done",
        }
    }
}
