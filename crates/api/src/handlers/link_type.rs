//! Handlers for the `/link_types` resource.
//!
//! Create and update take a multipart form with `title`, `color`, a
//! `lightIcon` file and an optional `darkIcon` file. Icons are written to the
//! icon store under their upload filename; the row only records filenames.

use axum::extract::multipart::Field;
use axum::extract::{Multipart, Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use trackboard_core::error::CoreError;
use trackboard_core::icons::{content_type_for, validate_content_type, validate_filename};
use trackboard_core::types::DbId;
use trackboard_core::validation::validate_input;
use trackboard_db::models::link_type::{CreateLinkType, IconTheme, LinkType, UpdateLinkType};
use trackboard_db::repositories::LinkTypeRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Multipart form
// ---------------------------------------------------------------------------

/// An icon file received in a multipart form.
struct IconUpload {
    filename: String,
    content_type: String,
    data: Vec<u8>,
}

#[derive(Default)]
struct LinkTypeForm {
    title: Option<String>,
    color: Option<String>,
    light_icon: Option<IconUpload>,
    dark_icon: Option<IconUpload>,
}

async fn read_form(mut multipart: Multipart) -> AppResult<LinkTypeForm> {
    let mut form = LinkTypeForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "title" => form.title = Some(read_text(field).await?),
            "color" => form.color = Some(read_text(field).await?),
            "lightIcon" => form.light_icon = read_icon(field).await?,
            "darkIcon" => form.dark_icon = read_icon(field).await?,
            _ => {} // ignore unknown fields
        }
    }

    Ok(form)
}

async fn read_text(field: Field<'_>) -> AppResult<String> {
    field
        .text()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))
}

/// Read a file part. A part with no filename and no content (an empty file
/// input) counts as not supplied.
async fn read_icon(field: Field<'_>) -> AppResult<Option<IconUpload>> {
    let filename = field.file_name().unwrap_or("").to_string();
    let content_type = field
        .content_type()
        .unwrap_or("application/octet-stream")
        .to_string();
    let data = field
        .bytes()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    if filename.is_empty() && data.is_empty() {
        return Ok(None);
    }

    Ok(Some(IconUpload {
        filename,
        content_type,
        data: data.to_vec(),
    }))
}

fn require(value: Option<String>, field: &str) -> AppResult<String> {
    value.ok_or_else(|| AppError::BadRequest(format!("Missing required '{field}' field")))
}

/// Reject every supplied upload before any of them is written.
fn check_uploads(uploads: &[Option<&IconUpload>]) -> AppResult<()> {
    for upload in uploads.iter().flatten() {
        validate_content_type(&upload.content_type)?;
        validate_filename(&upload.filename)?;
    }
    Ok(())
}

async fn store_upload(state: &AppState, upload: Option<&IconUpload>) -> AppResult<Option<String>> {
    match upload {
        Some(upload) => {
            let stored = state
                .icons
                .store(&upload.filename, &upload.content_type, &upload.data)
                .await?;
            Ok(Some(stored))
        }
        None => Ok(None),
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /link_types/
///
/// Without a `darkIcon`, the light icon is used for both themes.
pub async fn create(
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<LinkType>)> {
    let form = read_form(multipart).await?;
    let title = require(form.title, "title")?;
    let color = require(form.color, "color")?;
    let light = form
        .light_icon
        .ok_or_else(|| AppError::BadRequest("Missing required 'lightIcon' file".into()))?;
    let dark = form.dark_icon;

    check_uploads(&[Some(&light), dark.as_ref()])?;

    let input = CreateLinkType {
        title,
        color,
        light_icon: light.filename.clone(),
        dark_icon: dark.as_ref().map(|d| d.filename.clone()),
    };
    validate_input(&input)?;

    store_upload(&state, Some(&light)).await?;
    store_upload(&state, dark.as_ref()).await?;

    let link_type = LinkTypeRepo::create(&state.pool, &input).await?;
    tracing::info!(
        link_type_id = link_type.id,
        light_icon = %link_type.light_icon,
        dark_icon = %link_type.dark_icon,
        "Link type created",
    );
    Ok((StatusCode::CREATED, Json(link_type)))
}

/// GET /link_types/
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<LinkType>>> {
    let link_types = LinkTypeRepo::list(&state.pool).await?;
    Ok(Json(link_types))
}

/// GET /link_types/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<LinkType>> {
    let link_type = find_link_type(&state, id).await?;
    Ok(Json(link_type))
}

/// GET /link_types/icon/{id}/{theme}
///
/// Returns the raw icon bytes for the `light` or `dark` theme.
pub async fn get_icon(
    State(state): State<AppState>,
    Path((id, theme)): Path<(DbId, IconTheme)>,
) -> AppResult<Response> {
    let link_type = find_link_type(&state, id).await?;
    let filename = link_type.icon_for(theme);
    let data = state.icons.retrieve(filename).await?;

    Ok(([(header::CONTENT_TYPE, content_type_for(filename))], data).into_response())
}

/// PUT /link_types/{id}
///
/// `title` and `color` are required. A supplied `lightIcon` replaces the
/// stored one. When `darkIcon` is absent the dark icon is reset to the light
/// icon, even if no icon was uploaded at all.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<Json<LinkType>> {
    find_link_type(&state, id).await?;

    let form = read_form(multipart).await?;
    let title = require(form.title, "title")?;
    let color = require(form.color, "color")?;

    check_uploads(&[form.light_icon.as_ref(), form.dark_icon.as_ref()])?;

    let light_icon = store_upload(&state, form.light_icon.as_ref()).await?;
    let dark_icon = store_upload(&state, form.dark_icon.as_ref()).await?;

    let input = UpdateLinkType {
        title,
        color,
        light_icon,
        dark_icon,
    };
    let link_type = LinkTypeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "LinkType",
            id,
        }))?;
    Ok(Json(link_type))
}

/// DELETE /link_types/{id}
///
/// Removes every link using this type. Icon files stay in the store.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = LinkTypeRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(link_type_id = id, "Link type deleted with its links");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "LinkType",
            id,
        }))
    }
}

async fn find_link_type(state: &AppState, id: DbId) -> AppResult<LinkType> {
    LinkTypeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "LinkType",
            id,
        }))
}
