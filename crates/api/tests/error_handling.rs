//! Tests for the `AppError` to HTTP response mapping.

mod common;

use assert_matches::assert_matches;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use common::body_json;
use sqlx::SqlitePool;
use trackboard_api::error::AppError;
use trackboard_core::error::CoreError;

async fn render(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    (status, body_json(response).await)
}

#[tokio::test]
async fn not_found_maps_to_404_with_entity_message() {
    let (status, json) = render(AppError::Core(CoreError::NotFound {
        entity: "Project",
        id: 999,
    }))
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Project with ID 999 is not exist");
}

#[tokio::test]
async fn missing_icon_file_maps_to_404() {
    let (status, json) = render(AppError::Core(CoreError::FileNotFound("x.png".into()))).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Icon file x.png is not exist");
}

#[tokio::test]
async fn unsupported_media_type_maps_to_400() {
    let (status, json) = render(AppError::Core(CoreError::UnsupportedMediaType {
        content_type: "text/plain".into(),
        allowed: "image/png".into(),
    }))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "UNSUPPORTED_MEDIA_TYPE");
    assert_eq!(
        json["error"],
        "Invalid icon file type text/plain. Expected one of image/png"
    );
}

#[tokio::test]
async fn validation_maps_to_400() {
    let (status, json) = render(AppError::Core(CoreError::Validation(
        "title: title must not be empty".into(),
    )))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn bad_request_maps_to_400() {
    let (status, json) = render(AppError::BadRequest("Missing required 'title' field".into())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "Missing required 'title' field");
}

#[tokio::test]
async fn internal_errors_hide_details() {
    let (status, json) = render(AppError::InternalError("disk on fire".into())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "An internal error occurred");

    let (status, json) = render(AppError::Core(CoreError::Internal("io".into()))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
}

#[tokio::test]
async fn row_not_found_maps_to_404() {
    let (status, _) = render(AppError::Database(sqlx::Error::RowNotFound)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn foreign_key_violation_maps_to_409(pool: SqlitePool) {
    let err = sqlx::query("INSERT INTO tasks (title, status, project_id) VALUES ('t', 'Done', 12345)")
        .execute(&pool)
        .await
        .unwrap_err();
    assert_matches!(err, sqlx::Error::Database(_));

    let (status, json) = render(AppError::Database(err)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "CONSTRAINT_VIOLATION");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn check_violation_maps_to_400(pool: SqlitePool) {
    let err = sqlx::query("INSERT INTO projects (title, description, status) VALUES ('p', '', 'Paused')")
        .execute(&pool)
        .await
        .unwrap_err();

    let (status, json) = render(AppError::Database(err)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "CONSTRAINT_VIOLATION");
}
