//! Axum route handlers for the portfolio document and the edit session.
//!
//! Read access is public; every mutation goes through
//! `gate.require_unlocked()` first.

use axum::{
    extract::{Multipart, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use serde_json::Value;

use crate::editor::image::{to_data_url, ImageTarget};
use crate::editor::mutations::{
    add_item, apply_field_patch, remove_item, update_item, Collection, FieldPatch,
};
use crate::errors::AppError;
use crate::models::portfolio::CareerContext;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AddItemResponse {
    pub id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadImageResponse {
    pub data_url: String,
}

/// GET /api/v1/portfolio
pub async fn handle_get_portfolio(State(state): State<AppState>) -> Json<CareerContext> {
    Json(state.store.document().await)
}

/// PUT /api/v1/portfolio/field
pub async fn handle_set_field(
    State(state): State<AppState>,
    Json(patch): Json<FieldPatch>,
) -> Result<Json<CareerContext>, AppError> {
    state.gate.require_unlocked()?;
    let doc = state
        .store
        .update(|doc| {
            apply_field_patch(doc, patch);
            doc.clone()
        })
        .await?;
    Ok(Json(doc))
}

/// POST /api/v1/portfolio/:collection/items
pub async fn handle_add_item(
    State(state): State<AppState>,
    Path(collection): Path<Collection>,
    Json(template): Json<Value>,
) -> Result<Json<AddItemResponse>, AppError> {
    state.gate.require_unlocked()?;
    let id = state
        .store
        .try_update(|doc| add_item(doc, collection, template))
        .await?;
    Ok(Json(AddItemResponse { id }))
}

/// PUT /api/v1/portfolio/:collection/items/:id
pub async fn handle_update_item(
    State(state): State<AppState>,
    Path((collection, id)): Path<(Collection, String)>,
    Json(payload): Json<Value>,
) -> Result<StatusCode, AppError> {
    state.gate.require_unlocked()?;
    state
        .store
        .try_update(|doc| update_item(doc, collection, &id, payload))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/portfolio/:collection/items/:id
pub async fn handle_remove_item(
    State(state): State<AppState>,
    Path((collection, id)): Path<(Collection, String)>,
) -> Result<StatusCode, AppError> {
    state.gate.require_unlocked()?;
    state
        .store
        .update(|doc| remove_item(doc, collection, &id))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

struct UploadFields {
    target: ImageTarget,
    project_id: Option<String>,
    content_type: String,
    bytes: bytes::Bytes,
}

/// POST /api/v1/portfolio/images (multipart)
///
/// Fields: `target` ("profile" | "project"), `project_id` (required for
/// project targets), `file` (the image). The file is embedded as a data
/// URL — no resizing, no size cap.
pub async fn handle_upload_image(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<UploadImageResponse>, AppError> {
    state.gate.require_unlocked()?;
    let fields = read_upload(multipart).await?;
    let data_url = to_data_url(&fields.content_type, &fields.bytes);

    match fields.target {
        ImageTarget::Profile => {
            state
                .store
                .update(|doc| doc.profile_image_url = Some(data_url.clone()))
                .await?;
        }
        ImageTarget::Project => {
            let project_id = fields.project_id.ok_or_else(|| {
                AppError::Validation("project_id is required for project images".to_string())
            })?;
            state
                .store
                .try_update(|doc| {
                    let project = doc
                        .projects
                        .iter_mut()
                        .find(|p| p.id == project_id)
                        .ok_or_else(|| {
                            AppError::NotFound(format!("No project '{project_id}'"))
                        })?;
                    project.image_url = data_url.clone();
                    Ok(())
                })
                .await?;
        }
    }

    Ok(Json(UploadImageResponse { data_url }))
}

async fn read_upload(mut multipart: Multipart) -> Result<UploadFields, AppError> {
    let mut target = None;
    let mut project_id = None;
    let mut file = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("target") => {
                let raw = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Invalid target field: {e}")))?;
                target = Some(match raw.as_str() {
                    "profile" => ImageTarget::Profile,
                    "project" => ImageTarget::Project,
                    other => {
                        return Err(AppError::Validation(format!(
                            "Unknown image target '{other}'"
                        )))
                    }
                });
            }
            Some("project_id") => {
                project_id = Some(field.text().await.map_err(|e| {
                    AppError::Validation(format!("Invalid project_id field: {e}"))
                })?);
            }
            Some("file") => {
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Invalid file field: {e}")))?;
                file = Some((content_type, bytes));
            }
            _ => {}
        }
    }

    let target =
        target.ok_or_else(|| AppError::Validation("Missing 'target' field".to_string()))?;
    let (content_type, bytes) =
        file.ok_or_else(|| AppError::Validation("Missing 'file' field".to_string()))?;
    Ok(UploadFields {
        target,
        project_id,
        content_type,
        bytes,
    })
}

/// GET /api/v1/portfolio/export
pub async fn handle_export(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let export = state.store.export().await?;
    let headers = [
        (header::CONTENT_TYPE, "application/json".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", export.filename),
        ),
    ];
    Ok((headers, export.body))
}

/// POST /api/v1/portfolio/import
pub async fn handle_import(
    State(state): State<AppState>,
    body: bytes::Bytes,
) -> Result<StatusCode, AppError> {
    state.gate.require_unlocked()?;
    state.store.import(&body).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/portfolio/reset
///
/// Factory reset: default document, both storage keys cleared, gate
/// locked and unauthorized regardless of prior state.
pub async fn handle_reset(
    State(state): State<AppState>,
) -> Result<Json<CareerContext>, AppError> {
    state.gate.require_unlocked()?;
    let doc = state.store.reset().await?;
    state.gate.reset();
    Ok(Json(doc))
}
