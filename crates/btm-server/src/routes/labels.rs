use std::sync::Arc;

use axum::extract::Path;
use axum::extract::rejection::JsonRejection;
use axum::{Extension, Json};
use btm_core::{Label, LabelKind};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct NewLabel {
    pub name: Option<String>,
}

const fn title(kind: LabelKind) -> &'static str {
    match kind {
        LabelKind::BodyPart => "Body part",
        LabelKind::Equipment => "Equipment",
    }
}

async fn add(
    state: &AppState,
    kind: LabelKind,
    payload: Result<Json<NewLabel>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(request) = payload.map_err(|r| ApiError::InvalidInput(r.body_text()))?;
    let name = request
        .name
        .ok_or_else(|| ApiError::InvalidInput("Missing 'name' field.".into()))?;

    let label = state.db.add_label(kind, &name).await?;
    Ok(Json(json!({
        "message": format!("{} added successfully", title(kind)),
        "name": label.name,
    })))
}

async fn remove(state: &AppState, kind: LabelKind, name: &str) -> Result<Json<Value>, ApiError> {
    let deletion = state.db.delete_label(kind, name).await?;
    if deletion.labels_deleted == 0 {
        return Err(ApiError::NotFound(format!("{} not found.", title(kind))));
    }
    Ok(Json(json!({
        "message": format!(
            "{} '{name}' and {} associated exercises deleted successfully.",
            title(kind),
            deletion.exercises_deleted
        ),
        "exercises_deleted": deletion.exercises_deleted,
    })))
}

pub async fn add_body_part(
    Extension(state): Extension<Arc<AppState>>,
    payload: Result<Json<NewLabel>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    add(&state, LabelKind::BodyPart, payload).await
}

pub async fn add_equipment(
    Extension(state): Extension<Arc<AppState>>,
    payload: Result<Json<NewLabel>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    add(&state, LabelKind::Equipment, payload).await
}

pub async fn delete_body_part(
    Extension(state): Extension<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<Value>, ApiError> {
    remove(&state, LabelKind::BodyPart, &name).await
}

pub async fn delete_equipment(
    Extension(state): Extension<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<Value>, ApiError> {
    remove(&state, LabelKind::Equipment, &name).await
}

pub async fn list_body_parts(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<Vec<Label>>, ApiError> {
    Ok(Json(state.db.list_labels(LabelKind::BodyPart).await?))
}

pub async fn list_equipment(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<Vec<Label>>, ApiError> {
    Ok(Json(state.db.list_labels(LabelKind::Equipment).await?))
}
