use std::sync::Arc;

use axum::extract::Path;
use axum::extract::rejection::JsonRejection;
use axum::{Extension, Json};
use btm_core::{Exercise, ExerciseField, ExerciseFilter};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::error::ApiError;
use crate::state::AppState;

const DEFAULT_RANDOM_COUNT: u32 = 3;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExercise {
    pub name: Option<String>,
    #[serde(alias = "body_part")]
    pub body_part: Option<String>,
    pub equipment: Option<String>,
    pub target: Option<String>,
    #[serde(alias = "media_url")]
    pub gif_url: Option<String>,
    #[serde(default)]
    pub secondary_muscles: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
    pub description: Option<String>,
    pub difficulty: Option<String>,
}

impl NewExercise {
    /// Build the exercise, or list which required fields are missing or blank.
    fn into_exercise(self) -> Result<Exercise, ApiError> {
        let present = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());
        let missing: Vec<&str> = [
            ("name", present(&self.name)),
            ("bodyPart", present(&self.body_part)),
            ("equipment", present(&self.equipment)),
            ("target", present(&self.target)),
        ]
        .into_iter()
        .filter_map(|(field, ok)| (!ok).then_some(field))
        .collect();

        if !missing.is_empty() {
            return Err(ApiError::InvalidInput(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )));
        }

        Ok(Exercise {
            name: self.name.unwrap_or_default().trim().to_string(),
            body_part: self.body_part.unwrap_or_default().trim().to_string(),
            equipment: self.equipment.unwrap_or_default().trim().to_string(),
            target: self.target.map(|t| t.trim().to_string()),
            media_url: self.gif_url,
            secondary_muscles: self.secondary_muscles,
            instructions: self.instructions,
            description: self.description,
            difficulty: self.difficulty,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RandomRequest {
    pub body_part: Option<String>,
    pub num_exercises: Option<u32>,
}

fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| ApiError::InvalidInput(rejection.body_text()))
}

pub async fn insert_exercise(
    Extension(state): Extension<Arc<AppState>>,
    payload: Result<Json<NewExercise>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let exercise = json_body(payload)?.into_exercise()?;
    state.db.insert_exercise(&exercise).await?;

    tracing::info!(identity = %exercise.identity(), "exercise inserted");
    Ok(Json(json!({
        "message": "Exercise inserted successfully",
        "name": exercise.name,
    })))
}

pub async fn get_random_exercises(
    Extension(state): Extension<Arc<AppState>>,
    payload: Result<Json<RandomRequest>, JsonRejection>,
) -> Result<Json<Vec<Exercise>>, ApiError> {
    let request = json_body(payload)?;
    let body_part = request
        .body_part
        .filter(|b| !b.trim().is_empty())
        .ok_or_else(|| ApiError::InvalidInput("No body part provided.".into()))?;
    let count = request.num_exercises.unwrap_or(DEFAULT_RANDOM_COUNT);

    Ok(Json(state.db.random_exercises(Some(&body_part), count).await?))
}

pub async fn get_exercise(
    Extension(state): Extension<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<Exercise>, ApiError> {
    state
        .db
        .find_exercise_by_name(&name)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Exercise not found.".into()))
}

pub async fn delete_exercise(
    Extension(state): Extension<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<Value>, ApiError> {
    if !state.db.delete_exercise_by_name(&name).await? {
        return Err(ApiError::NotFound("Exercise not found.".into()));
    }
    Ok(Json(json!({
        "message": format!("Exercise '{name}' deleted successfully."),
    })))
}

pub async fn list_exercises(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<Vec<Exercise>>, ApiError> {
    Ok(Json(state.db.find_exercises(&ExerciseFilter::all()).await?))
}

pub async fn list_difficulties(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<Vec<String>>, ApiError> {
    Ok(Json(state.db.distinct_values(ExerciseField::Difficulty).await?))
}
