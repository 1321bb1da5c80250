use axum::Router;
use axum::routing::{delete, get, post};

pub mod exercises;
pub mod health;
pub mod labels;
pub mod refresh;

/// Routes mounted under `/api/v1`.
pub fn router() -> Router {
    Router::new()
        .route("/refresh_db", post(refresh::refresh_db))
        .route("/insert_exercise", post(exercises::insert_exercise))
        .route("/get_random_exercises", post(exercises::get_random_exercises))
        .route("/exercise/{*name}", get(exercises::get_exercise))
        .route("/delete_exercise/{*name}", delete(exercises::delete_exercise))
        .route("/exercises_list", get(exercises::list_exercises))
        .route("/difficulties", get(exercises::list_difficulties))
        .route("/add_body_part", post(labels::add_body_part))
        .route("/add_equipment", post(labels::add_equipment))
        .route("/delete_body_part/{name}", delete(labels::delete_body_part))
        .route("/delete_equipment/{name}", delete(labels::delete_equipment))
        .route("/body_parts_list", get(labels::list_body_parts))
        .route("/equipment_list", get(labels::list_equipment))
}
