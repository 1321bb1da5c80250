use std::sync::Arc;

use axum::{Extension, Json};
use btm_catalog::CatalogClient;
use btm_refresh::RefreshEngine;
use serde_json::{Value, json};

use crate::error::ApiError;
use crate::state::AppState;

#[tracing::instrument(level = "info", skip_all)]
pub async fn refresh_db(Extension(state): Extension<Arc<AppState>>) -> Result<Json<Value>, ApiError> {
    let client = CatalogClient::new(&state.catalog)?;
    let engine = RefreshEngine::new(Arc::clone(&state.db), client)
        .with_policy(state.identity_policy);

    let result = engine.refresh().await?;
    Ok(Json(json!({
        "message": format!(
            "Database refresh complete. {} new exercises added.",
            result.inserted_count
        ),
        "inserted": result.inserted_count,
        "fetched": result.fetched_count,
        "rejected": result.rejected.len(),
    })))
}
