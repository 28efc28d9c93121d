use axum::{extract::State, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::app::AppState;
use crate::database::DatabaseManager;
use crate::error::ApiError;

/// GET / - service description
pub async fn root() -> Json<Value> {
    Json(json!({
        "name": "Comporta.io API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "pessoa": "POST /pessoa, GET /pessoa?id=, DELETE /pessoa?id=, GET /pessoas",
            "evento": "POST /evento, DELETE /evento?id=",
            "rotinapadrao": "POST /rotinapadrao, DELETE /rotinapadrao?id=, GET /rotinaspadrao?id=",
            "rotinadia": "POST /rotinadia, DELETE /rotinadia?id=, POST /rotinasdia, POST /rotinasdia-data",
        }
    }))
}

/// GET /health - database connectivity
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match DatabaseManager::health_check(&state.pool).await {
        Ok(()) => Json(json!({
            "status": "ok",
            "timestamp": now,
            "database": "ok"
        }))
        .into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}
