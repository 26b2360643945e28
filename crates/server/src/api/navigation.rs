use std::{collections::HashMap, sync::Arc};

use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chargemap::navigation::Platform;
use serde::Serialize;
use tracing::error;

#[derive(Serialize)]
struct NavigationDto {
    uri: String,
}

pub async fn navigate(
    Path(id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let platform: Platform = match params.get("platform") {
        Some(value) => value.parse::<Platform>().map_err(|err| {
            error!("Failed to parse platform: {err}");
            StatusCode::BAD_REQUEST
        })?,
        None => Platform::default(),
    };
    let session = state.session.read().await;
    let charger = session.charger_by_id(&id).ok_or(StatusCode::NOT_FOUND)?;
    let uri = platform.navigation_uri(&charger.coordinate);
    Ok(Json(NavigationDto { uri }).into_response())
}
