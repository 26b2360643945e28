use std::sync::Arc;

use crate::{state::AppState, upload};
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::debug;

pub async fn snapshot(State(state): State<Arc<AppState>>) -> Result<Response, StatusCode> {
    let snapshot = state.session.read().await.capture();
    match &state.upload {
        Some(config) => {
            tokio::spawn(upload::upload_snapshot(
                state.client.clone(),
                config.clone(),
                snapshot.clone(),
            ));
        }
        None => debug!("Uploads are not configured, keeping {}", snapshot.file_name()),
    }
    Ok(Json(snapshot).into_response())
}
