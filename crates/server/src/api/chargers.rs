use std::sync::Arc;

use crate::{
    api::{cards_dto, map_dto},
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chargemap::engine::Event;

pub async fn chargers(State(state): State<Arc<AppState>>) -> Result<Response, StatusCode> {
    let session = state.session.read().await;
    Ok(Json(map_dto(&session)).into_response())
}

pub async fn toggle(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let mut session = state.session.write().await;
    if !session.filtered().iter().any(|charger| charger.id.as_ref() == id) {
        return Err(StatusCode::NOT_FOUND);
    }
    session.dispatch(Event::MarkerPressed(id.into()));
    Ok(Json(cards_dto(&session)).into_response())
}

pub async fn selection(State(state): State<Arc<AppState>>) -> Result<Response, StatusCode> {
    let session = state.session.read().await;
    Ok(Json(cards_dto(&session)).into_response())
}
