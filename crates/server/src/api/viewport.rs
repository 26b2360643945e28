use std::sync::Arc;

use crate::state::AppState;
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chargemap::{
    engine::Event,
    shared::geo::{Coordinate, Viewport},
};
use tracing::info;

pub async fn viewport(State(state): State<Arc<AppState>>) -> Result<Response, StatusCode> {
    let session = state.session.read().await;
    Ok(Json(*session.viewport()).into_response())
}

pub async fn region_change(
    State(state): State<Arc<AppState>>,
    Json(viewport): Json<Viewport>,
) -> Result<Response, StatusCode> {
    let mut session = state.session.write().await;
    session.dispatch(Event::RegionChangeComplete(viewport));
    Ok(Json(*session.viewport()).into_response())
}

pub async fn focus(State(state): State<Arc<AppState>>) -> Result<Response, StatusCode> {
    let mut session = state.session.write().await;
    session.dispatch(Event::FocusOnUser);
    Ok(Json(*session.viewport()).into_response())
}

pub async fn location(
    State(state): State<Arc<AppState>>,
    Json(coordinate): Json<Coordinate>,
) -> Result<Response, StatusCode> {
    let mut session = state.session.write().await;
    info!("Location update {coordinate}");
    session.dispatch(Event::LocationFixed(coordinate));
    Ok(Json(*session.viewport()).into_response())
}
