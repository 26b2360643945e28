use std::{collections::HashMap, sync::Arc};

use crate::{api::map_dto, state::AppState};
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chargemap::engine::Event;

pub async fn search(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    if let Some(query) = params.get("q") {
        let mut session = state.session.write().await;
        session.dispatch(Event::QueryChanged(query.clone()));
        Ok(Json(map_dto(&session)).into_response())
    } else {
        Err(StatusCode::BAD_REQUEST)
    }
}

pub async fn clear_search(State(state): State<Arc<AppState>>) -> Result<Response, StatusCode> {
    let mut session = state.session.write().await;
    session.dispatch(Event::ClearSearch);
    Ok(Json(map_dto(&session)).into_response())
}
