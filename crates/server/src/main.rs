mod api;
mod config;
mod dto;
mod state;
mod upload;

use crate::{
    config::{Config, PORT},
    state::AppState,
};
use axum::routing::{get, post};
use chargemap::{
    dataset::Dataset, engine::Session, location::FixedLocation, repository::Repository,
};
use std::{sync::Arc, time::Instant};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().init();

    info!("Starting server...");
    let args: Vec<_> = std::env::args().collect();
    if args.len() < 2 {
        error!("Missing charger dataset");
        std::process::exit(1);
    }
    let config = Config::new(args[1].clone().into()).with_env();

    info!("Loading data...");
    let now = Instant::now();
    let repository = match Dataset::new()
        .from_path(&config.dataset_path)
        .and_then(|dataset| Repository::new().load_dataset(dataset))
    {
        Ok(repository) => repository,
        Err(err) => {
            error!("Failed to load {}: {err}", config.dataset_path.display());
            std::process::exit(1);
        }
    };
    info!("Loading data took {:?}", now.elapsed());

    let session =
        Session::new(Arc::new(repository)).locate(&FixedLocation::from(config.location));
    let state = Arc::new(AppState::new(session, config.upload));

    let app = axum::Router::new()
        .route("/chargers", get(api::chargers))
        .route("/chargers/{id}/toggle", post(api::toggle))
        .route("/selection", get(api::selection))
        .route("/search", get(api::search).delete(api::clear_search))
        .route("/viewport", get(api::viewport).put(api::region_change))
        .route("/viewport/focus", post(api::focus))
        .route("/location", post(api::location))
        .route("/navigate/{id}", get(api::navigate))
        .route("/snapshot", post(api::snapshot))
        .with_state(state);
    let listener = match tokio::net::TcpListener::bind(format!("0.0.0.0:{}", PORT)).await {
        Ok(listener) => listener,
        Err(err) => {
            error!("Failed to bind port {PORT}: {err}");
            std::process::exit(1);
        }
    };
    info!("Listening to port {PORT}");
    if let Err(err) = axum::serve(listener, app).await {
        error!("Server stopped: {err}");
    }
}
