use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod db;
pub mod error;
pub mod routes;
pub mod services;
pub mod validation;

use db::RecordStore;
use services::{ContactService, DonationService, StatsService};

#[derive(Clone)]
pub struct AppState {
    pub donations: DonationService,
    pub contacts: ContactService,
    pub stats: StatsService,
}

impl AppState {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            donations: DonationService::new(store.clone()),
            contacts: ContactService::new(store.clone()),
            stats: StatsService::new(store),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    // CORS is wide open on purpose: the form is public and unauthenticated.
    Router::new()
        .route("/api/health", get(routes::health::health_check))
        .route(
            "/api/donations",
            get(routes::donations::list_donations).post(routes::donations::create_donation),
        )
        .route(
            "/api/contacts",
            get(routes::contacts::list_contacts).post(routes::contacts::create_contact),
        )
        .route("/api/stats", get(routes::stats::get_stats))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
