//! API route definitions

pub mod leads;
pub mod scoring;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::AppState;

/// Create all API routes
pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        // Lead routes
        .route("/leads", get(leads::get_leads))
        .route("/leads/summary", get(leads::get_lead_summary))
        .route("/leads/score", post(leads::score_qualification))
        .route("/leads/:id", get(leads::get_lead))
        // Scoring reference
        .route("/scoring/tables", get(scoring::get_scoring_tables))
}
