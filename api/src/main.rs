//! BezHandlowca Lead API Server
//!
//! REST API endpoints serving CRM leads annotated with their lead score.

use std::sync::Arc;

use axum::{routing::get, Router};
use sqlx::{Pool, Postgres};
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod routes;

use config::ApiConfig;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db_pool: Pool<Postgres>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let config = ApiConfig::from_env()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting BezHandlowca Lead API...");

    // Initialize database connection
    let db_pool = crm_db::initialize_database().await?;
    tracing::info!("Connected to database");

    let state = Arc::new(AppState { db_pool });
    let app = app(state);

    let addr = config.socket_addr()?;
    tracing::info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the router with middleware
fn app(state: Arc<AppState>) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Root endpoint with API info
        .route("/", get(root))
        // Health check
        .route("/health", get(health_check))
        // API routes
        .nest("/api", routes::api_routes())
        // State and middleware
        .with_state(state)
        .layer(cors)
        .layer(tower_http::trace::TraceLayer::new_for_http())
}

/// Root endpoint - API information
async fn root() -> axum::response::Html<&'static str> {
    axum::response::Html(r#"
<!DOCTYPE html>
<html>
<head>
    <title>BezHandlowca Lead API</title>
    <style>
        body { font-family: system-ui, sans-serif; max-width: 800px; margin: 50px auto; padding: 20px; background: #f7f7fb; color: #222; }
        h1 { color: #d9480f; }
        a { color: #1c7ed6; }
        code { background: #e9ecef; padding: 2px 6px; border-radius: 4px; }
        .endpoint { margin: 10px 0; padding: 10px; background: #fff; border-radius: 8px; }
        .method { color: #2b8a3e; font-weight: bold; }
    </style>
</head>
<body>
    <h1>BezHandlowca Lead API</h1>
    <p>Lead scoring for the BezHandlowca.pl CRM</p>

    <h2>Endpoints</h2>

    <div class="endpoint">
        <span class="method">GET</span> <a href="/health">/health</a> - Health check
    </div>

    <h3>Leads</h3>
    <div class="endpoint">
        <span class="method">GET</span> <a href="/api/leads">/api/leads</a> - Leads with score and recommendation
        (<code>limit</code>, <code>tenant</code>, <code>status</code>, <code>recommendation</code>, <code>minScore</code>, <code>sort=score</code>)
    </div>
    <div class="endpoint">
        <span class="method">GET</span> <a href="/api/leads/summary">/api/leads/summary</a> - Leads per recommendation bucket
    </div>
    <div class="endpoint">
        <span class="method">GET</span> <code>/api/leads/:id</code> - Lead details with score breakdown
    </div>
    <div class="endpoint">
        <span class="method">POST</span> <code>/api/leads/score</code> - Score qualification answers
    </div>

    <h3>Scoring</h3>
    <div class="endpoint">
        <span class="method">GET</span> <a href="/api/scoring/tables">/api/scoring/tables</a> - Point tables and thresholds
    </div>
</body>
</html>
    "#)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
