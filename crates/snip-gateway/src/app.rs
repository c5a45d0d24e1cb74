use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{analytics_handler, health_handler, redirect_handler, shorten_handler};
use crate::state::AppState;

pub struct App {}

impl App {
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/health", get(health_handler))
            .route("/shorten", get(shorten_handler))
            .route("/r/{code}", get(redirect_handler))
            .route("/analytics/{code}", get(analytics_handler))
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}
