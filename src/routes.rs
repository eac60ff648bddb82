// src/routes.rs

use axum::{
    Router,
    http::Method,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{game::GameService, handlers::quiz};

/// Assembles the main application router.
///
/// * Mounts the quiz endpoints under `/api`.
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (the game service).
pub fn create_router(game: GameService) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    let quiz_routes = Router::new()
        .route("/image-source", get(quiz::image_source))
        .route("/quiz", get(quiz::quiz_state))
        .route("/guess", post(quiz::submit_guess));

    Router::new()
        .nest("/api", quiz_routes)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(game)
}
