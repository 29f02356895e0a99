use std::time::Duration;

use axum::{
    http::{header, Method, StatusCode},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        api::{distributor_answers, distributor_info},
        export::export_excel,
        health::livez,
        pages::{index, questions},
        registration::{submit, submit_answers},
        submissions::view_submissions,
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    // CORS configuration for API endpoints
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers([header::CONTENT_TYPE]);

    // Read-only API routes with CORS
    let api_routes = Router::new()
        .route("/distributor-info", get(distributor_info))
        .route("/distributor-answers", get(distributor_answers))
        .layer(cors);

    // Main application router
    Router::new()
        .route("/", get(index))
        .route("/submit", post(submit))
        .route("/questions.html", get(questions))
        .route("/submit-answers", post(submit_answers))
        .route("/view-submissions", get(view_submissions))
        .route("/export-excel", get(export_excel))
        .route("/livez", get(livez))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
        .with_state(state)
}
