//! clinic-server
//!
//! HTTP front end over the rule core. Handlers are stateless: each request
//! converts the form, evaluates it and renders the requested output.

pub mod config;
pub mod error;
mod middleware;
mod routes;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

pub fn router() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/options", get(routes::options::list_options))
        .route("/evaluate", post(routes::visit::evaluate_visit))
        .route("/summary/download", post(routes::summary::download_summary))
        .route("/report/markdown", post(routes::report::markdown_report))
        .route("/report/docx", post(routes::report::docx_report))
        .layer(axum_mw::from_fn(middleware::request_log::request_log))
        .layer(cors)
}
