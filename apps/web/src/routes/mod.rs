pub mod health;
pub mod legacy;
pub mod pages;

use axum::{http::Uri, middleware, routing::get, Router};

use crate::errors::AppError;
use crate::i18n::locale::content_language;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No page at {}", uri.path()))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Legacy pre-i18n routes, kept only to redirect old links
        .route("/match", get(legacy::legacy_match))
        .route("/resume", get(legacy::legacy_resume))
        .route("/resume/:resume_id", get(legacy::legacy_resume_by_id))
        // Localized pages
        .route("/:locale/dashboard", get(pages::dashboard_page))
        .route("/:locale/match", get(pages::match_page))
        .route("/:locale/resume", get(pages::resume_upload_page))
        .route("/:locale/resume/:resume_id", get(pages::resume_detail_page))
        .fallback(not_found)
        .layer(middleware::from_fn(content_language))
        .with_state(state)
}
