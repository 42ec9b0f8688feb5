use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::system::state::AppState;

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // A001 Attribute fields
        // ========================================
        .route(
            "/api/taxonomy/fields",
            get(handlers::a001_attribute_field::list_all),
        )
        // ========================================
        // A002 Categories
        // ========================================
        .route(
            "/api/taxonomy/categories",
            get(handlers::a002_category::list_all).post(handlers::a002_category::create),
        )
        .route(
            "/api/taxonomy/categories/:name",
            get(handlers::a002_category::get_by_name).delete(handlers::a002_category::delete),
        )
        .route("/api/taxonomy/reload", post(handlers::a002_category::reload))
        .route(
            "/api/taxonomy/resolve",
            get(handlers::taxonomy::resolve_category),
        )
        // ========================================
        // U501 Assemble product payload
        // ========================================
        .route(
            "/api/products/assemble",
            post(handlers::u501_assemble_product::assemble),
        )
        .route(
            "/api/products/import/assemble",
            post(handlers::u501_assemble_product::assemble_import),
        )
        .with_state(state)
}
