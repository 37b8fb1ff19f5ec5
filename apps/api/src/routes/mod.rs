pub mod health;
pub mod templates;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Template gallery
        .route("/api/v1/templates", get(templates::handle_list_templates))
        .route(
            "/api/v1/templates/categories",
            get(templates::handle_list_categories),
        )
        .route(
            "/api/v1/templates/default",
            get(templates::handle_default_template),
        )
        .route("/api/v1/templates/:id", get(templates::handle_get_template))
        // Rendering
        .route(
            "/api/v1/templates/:id/render",
            post(templates::handle_render),
        )
        .with_state(state)
}
