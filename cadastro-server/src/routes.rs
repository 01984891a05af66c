use crate::health;
use crate::pages::cadastrar_usuario::{cadastrar_usuario, cadastrar_usuario_form};
use crate::pages::listar_usuarios::listar_usuarios;
use crate::state::AppState;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Registration pages
        .route(
            "/cadastrar/",
            get(cadastrar_usuario_form).post(cadastrar_usuario),
        )
        .route("/usuarios/", get(listar_usuarios))
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        // Add shared state
        .with_state(state)
        // Request tracing middleware
        .layer(TraceLayer::new_for_http())
}
