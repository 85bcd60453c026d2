//! Sistema de reservas de vehículos
//!
//! Backend REST: autenticación, inventario de vehículos y motor de
//! reservas sobre PostgreSQL.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod utils;

use axum::{response::Json, routing::get, Router};
use serde_json::json;

use middleware::cors::cors_middleware_with_origins;
use state::AppState;
use tower_http::trace::TraceLayer;

/// Construir el router completo de la aplicación
pub fn app(state: AppState) -> Router {
    let cors = cors_middleware_with_origins(state.config.cors_origins.clone());

    Router::new()
        .route("/", get(welcome))
        .route("/api/health", get(health))
        .nest("/api/auth", routes::auth_routes::create_auth_router())
        .nest("/api/vehicules", routes::vehicule_routes::create_vehicule_router())
        .nest(
            "/api/reservations",
            routes::reservation_routes::create_reservation_router(),
        )
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Página de bienvenida
async fn welcome() -> &'static str {
    "Bienvenue sur le système de réservation de véhicules"
}

/// Health check
async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Fallback para rutas desconocidas
async fn not_found() -> (axum::http::StatusCode, &'static str) {
    (axum::http::StatusCode::NOT_FOUND, "Ressource non trouvée")
}
