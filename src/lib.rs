// src/lib.rs

use axum::{
    middleware as axum_middleware,
    routing::{get, patch, post},
    Router,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod common;
pub mod config;
pub mod db;
pub mod docs;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;

use crate::config::AppState;
use crate::docs::ApiDoc;
use crate::middleware::auth::auth_guard;

/// Monta o router completo da API sobre um estado já construído.
pub fn build_router(app_state: AppState) -> Router {
    // Rotas públicas (sem sessão)
    let public_routes = Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .route("/api/register", post(handlers::auth::register))
        .route("/api/login", post(handlers::auth::login))
        .route("/api/logout", post(handlers::auth::logout));

    // Rotas protegidas pelo portão de sessão
    let protected_routes = Router::new()
        .route("/api/user", get(handlers::auth::get_me))
        .route(
            "/api/shifts",
            get(handlers::shifts::list_shifts).post(handlers::shifts::open_shift),
        )
        .route("/api/shifts/active", get(handlers::shifts::get_active_shift))
        .route("/api/shifts/{id}/close", patch(handlers::shifts::close_shift))
        .route(
            "/api/clients",
            get(handlers::clients::list_clients).post(handlers::clients::create_client),
        )
        .route(
            "/api/clients/{id}",
            get(handlers::clients::get_client)
                .patch(handlers::clients::update_client)
                .delete(handlers::clients::delete_client),
        )
        .route(
            "/api/inventory",
            get(handlers::inventory::list_items).post(handlers::inventory::create_item),
        )
        .route(
            "/api/inventory/{id}",
            get(handlers::inventory::get_item)
                .patch(handlers::inventory::update_item)
                .delete(handlers::inventory::delete_item),
        )
        .route(
            "/api/reservations",
            get(handlers::reservations::list_reservations)
                .post(handlers::reservations::create_reservation),
        )
        .route(
            "/api/reservations/{id}",
            get(handlers::reservations::get_reservation)
                .patch(handlers::reservations::update_reservation)
                .delete(handlers::reservations::delete_reservation),
        )
        .route(
            "/api/bills",
            get(handlers::bills::list_bills).post(handlers::bills::create_bill),
        )
        .route(
            "/api/bills/{id}",
            get(handlers::bills::get_bill)
                .patch(handlers::bills::update_bill)
                .delete(handlers::bills::delete_bill),
        )
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(public_routes)
        .merge(protected_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
