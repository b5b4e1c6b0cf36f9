// src/handlers/inventory.rs

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use serde_json::Value;

use crate::{
    common::error::ApiError,
    config::AppState,
    handlers::records::{json_body, record_id},
    middleware::i18n::Locale,
    models::{
        auth::MessageResponse,
        inventory::{InventoryItem, CreateInventoryPayload, UpdateInventoryPayload},
    },
};

// GET /api/inventory
#[utoipa::path(
    get,
    path = "/api/inventory",
    tag = "Inventory",
    responses(
        (status = 200, description = "Itens do estoque", body = Vec<InventoryItem>)
    ),
    security(("session_cookie" = []), ("api_jwt" = []))
)]
pub async fn list_items(
    State(app_state): State<AppState>,
    locale: Locale,
) -> Result<impl IntoResponse, ApiError> {
    let items = app_state
        .inventory_service
        .list()
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(items)))
}

// GET /api/inventory/{id}
#[utoipa::path(
    get,
    path = "/api/inventory/{id}",
    tag = "Inventory",
    params(("id" = i32, Path, description = "ID do registro")),
    responses(
        (status = 200, description = "Item do estoque", body = InventoryItem),
        (status = 404, description = "Não encontrado", body = MessageResponse)
    ),
    security(("session_cookie" = []), ("api_jwt" = []))
)]
pub async fn get_item(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = record_id(&id, &locale, &app_state.i18n_store)?;

    let item = app_state
        .inventory_service
        .get(id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(item)))
}

// POST /api/inventory
#[utoipa::path(
    post,
    path = "/api/inventory",
    tag = "Inventory",
    request_body = CreateInventoryPayload,
    responses(
        (status = 201, description = "Item criado", body = InventoryItem),
        (status = 400, description = "Dados inválidos", body = MessageResponse)
    ),
    security(("session_cookie" = []), ("api_jwt" = []))
)]
pub async fn create_item(
    State(app_state): State<AppState>,
    locale: Locale,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let payload: CreateInventoryPayload = json_body(payload, &locale, &app_state.i18n_store)?;

    let item = app_state
        .inventory_service
        .create(payload)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(item)))
}

// PATCH /api/inventory/{id}
#[utoipa::path(
    patch,
    path = "/api/inventory/{id}",
    tag = "Inventory",
    params(("id" = i32, Path, description = "ID do registro")),
    request_body = UpdateInventoryPayload,
    responses(
        (status = 200, description = "Item atualizado", body = InventoryItem),
        (status = 400, description = "Dados inválidos", body = MessageResponse),
        (status = 404, description = "Não encontrado", body = MessageResponse)
    ),
    security(("session_cookie" = []), ("api_jwt" = []))
)]
pub async fn update_item(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let id = record_id(&id, &locale, &app_state.i18n_store)?;
    let patch: UpdateInventoryPayload = json_body(payload, &locale, &app_state.i18n_store)?;

    let item = app_state
        .inventory_service
        .update(id, patch)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(item)))
}

// DELETE /api/inventory/{id}
#[utoipa::path(
    delete,
    path = "/api/inventory/{id}",
    tag = "Inventory",
    params(("id" = i32, Path, description = "ID do registro")),
    responses(
        (status = 204, description = "Item removido"),
        (status = 404, description = "Não encontrado", body = MessageResponse)
    ),
    security(("session_cookie" = []), ("api_jwt" = []))
)]
pub async fn delete_item(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = record_id(&id, &locale, &app_state.i18n_store)?;

    app_state
        .inventory_service
        .delete(id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(StatusCode::NO_CONTENT)
}
