// src/handlers/bills.rs

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
        billing::{Bill, CreateBillPayload, UpdateBillPayload},
    },
};

// GET /api/bills
#[utoipa::path(
    get,
    path = "/api/bills",
    tag = "Billing",
    responses(
        (status = 200, description = "Lista de contas", body = Vec<Bill>)
    ),
    security(("session_cookie" = []), ("api_jwt" = []))
)]
pub async fn list_bills(
    State(app_state): State<AppState>,
    locale: Locale,
) -> Result<impl IntoResponse, ApiError> {
    let bills = app_state
        .bill_service
        .list()
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(bills)))
}

// GET /api/bills/{id}
#[utoipa::path(
    get,
    path = "/api/bills/{id}",
    tag = "Billing",
    params(("id" = i32, Path, description = "ID do registro")),
    responses(
        (status = 200, description = "Conta", body = Bill),
        (status = 404, description = "Não encontrado", body = MessageResponse)
    ),
    security(("session_cookie" = []), ("api_jwt" = []))
)]
pub async fn get_bill(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = record_id(&id, &locale, &app_state.i18n_store)?;

    let bill = app_state
        .bill_service
        .get(id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(bill)))
}

// POST /api/bills
#[utoipa::path(
    post,
    path = "/api/bills",
    tag = "Billing",
    request_body = CreateBillPayload,
    responses(
        (status = 201, description = "Conta criada", body = Bill),
        (status = 400, description = "Dados inválidos", body = MessageResponse)
    ),
    security(("session_cookie" = []), ("api_jwt" = []))
)]
pub async fn create_bill(
    State(app_state): State<AppState>,
    locale: Locale,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let payload: CreateBillPayload = json_body(payload, &locale, &app_state.i18n_store)?;

    let bill = app_state
        .bill_service
        .create(payload)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(bill)))
}

// PATCH /api/bills/{id}
#[utoipa::path(
    patch,
    path = "/api/bills/{id}",
    tag = "Billing",
    params(("id" = i32, Path, description = "ID do registro")),
    request_body = UpdateBillPayload,
    responses(
        (status = 200, description = "Conta atualizada", body = Bill),
        (status = 400, description = "Dados inválidos", body = MessageResponse),
        (status = 404, description = "Não encontrado", body = MessageResponse)
    ),
    security(("session_cookie" = []), ("api_jwt" = []))
)]
pub async fn update_bill(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let id = record_id(&id, &locale, &app_state.i18n_store)?;
    let patch: UpdateBillPayload = json_body(payload, &locale, &app_state.i18n_store)?;

    let bill = app_state
        .bill_service
        .update(id, patch)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(bill)))
}

// DELETE /api/bills/{id}
#[utoipa::path(
    delete,
    path = "/api/bills/{id}",
    tag = "Billing",
    params(("id" = i32, Path, description = "ID do registro")),
    responses(
        (status = 204, description = "Conta removida"),
        (status = 404, description = "Não encontrado", body = MessageResponse)
    ),
    security(("session_cookie" = []), ("api_jwt" = []))
)]
pub async fn delete_bill(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = record_id(&id, &locale, &app_state.i18n_store)?;

    app_state
        .bill_service
        .delete(id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(StatusCode::NO_CONTENT)
}
