// src/handlers/reservations.rs

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
        reservations::{Reservation, CreateReservationPayload, UpdateReservationPayload},
    },
};

// GET /api/reservations
#[utoipa::path(
    get,
    path = "/api/reservations",
    tag = "Reservations",
    responses(
        (status = 200, description = "Lista de reservas", body = Vec<Reservation>)
    ),
    security(("session_cookie" = []), ("api_jwt" = []))
)]
pub async fn list_reservations(
    State(app_state): State<AppState>,
    locale: Locale,
) -> Result<impl IntoResponse, ApiError> {
    let reservations = app_state
        .reservation_service
        .list()
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(reservations)))
}

// GET /api/reservations/{id}
#[utoipa::path(
    get,
    path = "/api/reservations/{id}",
    tag = "Reservations",
    params(("id" = i32, Path, description = "ID do registro")),
    responses(
        (status = 200, description = "Reserva", body = Reservation),
        (status = 404, description = "Não encontrado", body = MessageResponse)
    ),
    security(("session_cookie" = []), ("api_jwt" = []))
)]
pub async fn get_reservation(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = record_id(&id, &locale, &app_state.i18n_store)?;

    let reservation = app_state
        .reservation_service
        .get(id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(reservation)))
}

// POST /api/reservations
#[utoipa::path(
    post,
    path = "/api/reservations",
    tag = "Reservations",
    request_body = CreateReservationPayload,
    responses(
        (status = 201, description = "Reserva criada", body = Reservation),
        (status = 400, description = "Dados inválidos", body = MessageResponse)
    ),
    security(("session_cookie" = []), ("api_jwt" = []))
)]
pub async fn create_reservation(
    State(app_state): State<AppState>,
    locale: Locale,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let payload: CreateReservationPayload = json_body(payload, &locale, &app_state.i18n_store)?;

    let reservation = app_state
        .reservation_service
        .create(payload)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(reservation)))
}

// PATCH /api/reservations/{id}
#[utoipa::path(
    patch,
    path = "/api/reservations/{id}",
    tag = "Reservations",
    params(("id" = i32, Path, description = "ID do registro")),
    request_body = UpdateReservationPayload,
    responses(
        (status = 200, description = "Reserva atualizada", body = Reservation),
        (status = 400, description = "Dados inválidos", body = MessageResponse),
        (status = 404, description = "Não encontrado", body = MessageResponse)
    ),
    security(("session_cookie" = []), ("api_jwt" = []))
)]
pub async fn update_reservation(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let id = record_id(&id, &locale, &app_state.i18n_store)?;
    let patch: UpdateReservationPayload = json_body(payload, &locale, &app_state.i18n_store)?;

    let reservation = app_state
        .reservation_service
        .update(id, patch)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(reservation)))
}

// DELETE /api/reservations/{id}
#[utoipa::path(
    delete,
    path = "/api/reservations/{id}",
    tag = "Reservations",
    params(("id" = i32, Path, description = "ID do registro")),
    responses(
        (status = 204, description = "Reserva removida"),
        (status = 404, description = "Não encontrado", body = MessageResponse)
    ),
    security(("session_cookie" = []), ("api_jwt" = []))
)]
pub async fn delete_reservation(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = record_id(&id, &locale, &app_state.i18n_store)?;

    app_state
        .reservation_service
        .delete(id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok(StatusCode::NO_CONTENT)
}
