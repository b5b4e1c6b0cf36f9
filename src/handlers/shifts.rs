// src/handlers/shifts.rs

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    middleware::{auth::AuthenticatedUser, i18n::Locale},
    models::{
        auth::MessageResponse,
        shift::{OpenShiftPayload, Shift},
    },
};

// GET /api/shifts
#[utoipa::path(
    get,
    path = "/api/shifts",
    tag = "Shifts",
    responses(
        (status = 200, description = "Turnos do usuário, mais recentes primeiro", body = Vec<Shift>)
    ),
    security(("session_cookie" = []), ("api_jwt" = []))
)]
pub async fn list_shifts(
    State(app_state): State<AppState>,
    locale: Locale,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<impl IntoResponse, ApiError> {
    let shifts = app_state
        .shift_service
        .list_shifts(user.id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(shifts)))
}

// GET /api/shifts/active
#[utoipa::path(
    get,
    path = "/api/shifts/active",
    tag = "Shifts",
    responses(
        (status = 200, description = "Turno ativo do usuário, ou null", body = Option<Shift>)
    ),
    security(("session_cookie" = []), ("api_jwt" = []))
)]
pub async fn get_active_shift(
    State(app_state): State<AppState>,
    locale: Locale,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<impl IntoResponse, ApiError> {
    let shift = app_state
        .shift_service
        .active_shift(user.id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(shift)))
}

// POST /api/shifts
#[utoipa::path(
    post,
    path = "/api/shifts",
    tag = "Shifts",
    request_body = OpenShiftPayload,
    responses(
        (status = 201, description = "Turno aberto", body = Shift),
        (status = 400, description = "Dados de turno inválidos ou turno ativo existente", body = MessageResponse)
    ),
    security(("session_cookie" = []), ("api_jwt" = []))
)]
pub async fn open_shift(
    State(app_state): State<AppState>,
    locale: Locale,
    AuthenticatedUser(user): AuthenticatedUser,
    payload: Result<Json<OpenShiftPayload>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(payload) = payload
        .map_err(|_| AppError::InvalidShiftData.to_api_error(&locale, &app_state.i18n_store))?;

    let shift = app_state
        .shift_service
        .open_shift(user.id, payload)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, Json(shift)))
}

// PATCH /api/shifts/{id}/close
#[utoipa::path(
    patch,
    path = "/api/shifts/{id}/close",
    tag = "Shifts",
    params(
        ("id" = i32, Path, description = "ID do turno ativo")
    ),
    responses(
        (status = 200, description = "Turno fechado", body = Shift),
        (status = 404, description = "Nenhum turno ativo do usuário com este id", body = MessageResponse)
    ),
    security(("session_cookie" = []), ("api_jwt" = []))
)]
pub async fn close_shift(
    State(app_state): State<AppState>,
    locale: Locale,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    // id não numérico é só mais um turno que não existe
    let shift_id: i32 = id
        .parse()
        .map_err(|_| AppError::ShiftNotFound.to_api_error(&locale, &app_state.i18n_store))?;

    let shift = app_state
        .shift_service
        .close_shift(user.id, shift_id)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(shift)))
}
