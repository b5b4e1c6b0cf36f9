// src/handlers/auth.rs

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use axum_extra::extract::cookie::CookieJar;
use serde_json::Value;
use validator::Validate;

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    handlers::records::json_body,
    middleware::{
        auth::{removal_cookie, session_cookie, AuthenticatedUser},
        i18n::Locale,
    },
    models::auth::{LoginUserPayload, MessageResponse, PublicUser, RegisterUserPayload},
};

// POST /api/login
#[utoipa::path(
    post,
    path = "/api/login",
    tag = "Auth",
    request_body = LoginUserPayload,
    responses(
        (status = 200, description = "Sessão iniciada (cookie `sid`)", body = PublicUser),
        (status = 400, description = "Usuário ou senha ausentes", body = MessageResponse),
        (status = 401, description = "Credenciais inválidas", body = MessageResponse)
    )
)]
pub async fn login(
    State(app_state): State<AppState>,
    locale: Locale,
    jar: CookieJar,
    payload: Result<Json<LoginUserPayload>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    // Corpo ilegível conta como credenciais ausentes (400)
    let payload = payload.map(|Json(p)| p).unwrap_or_default();

    let user = app_state
        .auth_service
        .login(&payload)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    let token = app_state
        .auth_service
        .issue_token(user.id)
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, jar.add(session_cookie(token)), Json(user)))
}

// POST /api/register
#[utoipa::path(
    post,
    path = "/api/register",
    tag = "Auth",
    request_body = RegisterUserPayload,
    responses(
        (status = 201, description = "Usuário criado e sessão iniciada", body = PublicUser),
        (status = 400, description = "Dados inválidos ou usuário já existe", body = MessageResponse)
    )
)]
pub async fn register(
    State(app_state): State<AppState>,
    locale: Locale,
    jar: CookieJar,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let payload: RegisterUserPayload = json_body(payload, &locale, &app_state.i18n_store)?;

    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let user = app_state
        .auth_service
        .register_user(&payload.username, &payload.password)
        .await
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    let token = app_state
        .auth_service
        .issue_token(user.id)
        .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::CREATED, jar.add(session_cookie(token)), Json(user)))
}

// POST /api/logout
#[utoipa::path(
    post,
    path = "/api/logout",
    tag = "Auth",
    responses(
        (status = 200, description = "Cookie de sessão removido", body = MessageResponse)
    )
)]
pub async fn logout(
    State(app_state): State<AppState>,
    locale: Locale,
    jar: CookieJar,
) -> impl IntoResponse {
    let body = MessageResponse {
        message: app_state.i18n_store.translate(&locale.0, "logged_out"),
    };
    (jar.remove(removal_cookie()), Json(body))
}

// GET /api/user
#[utoipa::path(
    get,
    path = "/api/user",
    tag = "Auth",
    responses(
        (status = 200, description = "Usuário da sessão", body = PublicUser),
        (status = 401, description = "Não autenticado", body = MessageResponse)
    ),
    security(("session_cookie" = []), ("api_jwt" = []))
)]
pub async fn get_me(AuthenticatedUser(user): AuthenticatedUser) -> Json<PublicUser> {
    Json(user)
}
