// src/common/error.rs

use std::collections::HashMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;

use crate::{common::i18n::I18nStore, middleware::i18n::Locale};

// Erros de domínio. Cada variante tem uma chave de tradução em `locales/*.json`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Dados inválidos: {0}")]
    InvalidData(String),

    // Corpo JSON com tipo errado num campo (ex.: "quantity": "3")
    #[error("Campo '{field}' inválido: {reason}")]
    InvalidField { field: String, reason: String },

    #[error("Credenciais ausentes")]
    MissingCredentials,

    #[error("Credenciais inválidas")]
    InvalidCredentials,

    #[error("Não autenticado")]
    Unauthorized,

    #[error("Usuário já existe")]
    UsernameTaken,

    #[error("Dados de turno inválidos")]
    InvalidShiftData,

    #[error("Já existe um turno ativo")]
    DuplicateActiveShift,

    #[error("Turno não encontrado")]
    ShiftNotFound,

    #[error("Registro não encontrado")]
    NotFound,

    // Variante para erros de banco de dados
    #[error("Erro de banco de dados: {0}")]
    DatabaseError(#[from] sqlx::Error),

    // Variante genérica para qualquer outro erro inesperado
    #[error("Erro interno do servidor: {0}")]
    InternalServerError(#[from] anyhow::Error),

    #[error("Erro de Bcrypt: {0}")]
    BcryptError(#[from] bcrypt::BcryptError),

    #[error("Erro de JWT: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_)
            | AppError::InvalidData(_)
            | AppError::InvalidField { .. }
            | AppError::MissingCredentials
            | AppError::UsernameTaken
            | AppError::InvalidShiftData
            | AppError::DuplicateActiveShift => StatusCode::BAD_REQUEST,
            AppError::InvalidCredentials | AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::ShiftNotFound | AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::DatabaseError(_)
            | AppError::InternalServerError(_)
            | AppError::BcryptError(_)
            | AppError::JwtError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Chave do catálogo de mensagens usada na resposta ao cliente.
    pub fn message_key(&self) -> &'static str {
        match self {
            AppError::ValidationError(_)
            | AppError::InvalidData(_)
            | AppError::InvalidField { .. } => "invalid_data",
            // Campos ausentes e credenciais erradas usam a mesma mensagem.
            AppError::MissingCredentials | AppError::InvalidCredentials => "invalid_credentials",
            AppError::Unauthorized => "unauthorized",
            AppError::UsernameTaken => "username_taken",
            AppError::InvalidShiftData => "invalid_shift_data",
            AppError::DuplicateActiveShift => "duplicate_active_shift",
            AppError::ShiftNotFound => "shift_not_found",
            AppError::NotFound => "not_found",
            AppError::DatabaseError(_)
            | AppError::InternalServerError(_)
            | AppError::BcryptError(_)
            | AppError::JwtError(_) => "internal_error",
        }
    }

    /// Converte o erro de domínio na resposta HTTP, no idioma do cliente.
    /// Erros 500 são logados aqui; o detalhe nunca vai para o corpo.
    pub fn to_api_error(&self, locale: &Locale, i18n: &I18nStore) -> ApiError {
        let status = self.status();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("Erro Interno do Servidor: {}", self);
        }

        let details = match self {
            AppError::ValidationError(errors) => Some(validation_details(errors)),
            AppError::InvalidField { field, reason } => {
                let mut details = serde_json::Map::new();
                details.insert(field.clone(), json!([reason]));
                Some(Value::Object(details))
            }
            _ => None,
        };

        ApiError {
            status,
            message: i18n.translate(&locale.0, self.message_key()),
            details,
        }
    }
}

// Agrupa as mensagens do validator por campo: { "email": ["invalid_email"] }
fn validation_details(errors: &validator::ValidationErrors) -> Value {
    let mut details: HashMap<String, Vec<String>> = HashMap::new();
    for (field, field_errors) in errors.field_errors() {
        let messages = field_errors
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            })
            .collect();
        details.insert(field.to_string(), messages);
    }
    json!(details)
}

// Resposta de erro já resolvida (status + mensagem traduzida).
#[derive(Debug, Serialize)]
pub struct ApiError {
    #[serde(skip)]
    pub status: StatusCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

// Usado quando não há contexto de idioma (ex.: rejeição de extrator).
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.to_api_error(&Locale::default(), I18nStore::builtin())
            .into_response()
    }
}
