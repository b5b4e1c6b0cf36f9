// src/models/auth.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

pub const DEFAULT_ROLE: &str = "user";

// Representa um usuário vindo do banco de dados
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i32,
    pub username: String,

    #[serde(skip_serializing)] // IMPORTANTE para segurança
    pub password_hash: String,

    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn public(&self) -> PublicUser {
        PublicUser {
            id: self.id,
            username: self.username.clone(),
            role: self.role.clone(),
        }
    }
}

// A única visão de usuário que sai na API. Nunca carrega o hash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PublicUser {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "recepcion")]
    pub username: String,
    #[schema(example = "user")]
    pub role: String,
}

// Dados para login. Campos opcionais: ausência vira 400 antes de tocar no banco.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct LoginUserPayload {
    #[schema(example = "recepcion")]
    pub username: Option<String>,
    #[schema(example = "secreto123")]
    pub password: Option<String>,
}

impl LoginUserPayload {
    /// Devolve (usuário, senha) somente se ambos vierem preenchidos.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (self.username.as_deref(), self.password.as_deref()) {
            (Some(u), Some(p)) if !u.is_empty() && !p.is_empty() => Some((u, p)),
            _ => None,
        }
    }
}

// Dados para registro de um novo usuário
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterUserPayload {
    #[validate(length(min = 3, max = 64, message = "El usuario debe tener entre 3 y 64 caracteres"))]
    #[schema(example = "recepcion")]
    pub username: String,
    #[validate(length(min = 6, message = "La contraseña debe tener al menos 6 caracteres"))]
    #[schema(example = "secreto123")]
    pub password: String,
}

// Estrutura de dados ("claims") dentro do JWT de sessão
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i32,   // Subject (ID do usuário)
    pub exp: usize, // Expiration time
    pub iat: usize, // Issued At
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}
