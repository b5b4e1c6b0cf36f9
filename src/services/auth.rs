// src/services/auth.rs

use std::sync::Arc;

use bcrypt::{hash, verify};
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::{
    common::error::AppError,
    config::MAX_SESSION_TTL_HOURS,
    db::UserStore,
    models::auth::{Claims, LoginUserPayload, PublicUser},
};

#[derive(Clone)]
pub struct AuthService {
    user_store: Arc<dyn UserStore>,
    jwt_secret: String,
    session_ttl: chrono::Duration,
    bcrypt_cost: u32,
}

impl AuthService {
    pub fn new(
        user_store: Arc<dyn UserStore>,
        jwt_secret: String,
        session_ttl_hours: i64,
        bcrypt_cost: u32,
    ) -> Self {
        Self {
            user_store,
            jwt_secret,
            // Config::validate já recusa valores fora da faixa
            session_ttl: chrono::Duration::hours(session_ttl_hours.clamp(1, MAX_SESSION_TTL_HOURS)),
            bcrypt_cost,
        }
    }

    /// Login a partir do corpo cru: campos ausentes falham antes de qualquer consulta.
    pub async fn login(&self, payload: &LoginUserPayload) -> Result<PublicUser, AppError> {
        let (username, password) = payload.credentials().ok_or(AppError::MissingCredentials)?;
        self.verify_credentials(username, password).await
    }

    /// Usuário inexistente e senha errada dão o mesmo `InvalidCredentials`.
    pub async fn verify_credentials(&self, username: &str, password: &str) -> Result<PublicUser, AppError> {
        let user = self
            .user_store
            .find_by_username(username)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        let password_clone = password.to_owned();
        let password_hash_clone = user.password_hash.clone();

        // bcrypt é caro: executa a verificação em um thread separado.
        // A comparação do digest no crate é em tempo constante.
        let is_password_valid = tokio::task::spawn_blocking(move || {
            verify(&password_clone, &password_hash_clone)
        })
        .await
        .map_err(|e| anyhow::anyhow!("Falha na task de verificação de senha: {}", e))?
        // Hash malformado no banco conta como senha errada, não como 500.
        .unwrap_or(false);

        if !is_password_valid {
            return Err(AppError::InvalidCredentials);
        }

        Ok(user.public())
    }

    pub async fn register_user(&self, username: &str, password: &str) -> Result<PublicUser, AppError> {
        let password_clone = password.to_owned();
        let cost = self.bcrypt_cost;
        let hashed_password = tokio::task::spawn_blocking(move || hash(&password_clone, cost))
            .await
            .map_err(|e| anyhow::anyhow!("Falha na task de hashing: {}", e))??;

        let user = self.user_store.create_user(username, &hashed_password).await?;
        tracing::info!(user_id = user.id, "Novo usuário registrado");

        Ok(user.public())
    }

    /// Resolve o token de sessão no usuário atual. Qualquer falha de token,
    /// ou usuário que não existe mais, vira `Unauthorized`.
    pub async fn validate_token(&self, token: &str) -> Result<PublicUser, AppError> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_ref()),
            &Validation::default(),
        )
        .map_err(|e| {
            tracing::debug!("Token de sessão rejeitado: {}", e);
            AppError::Unauthorized
        })?;

        self.user_store
            .find_by_id(token_data.claims.sub)
            .await?
            .map(|user| user.public())
            .ok_or(AppError::Unauthorized)
    }

    pub fn issue_token(&self, user_id: i32) -> Result<String, AppError> {
        let now = Utc::now();
        let expires_at = now + self.session_ttl;

        let claims = Claims {
            sub: user_id,
            exp: expires_at.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        Ok(encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_ref()),
        )?)
    }
}
