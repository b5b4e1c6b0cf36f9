#![allow(dead_code)]

use anyhow::{Context, Result};
use axum::{
    body::{to_bytes, Body},
    http::{
        header::{ACCEPT_LANGUAGE, AUTHORIZATION, CONTENT_TYPE, COOKIE, SET_COOKIE},
        HeaderMap, Method, Request, StatusCode,
    },
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use gestor::{
    build_router,
    config::{AppState, Config},
    db::Stores,
    middleware::auth::SESSION_COOKIE,
};

pub fn test_config() -> Config {
    Config {
        database_url: None,
        database_max_connections: 1,
        jwt_secret: "segredo-de-teste".to_string(),
        bind_addr: "127.0.0.1:0".to_string(),
        session_ttl_hours: 1,
        // custo mínimo do bcrypt para os testes rodarem rápido
        bcrypt_cost: 4,
        default_locale: "es".to_string(),
    }
}

/// Como o cliente prova a sessão numa requisição.
#[derive(Clone, Copy)]
pub enum Auth<'a> {
    None,
    Cookie(&'a str),
    Bearer(&'a str),
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl TestResponse {
    pub fn message(&self) -> &str {
        self.body["message"].as_str().unwrap_or_default()
    }

    /// Valor do cookie de sessão emitido na resposta, se houver.
    pub fn session_token(&self) -> Option<String> {
        let prefix = format!("{}=", SESSION_COOKIE);
        self.headers
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .find(|value| value.starts_with(&prefix))
            .and_then(|value| value.split(';').next())
            .map(|pair| pair.trim_start_matches(&prefix).to_string())
    }
}

#[derive(Clone)]
pub struct TestApp {
    router: Router,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_stores(Stores::memory())
    }

    pub fn with_stores(stores: Stores) -> Self {
        let state = AppState::from_stores(&test_config(), stores).expect("estado de teste");
        Self {
            router: build_router(state),
        }
    }

    pub async fn request(
        &self,
        method: Method,
        path: &str,
        auth: Auth<'_>,
        body: Option<Value>,
        language: Option<&str>,
    ) -> Result<TestResponse> {
        let mut builder = Request::builder().method(method).uri(path);
        builder = match auth {
            Auth::None => builder,
            Auth::Cookie(token) => builder.header(COOKIE, format!("{}={}", SESSION_COOKIE, token)),
            Auth::Bearer(token) => builder.header(AUTHORIZATION, format!("Bearer {}", token)),
        };
        if let Some(language) = language {
            builder = builder.header(ACCEPT_LANGUAGE, language);
        }
        let request = match body {
            Some(body) => builder
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))?,
            None => builder.body(Body::empty())?,
        };

        let response = self.router.clone().oneshot(request).await?;
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .context("falha ao ler o corpo")?;

        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };

        Ok(TestResponse { status, headers, body })
    }

    pub async fn get(&self, path: &str, auth: Auth<'_>) -> Result<TestResponse> {
        self.request(Method::GET, path, auth, None, None).await
    }

    pub async fn post(&self, path: &str, auth: Auth<'_>, body: Value) -> Result<TestResponse> {
        self.request(Method::POST, path, auth, Some(body), None).await
    }

    pub async fn patch(&self, path: &str, auth: Auth<'_>, body: Option<Value>) -> Result<TestResponse> {
        self.request(Method::PATCH, path, auth, body, None).await
    }

    pub async fn delete(&self, path: &str, auth: Auth<'_>) -> Result<TestResponse> {
        self.request(Method::DELETE, path, auth, None, None).await
    }

    /// Registra o usuário e devolve o token da sessão.
    pub async fn register(&self, username: &str, password: &str) -> Result<String> {
        let res = self
            .post(
                "/api/register",
                Auth::None,
                json!({ "username": username, "password": password }),
            )
            .await?;
        anyhow::ensure!(res.status == StatusCode::CREATED, "registro falhou: {:?}", res.body);
        res.session_token().context("registro sem cookie de sessão")
    }
}
