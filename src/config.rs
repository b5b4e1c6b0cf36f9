// src/config.rs

use std::{env, str::FromStr, sync::Arc, time::Duration};

use anyhow::Context;
use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::{
    common::i18n::{I18nStore, DEFAULT_LOCALE},
    db::Stores,
    models::{billing::Bill, clients::Client, inventory::InventoryItem, reservations::Reservation},
    services::{AuthService, RecordService, ShiftService},
};

// Teto da sessão: um ano
pub const MAX_SESSION_TTL_HOURS: i64 = 24 * 365;

// Configuração lida do ambiente (.env incluso)
#[derive(Debug, Clone)]
pub struct Config {
    /// Sem DATABASE_URL o servidor roda com o store em memória.
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    pub jwt_secret: String,
    pub bind_addr: String,
    pub session_ttl_hours: i64,
    pub bcrypt_cost: u32,
    pub default_locale: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self {
            database_url: env::var("DATABASE_URL").ok().filter(|url| !url.is_empty()),
            database_max_connections: parse_var("DATABASE_MAX_CONNECTIONS", 5)?,
            jwt_secret: env::var("JWT_SECRET").context("JWT_SECRET deve ser definido")?,
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
            session_ttl_hours: parse_var("SESSION_TTL_HOURS", 24 * 7)?,
            bcrypt_cost: parse_var("BCRYPT_COST", bcrypt::DEFAULT_COST)?,
            default_locale: env::var("DEFAULT_LOCALE").unwrap_or_else(|_| DEFAULT_LOCALE.to_string()),
        };
        config.validate()?;
        Ok(config)
    }

    /// Faixas que o parse sozinho não garante.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            (1..=MAX_SESSION_TTL_HOURS).contains(&self.session_ttl_hours),
            "SESSION_TTL_HOURS deve estar entre 1 e {}: '{}'",
            MAX_SESSION_TTL_HOURS,
            self.session_ttl_hours
        );
        Ok(())
    }
}

fn parse_var<T>(name: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .with_context(|| format!("{} inválido: '{}'", name, raw)),
        Err(_) => Ok(default),
    }
}

pub async fn connect_pool(config: &Config, database_url: &str) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .acquire_timeout(Duration::from_secs(3))
        .connect(database_url)
        .await
        .context("Falha ao conectar ao banco de dados")?;

    tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");
    Ok(pool)
}

// O estado compartilhado que será acessível em toda a aplicação
#[derive(Clone)]
pub struct AppState {
    pub auth_service: AuthService,
    pub shift_service: ShiftService,
    pub client_service: RecordService<Client>,
    pub inventory_service: RecordService<InventoryItem>,
    pub reservation_service: RecordService<Reservation>,
    pub bill_service: RecordService<Bill>,
    pub i18n_store: Arc<I18nStore>,
}

impl AppState {
    /// Monta o estado a partir do ambiente: conecta, migra e escolhe os stores.
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        let stores = match &config.database_url {
            Some(url) => {
                let pool = connect_pool(config, url).await?;

                sqlx::migrate!()
                    .run(&pool)
                    .await
                    .context("Falha ao rodar as migrações do banco de dados.")?;
                tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

                Stores::postgres(pool)
            }
            None => {
                tracing::warn!("DATABASE_URL não definida: usando store em memória (dados não persistem)");
                Stores::memory()
            }
        };

        Self::from_stores(config, stores)
    }

    // --- Monta o gráfico de dependências ---
    pub fn from_stores(config: &Config, stores: Stores) -> anyhow::Result<Self> {
        config.validate()?;
        let i18n_store = I18nStore::load(&config.default_locale)?;

        Ok(Self {
            auth_service: AuthService::new(
                stores.users,
                config.jwt_secret.clone(),
                config.session_ttl_hours,
                config.bcrypt_cost,
            ),
            shift_service: ShiftService::new(stores.shifts),
            client_service: RecordService::new(stores.clients),
            inventory_service: RecordService::new(stores.inventory),
            reservation_service: RecordService::new(stores.reservations),
            bill_service: RecordService::new(stores.bills),
            i18n_store: Arc::new(i18n_store),
        })
    }
}
