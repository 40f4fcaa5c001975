// src/config.rs

use std::{env, str::FromStr, sync::Arc, time::Duration};

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

use crate::{
    common::error::ConfigError,
    db::DashboardRepository,
    services::DashboardService,
};

const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub store_url: String,
    pub store_access_key: String,
    pub max_connections: u32,
    pub bind_addr: String,
}

impl AppConfig {
    /// Lê o `.env` (se existir) e depois as variáveis de ambiente.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or(ConfigError::MissingVar(name))
        };

        let store_url = required("STORE_URL")?;
        let store_access_key = required("STORE_ACCESS_KEY")?;

        let max_connections = match lookup("STORE_MAX_CONNECTIONS") {
            Some(value) => value.trim().parse::<u32>().ok().filter(|n| *n > 0).ok_or(
                ConfigError::InvalidVar {
                    name: "STORE_MAX_CONNECTIONS",
                    value,
                },
            )?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        Ok(Self {
            store_url,
            store_access_key,
            max_connections,
            bind_addr,
        })
    }

    /// A URL do banco com a chave de acesso aplicada como senha.
    pub fn connect_options(&self) -> Result<PgConnectOptions, ConfigError> {
        let options = PgConnectOptions::from_str(&self.store_url).map_err(|_| {
            ConfigError::InvalidVar {
                name: "STORE_URL",
                value: self.store_url.clone(),
            }
        })?;

        Ok(options.password(&self.store_access_key))
    }
}

// O estado compartilhado que será acessível em toda a aplicação
#[derive(Clone)]
pub struct AppState {
    pub dashboard_service: DashboardService,
}

impl AppState {
    pub async fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let db_pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(3))
            .connect_with(config.connect_options()?)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        // --- Monta o gráfico de dependências ---
        let repo = DashboardRepository::new(db_pool);
        let dashboard_service = DashboardService::new(Arc::new(repo));

        Ok(Self { dashboard_service })
    }

    pub fn from_service(dashboard_service: DashboardService) -> Self {
        Self { dashboard_service }
    }
}
