use std::env;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use infra::db::DbConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StoreBackend::Postgres),
            "memory" => Ok(StoreBackend::Memory),
            other => Err(anyhow!("unknown STORE_BACKEND `{other}` (expected postgres or memory)")),
        }
    }
}

#[derive(Clone, Debug)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    /// Set whenever `backend` is `Postgres`.
    pub database: Option<DbConfig>,
    pub skip_migrations: bool,
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub port: u16,
    pub allowed_origins: Vec<String>,
    pub request_timeout: Duration,
}

#[derive(Clone, Debug, Default)]
pub struct GraphqlConfig {
    pub introspection: bool,
    pub playground: bool,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub store: StoreConfig,
    pub graphql: GraphqlConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let backend: StoreBackend = env::var("STORE_BACKEND")
            .unwrap_or_else(|_| "postgres".to_string())
            .parse()?;

        let database = match backend {
            StoreBackend::Postgres => Some(DbConfig {
                url: env::var("DATABASE_URL")
                    .context("DATABASE_URL must be set when STORE_BACKEND=postgres")?,
                max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(30),
            }),
            StoreBackend::Memory => None,
        };

        Ok(Self {
            server: ServerConfig {
                port: env::var("PORT")
                    .unwrap_or_else(|_| "8080".into())
                    .parse()
                    .context("PORT must be a valid port number")?,
                allowed_origins: parse_origins(
                    &env::var("ALLOWED_ORIGINS")
                        .unwrap_or_else(|_| "http://localhost:3000".to_string()),
                ),
                request_timeout: Duration::from_secs(
                    env::var("REQUEST_TIMEOUT_SECS")
                        .ok()
                        .and_then(|s| s.parse().ok())
                        .unwrap_or(30),
                ),
            },
            store: StoreConfig {
                backend,
                database,
                skip_migrations: flag("SKIP_MIGRATIONS", false),
            },
            graphql: GraphqlConfig {
                introspection: flag("GQL_INTROSPECTION", false),
                playground: flag("GQL_PLAYGROUND", false),
            },
        })
    }
}

fn flag(name: &str, default: bool) -> bool {
    env::var(name)
        .map(|v| v.to_lowercase() == "true")
        .unwrap_or(default)
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}
