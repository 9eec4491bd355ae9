use std::net::IpAddr;

#[derive(Debug, Clone)]
pub struct Config {
    pub store: StoreKind,
    pub database_url: Option<String>,
    pub db_max_connections: u32,
    pub host: IpAddr,
    pub port: u16,
    pub log_level: String,
    pub graphiql: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StoreKind {
    Postgres,
    Memory,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup. `from_env` passes the process
    /// environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let env_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let store = match env_or("CLIENTELE_STORE", "postgres").as_str() {
            "postgres" => StoreKind::Postgres,
            "memory" => StoreKind::Memory,
            other => return Err(format!("Invalid CLIENTELE_STORE: {other}")),
        };

        let database_url = lookup("DATABASE_URL");
        if store == StoreKind::Postgres && database_url.is_none() {
            return Err("Missing required environment variable: DATABASE_URL".to_string());
        }

        let db_max_connections: u32 = env_or("CLIENTELE_DB_MAX_CONNECTIONS", "10")
            .parse()
            .map_err(|e| format!("Invalid CLIENTELE_DB_MAX_CONNECTIONS: {e}"))?;

        let host: IpAddr = env_or("CLIENTELE_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid CLIENTELE_HOST: {e}"))?;

        let port: u16 = env_or("CLIENTELE_PORT", "3001")
            .parse()
            .map_err(|e| format!("Invalid CLIENTELE_PORT: {e}"))?;

        let log_level = env_or("CLIENTELE_LOG_LEVEL", "info");

        let graphiql = env_or("CLIENTELE_ENV", "production") == "development";

        Ok(Config {
            store,
            database_url,
            db_max_connections,
            host,
            port,
            log_level,
            graphiql,
        })
    }
}
