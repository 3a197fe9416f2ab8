use std::{env, fmt};

// Runtime/server settings read from the environment.

pub fn http_port() -> u16 {
    env::var("STATS_SERVER_PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(8000)
}

pub fn database_max_connections() -> u32 {
    env::var("DATABASE_MAX_CONNECTIONS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(5)
}

// Backing store used for the statistics queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreKind {
    Postgres,
    Memory,
}

#[derive(Debug)]
pub struct UnknownStore(pub String);

impl fmt::Display for UnknownStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown STATS_STORE value: {}", self.0)
    }
}

impl std::error::Error for UnknownStore {}

impl StoreKind {
    pub fn parse(value: &str) -> Result<Self, UnknownStore> {
        match value.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StoreKind::Postgres),
            "memory" => Ok(StoreKind::Memory),
            _ => Err(UnknownStore(value.to_string())),
        }
    }
}

pub fn store_kind() -> Result<StoreKind, UnknownStore> {
    match env::var("STATS_STORE") {
        Ok(value) => StoreKind::parse(&value),
        Err(_) => Ok(StoreKind::Postgres),
    }
}
