//! Runtime configuration parsed from environment variables.

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_STORE_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_ADMIN_SESSION_TTL_SECS: u64 = 8 * 60 * 60;
pub const DEFAULT_WEBSITE_DIR: &str = "./website";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value}")]
    Invalid { var: &'static str, value: String },
    #[error("{present} is set but {missing} is not")]
    Incomplete { present: &'static str, missing: &'static str },
}

/// Which persistence backend to use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreConfig {
    Postgres { url: String, max_connections: u32 },
    Rest { url: String, api_key: String, timeout_secs: u64 },
    Disabled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    pub store: StoreConfig,
    pub admin_password: Option<String>,
    pub admin_session_ttl_secs: u64,
    pub cookie_secure: bool,
    pub seed_catalog: bool,
    pub website_dir: PathBuf,
}

impl AppConfig {
    /// Build typed config from the process environment.
    ///
    /// `DATABASE_URL` wins over `SUPABASE_URL` + `SUPABASE_ANON_KEY`. With
    /// neither set the store is disabled.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = parse_or("PORT", get("PORT"), DEFAULT_PORT)?;
        let store = if let Some(url) = get("DATABASE_URL") {
            StoreConfig::Postgres {
                url,
                max_connections: parse_or("DB_MAX_CONNECTIONS", get("DB_MAX_CONNECTIONS"), DEFAULT_DB_MAX_CONNECTIONS)?,
            }
        } else {
            match (get("SUPABASE_URL"), get("SUPABASE_ANON_KEY")) {
                (Some(url), Some(api_key)) => StoreConfig::Rest {
                    url,
                    api_key,
                    timeout_secs: parse_or("STORE_TIMEOUT_SECS", get("STORE_TIMEOUT_SECS"), DEFAULT_STORE_TIMEOUT_SECS)?,
                },
                (Some(_), None) => {
                    return Err(ConfigError::Incomplete { present: "SUPABASE_URL", missing: "SUPABASE_ANON_KEY" });
                }
                (None, Some(_)) => {
                    return Err(ConfigError::Incomplete { present: "SUPABASE_ANON_KEY", missing: "SUPABASE_URL" });
                }
                (None, None) => StoreConfig::Disabled,
            }
        };

        Ok(Self {
            port,
            store,
            admin_password: get("ADMIN_PASSWORD"),
            admin_session_ttl_secs: parse_or(
                "ADMIN_SESSION_TTL_SECS",
                get("ADMIN_SESSION_TTL_SECS"),
                DEFAULT_ADMIN_SESSION_TTL_SECS,
            )?,
            cookie_secure: get("COOKIE_SECURE")
                .as_deref()
                .and_then(parse_bool)
                .unwrap_or(false),
            seed_catalog: get("SEED_CATALOG")
                .as_deref()
                .and_then(parse_bool)
                .unwrap_or(false),
            website_dir: get("WEBSITE_DIR").map_or_else(|| PathBuf::from(DEFAULT_WEBSITE_DIR), PathBuf::from),
        })
    }
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_or<T: std::str::FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { var, value }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
