//! Startup configuration read from the process environment.
//!
//! # Design
//! `Config::from_env` loads an optional `.env` file and then defers to
//! `Config::from_lookup`, which takes the variable source as a closure so
//! parsing can be tested without touching the real environment. Unset and
//! empty variables both fall back to their defaults.

use std::{
    env,
    fmt::Display,
    net::{IpAddr, Ipv4Addr, SocketAddr},
    str::FromStr,
};

use axum::http::HeaderValue;
use thiserror::Error;

use crate::store::StoreKind;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_FRONTEND_URL: &str = "http://localhost:3000";
pub const DEFAULT_DATABASE_URL: &str = "sqlite://todos.db";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {message}")]
    Invalid { key: &'static str, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `HOST`
    pub host: IpAddr,
    /// `PORT`
    pub port: u16,
    /// `FRONTEND_URL`, the only origin allowed by CORS.
    pub allowed_origin: HeaderValue,
    /// `TODO_STORE`
    pub store: StoreKind,
    /// `DATABASE_URL`, only used by the SQLite backend.
    pub database_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            allowed_origin: HeaderValue::from_static(DEFAULT_FRONTEND_URL),
            store: StoreKind::Memory,
            database_url: DEFAULT_DATABASE_URL.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        let allowed_origin = match get("FRONTEND_URL") {
            Some(url) => HeaderValue::from_str(url.trim()).map_err(|e| ConfigError::Invalid {
                key: "FRONTEND_URL",
                message: e.to_string(),
            })?,
            None => defaults.allowed_origin,
        };

        Ok(Self {
            host: parse_or(get("HOST"), "HOST", defaults.host)?,
            port: parse_or(get("PORT"), "PORT", defaults.port)?,
            allowed_origin,
            store: parse_or(get("TODO_STORE"), "TODO_STORE", defaults.store)?,
            database_url: get("DATABASE_URL").unwrap_or(defaults.database_url),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_or<T>(raw: Option<String>, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    match raw {
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            message: format!("'{value}': {e}"),
        }),
        None => Ok(default),
    }
}
