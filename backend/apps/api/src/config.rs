//! Server Configuration
//!
//! Read from the environment once at startup.

use std::net::SocketAddr;

use anyhow::Context;
use axum::http::{HeaderValue, Method, header};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";
const ANY_ORIGIN: &str = "*";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub bind_addr: SocketAddr,
    /// `None` allows any origin
    pub frontend_origins: Option<Vec<HeaderValue>>,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let database_url =
            lookup("DATABASE_URL").context("DATABASE_URL must be set in environment")?;

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("DATABASE_MAX_CONNECTIONS is not a number: {raw}"))?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .trim()
            .parse()
            .with_context(|| format!("BIND_ADDR is not a socket address: {bind_addr}"))?;

        let origins = lookup("FRONTEND_ORIGINS").unwrap_or_else(|| ANY_ORIGIN.to_string());
        let frontend_origins = if origins.trim() == ANY_ORIGIN {
            None
        } else {
            Some(
                origins
                    .split(',')
                    .filter_map(|origin| origin.trim().parse().ok())
                    .collect(),
            )
        };

        Ok(Self {
            database_url,
            max_connections,
            bind_addr,
            frontend_origins,
        })
    }

    pub fn cors_layer(&self) -> CorsLayer {
        let origin = match &self.frontend_origins {
            Some(origins) => AllowOrigin::list(origins.clone()),
            None => AllowOrigin::any(),
        };

        CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(AllowMethods::list([
                Method::GET,
                Method::PATCH,
                Method::POST,
                Method::DELETE,
                Method::OPTIONS,
            ]))
            .allow_headers(AllowHeaders::list([
                header::CONTENT_TYPE,
                header::AUTHORIZATION,
            ]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> anyhow::Result<ServerConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[("DATABASE_URL", "postgres://localhost/trivia")]).unwrap();

        assert_eq!(config.max_connections, 5);
        assert_eq!(config.bind_addr, "0.0.0.0:5000".parse().unwrap());
        assert!(config.frontend_origins.is_none());
    }

    #[test]
    fn test_database_url_required() {
        assert!(config(&[]).is_err());
    }

    #[test]
    fn test_origin_list() {
        let config = config(&[
            ("DATABASE_URL", "postgres://localhost/trivia"),
            ("FRONTEND_ORIGINS", "http://localhost:3000, http://127.0.0.1:3000"),
            ("DATABASE_MAX_CONNECTIONS", "12"),
        ])
        .unwrap();

        assert_eq!(config.max_connections, 12);
        assert_eq!(config.frontend_origins.map(|o| o.len()), Some(2));
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(
            config(&[
                ("DATABASE_URL", "postgres://localhost/trivia"),
                ("BIND_ADDR", "nowhere"),
            ])
            .is_err()
        );
        assert!(
            config(&[
                ("DATABASE_URL", "postgres://localhost/trivia"),
                ("DATABASE_MAX_CONNECTIONS", "many"),
            ])
            .is_err()
        );
    }
}
