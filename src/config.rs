// config.rs
use std::env;
use std::net::SocketAddr;

use crate::errors::{AppError, Result};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub database_max_connections: u32,
    pub port: u16,
    pub host: String,
    pub admin: AdminCredentials,
}

/// The fixed login pair accepted by `POST /api/login`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

impl Default for AdminCredentials {
    fn default() -> Self {
        AdminCredentials {
            username: "admin".to_string(),
            password: "password".to_string(),
        }
    }
}

impl AdminCredentials {
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let database_url = env::var("DATABASE_URL")
            .map_err(|_| AppError::configuration("DATABASE_URL must be set"))?;

        let port = env::var("PORT")
            .unwrap_or_else(|_| "3001".to_string())
            .parse()
            .map_err(|_| AppError::configuration("PORT must be a number"))?;

        let database_max_connections = env::var("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "5".to_string())
            .parse()
            .map_err(|_| AppError::configuration("DATABASE_MAX_CONNECTIONS must be a number"))?;

        let defaults = AdminCredentials::default();
        let admin = AdminCredentials {
            username: env::var("ADMIN_USERNAME").unwrap_or(defaults.username),
            password: env::var("ADMIN_PASSWORD").unwrap_or(defaults.password),
        };

        Ok(AppConfig {
            database_url,
            database_max_connections,
            port,
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            admin,
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| AppError::configuration(format!("Invalid bind address {}:{}", self.host, self.port)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(host: &str, port: u16) -> AppConfig {
        AppConfig {
            database_url: "postgres://localhost/kora_live".to_string(),
            database_max_connections: 5,
            port,
            host: host.to_string(),
            admin: AdminCredentials::default(),
        }
    }

    #[test]
    fn default_admin_pair() {
        let admin = AdminCredentials::default();
        assert!(admin.matches("admin", "password"));
        assert!(!admin.matches("admin", "Password"));
        assert!(!admin.matches("root", "password"));
    }

    #[test]
    fn builds_socket_addr() {
        let addr = config("127.0.0.1", 3001).socket_addr().unwrap();
        assert_eq!(addr.port(), 3001);
        assert!(config("not a host", 3001).socket_addr().is_err());
    }
}
