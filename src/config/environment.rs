//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.

use std::env;

use chrono::NaiveDate;
use thiserror::Error;

use crate::schema::default_operations_start;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{0} has an invalid value: {1}")]
    Invalid(&'static str, String),
}

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub database_url: String,
    /// Secreto compartido para verificar los access tokens del proveedor
    pub auth_jwt_secret: String,
    pub auth_url: String,
    pub auth_anon_key: String,
    pub cors_origins: Vec<String>,
    pub operations_start: NaiveDate,
}

fn required(key: &'static str) -> Result<String, ConfigError> {
    env::var(key).map_err(|_| ConfigError::Missing(key))
}

fn optional(key: &'static str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

impl EnvironmentConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = optional("PORT", "3000");
        let port = port
            .parse()
            .map_err(|_| ConfigError::Invalid("PORT", port.clone()))?;

        let operations_start = match env::var("FLEET_OPERATIONS_START") {
            Ok(raw) => NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
                .map_err(|_| ConfigError::Invalid("FLEET_OPERATIONS_START", raw.clone()))?,
            Err(_) => default_operations_start(),
        };

        Ok(Self {
            environment: optional("ENVIRONMENT", "development"),
            port,
            host: optional("HOST", "0.0.0.0"),
            database_url: required("DATABASE_URL")?,
            auth_jwt_secret: required("AUTH_JWT_SECRET")?,
            auth_url: required("AUTH_URL")?,
            auth_anon_key: required("AUTH_ANON_KEY")?,
            cors_origins: parse_origins(&optional("CORS_ORIGINS", "")),
            operations_start,
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Obtener la URL del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
