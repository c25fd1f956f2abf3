//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use sqlx::PgPool;

use crate::config::environment::EnvironmentConfig;
use crate::repositories::{UserDirectory, UserRepository};
use crate::schema::ValidationContext;
use crate::services::{AuthProvider, AuthService};

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: EnvironmentConfig,
    pub auth: Arc<AuthService>,
    pub auth_provider: Arc<dyn AuthProvider>,
    /// Rol almacenado y alta de perfiles; por defecto sobre `pool`
    pub users: Arc<dyn UserDirectory>,
}

impl AppState {
    pub fn new(
        pool: PgPool,
        config: EnvironmentConfig,
        auth_provider: Arc<dyn AuthProvider>,
    ) -> Self {
        let auth = Arc::new(AuthService::new(&config.auth_jwt_secret));
        let users = Arc::new(UserRepository::new(pool.clone()));
        Self {
            pool,
            config,
            auth,
            auth_provider,
            users,
        }
    }

    pub fn with_user_directory(mut self, users: Arc<dyn UserDirectory>) -> Self {
        self.users = users;
        self
    }

    /// Fecha de hoy según el servidor (UTC)
    pub fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }

    /// Contexto de validación con el "hoy" del servidor
    pub fn validation_context(&self) -> ValidationContext {
        ValidationContext::new(self.today()).with_operations_start(self.config.operations_start)
    }
}
