//! Cliente del proveedor de autenticación (login y registro por email/senha)
//!
//! Los fallos del proveedor se traducen a un conjunto fijo de mensajes.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::models::auth::{AuthSession, SignUpRequest};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthFailure {
    InvalidCredentials,
    EmailNotConfirmed,
    AlreadyRegistered,
    Unknown(String),
}

impl AuthFailure {
    /// Clasifica el mensaje de error devuelto por el proveedor
    pub fn from_provider_message(message: &str) -> Self {
        let lower = message.to_lowercase();
        if lower.contains("invalid login") {
            AuthFailure::InvalidCredentials
        } else if lower.contains("email not confirmed") {
            AuthFailure::EmailNotConfirmed
        } else if lower.contains("already registered") {
            AuthFailure::AlreadyRegistered
        } else {
            AuthFailure::Unknown(message.to_string())
        }
    }

    pub fn user_message(&self) -> &'static str {
        match self {
            AuthFailure::InvalidCredentials => "Email ou senha inválidos",
            AuthFailure::EmailNotConfirmed => "Por favor, confirme seu email antes de entrar",
            AuthFailure::AlreadyRegistered => "Este email já está cadastrado",
            AuthFailure::Unknown(_) => "Ocorreu um erro ao processar a solicitação",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AuthFailure::InvalidCredentials => "INVALID_CREDENTIALS",
            AuthFailure::EmailNotConfirmed => "EMAIL_NOT_CONFIRMED",
            AuthFailure::AlreadyRegistered => "ALREADY_REGISTERED",
            AuthFailure::Unknown(_) => "AUTH_FAILED",
        }
    }
}

impl std::fmt::Display for AuthFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.user_message())
    }
}

#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, AuthFailure>;
    async fn sign_up(&self, request: &SignUpRequest) -> Result<AuthSession, AuthFailure>;
}

/// Cliente HTTP contra el endpoint REST de autenticación
pub struct AuthClient {
    client: Client,
    base_url: String,
    anon_key: String,
}

#[derive(Debug, Deserialize)]
struct ProviderUser {
    id: Uuid,
    email: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ProviderSession {
    access_token: Option<String>,
    expires_at: Option<i64>,
    user: Option<ProviderUser>,
    // el registro sin confirmación devuelve el usuario plano
    id: Option<Uuid>,
    email: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ProviderError {
    error_description: Option<String>,
    msg: Option<String>,
    message: Option<String>,
    error: Option<String>,
}

impl ProviderError {
    fn text(self) -> String {
        self.error_description
            .or(self.msg)
            .or(self.message)
            .or(self.error)
            .unwrap_or_default()
    }
}

impl ProviderSession {
    fn into_auth_session(self) -> Result<AuthSession, AuthFailure> {
        let (user_id, email) = match (self.user, self.id) {
            (Some(user), _) => (user.id, user.email),
            (None, Some(id)) => (id, self.email),
            (None, None) => {
                return Err(AuthFailure::Unknown("respuesta sin usuario".to_string()))
            }
        };
        Ok(AuthSession {
            access_token: self.access_token,
            expires_at: self
                .expires_at
                .and_then(|ts| Utc.timestamp_opt(ts, 0).single()),
            user_id,
            email,
        })
    }
}

impl AuthClient {
    pub fn new(base_url: &str, anon_key: &str) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
        })
    }

    async fn post(&self, path: &str, body: serde_json::Value) -> Result<AuthSession, AuthFailure> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .post(&url)
            .header("apikey", &self.anon_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("❌ Error conectando al proveedor de autenticación: {}", e);
                AuthFailure::Unknown(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error: ProviderError = response.json().await.unwrap_or_default();
            let text = error.text();
            tracing::info!(%status, "Proveedor de autenticación rechazó la solicitud: {}", text);
            return Err(AuthFailure::from_provider_message(&text));
        }

        let session: ProviderSession = response
            .json()
            .await
            .map_err(|e| AuthFailure::Unknown(e.to_string()))?;
        session.into_auth_session()
    }
}

#[async_trait]
impl AuthProvider for AuthClient {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, AuthFailure> {
        self.post(
            "/auth/v1/token?grant_type=password",
            json!({ "email": email, "password": password }),
        )
        .await
    }

    async fn sign_up(&self, request: &SignUpRequest) -> Result<AuthSession, AuthFailure> {
        self.post(
            "/auth/v1/signup",
            json!({
                "email": request.email,
                "password": request.password,
                "data": {
                    "full_name": request.full_name,
                    "role": request.role,
                }
            }),
        )
        .await
    }
}
