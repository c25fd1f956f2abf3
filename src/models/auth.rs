use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::role::Role;

/// Datos de sesión entregados por el proveedor de autenticación
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionPayload {
    pub user_id: Uuid,
    pub email: Option<String>,
    /// Metadatos libres; contienen `role` y `full_name`
    #[serde(default)]
    pub metadata: serde_json::Map<String, serde_json::Value>,
}

impl SessionPayload {
    pub fn metadata_str(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).and_then(|v| v.as_str())
    }
}

/// Claims del access token emitido por el proveedor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessTokenClaims {
    pub sub: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub user_metadata: serde_json::Map<String, serde_json::Value>,
    pub exp: i64,
    #[serde(default)]
    pub iat: Option<i64>,
}

/// Request de login
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignInRequest {
    #[validate(email(message = "Email inválido"), length(max = 255, message = "Email muito longo"))]
    pub email: String,

    #[validate(length(min = 6, max = 100, message = "Senha deve ter entre 6 e 100 caracteres"))]
    pub password: String,
}

/// Request de registro
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignUpRequest {
    #[validate(email(message = "Email inválido"), length(max = 255, message = "Email muito longo"))]
    pub email: String,

    #[validate(length(min = 6, max = 100, message = "Senha deve ter entre 6 e 100 caracteres"))]
    pub password: String,

    #[validate(length(min = 2, max = 100, message = "Nome deve ter entre 2 e 100 caracteres"))]
    pub full_name: String,

    pub role: Role,
}

impl SignUpRequest {
    /// Aplica el recorte de espacios antes de validar
    pub fn normalized(mut self) -> Self {
        self.email = self.email.trim().to_string();
        self.full_name = self.full_name.trim().to_string();
        self
    }
}

/// Sesión devuelta por el proveedor tras login/registro
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSession {
    pub access_token: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
    pub user_id: Uuid,
    pub email: Option<String>,
}
