//! Roles del sistema
//!
//! Mapea al ENUM `app_role` de PostgreSQL. El rol se fija al crear la cuenta
//! y no cambia después.

use serde::{Deserialize, Serialize};
use sqlx::Type;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "app_role", rename_all = "lowercase")]
pub enum Role {
    Driver,
    Supervisor,
    Admin,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Driver, Role::Supervisor, Role::Admin];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Driver => "driver",
            Role::Supervisor => "supervisor",
            Role::Admin => "admin",
        }
    }

    /// Etiqueta visible en la interfaz
    pub fn label(&self) -> &'static str {
        match self {
            Role::Driver => "Motorista",
            Role::Supervisor => "Supervisor",
            Role::Admin => "Administrador",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "driver" => Some(Role::Driver),
            "supervisor" => Some(Role::Supervisor),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }

    /// Resuelve el rol almacenado en los metadatos de la sesión.
    ///
    /// Ausente → `driver`. Un valor desconocido también cae en `driver`
    /// (el rol más restrictivo) y se registra como inconsistencia.
    pub fn from_claim(raw: Option<&str>) -> Self {
        match raw {
            None => Role::Driver,
            Some(value) if value.trim().is_empty() => Role::Driver,
            Some(value) => Role::parse(value).unwrap_or_else(|| {
                tracing::warn!(
                    role = value,
                    "⚠️ Rol desconocido en la sesión, se aplica el rol más restrictivo"
                );
                Role::Driver
            }),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
