//! Identidad autenticada y asignaciones supervisor → motorista

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::role::Role;

/// Usuario autenticado con su rol efectivo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: Uuid,
    pub display_name: String,
    pub email: Option<String>,
    pub role: Role,
}

impl Identity {
    pub fn new(id: Uuid, display_name: impl Into<String>, role: Role) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            email: None,
            role,
        }
    }
}

/// Fila de `supervisor_assignments`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct SupervisorAssignment {
    pub id: Uuid,
    pub supervisor_id: Uuid,
    pub driver_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Perfil de usuario con su rol (join de `profiles` y `user_roles`)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserProfile {
    pub user_id: Uuid,
    pub full_name: String,
    pub role: Role,
    pub work_location: Option<String>,
    pub created_at: DateTime<Utc>,
}
