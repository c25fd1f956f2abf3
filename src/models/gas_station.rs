use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Posto de combustible del catálogo - tabla `gas_stations`
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct GasStation {
    pub id: Uuid,
    pub name: String,
    pub address: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}
