use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::Identity;
use crate::policy::NavItem;

// Filtros de listado de registros (query string)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecordFilter {
    pub driver_id: Option<Uuid>,
    pub vehicle_id: Option<Uuid>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

// Response de /api/session/me
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub user: Identity,
    pub role_label: &'static str,
    pub navigation: Vec<&'static NavItem>,
}

impl SessionResponse {
    pub fn new(user: Identity, navigation: Vec<&'static NavItem>) -> Self {
        Self {
            role_label: user.role.label(),
            user,
            navigation,
        }
    }
}

// Query y response de /api/session/can-access
#[derive(Debug, Deserialize)]
pub struct RouteQuery {
    pub path: String,
}

#[derive(Debug, Serialize)]
pub struct RouteAccess {
    pub path: String,
    pub allowed: bool,
}
