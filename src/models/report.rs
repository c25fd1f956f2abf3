//! Modelos de reportes mensuales y estadísticas del dashboard

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyReport {
    pub month: u32,
    pub year: i32,
    pub total_km: Decimal,
    pub total_diesel: Decimal,
    pub total_arla: Decimal,
    pub records_count: usize,
    pub fueling_count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_km: Decimal,
    pub total_diesel: Decimal,
    pub total_arla: Decimal,
    pub records_count: usize,
    pub fueling_count: usize,
    pub active_vehicles: usize,
}

/// Extensión para supervisores
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupervisorStats {
    pub drivers_count: usize,
    pub drivers_with_records: usize,
}

/// Extensión para administradores
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdminStats {
    pub total_users: i64,
    pub total_vehicles: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DashboardResponse {
    #[serde(flatten)]
    pub base: DashboardStats,
    #[serde(flatten)]
    pub supervisor: Option<SupervisorStats>,
    #[serde(flatten)]
    pub admin: Option<AdminStats>,
}

/// Formato de exportación solicitado para el reporte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Pdf,
    Xlsx,
}
