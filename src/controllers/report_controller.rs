use chrono::{Datelike, NaiveDate};
use sqlx::PgPool;

use super::access::{deny, RecordAccess};
use crate::dto::RecordFilter;
use crate::models::report::{DashboardResponse, ExportFormat, MonthlyReport};
use crate::models::Identity;
use crate::policy::{can_manage_users, can_view_reports, has_capability, Capability};
use crate::repositories::{FuelingRepository, MileageRepository, UserRepository, VehicleRepository};
use crate::services::report_service::{
    aggregate_monthly, build_dashboard, dashboard_stats, export_monthly, month_bounds,
    supervisor_stats,
};
use crate::utils::errors::AppResult;

pub struct ReportController {
    mileage: MileageRepository,
    fueling: FuelingRepository,
    vehicles: VehicleRepository,
    users: UserRepository,
    access: RecordAccess,
}

impl ReportController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            mileage: MileageRepository::new(pool.clone()),
            fueling: FuelingRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool.clone()),
            users: UserRepository::new(pool.clone()),
            access: RecordAccess::new(pool),
        }
    }

    /// Totales del mes sobre los registros visibles para el actor
    pub async fn monthly(&self, actor: &Identity, year: i32, month: u32) -> AppResult<MonthlyReport> {
        if !can_view_reports(actor) {
            return Err(deny(actor, "ver relatórios"));
        }
        let (start, end) = month_bounds(year, month)?;
        let filter = RecordFilter {
            from: Some(start),
            to: Some(end),
            ..RecordFilter::default()
        };

        let supervision = self.access.supervision(actor).await?;
        let scope = self.access.list_scope(actor, &supervision, &filter)?;
        let mileage = self.mileage.list(&scope, &filter).await?;
        let fueling = self.fueling.list(&scope, &filter).await?;

        Ok(aggregate_monthly(&mileage, &fueling, year, month))
    }

    /// Sin formatos disponibles: tras el chequeo de acceso siempre 501
    pub fn export(
        &self,
        actor: &Identity,
        year: i32,
        month: u32,
        format: ExportFormat,
    ) -> AppResult<Vec<u8>> {
        if !can_view_reports(actor) {
            return Err(deny(actor, "ver relatórios"));
        }
        export_monthly(year, month, format)
    }

    /// Dashboard del mes en curso, con extensiones según el rol
    pub async fn dashboard(&self, actor: &Identity, today: NaiveDate) -> AppResult<DashboardResponse> {
        let (start, end) = month_bounds(today.year(), today.month())?;
        let filter = RecordFilter {
            from: Some(start),
            to: Some(end),
            ..RecordFilter::default()
        };

        let supervision = self.access.supervision(actor).await?;
        let scope = self.access.list_scope(actor, &supervision, &filter)?;
        let mileage = self.mileage.list(&scope, &filter).await?;
        let fueling = self.fueling.list(&scope, &filter).await?;
        let vehicles = self.vehicles.list().await?;

        let base = dashboard_stats(&mileage, &fueling, &vehicles);

        let supervisor = if has_capability(actor.role, Capability::ViewDrivers)
            && !has_capability(actor.role, Capability::ViewAllRecords)
        {
            let drivers = supervision.drivers_of(actor.id);
            Some(supervisor_stats(&drivers, &mileage, &fueling))
        } else {
            None
        };

        let total_users = if can_manage_users(actor) {
            Some(self.users.count().await?)
        } else {
            None
        };

        Ok(build_dashboard(base, supervisor, total_users, vehicles.len()))
    }
}
