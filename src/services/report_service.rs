//! Agregaciones para el reporte mensual y el dashboard
//!
//! Funciones puras sobre los registros ya filtrados por alcance del actor.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::report::{
    AdminStats, DashboardResponse, DashboardStats, ExportFormat, MonthlyReport, SupervisorStats,
};
use crate::models::{FuelingRecord, MileageRecord, Vehicle};
use crate::utils::errors::{bad_request_error, AppError, AppResult};

/// Primer y último día del mes pedido
pub fn month_bounds(year: i32, month: u32) -> AppResult<(NaiveDate, NaiveDate)> {
    let start = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| bad_request_error("Mês ou ano inválido"))?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    let end = next
        .and_then(|d| d.pred_opt())
        .ok_or_else(|| bad_request_error("Mês ou ano inválido"))?;
    Ok((start, end))
}

fn in_month(date: NaiveDate, year: i32, month: u32) -> bool {
    date.year() == year && date.month() == month
}

pub fn aggregate_monthly(
    mileage: &[MileageRecord],
    fueling: &[FuelingRecord],
    year: i32,
    month: u32,
) -> MonthlyReport {
    let mileage: Vec<&MileageRecord> = mileage
        .iter()
        .filter(|r| in_month(r.date, year, month))
        .collect();
    let fueling: Vec<&FuelingRecord> = fueling
        .iter()
        .filter(|r| in_month(r.date, year, month))
        .collect();

    MonthlyReport {
        month,
        year,
        total_km: mileage.iter().map(|r| r.km_total).sum(),
        total_diesel: fueling.iter().map(|r| r.liters_diesel).sum(),
        total_arla: fueling.iter().map(|r| r.liters_arla).sum(),
        records_count: mileage.len(),
        fueling_count: fueling.len(),
    }
}

pub fn dashboard_stats(
    mileage: &[MileageRecord],
    fueling: &[FuelingRecord],
    vehicles: &[Vehicle],
) -> DashboardStats {
    DashboardStats {
        total_km: mileage.iter().map(|r| r.km_total).sum::<Decimal>(),
        total_diesel: fueling.iter().map(|r| r.liters_diesel).sum::<Decimal>(),
        total_arla: fueling.iter().map(|r| r.liters_arla).sum::<Decimal>(),
        records_count: mileage.len(),
        fueling_count: fueling.len(),
        active_vehicles: vehicles.iter().filter(|v| v.is_active()).count(),
    }
}

/// Motoristas supervisados y cuántos de ellos tienen algún registro
pub fn supervisor_stats(
    drivers: &[Uuid],
    mileage: &[MileageRecord],
    fueling: &[FuelingRecord],
) -> SupervisorStats {
    let with_records: HashSet<Uuid> = mileage
        .iter()
        .map(|r| r.driver_id)
        .chain(fueling.iter().map(|r| r.driver_id))
        .collect();

    SupervisorStats {
        drivers_count: drivers.len(),
        drivers_with_records: drivers.iter().filter(|d| with_records.contains(d)).count(),
    }
}

pub fn build_dashboard(
    base: DashboardStats,
    supervisor: Option<SupervisorStats>,
    total_users: Option<i64>,
    total_vehicles: usize,
) -> DashboardResponse {
    DashboardResponse {
        base,
        supervisor,
        admin: total_users.map(|total_users| AdminStats {
            total_users,
            total_vehicles,
        }),
    }
}

/// Ningún formato de exportación está disponible todavía; un período
/// inválido se rechaza antes (400)
pub fn export_monthly(year: i32, month: u32, format: ExportFormat) -> AppResult<Vec<u8>> {
    month_bounds(year, month)?;
    let name = match format {
        ExportFormat::Pdf => "PDF",
        ExportFormat::Xlsx => "Excel",
    };
    Err(AppError::NotImplemented(format!(
        "Exportação em {} será implementada com a integração completa",
        name
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LocationType;
    use chrono::Utc;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn km(driver_id: Uuid, date: NaiveDate, total: i64) -> MileageRecord {
        MileageRecord {
            id: Uuid::new_v4(),
            driver_id,
            vehicle_id: Uuid::new_v4(),
            date,
            km_start: Decimal::from(1000),
            km_end: Decimal::from(1000 + total),
            km_total: Decimal::from(total),
            observations: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn fuel(driver_id: Uuid, date: NaiveDate, diesel: i64, arla: i64) -> FuelingRecord {
        FuelingRecord {
            id: Uuid::new_v4(),
            driver_id,
            vehicle_id: Uuid::new_v4(),
            date,
            location_type: LocationType::Garage,
            gas_station_name: None,
            current_km: Decimal::from(125_000),
            liters_diesel: Decimal::from(diesel),
            liters_arla: Decimal::from(arla),
            photos: vec![],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_monthly_report_filters_by_month() {
        let d = Uuid::new_v4();
        let mileage = vec![
            km(d, ymd(2025, 1, 30), 180),
            km(d, ymd(2025, 1, 2), 20),
            km(d, ymd(2025, 2, 1), 999),
        ];
        let fueling = vec![fuel(d, ymd(2025, 1, 30), 120, 10), fuel(d, ymd(2025, 1, 28), 80, 5)];

        let report = aggregate_monthly(&mileage, &fueling, 2025, 1);
        assert_eq!(report.total_km, Decimal::from(200));
        assert_eq!(report.total_diesel, Decimal::from(200));
        assert_eq!(report.total_arla, Decimal::from(15));
        assert_eq!(report.records_count, 2);
        assert_eq!(report.fueling_count, 2);
    }

    #[test]
    fn test_month_bounds() {
        assert_eq!(month_bounds(2024, 2).unwrap(), (ymd(2024, 2, 1), ymd(2024, 2, 29)));
        assert_eq!(month_bounds(2024, 12).unwrap().1, ymd(2024, 12, 31));
        assert!(month_bounds(2024, 13).is_err());
    }

    #[test]
    fn test_supervisor_stats() {
        let d1 = Uuid::new_v4();
        let d2 = Uuid::new_v4();
        let stats = supervisor_stats(&[d1, d2], &[km(d1, ymd(2025, 1, 2), 10)], &[]);
        assert_eq!(stats.drivers_count, 2);
        assert_eq!(stats.drivers_with_records, 1);
    }

    #[test]
    fn test_export_is_stubbed() {
        assert!(matches!(
            export_monthly(2025, 1, ExportFormat::Pdf),
            Err(AppError::NotImplemented(_))
        ));
        assert!(matches!(
            export_monthly(2025, 13, ExportFormat::Xlsx),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn test_dashboard_json_shape() {
        let base = dashboard_stats(&[], &[], &[]);
        let driver_view = serde_json::to_value(build_dashboard(base.clone(), None, None, 0)).unwrap();
        assert!(driver_view.get("drivers_count").is_none());
        assert!(driver_view.get("total_km").is_some());

        let admin_view = serde_json::to_value(build_dashboard(
            base,
            Some(SupervisorStats::default()),
            Some(12),
            3,
        ))
        .unwrap();
        assert_eq!(admin_view["total_users"], 12);
        assert_eq!(admin_view["total_vehicles"], 3);
        assert_eq!(admin_view["drivers_count"], 0);
    }
}
