use axum::{
    extract::{Query, State},
    routing::get,
    Extension, Json, Router,
};

use crate::controllers::report_controller::ReportController;
use crate::dto::{ExportQuery, ReportQuery};
use crate::models::report::{DashboardResponse, MonthlyReport};
use crate::models::Identity;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_report_router() -> Router<AppState> {
    Router::new()
        .route("/reports/monthly", get(monthly_report))
        .route("/reports/monthly/export", get(export_report))
        .route("/dashboard/stats", get(dashboard_stats))
}

async fn monthly_report(
    State(state): State<AppState>,
    Extension(actor): Extension<Identity>,
    Query(query): Query<ReportQuery>,
) -> Result<Json<MonthlyReport>, AppError> {
    let (year, month) = query.resolve(state.today());
    let controller = ReportController::new(state.pool.clone());
    let report = controller.monthly(&actor, year, month).await?;
    Ok(Json(report))
}

async fn export_report(
    State(state): State<AppState>,
    Extension(actor): Extension<Identity>,
    Query(query): Query<ExportQuery>,
) -> Result<Vec<u8>, AppError> {
    let (year, month) = query.period().resolve(state.today());
    let controller = ReportController::new(state.pool.clone());
    controller.export(&actor, year, month, query.format)
}

async fn dashboard_stats(
    State(state): State<AppState>,
    Extension(actor): Extension<Identity>,
) -> Result<Json<DashboardResponse>, AppError> {
    let controller = ReportController::new(state.pool.clone());
    let stats = controller.dashboard(&actor, state.today()).await?;
    Ok(Json(stats))
}
