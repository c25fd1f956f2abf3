use axum::{extract::State, routing::get, Extension, Json, Router};

use crate::controllers::gas_station_controller::GasStationController;
use crate::dto::ApiResponse;
use crate::models::gas_station::GasStation;
use crate::models::Identity;
use crate::schema::GasStationInput;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_gas_station_router() -> Router<AppState> {
    Router::new().route("/", get(list_stations).post(create_station))
}

async fn list_stations(State(state): State<AppState>) -> Result<Json<Vec<GasStation>>, AppError> {
    let controller = GasStationController::new(state.pool.clone());
    let stations = controller.list().await?;
    Ok(Json(stations))
}

async fn create_station(
    State(state): State<AppState>,
    Extension(actor): Extension<Identity>,
    Json(input): Json<GasStationInput>,
) -> Result<Json<ApiResponse<GasStation>>, AppError> {
    let controller = GasStationController::new(state.pool.clone());
    let response = controller.create(&actor, input).await?;
    Ok(Json(response))
}
