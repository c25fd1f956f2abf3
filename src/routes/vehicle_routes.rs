use axum::{
    extract::{Path, State},
    routing::{get, put},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::ApiResponse;
use crate::models::{Identity, Vehicle};
use crate::schema::VehicleInput;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_vehicles).post(create_vehicle))
        .route("/:id", put(update_vehicle).delete(delete_vehicle))
}

async fn list_vehicles(State(state): State<AppState>) -> Result<Json<Vec<Vehicle>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let vehicles = controller.list().await?;
    Ok(Json(vehicles))
}

async fn create_vehicle(
    State(state): State<AppState>,
    Extension(actor): Extension<Identity>,
    Json(input): Json<VehicleInput>,
) -> Result<Json<ApiResponse<Vehicle>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.create(&actor, input).await?;
    Ok(Json(response))
}

async fn update_vehicle(
    State(state): State<AppState>,
    Extension(actor): Extension<Identity>,
    Path(id): Path<Uuid>,
    Json(input): Json<VehicleInput>,
) -> Result<Json<ApiResponse<Vehicle>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.update(&actor, id, input).await?;
    Ok(Json(response))
}

async fn delete_vehicle(
    State(state): State<AppState>,
    Extension(actor): Extension<Identity>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    controller.delete(&actor, id).await?;
    Ok(Json(ApiResponse::message("Veículo removido com sucesso")))
}
