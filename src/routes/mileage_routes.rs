use axum::{
    extract::{Path, Query, State},
    routing::get,
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::mileage_controller::MileageController;
use crate::dto::{ApiResponse, RecordFilter};
use crate::models::{Identity, MileageRecord};
use crate::schema::MileageInput;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_mileage_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_records).post(create_record))
        .route(
            "/:id",
            get(get_record).put(update_record).delete(delete_record),
        )
}

async fn list_records(
    State(state): State<AppState>,
    Extension(actor): Extension<Identity>,
    Query(filter): Query<RecordFilter>,
) -> Result<Json<Vec<MileageRecord>>, AppError> {
    let controller = MileageController::new(state.pool.clone());
    let records = controller.list(&actor, &filter).await?;
    Ok(Json(records))
}

async fn get_record(
    State(state): State<AppState>,
    Extension(actor): Extension<Identity>,
    Path(id): Path<Uuid>,
) -> Result<Json<MileageRecord>, AppError> {
    let controller = MileageController::new(state.pool.clone());
    let record = controller.get(&actor, id).await?;
    Ok(Json(record))
}

async fn create_record(
    State(state): State<AppState>,
    Extension(actor): Extension<Identity>,
    Json(input): Json<MileageInput>,
) -> Result<Json<ApiResponse<MileageRecord>>, AppError> {
    let controller = MileageController::new(state.pool.clone());
    let response = controller
        .create(&actor, input, &state.validation_context())
        .await?;
    Ok(Json(response))
}

async fn update_record(
    State(state): State<AppState>,
    Extension(actor): Extension<Identity>,
    Path(id): Path<Uuid>,
    Json(input): Json<MileageInput>,
) -> Result<Json<ApiResponse<MileageRecord>>, AppError> {
    let controller = MileageController::new(state.pool.clone());
    let response = controller
        .update(&actor, id, input, &state.validation_context())
        .await?;
    Ok(Json(response))
}

async fn delete_record(
    State(state): State<AppState>,
    Extension(actor): Extension<Identity>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = MileageController::new(state.pool.clone());
    controller.delete(&actor, id, state.today()).await?;
    Ok(Json(ApiResponse::message("Registro excluído com sucesso")))
}
