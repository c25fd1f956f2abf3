use axum::{
    extract::{Path, State},
    routing::{delete, get},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::assignment_controller::AssignmentController;
use crate::dto::ApiResponse;
use crate::models::{Identity, SupervisorAssignment, UserProfile};
use crate::schema::AssignmentInput;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_assignment_router() -> Router<AppState> {
    Router::new()
        .route("/supervisor-assignments", get(list_assignments).post(create_assignment))
        .route("/supervisor-assignments/:id", delete(delete_assignment))
        .route("/drivers", get(list_drivers))
}

async fn list_assignments(
    State(state): State<AppState>,
    Extension(actor): Extension<Identity>,
) -> Result<Json<Vec<SupervisorAssignment>>, AppError> {
    let controller = AssignmentController::new(state.pool.clone());
    let assignments = controller.list(&actor).await?;
    Ok(Json(assignments))
}

async fn create_assignment(
    State(state): State<AppState>,
    Extension(actor): Extension<Identity>,
    Json(input): Json<AssignmentInput>,
) -> Result<Json<ApiResponse<SupervisorAssignment>>, AppError> {
    let controller = AssignmentController::new(state.pool.clone());
    let response = controller.create(&actor, input).await?;
    Ok(Json(response))
}

async fn delete_assignment(
    State(state): State<AppState>,
    Extension(actor): Extension<Identity>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = AssignmentController::new(state.pool.clone());
    controller.delete(&actor, id).await?;
    Ok(Json(ApiResponse::message("Vínculo removido com sucesso")))
}

async fn list_drivers(
    State(state): State<AppState>,
    Extension(actor): Extension<Identity>,
) -> Result<Json<Vec<UserProfile>>, AppError> {
    let controller = AssignmentController::new(state.pool.clone());
    let drivers = controller.drivers(&actor).await?;
    Ok(Json(drivers))
}
