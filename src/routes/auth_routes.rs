use axum::{extract::State, routing::post, Json, Router};

use crate::controllers::auth_controller::AuthController;
use crate::dto::ApiResponse;
use crate::models::auth::{AuthSession, SignInRequest, SignUpRequest};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/sign-in", post(sign_in))
        .route("/sign-up", post(sign_up))
}

async fn sign_in(
    State(state): State<AppState>,
    Json(request): Json<SignInRequest>,
) -> Result<Json<ApiResponse<AuthSession>>, AppError> {
    let controller = AuthController::new(state.auth_provider.clone(), state.users.clone());
    let response = controller.sign_in(request).await?;
    Ok(Json(response))
}

async fn sign_up(
    State(state): State<AppState>,
    Json(request): Json<SignUpRequest>,
) -> Result<Json<ApiResponse<AuthSession>>, AppError> {
    let controller = AuthController::new(state.auth_provider.clone(), state.users.clone());
    let response = controller.sign_up(request).await?;
    Ok(Json(response))
}
