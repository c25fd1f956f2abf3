use std::sync::Arc;

use validator::Validate;

use crate::dto::ApiResponse;
use crate::models::auth::{AuthSession, SignInRequest, SignUpRequest};
use crate::repositories::UserDirectory;
use crate::schema::FieldErrors;
use crate::services::AuthProvider;
use crate::utils::errors::AppResult;

pub struct AuthController {
    provider: Arc<dyn AuthProvider>,
    users: Arc<dyn UserDirectory>,
}

impl AuthController {
    pub fn new(provider: Arc<dyn AuthProvider>, users: Arc<dyn UserDirectory>) -> Self {
        Self { provider, users }
    }

    pub async fn sign_in(&self, request: SignInRequest) -> AppResult<ApiResponse<AuthSession>> {
        let request = SignInRequest {
            email: request.email.trim().to_string(),
            ..request
        };
        check(&request)?;

        let session = self
            .provider
            .sign_in(&request.email, &request.password)
            .await?;
        tracing::info!(user_id = %session.user_id, "✅ Login realizado");

        Ok(ApiResponse::success_with_message(
            session,
            "Login realizado com sucesso!",
        ))
    }

    /// Crea la cuenta en el proveedor y guarda perfil y rol elegido
    pub async fn sign_up(&self, request: SignUpRequest) -> AppResult<ApiResponse<AuthSession>> {
        let request = request.normalized();
        check(&request)?;

        let session = self.provider.sign_up(&request).await?;
        self.users
            .register(session.user_id, &request.full_name, request.role)
            .await?;
        tracing::info!(user_id = %session.user_id, role = %request.role, "🆕 Conta criada");

        Ok(ApiResponse::success_with_message(
            session,
            "Conta criada com sucesso!",
        ))
    }
}

fn check<T: Validate>(request: &T) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    if let Err(e) = request.validate() {
        errors.absorb(&e);
    }
    errors.into_result(|| ())
}
