//! Middleware de autenticación
//!
//! Extrae el access token del header `Authorization`, lo verifica y
//! deja la identidad resuelta en las extensions del request. El rol sale
//! de `user_roles` cuando el usuario tiene fila allí.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};

use crate::services::with_stored_role;
use crate::{state::AppState, utils::errors::AppError};

/// Token Bearer del header, si existe
pub fn bearer_token(request: &Request) -> Option<&str> {
    request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Middleware de autenticación: sin sesión válida no hay acceso
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(&request)
        .ok_or_else(|| AppError::Unauthorized("Sessão não encontrada".to_string()))?;

    let identity = state.auth.authenticate(token)?;
    let stored = state.users.stored_role(identity.id).await?;
    let identity = with_stored_role(identity, stored);
    tracing::debug!(user_id = %identity.id, role = %identity.role, "🔐 Sessão resolvida");

    request.extensions_mut().insert(identity);
    Ok(next.run(request).await)
}
