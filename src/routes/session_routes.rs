use axum::{extract::Query, routing::get, Extension, Json, Router};

use crate::dto::{RouteAccess, RouteQuery, SessionResponse};
use crate::models::Identity;
use crate::policy::{can_access_route, visible_nav_items, NavItem};
use crate::state::AppState;

pub fn create_session_router() -> Router<AppState> {
    Router::new()
        .route("/session/me", get(current_session))
        .route("/session/can-access", get(can_access))
        .route("/navigation", get(navigation))
}

async fn current_session(Extension(identity): Extension<Identity>) -> Json<SessionResponse> {
    let navigation = visible_nav_items(identity.role);
    Json(SessionResponse::new(identity, navigation))
}

async fn navigation(Extension(identity): Extension<Identity>) -> Json<Vec<&'static NavItem>> {
    Json(visible_nav_items(identity.role))
}

/// Guardia de navegación del cliente, decidida con la misma tabla
async fn can_access(
    Extension(identity): Extension<Identity>,
    Query(query): Query<RouteQuery>,
) -> Json<RouteAccess> {
    let allowed = can_access_route(identity.role, &query.path);
    if !allowed {
        tracing::debug!(user_id = %identity.id, path = %query.path, "🚫 Ruta no permitida");
    }
    Json(RouteAccess {
        path: query.path,
        allowed,
    })
}
