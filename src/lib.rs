//! Control de flota: política de acceso por rol, schema de registros y
//! resolución de sesión, servidos por una API axum sobre PostgreSQL.

pub mod config;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod policy;
pub mod repositories;
pub mod routes;
pub mod schema;
pub mod services;
pub mod state;
pub mod utils;

use axum::{middleware::from_fn_with_state, Router};
use tower_http::trace::TraceLayer;

use middleware::{auth_middleware, cors_layer};
use routes::{
    assignment_routes, auth_routes, fueling_routes, gas_station_routes, health_routes,
    mileage_routes, report_routes, session_routes, vehicle_routes,
};
use state::AppState;

/// Router completo de la aplicación
pub fn create_app(state: AppState) -> Router {
    let protected = Router::new()
        .merge(session_routes::create_session_router())
        .nest("/kilometers", mileage_routes::create_mileage_router())
        .nest("/fueling", fueling_routes::create_fueling_router())
        .nest("/vehicles", vehicle_routes::create_vehicle_router())
        .nest("/gas-stations", gas_station_routes::create_gas_station_router())
        .merge(assignment_routes::create_assignment_router())
        .merge(report_routes::create_report_router())
        .route_layer(from_fn_with_state(state.clone(), auth_middleware));

    let api = Router::new()
        .nest("/auth", auth_routes::create_auth_router())
        .merge(protected);

    Router::new()
        .merge(health_routes::create_health_router())
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&state.config.cors_origins))
        .with_state(state)
}
