//! Routers HTTP por recurso

pub mod assignment_routes;
pub mod auth_routes;
pub mod fueling_routes;
pub mod gas_station_routes;
pub mod health_routes;
pub mod mileage_routes;
pub mod report_routes;
pub mod session_routes;
pub mod vehicle_routes;
