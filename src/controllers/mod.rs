//! Controladores: actor → supervisión → política → validación → persistencia

pub mod access;
pub mod assignment_controller;
pub mod auth_controller;
pub mod fueling_controller;
pub mod gas_station_controller;
pub mod mileage_controller;
pub mod report_controller;
pub mod vehicle_controller;
