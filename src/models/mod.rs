//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos que mapean al schema
//! PostgreSQL del proveedor (tablas, ENUMs y relaciones).

pub mod auth;
pub mod fueling;
pub mod gas_station;
pub mod identity;
pub mod mileage;
pub mod report;
pub mod role;
pub mod vehicle;

pub use fueling::{FuelingRecord, LocationType};
pub use identity::{Identity, SupervisorAssignment, UserProfile};
pub use mileage::{MileageReading, MileageRecord};
pub use role::Role;
pub use vehicle::{Vehicle, VehicleStatus, VehicleType};
