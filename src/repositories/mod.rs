//! Acceso a PostgreSQL por tabla

pub mod assignment_repository;
pub mod fueling_repository;
pub mod gas_station_repository;
pub mod mileage_repository;
pub mod user_repository;
pub mod vehicle_repository;

pub use assignment_repository::AssignmentRepository;
pub use fueling_repository::FuelingRepository;
pub use gas_station_repository::GasStationRepository;
pub use mileage_repository::MileageRepository;
pub use user_repository::{UserDirectory, UserRepository};
pub use vehicle_repository::VehicleRepository;

use uuid::Uuid;

use crate::policy::RecordScope;

/// `None` = sin restricción de motorista
pub(crate) fn scope_ids(scope: &RecordScope) -> Option<Vec<Uuid>> {
    match scope {
        RecordScope::All => None,
        RecordScope::Drivers(ids) => Some(ids.clone()),
    }
}
