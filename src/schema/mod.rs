//! Schema y validación de registros
//!
//! Reglas por campo independientes de la interfaz. La validación revisa
//! todos los campos y devuelve un mapa campo → mensaje (gana la primera
//! violación de cada campo).

pub mod context;
pub mod field_errors;
pub mod fleet;
pub mod fueling;
pub mod mileage;
pub mod photos;

pub use context::{default_operations_start, ValidationContext};
pub use field_errors::FieldErrors;
pub use fleet::{
    validate_assignment, validate_gas_station, validate_vehicle, AssignmentInput,
    GasStationInput, ValidVehicle, VehicleInput,
};
pub use fueling::{validate_fueling, FuelingInput, ValidFueling};
pub use mileage::{validate_mileage, MileageInput, ValidMileage};
pub use photos::{PhotoError, PhotoList, MAX_PHOTOS};
