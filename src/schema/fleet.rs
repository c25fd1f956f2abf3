//! Validación de los catálogos de la flota: vehículos, postos y asignaciones

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use super::FieldErrors;
use crate::models::{Role, VehicleStatus, VehicleType};
use crate::utils::validation::{normalize_plate, validate_plate_field, validate_trimmed_not_empty};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct VehicleInput {
    #[validate(custom = "validate_plate_field")]
    pub plate: String,

    #[validate(
        custom = "validate_trimmed_not_empty",
        length(max = 10, message = "Número do carro muito longo")
    )]
    pub car_number: String,

    pub vehicle_type: VehicleType,

    pub status: Option<VehicleStatus>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidVehicle {
    pub plate: String,
    pub car_number: String,
    pub vehicle_type: VehicleType,
    pub status: VehicleStatus,
}

pub fn validate_vehicle(input: &VehicleInput) -> Result<ValidVehicle, FieldErrors> {
    let mut errors = FieldErrors::new();
    if let Err(e) = input.validate() {
        errors.absorb(&e);
    }
    errors.into_result(|| ValidVehicle {
        plate: normalize_plate(&input.plate),
        car_number: input.car_number.trim().to_string(),
        vehicle_type: input.vehicle_type,
        status: input.status.unwrap_or(VehicleStatus::Active),
    })
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GasStationInput {
    #[validate(length(min = 2, max = 120, message = "Nome deve ter entre 2 e 120 caracteres"))]
    pub name: String,

    #[validate(length(max = 255, message = "Endereço muito longo"))]
    pub address: Option<String>,
}

pub fn validate_gas_station(input: &GasStationInput) -> Result<GasStationInput, FieldErrors> {
    let trimmed = GasStationInput {
        name: input.name.trim().to_string(),
        address: input
            .address
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .map(str::to_string),
    };
    let mut errors = FieldErrors::new();
    if let Err(e) = trimmed.validate() {
        errors.absorb(&e);
    }
    errors.into_result(|| trimmed)
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssignmentInput {
    pub supervisor_id: Uuid,
    pub driver_id: Uuid,
}

/// El extremo `driver_id` debe ser motorista y `supervisor_id` supervisor o admin.
/// `None` significa que el usuario no existe.
pub fn validate_assignment(
    input: &AssignmentInput,
    supervisor_role: Option<Role>,
    driver_role: Option<Role>,
) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    match supervisor_role {
        None => errors.insert("supervisor_id", "Usuário não encontrado"),
        Some(Role::Supervisor | Role::Admin) => {}
        Some(_) => errors.insert("supervisor_id", "O usuário não é supervisor"),
    }
    match driver_role {
        None => errors.insert("driver_id", "Usuário não encontrado"),
        Some(Role::Driver) => {}
        Some(_) => errors.insert("driver_id", "O usuário não é motorista"),
    }
    if input.supervisor_id == input.driver_id {
        errors.insert("driver_id", "Supervisor e motorista devem ser diferentes");
    }
    errors.into_result(|| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_plate_normalized() {
        let input = VehicleInput {
            plate: "abc-1234".into(),
            car_number: " 01 ".into(),
            vehicle_type: VehicleType::SchoolBus,
            status: None,
        };
        let valid = validate_vehicle(&input).unwrap();
        assert_eq!(valid.plate, "ABC1234");
        assert_eq!(valid.car_number, "01");
        assert_eq!(valid.status, VehicleStatus::Active);
    }

    #[test]
    fn test_vehicle_errors() {
        let input = VehicleInput {
            plate: "12".into(),
            car_number: "  ".into(),
            vehicle_type: VehicleType::UniversityBus,
            status: Some(VehicleStatus::Maintenance),
        };
        let errors = validate_vehicle(&input).unwrap_err();
        assert_eq!(errors.get("plate"), Some("Placa inválida"));
        assert_eq!(errors.get("car_number"), Some("Campo obrigatório"));
    }

    #[test]
    fn test_assignment_roles() {
        let input = AssignmentInput {
            supervisor_id: Uuid::new_v4(),
            driver_id: Uuid::new_v4(),
        };
        assert!(validate_assignment(&input, Some(Role::Supervisor), Some(Role::Driver)).is_ok());
        assert!(validate_assignment(&input, Some(Role::Admin), Some(Role::Driver)).is_ok());

        let errors =
            validate_assignment(&input, Some(Role::Driver), Some(Role::Supervisor)).unwrap_err();
        assert!(errors.contains("supervisor_id"));
        assert!(errors.contains("driver_id"));

        let errors = validate_assignment(&input, None, Some(Role::Driver)).unwrap_err();
        assert_eq!(errors.get("supervisor_id"), Some("Usuário não encontrado"));
    }

    #[test]
    fn test_gas_station_trimmed() {
        let input = GasStationInput {
            name: "  Posto Shell BR-101 ".into(),
            address: Some("   ".into()),
        };
        let valid = validate_gas_station(&input).unwrap();
        assert_eq!(valid.name, "Posto Shell BR-101");
        assert_eq!(valid.address, None);

        let short = GasStationInput {
            name: "P".into(),
            address: None,
        };
        assert!(validate_gas_station(&short).unwrap_err().contains("name"));
    }
}
