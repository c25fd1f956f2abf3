//! Validación del registro de abastecimento

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use super::context::{check_measure, check_vehicle, normalize_optional, ValidationContext};
use super::photos::{PhotoList, MAX_PHOTOS};
use super::FieldErrors;
use crate::models::LocationType;
use crate::utils::validation::{KM_MAX, LITERS_MAX};

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct FuelingInput {
    pub date: Option<String>,
    pub vehicle_id: Option<String>,
    pub driver_id: Option<Uuid>,
    pub location_type: Option<String>,
    #[validate(length(max = 120, message = "Nome do posto muito longo"))]
    pub gas_station_name: Option<String>,
    pub current_km: Option<f64>,
    pub liters_diesel: Option<f64>,
    pub liters_arla: Option<f64>,
    #[serde(default)]
    pub photos: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidFueling {
    pub date: NaiveDate,
    pub vehicle_id: Uuid,
    pub driver_id: Option<Uuid>,
    pub location_type: LocationType,
    /// Presente si y solo si `location_type` es `GasStation`
    pub gas_station_name: Option<String>,
    pub current_km: Decimal,
    pub liters_diesel: Decimal,
    pub liters_arla: Decimal,
    pub photos: PhotoList,
}

fn check_location(errors: &mut FieldErrors, raw: Option<&str>) -> Option<LocationType> {
    match raw.map(str::trim).filter(|r| !r.is_empty()) {
        None => {
            errors.insert("location_type", "Selecione o local do abastecimento");
            None
        }
        Some(value) => LocationType::parse(value).or_else(|| {
            errors.insert("location_type", "Local de abastecimento inválido");
            None
        }),
    }
}

/// Nombre del posto: obligatorio en posto, prohibido en garagem
fn check_gas_station(
    errors: &mut FieldErrors,
    location: Option<LocationType>,
    raw: Option<&str>,
) -> Option<String> {
    let name = normalize_optional(raw);
    match (location, &name) {
        (Some(LocationType::GasStation), None) => {
            errors.insert("gas_station_name", "Informe o nome do posto");
        }
        (Some(LocationType::Garage), Some(_)) => {
            errors.insert(
                "gas_station_name",
                "Nome do posto só pode ser informado para abastecimento em posto",
            );
        }
        _ => {}
    }
    name
}

fn check_photos(errors: &mut FieldErrors, photos: &[String]) -> Option<PhotoList> {
    if photos.len() > MAX_PHOTOS {
        errors.insert("photos", format!("Máximo de {} fotos por abastecimento", MAX_PHOTOS));
        return None;
    }
    match PhotoList::try_from_vec(photos.to_vec()) {
        Ok(list) => Some(list),
        Err(e) => {
            errors.insert("photos", e.to_string());
            None
        }
    }
}

/// Litros ausentes equivalen a cero
fn check_liters(errors: &mut FieldErrors, field: &str, value: Option<f64>, label: &str) -> Option<Decimal> {
    check_measure(errors, field, Some(value.unwrap_or(0.0)), label, LITERS_MAX)
}

pub fn validate_fueling(
    input: &FuelingInput,
    ctx: &ValidationContext,
) -> Result<ValidFueling, FieldErrors> {
    let mut errors = FieldErrors::new();
    if let Err(e) = input.validate() {
        errors.absorb(&e);
    }

    let date = ctx.check_record_date(&mut errors, "date", input.date.as_deref());
    let vehicle_id = check_vehicle(&mut errors, input.vehicle_id.as_deref());
    let location = check_location(&mut errors, input.location_type.as_deref());
    let gas_station_name =
        check_gas_station(&mut errors, location, input.gas_station_name.as_deref());
    let current_km = check_measure(&mut errors, "current_km", input.current_km, "o KM atual", KM_MAX);
    let liters_diesel =
        check_liters(&mut errors, "liters_diesel", input.liters_diesel, "a quantidade de diesel");
    let liters_arla =
        check_liters(&mut errors, "liters_arla", input.liters_arla, "a quantidade de arla");
    let photos = check_photos(&mut errors, &input.photos);

    if !errors.is_empty() {
        return Err(errors);
    }

    match (date, vehicle_id, location, current_km, liters_diesel, liters_arla, photos) {
        (
            Some(date),
            Some(vehicle_id),
            Some(location_type),
            Some(current_km),
            Some(liters_diesel),
            Some(liters_arla),
            Some(photos),
        ) => Ok(ValidFueling {
            date,
            vehicle_id,
            driver_id: input.driver_id,
            location_type,
            gas_station_name,
            current_km,
            liters_diesel,
            liters_arla,
            photos,
        }),
        _ => Err(errors),
    }
}
