//! Validación del registro de quilometragem

use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use super::context::{check_measure, check_vehicle, normalize_optional, ValidationContext};
use super::FieldErrors;
use crate::models::MileageReading;
use crate::utils::validation::KM_MAX;

/// Datos del formulario tal como llegan del cliente.
///
/// `km_total` no existe aquí: se deriva siempre de las lecturas.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct MileageInput {
    pub date: Option<String>,
    pub vehicle_id: Option<String>,
    /// Solo para supervisores/admins registrando a nombre de otro motorista
    pub driver_id: Option<Uuid>,
    pub km_start: Option<f64>,
    pub km_end: Option<f64>,
    #[validate(length(max = 500, message = "Observações devem ter no máximo 500 caracteres"))]
    pub observations: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidMileage {
    pub date: NaiveDate,
    pub vehicle_id: Uuid,
    pub driver_id: Option<Uuid>,
    pub reading: MileageReading,
    pub observations: Option<String>,
}

/// Revisa todos los campos y devuelve todas las violaciones juntas
pub fn validate_mileage(
    input: &MileageInput,
    ctx: &ValidationContext,
) -> Result<ValidMileage, FieldErrors> {
    let mut errors = FieldErrors::new();
    if let Err(e) = input.validate() {
        errors.absorb(&e);
    }

    let date = ctx.check_record_date(&mut errors, "date", input.date.as_deref());
    let vehicle_id = check_vehicle(&mut errors, input.vehicle_id.as_deref());
    let km_start = check_measure(&mut errors, "km_start", input.km_start, "o KM de saída", KM_MAX);
    let km_end = check_measure(&mut errors, "km_end", input.km_end, "o KM de chegada", KM_MAX);

    let reading = match (km_start, km_end) {
        (Some(start), Some(end)) => {
            let reading = MileageReading::new(start, end);
            if reading.is_none() {
                errors.insert("km_end", "KM de chegada deve ser maior que KM de saída");
            }
            reading
        }
        _ => None,
    };

    match (date, vehicle_id, reading) {
        (Some(date), Some(vehicle_id), Some(reading)) if errors.is_empty() => Ok(ValidMileage {
            date,
            vehicle_id,
            driver_id: input.driver_id,
            reading,
            observations: normalize_optional(input.observations.as_deref()),
        }),
        _ => Err(errors),
    }
}
