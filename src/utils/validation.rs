//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! y conversión de tipos. Devuelven `ValidationError` del crate validator;
//! el mensaje final para el usuario lo decide el schema de cada registro.

use std::borrow::Cow;

use chrono::{DateTime, NaiveDate};
use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;
use validator::ValidationError;

lazy_static! {
    /// Placa antigua (ABC-1234) o Mercosul (ABC1D23)
    static ref PLATE_RE: Regex = Regex::new(r"^[A-Z]{3}[0-9][A-Z0-9][0-9]{2}$").unwrap();
}

fn error_with_message(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

/// Validar y convertir string a UUID
pub fn validate_uuid(value: &str) -> Result<Uuid, ValidationError> {
    Uuid::parse_str(value.trim()).map_err(|_| {
        let mut error = ValidationError::new("uuid");
        error.add_param("value".into(), &value.to_string());
        error
    })
}

/// Validar y convertir string a fecha
///
/// Acepta `YYYY-MM-DD` o un datetime RFC3339 (se toma la fecha).
pub fn validate_date(value: &str) -> Result<NaiveDate, ValidationError> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(value).map(|dt| dt.date_naive()))
        .map_err(|_| {
            let mut error = ValidationError::new("date");
            error.add_param("value".into(), &value.to_string());
            error.add_param("format".into(), &"YYYY-MM-DD".to_string());
            error
        })
}

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_empty"));
    }
    Ok(())
}

/// Validar que un valor sea no negativo
pub fn validate_non_negative<T: PartialOrd + std::fmt::Display + num_traits::Zero + Serialize>(
    value: T,
) -> Result<(), ValidationError> {
    if value < T::zero() {
        let mut error = ValidationError::new("non_negative");
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// Máximo de las columnas `NUMERIC(12,2)` de KM
pub const KM_MAX: f64 = 9_999_999_999.99;
/// Máximo de las columnas `NUMERIC(10,2)` de litros
pub const LITERS_MAX: f64 = 99_999_999.99;
/// Casas decimales que guardan las columnas de medidas
pub const MEASURE_SCALE: u32 = 2;

/// Número finito, no negativo, con hasta 2 decimales y dentro del máximo
/// de la columna; convertido a Decimal ya en la escala almacenada.
pub fn validate_measure(value: f64, max: f64) -> Result<Decimal, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::new("finite"));
    }
    validate_non_negative(value)?;
    if value > max {
        let mut error = ValidationError::new("max");
        error.add_param("max".into(), &max);
        return Err(error);
    }

    let decimal = Decimal::from_f64(value)
        .ok_or_else(|| ValidationError::new("decimal"))?
        .normalize();
    if decimal.scale() > MEASURE_SCALE {
        let mut error = ValidationError::new("scale");
        error.add_param("scale".into(), &MEASURE_SCALE);
        return Err(error);
    }
    Ok(decimal)
}

/// Validar formato de placa de vehículo
pub fn validate_license_plate(value: &str) -> Result<(), ValidationError> {
    let clean_plate = normalize_plate(value);
    if !PLATE_RE.is_match(&clean_plate) {
        let mut error = error_with_message("license_plate", "Placa inválida");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validador `custom` para derives de validator
pub fn validate_plate_field(value: &str) -> Result<(), ValidationError> {
    validate_license_plate(value)
}

/// Mayúsculas y sin separadores
pub fn normalize_plate(value: &str) -> String {
    value
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .collect::<String>()
        .to_uppercase()
}

/// Validar que el string no quede vacío tras recortar espacios
pub fn validate_trimmed_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(error_with_message("not_empty", "Campo obrigatório"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_uuid() {
        let valid_uuid = "550e8400-e29b-41d4-a716-446655440000";
        assert!(validate_uuid(valid_uuid).is_ok());

        let invalid_uuid = "invalid-uuid";
        assert!(validate_uuid(invalid_uuid).is_err());
    }

    #[test]
    fn test_validate_date() {
        assert_eq!(
            validate_date("2024-01-15").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );
        assert_eq!(
            validate_date("2024-01-15T10:30:00-03:00").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );
        assert!(validate_date("2024/01/15").is_err());
        assert!(validate_date("2024-02-30").is_err());
    }

    #[test]
    fn test_validate_measure() {
        assert_eq!(validate_measure(125_000.0, KM_MAX).unwrap(), Decimal::from(125_000));
        assert!(validate_measure(-1.0, KM_MAX).is_err());
        assert!(validate_measure(f64::NAN, KM_MAX).is_err());
        assert!(validate_measure(f64::INFINITY, KM_MAX).is_err());
        assert_eq!(validate_measure(0.0, KM_MAX).unwrap(), Decimal::ZERO);
        assert_eq!(validate_measure(1.5, KM_MAX).unwrap(), Decimal::new(15, 1));
        assert_eq!(validate_measure(2.01, KM_MAX).unwrap(), Decimal::new(201, 2));
    }

    #[test]
    fn test_measure_scale_matches_column() {
        assert_eq!(validate_measure(1.004, KM_MAX).unwrap_err().code, "scale");
        assert_eq!(validate_measure(0.001, KM_MAX).unwrap_err().code, "scale");
        assert_eq!(validate_measure(12.345, LITERS_MAX).unwrap_err().code, "scale");
    }

    #[test]
    fn test_measure_column_maximum() {
        assert!(validate_measure(KM_MAX, KM_MAX).is_ok());
        assert_eq!(validate_measure(1e11, KM_MAX).unwrap_err().code, "max");
        assert!(validate_measure(99_999_999.99, LITERS_MAX).is_ok());
        assert_eq!(validate_measure(100_000_000.0, LITERS_MAX).unwrap_err().code, "max");
    }

    #[test]
    fn test_validate_license_plate() {
        assert!(validate_license_plate("ABC-1234").is_ok());
        assert!(validate_license_plate("abc1d23").is_ok());
        assert!(validate_license_plate("A").is_err());
        assert!(validate_license_plate("ABCDEFGHIJK").is_err());
        assert_eq!(normalize_plate("abc-1234"), "ABC1234");
    }

    #[test]
    fn test_validate_not_empty() {
        assert!(validate_not_empty("x").is_ok());
        assert!(validate_not_empty("   ").is_err());
        assert!(validate_trimmed_not_empty(" ").is_err());
    }
}
