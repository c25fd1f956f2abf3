use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use super::FieldErrors;
use crate::utils::validation::{
    validate_date, validate_measure, validate_not_empty, validate_uuid,
};

/// Inicio de operaciones de la flota por defecto
pub fn default_operations_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Datos externos a la validación: el "hoy" siempre se inyecta
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationContext {
    pub today: NaiveDate,
    pub operations_start: NaiveDate,
}

impl ValidationContext {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            operations_start: default_operations_start(),
        }
    }

    pub fn with_operations_start(mut self, operations_start: NaiveDate) -> Self {
        self.operations_start = operations_start;
        self
    }

    /// Fecha de un registro: válida, no futura y no anterior al inicio de operaciones
    pub(crate) fn check_record_date(
        &self,
        errors: &mut FieldErrors,
        field: &str,
        raw: Option<&str>,
    ) -> Option<NaiveDate> {
        let Some(raw) = raw.filter(|r| !r.trim().is_empty()) else {
            errors.insert(field, "Selecione a data");
            return None;
        };
        let date = match validate_date(raw) {
            Ok(date) => date,
            Err(_) => {
                errors.insert(field, "Data inválida");
                return None;
            }
        };
        if date > self.today {
            errors.insert(field, "A data não pode estar no futuro");
            return None;
        }
        if date < self.operations_start {
            errors.insert(
                field,
                format!(
                    "A data não pode ser anterior a {}",
                    self.operations_start.format("%d/%m/%Y")
                ),
            );
            return None;
        }
        Some(date)
    }
}

/// Medida obligatoria (KM o litros): finita, no negativa, con hasta 2
/// decimales y sin pasar del máximo `max` de su columna
pub(crate) fn check_measure(
    errors: &mut FieldErrors,
    field: &str,
    value: Option<f64>,
    label: &str,
    max: f64,
) -> Option<Decimal> {
    let Some(value) = value else {
        errors.insert(field, format!("Informe {}", label));
        return None;
    };
    match validate_measure(value, max) {
        Ok(decimal) => Some(decimal),
        Err(e) if e.code == "non_negative" => {
            errors.insert(field, format!("{} deve ser maior ou igual a 0", capitalize(label)));
            None
        }
        Err(e) if e.code == "scale" => {
            errors.insert(field, "Use no máximo 2 casas decimais");
            None
        }
        Err(e) if e.code == "max" => {
            errors.insert(field, format!("{} excede o valor máximo permitido", capitalize(label)));
            None
        }
        Err(_) => {
            errors.insert(field, "Valor inválido");
            None
        }
    }
}

pub(crate) fn check_vehicle(errors: &mut FieldErrors, raw: Option<&str>) -> Option<Uuid> {
    let Some(raw) = raw.filter(|r| validate_not_empty(r).is_ok()) else {
        errors.insert("vehicle_id", "Selecione um veículo");
        return None;
    };
    match validate_uuid(raw) {
        Ok(id) => Some(id),
        Err(_) => {
            errors.insert("vehicle_id", "Veículo inválido");
            None
        }
    }
}

/// Texto opcional: vacío o solo espacios equivale a ausente
pub(crate) fn normalize_optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn capitalize(label: &str) -> String {
    let label = label
        .strip_prefix("o ")
        .or_else(|| label.strip_prefix("a "))
        .unwrap_or(label);
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validation::{KM_MAX, LITERS_MAX};

    fn ctx() -> ValidationContext {
        ValidationContext::new(NaiveDate::from_ymd_opt(2025, 2, 10).unwrap())
    }

    #[test]
    fn test_record_date_rules() {
        let mut errors = FieldErrors::new();
        assert!(ctx().check_record_date(&mut errors, "date", Some("2025-02-10")).is_some());
        assert!(errors.is_empty());

        let mut errors = FieldErrors::new();
        assert!(ctx().check_record_date(&mut errors, "date", Some("2025-02-11")).is_none());
        assert_eq!(errors.get("date"), Some("A data não pode estar no futuro"));

        let mut errors = FieldErrors::new();
        assert!(ctx().check_record_date(&mut errors, "date", Some("2019-12-31")).is_none());
        assert_eq!(errors.get("date"), Some("A data não pode ser anterior a 01/01/2020"));

        let mut errors = FieldErrors::new();
        assert!(ctx().check_record_date(&mut errors, "date", None).is_none());
        assert_eq!(errors.get("date"), Some("Selecione a data"));
    }

    #[test]
    fn test_custom_operations_start() {
        let ctx = ctx().with_operations_start(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        let mut errors = FieldErrors::new();
        assert!(ctx.check_record_date(&mut errors, "date", Some("2024-05-31")).is_none());
        assert!(errors.contains("date"));
    }

    #[test]
    fn test_measure_messages() {
        let mut errors = FieldErrors::new();
        check_measure(&mut errors, "km_start", Some(-3.0), "o KM de saída", KM_MAX);
        check_measure(&mut errors, "km_end", None, "o KM de chegada", KM_MAX);
        check_measure(&mut errors, "liters_arla", Some(f64::NAN), "a quantidade de arla", LITERS_MAX);
        assert_eq!(errors.get("km_start"), Some("KM de saída deve ser maior ou igual a 0"));
        assert_eq!(errors.get("km_end"), Some("Informe o KM de chegada"));
        assert_eq!(errors.get("liters_arla"), Some("Valor inválido"));
    }

    #[test]
    fn test_measure_limits_reported_on_field() {
        let mut errors = FieldErrors::new();
        check_measure(&mut errors, "km_start", Some(1.004), "o KM de saída", KM_MAX);
        check_measure(&mut errors, "km_end", Some(2e11), "o KM de chegada", KM_MAX);
        check_measure(&mut errors, "liters_diesel", Some(1e9), "a quantidade de diesel", LITERS_MAX);
        assert_eq!(errors.get("km_start"), Some("Use no máximo 2 casas decimais"));
        assert_eq!(errors.get("km_end"), Some("KM de chegada excede o valor máximo permitido"));
        assert_eq!(
            errors.get("liters_diesel"),
            Some("Quantidade de diesel excede o valor máximo permitido")
        );
    }
}
