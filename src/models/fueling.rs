//! Modelo de registro de abastecimento
//!
//! Mapea a la tabla `fueling_records`.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

use crate::policy::OwnedRecord;

/// Lugar del abastecimiento - mapea al ENUM fueling_location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "fueling_location", rename_all = "snake_case")]
pub enum LocationType {
    Garage,
    GasStation,
}

impl LocationType {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "garage" => Some(LocationType::Garage),
            "gas_station" => Some(LocationType::GasStation),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LocationType::Garage => "Garagem",
            LocationType::GasStation => "Posto",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FuelingRecord {
    pub id: Uuid,
    pub driver_id: Uuid,
    pub vehicle_id: Uuid,
    pub date: NaiveDate,
    pub location_type: LocationType,
    pub gas_station_name: Option<String>,
    pub current_km: Decimal,
    pub liters_diesel: Decimal,
    pub liters_arla: Decimal,
    pub photos: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl OwnedRecord for FuelingRecord {
    fn driver_id(&self) -> Uuid {
        self.driver_id
    }

    fn date(&self) -> NaiveDate {
        self.date
    }
}
