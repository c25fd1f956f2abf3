//! Modelo de registro de quilometragem
//!
//! Mapea a la tabla `kilometer_records`. `km_total` nunca se recibe del
//! cliente: siempre se deriva de `km_end - km_start`.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::policy::OwnedRecord;

/// Par de lecturas del odómetro con `km_end > km_start` garantizado
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MileageReading {
    km_start: Decimal,
    km_end: Decimal,
}

impl MileageReading {
    /// Devuelve `None` si `km_end` no es estrictamente mayor que `km_start`
    pub fn new(km_start: Decimal, km_end: Decimal) -> Option<Self> {
        (km_end > km_start).then_some(Self { km_start, km_end })
    }

    pub fn km_start(&self) -> Decimal {
        self.km_start
    }

    pub fn km_end(&self) -> Decimal {
        self.km_end
    }

    pub fn km_total(&self) -> Decimal {
        self.km_end - self.km_start
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MileageRecord {
    pub id: Uuid,
    pub driver_id: Uuid,
    pub vehicle_id: Uuid,
    pub date: NaiveDate,
    pub km_start: Decimal,
    pub km_end: Decimal,
    pub km_total: Decimal,
    pub observations: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MileageRecord {
    /// Sustituye ambas lecturas y recalcula `km_total` en el mismo paso
    pub fn apply_reading(&mut self, reading: MileageReading) {
        self.km_start = reading.km_start();
        self.km_end = reading.km_end();
        self.km_total = reading.km_total();
    }
}

impl OwnedRecord for MileageRecord {
    fn driver_id(&self) -> Uuid {
        self.driver_id
    }

    fn date(&self) -> NaiveDate {
        self.date
    }
}
