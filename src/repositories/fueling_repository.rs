use sqlx::PgPool;
use uuid::Uuid;

use super::scope_ids;
use crate::dto::RecordFilter;
use crate::models::FuelingRecord;
use crate::policy::RecordScope;
use crate::schema::ValidFueling;
use crate::utils::errors::AppError;

const COLUMNS: &str = r#"
    id, driver_id, vehicle_id, date, location_type, gas_station_name,
    current_km, liters_diesel, liters_arla,
    COALESCE(photos, '{}') AS photos,
    created_at, updated_at
"#;

pub struct FuelingRepository {
    pool: PgPool,
}

impl FuelingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(
        &self,
        scope: &RecordScope,
        filter: &RecordFilter,
    ) -> Result<Vec<FuelingRecord>, AppError> {
        let sql = format!(
            r#"
            SELECT {COLUMNS} FROM fueling_records
            WHERE ($1::uuid[] IS NULL OR driver_id = ANY($1))
              AND ($2::uuid IS NULL OR driver_id = $2)
              AND ($3::uuid IS NULL OR vehicle_id = $3)
              AND ($4::date IS NULL OR date >= $4)
              AND ($5::date IS NULL OR date <= $5)
            ORDER BY date DESC, created_at DESC
            "#
        );

        let records = sqlx::query_as::<_, FuelingRecord>(&sql)
            .bind(scope_ids(scope))
            .bind(filter.driver_id)
            .bind(filter.vehicle_id)
            .bind(filter.from)
            .bind(filter.to)
            .fetch_all(&self.pool)
            .await?;

        Ok(records)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<FuelingRecord>, AppError> {
        let sql = format!("SELECT {COLUMNS} FROM fueling_records WHERE id = $1");
        let record = sqlx::query_as::<_, FuelingRecord>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(record)
    }

    pub async fn create(
        &self,
        driver_id: Uuid,
        input: &ValidFueling,
    ) -> Result<FuelingRecord, AppError> {
        let sql = format!(
            r#"
            INSERT INTO fueling_records
                (id, driver_id, vehicle_id, date, location_type, gas_station_name,
                 current_km, liters_diesel, liters_arla, photos)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {COLUMNS}
            "#
        );

        let record = sqlx::query_as::<_, FuelingRecord>(&sql)
            .bind(Uuid::new_v4())
            .bind(driver_id)
            .bind(input.vehicle_id)
            .bind(input.date)
            .bind(input.location_type)
            .bind(&input.gas_station_name)
            .bind(input.current_km)
            .bind(input.liters_diesel)
            .bind(input.liters_arla)
            .bind(input.photos.as_slice())
            .fetch_one(&self.pool)
            .await?;

        Ok(record)
    }

    pub async fn update(&self, id: Uuid, input: &ValidFueling) -> Result<FuelingRecord, AppError> {
        let sql = format!(
            r#"
            UPDATE fueling_records
            SET vehicle_id = $2, date = $3, location_type = $4, gas_station_name = $5,
                current_km = $6, liters_diesel = $7, liters_arla = $8, photos = $9,
                updated_at = NOW()
            WHERE id = $1
            RETURNING {COLUMNS}
            "#
        );

        let record = sqlx::query_as::<_, FuelingRecord>(&sql)
            .bind(id)
            .bind(input.vehicle_id)
            .bind(input.date)
            .bind(input.location_type)
            .bind(&input.gas_station_name)
            .bind(input.current_km)
            .bind(input.liters_diesel)
            .bind(input.liters_arla)
            .bind(input.photos.as_slice())
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Abastecimento não encontrado".to_string()))?;

        Ok(record)
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM fueling_records WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
