use sqlx::PgPool;
use uuid::Uuid;

use crate::models::gas_station::GasStation;
use crate::schema::GasStationInput;
use crate::utils::errors::AppError;

pub struct GasStationRepository {
    pool: PgPool,
}

impl GasStationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_active(&self) -> Result<Vec<GasStation>, AppError> {
        let stations = sqlx::query_as::<_, GasStation>(
            "SELECT * FROM gas_stations WHERE is_active = TRUE ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(stations)
    }

    pub async fn name_exists(&self, name: &str) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM gas_stations WHERE LOWER(name) = LOWER($1))",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    pub async fn create(&self, input: &GasStationInput) -> Result<GasStation, AppError> {
        let station = sqlx::query_as::<_, GasStation>(
            r#"
            INSERT INTO gas_stations (id, name, address)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&input.name)
        .bind(&input.address)
        .fetch_one(&self.pool)
        .await?;

        Ok(station)
    }
}
