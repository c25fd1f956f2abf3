use sqlx::PgPool;

use super::access::deny;
use crate::dto::ApiResponse;
use crate::models::gas_station::GasStation;
use crate::models::Identity;
use crate::policy::can_manage_fleet;
use crate::repositories::GasStationRepository;
use crate::schema::{validate_gas_station, GasStationInput};
use crate::utils::errors::{AppError, AppResult};

pub struct GasStationController {
    repository: GasStationRepository,
}

impl GasStationController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: GasStationRepository::new(pool),
        }
    }

    pub async fn list(&self) -> AppResult<Vec<GasStation>> {
        self.repository.list_active().await
    }

    pub async fn create(
        &self,
        actor: &Identity,
        input: GasStationInput,
    ) -> AppResult<ApiResponse<GasStation>> {
        if !can_manage_fleet(actor) {
            return Err(deny(actor, "gerenciar postos"));
        }
        let valid = validate_gas_station(&input)?;
        if self.repository.name_exists(&valid.name).await? {
            return Err(AppError::Conflict("Posto já cadastrado".to_string()));
        }

        let station = self.repository.create(&valid).await?;
        Ok(ApiResponse::success_with_message(
            station,
            "Posto cadastrado com sucesso",
        ))
    }
}
