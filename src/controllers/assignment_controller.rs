use sqlx::PgPool;
use uuid::Uuid;

use super::access::{deny, RecordAccess};
use crate::dto::ApiResponse;
use crate::models::{Identity, SupervisorAssignment, UserProfile};
use crate::policy::{can_manage_users, has_capability, Capability};
use crate::repositories::{AssignmentRepository, UserRepository};
use crate::schema::{validate_assignment, AssignmentInput};
use crate::utils::errors::{not_found_error, AppError, AppResult};

pub struct AssignmentController {
    repository: AssignmentRepository,
    users: UserRepository,
    access: RecordAccess,
}

impl AssignmentController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: AssignmentRepository::new(pool.clone()),
            users: UserRepository::new(pool.clone()),
            access: RecordAccess::new(pool),
        }
    }

    pub async fn list(&self, actor: &Identity) -> AppResult<Vec<SupervisorAssignment>> {
        if !can_manage_users(actor) {
            return Err(deny(actor, "gerenciar supervisões"));
        }
        self.repository.list().await
    }

    pub async fn create(
        &self,
        actor: &Identity,
        input: AssignmentInput,
    ) -> AppResult<ApiResponse<SupervisorAssignment>> {
        if !can_manage_users(actor) {
            return Err(deny(actor, "gerenciar supervisões"));
        }

        let supervisor_role = self.users.role_of(input.supervisor_id).await?;
        let driver_role = self.users.role_of(input.driver_id).await?;
        validate_assignment(&input, supervisor_role, driver_role)?;

        if self.repository.exists(input.supervisor_id, input.driver_id).await? {
            return Err(AppError::Conflict(
                "Este motorista já está vinculado ao supervisor".to_string(),
            ));
        }

        let assignment = self.repository.create(&input).await?;
        tracing::info!(
            supervisor_id = %assignment.supervisor_id,
            driver_id = %assignment.driver_id,
            "🔗 Supervisão criada"
        );

        Ok(ApiResponse::success_with_message(
            assignment,
            "Motorista vinculado com sucesso",
        ))
    }

    pub async fn delete(&self, actor: &Identity, id: Uuid) -> AppResult<()> {
        if !can_manage_users(actor) {
            return Err(deny(actor, "gerenciar supervisões"));
        }
        if !self.repository.delete(id).await? {
            return Err(not_found_error("Vínculo", &id.to_string()));
        }
        Ok(())
    }

    /// Página "Motoristas": supervisor ve los suyos, admin todos
    pub async fn drivers(&self, actor: &Identity) -> AppResult<Vec<UserProfile>> {
        if has_capability(actor.role, Capability::ViewAllRecords) {
            return self.users.list_drivers(None).await;
        }
        if !has_capability(actor.role, Capability::ViewDrivers) {
            return Err(deny(actor, "ver motoristas"));
        }
        let supervision = self.access.supervision(actor).await?;
        let drivers = supervision.drivers_of(actor.id);
        self.users.list_drivers(Some(drivers.as_slice())).await
    }
}
