//! Resolución de sesión
//!
//! Deriva rol y nombre visible a partir de los datos de sesión del proveedor.
//! La cadena de respaldo es determinista y total: nunca falla.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;

use crate::models::auth::SessionPayload;
use crate::models::{Identity, Role};

/// Nombre cuando no hay nombre ni email
pub const UNKNOWN_USER_NAME: &str = "Usuário";

pub fn resolve_session(payload: &SessionPayload) -> Identity {
    let role = Role::from_claim(payload.metadata_str("role"));
    let email = payload
        .email
        .as_deref()
        .map(str::trim)
        .filter(|e| !e.is_empty());

    let display_name = payload
        .metadata_str("full_name")
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .or(email)
        .unwrap_or(UNKNOWN_USER_NAME)
        .to_string();

    Identity {
        id: payload.user_id,
        display_name,
        email: email.map(str::to_string),
        role,
    }
}

/// El rol guardado en `user_roles` manda sobre el de los metadatos, que el
/// propio usuario puede editar. Sin fila se mantiene la cadena de respaldo.
pub fn with_stored_role(identity: Identity, stored: Option<Role>) -> Identity {
    match stored {
        Some(role) if role != identity.role => {
            tracing::warn!(
                user_id = %identity.id,
                claimed = %identity.role,
                stored = %role,
                "⚠️ Rol de los metadatos difiere del almacenado"
            );
            Identity { role, ..identity }
        }
        Some(role) => Identity { role, ..identity },
        None => identity,
    }
}

/// Origen de la notificación de sesión
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionSource {
    InitialFetch,
    StateChange,
}

#[derive(Debug, Clone)]
pub struct SessionEvent {
    pub source: SessionSource,
    /// `None` = sin sesión (logout o sesión expirada)
    pub session: Option<SessionPayload>,
    pub observed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SessionState {
    pub identity: Option<Identity>,
    pub observed_at: Option<DateTime<Utc>>,
    pub loading: bool,
}

/// Estado de sesión alimentado por dos fuentes que pueden competir
/// (consulta inicial y notificación de cambio).
///
/// Un evento estrictamente más viejo que el actual se descarta; con la misma
/// marca de tiempo se sobrescribe con el mismo dato. El estado final no
/// depende del orden de llegada.
#[derive(Debug)]
pub struct SessionStore {
    state: RwLock<SessionState>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(SessionState {
                loading: true,
                ..Default::default()
            }),
        }
    }

    /// Aplica el evento y devuelve el estado resultante
    pub async fn apply(&self, event: SessionEvent) -> SessionState {
        let mut state = self.state.write().await;

        if let Some(current) = state.observed_at {
            if event.observed_at < current {
                tracing::debug!(
                    source = ?event.source,
                    "Evento de sesión obsoleto descartado"
                );
                state.loading = false;
                return state.clone();
            }
        }

        state.identity = event.session.as_ref().map(resolve_session);
        state.observed_at = Some(event.observed_at);
        state.loading = false;
        state.clone()
    }

    pub async fn snapshot(&self) -> SessionState {
        self.state.read().await.clone()
    }

    pub async fn current(&self) -> Option<Identity> {
        self.state.read().await.identity.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use serde_json::json;
    use uuid::Uuid;

    fn payload(metadata: serde_json::Value, email: Option<&str>) -> SessionPayload {
        SessionPayload {
            user_id: Uuid::new_v4(),
            email: email.map(String::from),
            metadata: metadata.as_object().cloned().unwrap_or_default(),
        }
    }

    #[test]
    fn test_fallback_chain() {
        let full = resolve_session(&payload(
            json!({ "full_name": "João Silva", "role": "supervisor" }),
            Some("joao@frota.com"),
        ));
        assert_eq!(full.display_name, "João Silva");
        assert_eq!(full.role, Role::Supervisor);

        let email_only = resolve_session(&payload(json!({}), Some("maria@frota.com")));
        assert_eq!(email_only.display_name, "maria@frota.com");
        assert_eq!(email_only.role, Role::Driver);

        let nothing = resolve_session(&payload(json!({ "full_name": "  " }), None));
        assert_eq!(nothing.display_name, UNKNOWN_USER_NAME);
    }

    #[test]
    fn test_stored_role_wins_over_metadata() {
        let claimed = resolve_session(&payload(
            json!({ "full_name": "Pedro", "role": "admin" }),
            Some("pedro@frota.com"),
        ));
        assert_eq!(claimed.role, Role::Admin);

        let identity = with_stored_role(claimed.clone(), Some(Role::Driver));
        assert_eq!(identity.role, Role::Driver);
        assert_eq!(identity.display_name, "Pedro");
        assert_eq!(identity.id, claimed.id);

        let without_row = with_stored_role(claimed, None);
        assert_eq!(without_row.role, Role::Admin);
    }

    #[test]
    fn test_unknown_role_is_driver() {
        let identity = resolve_session(&payload(json!({ "role": "root" }), None));
        assert_eq!(identity.role, Role::Driver);

        let non_string = resolve_session(&payload(json!({ "role": 7 }), None));
        assert_eq!(non_string.role, Role::Driver);
    }

    #[tokio::test]
    async fn test_same_payload_twice_is_idempotent() {
        let store = SessionStore::new();
        let session = payload(json!({ "full_name": "Ana", "role": "admin" }), None);
        let now = Utc::now();

        let first = store
            .apply(SessionEvent {
                source: SessionSource::InitialFetch,
                session: Some(session.clone()),
                observed_at: now,
            })
            .await;
        let second = store
            .apply(SessionEvent {
                source: SessionSource::StateChange,
                session: Some(session),
                observed_at: now,
            })
            .await;

        assert_eq!(first, second);
        assert!(!second.loading);
        assert_eq!(second.identity.unwrap().role, Role::Admin);
    }

    #[tokio::test]
    async fn test_converges_regardless_of_order() {
        let older = Utc::now();
        let newer = older + Duration::seconds(5);
        let stale = payload(json!({ "full_name": "Antigo" }), None);
        let fresh = payload(json!({ "full_name": "Novo" }), None);

        let in_order = SessionStore::new();
        in_order
            .apply(SessionEvent {
                source: SessionSource::InitialFetch,
                session: Some(stale.clone()),
                observed_at: older,
            })
            .await;
        in_order
            .apply(SessionEvent {
                source: SessionSource::StateChange,
                session: Some(fresh.clone()),
                observed_at: newer,
            })
            .await;

        let reversed = SessionStore::new();
        reversed
            .apply(SessionEvent {
                source: SessionSource::StateChange,
                session: Some(fresh),
                observed_at: newer,
            })
            .await;
        reversed
            .apply(SessionEvent {
                source: SessionSource::InitialFetch,
                session: Some(stale),
                observed_at: older,
            })
            .await;

        assert_eq!(in_order.snapshot().await, reversed.snapshot().await);
        assert_eq!(reversed.current().await.unwrap().display_name, "Novo");
    }

    #[tokio::test]
    async fn test_sign_out_clears_identity() {
        let store = SessionStore::new();
        assert!(store.snapshot().await.loading);

        let now = Utc::now();
        store
            .apply(SessionEvent {
                source: SessionSource::InitialFetch,
                session: Some(payload(json!({}), Some("a@b.com"))),
                observed_at: now,
            })
            .await;
        store
            .apply(SessionEvent {
                source: SessionSource::StateChange,
                session: None,
                observed_at: now + Duration::seconds(1),
            })
            .await;

        assert!(store.current().await.is_none());
    }
}
