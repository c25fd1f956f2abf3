//! Verificación del access token emitido por el proveedor de autenticación

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use uuid::Uuid;

use crate::models::auth::{AccessTokenClaims, SessionPayload};
use crate::models::Identity;
use crate::services::session_service::resolve_session;
use crate::utils::errors::{AppError, AppResult};

/// Servicio de autenticación: token → sesión → identidad
#[derive(Clone)]
pub struct AuthService {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl AuthService {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // el proveedor emite `aud = authenticated`; no se restringe aquí
        validation.validate_aud = false;

        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Valida firma y expiración; devuelve los datos de sesión
    pub fn verify(&self, token: &str) -> AppResult<SessionPayload> {
        let data = decode::<AccessTokenClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| AppError::Unauthorized(format!("Sessão inválida: {}", e)))?;

        let claims = data.claims;
        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| AppError::Unauthorized("Sessão inválida: sub".to_string()))?;

        Ok(SessionPayload {
            user_id,
            email: claims.email,
            metadata: claims.user_metadata,
        })
    }

    pub fn authenticate(&self, token: &str) -> AppResult<Identity> {
        let payload = self.verify(token)?;
        Ok(resolve_session(&payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use serde_json::json;

    const SECRET: &str = "test-secret";

    fn token(claims: serde_json::Value, secret: &str) -> String {
        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn exp() -> i64 {
        chrono::Utc::now().timestamp() + 3600
    }

    #[test]
    fn test_authenticate_valid_token() {
        let user_id = Uuid::new_v4();
        let service = AuthService::new(SECRET);
        let jwt = token(
            json!({
                "sub": user_id.to_string(),
                "email": "motorista@frota.com",
                "aud": "authenticated",
                "user_metadata": { "role": "driver", "full_name": "Carlos" },
                "exp": exp(),
            }),
            SECRET,
        );

        let identity = service.authenticate(&jwt).unwrap();
        assert_eq!(identity.id, user_id);
        assert_eq!(identity.role, Role::Driver);
        assert_eq!(identity.display_name, "Carlos");
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let service = AuthService::new(SECRET);
        let jwt = token(
            json!({ "sub": Uuid::new_v4().to_string(), "exp": exp() }),
            "other-secret",
        );
        assert!(matches!(service.verify(&jwt), Err(AppError::Unauthorized(_))));
    }

    #[test]
    fn test_expired_token_rejected() {
        let service = AuthService::new(SECRET);
        let jwt = token(
            json!({ "sub": Uuid::new_v4().to_string(), "exp": 1_000 }),
            SECRET,
        );
        assert!(service.verify(&jwt).is_err());
    }

    #[test]
    fn test_non_uuid_subject_rejected() {
        let service = AuthService::new(SECRET);
        let jwt = token(json!({ "sub": "u1", "exp": exp() }), SECRET);
        assert!(service.verify(&jwt).is_err());
    }
}
