//! Services module
//!
//! Este módulo contiene la lógica de negocio y servicios de la aplicación:
//! verificación de tokens, resolución de sesión, cliente del proveedor de
//! autenticación y agregaciones de reportes.

pub mod auth_client;
pub mod auth_service;
pub mod report_service;
pub mod session_service;

pub use auth_client::{AuthClient, AuthFailure, AuthProvider};
pub use auth_service::AuthService;
pub use session_service::{
    resolve_session, with_stored_role, SessionEvent, SessionSource, SessionState, SessionStore,
};
