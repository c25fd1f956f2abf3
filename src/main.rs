use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use fleet_control::config::database::mask_database_url;
use fleet_control::config::{DatabaseConfig, EnvironmentConfig};
use fleet_control::create_app;
use fleet_control::services::AuthClient;
use fleet_control::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("🚌 Fleet Control API");
    info!("====================");

    let config = EnvironmentConfig::from_env().map_err(|e| {
        error!("❌ Configuración inválida: {}", e);
        anyhow::anyhow!(e)
    })?;

    // Inicializar base de datos
    info!("🗄️ Conectando a {}", mask_database_url(&config.database_url));
    let pool = match DatabaseConfig::new(&config.database_url).create_pool().await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };
    sqlx::migrate!("./migrations").run(&pool).await?;
    info!("✅ Migraciones aplicadas");

    let auth_client = AuthClient::new(&config.auth_url, &config.auth_anon_key)?;
    let addr: SocketAddr = config.server_url().parse()?;
    if config.is_development() && config.cors_origins.is_empty() {
        info!("⚠️ CORS permisivo (sin CORS_ORIGINS)");
    }

    let app_state = AppState::new(pool, config, Arc::new(auth_client));
    let app = create_app(app_state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health");
    info!("   POST /api/auth/sign-in | /api/auth/sign-up");
    info!("   GET  /api/session/me | /api/navigation");
    info!("   CRUD /api/kilometers | /api/fueling");
    info!("   CRUD /api/vehicles | /api/gas-stations | /api/supervisor-assignments");
    info!("   GET  /api/drivers | /api/reports/monthly | /api/dashboard/stats");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            e
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo escuchar Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo escuchar SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
