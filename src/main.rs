use anyhow::Result;
use axum::{response::Json, routing::get, Router};
use dotenvy::dotenv;
use serde_json::json;
use std::net::SocketAddr;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use gestion_estudiantes::config::environment::EnvironmentConfig;
use gestion_estudiantes::database::DatabaseConnection;
use gestion_estudiantes::middleware::cors::{cors_middleware, cors_middleware_with_origins};
use gestion_estudiantes::routes;
use gestion_estudiantes::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🎓 Gestión de Estudiantes - API REST");
    info!("====================================");

    let config = EnvironmentConfig::default();

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::new_default().await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    // Crear tablas y constraints si no existen
    if let Err(e) = db_connection.run_migrations().await {
        error!("❌ Error preparando el esquema: {}", e);
        return Err(anyhow::anyhow!("Error de esquema: {}", e));
    }

    let pool = db_connection.pool().clone();

    // CORS restringido en producción, permisivo en desarrollo
    let cors = if config.is_production() {
        cors_middleware_with_origins(config.cors_origins.clone())
    } else {
        cors_middleware()
    };

    // Crear router de la API
    let app_state = AppState::new(pool, config.clone());

    let app = Router::new()
        .route("/test", get(test_endpoint))
        .merge(routes::create_api_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state);

    let addr: SocketAddr = config.server_url().parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /test - Endpoint de prueba");
    info!("🏫 Endpoints - Paralelos:");
    info!("   GET    /api/paralelos - Listar paralelos");
    info!("   POST   /api/paralelos - Crear paralelo");
    info!("   GET    /api/paralelos/:id - Obtener paralelo");
    info!("   PUT    /api/paralelos/:id - Actualizar paralelo");
    info!("   DELETE /api/paralelos/:id - Eliminar paralelo");
    info!("🧑 Endpoints - Estudiantes:");
    info!("   GET    /api/estudiantes - Listar estudiantes (con paralelo)");
    info!("   POST   /api/estudiantes - Crear estudiante");
    info!("   GET    /api/estudiantes/:id - Obtener estudiante (con paralelo)");
    info!("   PUT    /api/estudiantes/:id - Actualizar estudiante");
    info!("   DELETE /api/estudiantes/:id - Eliminar estudiante");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Endpoint de prueba simple
async fn test_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "message": "API de Gestión de Estudiantes funcionando correctamente",
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
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
