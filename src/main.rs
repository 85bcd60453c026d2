use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use vehicle_reservation::config::environment::EnvironmentConfig;
use vehicle_reservation::database::{connection, seed};
use vehicle_reservation::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("🚗 Sistema de Reservas de Vehículos");
    info!("===================================");

    // La configuración falla en el arranque si falta JWT_SECRET
    let config = EnvironmentConfig::from_env();

    // Inicializar base de datos
    let pool = match connection::create_pool(None).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    connection::run_migrations(&pool).await?;
    info!("✅ Schema de base de datos listo");

    // Datos por defecto: cuenta admin y flota inicial
    seed::seed_default_admin(&pool, &config).await?;
    seed::seed_default_vehicules(&pool).await?;

    let addr: SocketAddr = config.server_addr().parse()?;
    let state = AppState::new(pool, config);
    let app = vehicle_reservation::app(state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /api/health - Health check");
    info!("🔐 Auth:");
    info!("   POST /api/auth/register - Registro de usuario");
    info!("   POST /api/auth/login - Login");
    info!("   GET  /api/auth/me - Usuario conectado");
    info!("   PUT  /api/auth/password - Cambiar contraseña");
    info!("   PUT  /api/auth/status/:id - Cambiar estado de cuenta (admin)");
    info!("   GET  /api/auth/users - Listar usuarios (admin)");
    info!("🚗 Vehículos:");
    info!("   GET  /api/vehicules - Listar vehículos");
    info!("   GET  /api/vehicules/:id - Obtener vehículo");
    info!("   POST /api/vehicules/create - Crear vehículo (admin)");
    info!("   PUT  /api/vehicules/update/:id - Actualizar vehículo (admin)");
    info!("   PUT  /api/vehicules/status/:id - Cambiar estado (admin)");
    info!("   DELETE /api/vehicules/delete/:id - Eliminar vehículo (admin)");
    info!("📅 Reservas:");
    info!("   POST /api/reservations/create - Crear reserva");
    info!("   GET  /api/reservations/user - Mis reservas");
    info!("   PUT  /api/reservations/cancel/:id - Anular reserva");
    info!("   PUT  /api/reservations/approve/:id - Aprobar reserva (admin)");
    info!("   PUT  /api/reservations/disapprove/:id - Desaprobar reserva (admin)");
    info!("   GET  /api/reservations/all - Todas las reservas (admin)");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Servidor terminado");
    Ok(())
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
