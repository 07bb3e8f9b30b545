use tokio::{net::TcpListener, signal};
use thiserror::Error;
use tracing::{info, warn};
use utils_trace::TraceConfig;
use projects_news::{
	config::{Config, ConfigError},
	db::{build_pool, setup, BuildPoolError, PgPool},
	endpoints::router,
};

#[derive(Debug, Error)]
pub enum MainError {
	#[error("Config: {source}")]
	Config {
		#[source]
		source: ConfigError,
	},
	#[error("TracingInit: {source}")]
	TracingInit {
		#[source]
		source: utils_trace::TracingInitError,
	},
	#[error("BuildPool: {source}")]
	BuildPool {
		#[source]
		source: BuildPoolError,
	},
	#[error("GetConnectionFromPool: {source}")]
	GetConnectionFromPool {
		#[source]
		source: r2d2::Error,
	},
	#[error("Setup: {source}")]
	Setup {
		#[source]
		source: setup::SetupError,
	},
	#[error("SetupTask: {source}")]
	SetupTask {
		#[source]
		source: tokio::task::JoinError,
	},
	#[error("TcpListenerBind: {source}")]
	TcpListenerBind {
		#[source]
		source: std::io::Error,
	},
	#[error("Serve: {source}")]
	Serve {
		#[source]
		source: std::io::Error,
	},
}

#[tokio::main]
async fn main() -> Result<(), MainError> {
	let config = Config::from_env()
		.map_err(|source| MainError::Config { source })?;

	utils_trace::init(&TraceConfig { level: config.log_level.clone(), ..TraceConfig::default() })
		.map_err(|source| MainError::TracingInit { source })?;

	let pool = build_pool(&config.database_url, &config.pool)
		.map_err(|source| MainError::BuildPool { source })?;

	prepare_database(pool.clone(), config.seed_enabled()).await?;

	let app = router(pool);

	let addr = config.socket_addr();
	let listener = TcpListener::bind(addr)
		.await
		.map_err(|source| MainError::TcpListenerBind { source })?;

	info!("Server running on addr: {}", addr);

	axum::serve(listener, app)
		.with_graceful_shutdown(shutdown_signal())
		.await
		.map_err(|source| MainError::Serve { source })?;

	info!("Server stopped");
	Ok(())
}

/// Creates missing tables, or resets and seeds the database outside production.
async fn prepare_database(pool: PgPool, seed: bool) -> Result<(), MainError> {
	tokio::task::spawn_blocking(move || {
		let mut conn = pool.get()
			.map_err(|source| MainError::GetConnectionFromPool { source })?;
		let prepared = if seed {
			setup::reset_with_seed(&mut conn)
		} else {
			setup::create_schema(&mut conn)
		};
		prepared.map_err(|source| MainError::Setup { source })
	})
	.await
	.map_err(|source| MainError::SetupTask { source })?
}

async fn shutdown_signal() {
	let ctrl_c = async {
		if let Err(err) = signal::ctrl_c().await {
			warn!("Failed to listen for Ctrl+C: {err}");
			std::future::pending::<()>().await;
		}
		info!("Received Ctrl+C, shutting down");
	};

	#[cfg(unix)]
	let terminate = async {
		match signal::unix::signal(signal::unix::SignalKind::terminate()) {
			Ok(mut stream) => {
				stream.recv().await;
				info!("Received terminate signal, shutting down");
			}
			Err(err) => {
				warn!("Failed to install terminate handler: {err}");
				std::future::pending::<()>().await;
			}
		}
	};

	#[cfg(not(unix))]
	let terminate = std::future::pending::<()>();

	tokio::select! {
		_ = ctrl_c => {},
		_ = terminate => {},
	}
}
