use axum::http::StatusCode;
use axum::routing;
use axum::Router;
use tokio::net::TcpListener;

// ───── Current Crate Imports ────────────────────────────────────────────── //

use crate::configuration::Settings;
use crate::domain::Uptime;
use crate::error_chain_fmt;
use crate::routes::greeting;
use crate::routes::health_check;
use crate::routes::home;

// ───── Body ─────────────────────────────────────────────────────────────── //

/// This is a central type of our codebase. `Application` type builds server
/// for both production and testing purposes.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

/// Shareable type, we insert it to the main `Router` as state,
/// at the launch stage. Read-only after that.
#[derive(Clone, Debug)]
pub struct AppState {
    pub uptime: Uptime,
}

#[derive(thiserror::Error)]
pub enum StartupError {
    #[error("Failed to bind {addr}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to read the bound address")]
    LocalAddr(#[source] std::io::Error),
}

impl std::fmt::Debug for StartupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl Application {
    /// Build a new server.
    ///
    /// The uptime clock starts here. Binding happens immediately, so a busy
    /// port is reported before anything is served.
    pub async fn build(
        configuration: Settings,
    ) -> Result<Application, StartupError> {
        Self::build_with_uptime(configuration, Uptime::start()).await
    }

    /// Same as [`Application::build`], but uptime is counted from `uptime`.
    /// The binary starts that clock before anything else runs.
    pub async fn build_with_uptime(
        configuration: Settings,
        uptime: Uptime,
    ) -> Result<Application, StartupError> {
        let addr = configuration.address();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|source| StartupError::Bind { addr, source })?;
        let port = listener
            .local_addr()
            .map_err(StartupError::LocalAddr)?
            .port();

        tracing::info!("Hello World API server running on port {}", port);
        tracing::info!("Visit: http://localhost:{}", port);

        let router = Self::build_router(AppState { uptime });

        Ok(Self {
            port,
            listener,
            router,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// This function only returns when the application is stopped.
    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        tracing::info!("Server stopped");
        Ok(())
    }

    /// Unmatched paths fall through to axum's default 404. A known path
    /// requested with a method other than GET is unmatched as well, so it
    /// gets the same 404 instead of a 405.
    fn build_router(app_state: AppState) -> Router {
        Router::new()
            .route("/", routing::get(home).fallback(not_found))
            .route("/health", routing::get(health_check).fallback(not_found))
            .route("/hello/:name", routing::get(greeting).fallback(not_found))
            .with_state(app_state)
    }
}

async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

/// Resolves on Ctrl-C, or on SIGTERM for unix targets.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl-C, shutting down"),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}

// ───── Unit tests ───────────────────────────────────────────────────────── //
