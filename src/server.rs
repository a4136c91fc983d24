//! Reusable catalog server runtime.
//!
//! Provides [`ServerHandle`] that encapsulates the server lifecycle:
//! catalog seeding, metrics, REST API and graceful shutdown.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing::{error, info, warn};

use crate::application::CatalogService;
use crate::config::AppConfig;
use crate::infrastructure::InMemoryItemRepository;
use crate::interfaces::http::{create_api_router, ApiState};
use crate::support::errors::ServerError;
use crate::support::shutdown::{ShutdownCoordinator, ShutdownSignal};

// ── ServerHandle ───────────────────────────────────────────────────

/// Handle to a running catalog service.
///
/// # Examples
///
/// ```rust,no_run
/// use catalog::config::AppConfig;
/// use catalog::server::ServerHandle;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let handle = ServerHandle::start(AppConfig::default()).await?;
///     handle.install_signal_handler();
///     handle.wait().await;
///     Ok(())
/// }
/// ```
pub struct ServerHandle {
    /// Query engine shared by all request handlers.
    pub catalog: Arc<CatalogService>,
    /// The configuration the server was started with.
    pub config: AppConfig,

    local_addr: SocketAddr,
    shutdown: ShutdownCoordinator,
    api_task: tokio::task::JoinHandle<()>,
}

impl ServerHandle {
    /// Start the catalog service.
    ///
    /// This will:
    /// 1. Install the Prometheus metrics recorder (once per process)
    /// 2. Generate the immutable item catalog
    /// 3. Bind the REST API listener and start serving
    pub async fn start(config: AppConfig) -> Result<Self, ServerError> {
        config.validate()?;

        info!("Starting catalog service...");

        let prometheus_handle = prometheus_handle()?;

        // ── Catalog ────────────────────────────────────────────
        // Generated exactly once; read-only until the process exits.
        let repo = InMemoryItemRepository::seeded(config.catalog.item_count);
        let catalog = Arc::new(CatalogService::new(Arc::new(repo)));
        info!("📚 Catalog ready with {} items", catalog.item_count());

        // ── Shutdown coordinator ───────────────────────────────
        let shutdown = ShutdownCoordinator::new(config.server.shutdown_timeout);
        let shutdown_signal = shutdown.signal();

        // ── REST API server ────────────────────────────────────
        let api_router = create_api_router(ApiState::new(catalog.clone(), prometheus_handle));

        let api_addr = config.server.address();
        let listener = tokio::net::TcpListener::bind(&api_addr)
            .await
            .map_err(|source| ServerError::Bind {
                addr: api_addr.clone(),
                source,
            })?;
        let local_addr = listener.local_addr().map_err(ServerError::Serve)?;
        info!("REST API server listening on http://{}", local_addr);
        info!("Swagger UI available at http://{}/docs/", local_addr);

        let api_shutdown = shutdown_signal.clone();
        let api_server = axum::serve(
            listener,
            api_router.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(async move {
            api_shutdown.wait().await;
            info!("🛑 REST API server received shutdown signal");
        });

        let api_task = tokio::spawn(async move {
            if let Err(e) = api_server.await {
                error!("REST API server error: {}", e);
                // Unblock anyone waiting on the handle
                shutdown_signal.trigger();
            }
        });

        info!("🚀 Catalog service started.");

        Ok(Self {
            catalog,
            config,
            local_addr,
            shutdown,
            api_task,
        })
    }

    /// Address the REST API is bound to (resolves port 0).
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Get a cloneable shutdown signal.
    pub fn shutdown_signal(&self) -> ShutdownSignal {
        self.shutdown.signal()
    }

    /// Install OS signal listeners (SIGTERM, SIGINT) that trigger shutdown.
    pub fn install_signal_handler(&self) {
        self.shutdown.start_signal_listener();
    }

    /// Trigger graceful shutdown (non-blocking).
    pub fn trigger_shutdown(&self) {
        self.shutdown.signal().trigger();
    }

    /// Wait until shutdown is triggered, then give in-flight requests up to
    /// `server.shutdown_timeout` seconds to finish.
    pub async fn wait(self) {
        let api_task = self.api_task;
        let drained = self
            .shutdown
            .drain(async move {
                match api_task.await {
                    Ok(()) => info!("REST API server stopped"),
                    Err(e) => error!("REST API server task panicked: {}", e),
                }
            })
            .await;

        if !drained {
            warn!("Abandoning in-flight requests");
        }

        info!("👋 Catalog service shutdown complete");
    }

    /// Trigger shutdown and wait for completion.
    pub async fn shutdown(self) {
        info!("🛑 Shutting down catalog service...");
        self.trigger_shutdown();
        self.wait().await;
    }

    /// Check if the server is still running.
    pub fn is_running(&self) -> bool {
        !self.api_task.is_finished()
    }
}

// ── Helpers ────────────────────────────────────────────────────────

/// The global metrics recorder can only be installed once per process, so
/// a restart within the same process reuses the first handle. The lock is
/// held across the install so concurrent starts cannot both attempt it.
fn prometheus_handle() -> Result<PrometheusHandle, ServerError> {
    static PROM_HANDLE: Mutex<Option<PrometheusHandle>> = Mutex::new(None);

    let mut slot = PROM_HANDLE.lock().unwrap_or_else(|e| e.into_inner());
    if let Some(handle) = slot.as_ref() {
        return Ok(handle.clone());
    }

    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| ServerError::Metrics(e.to_string()))?;
    info!("📊 Prometheus metrics recorder installed");

    *slot = Some(handle.clone());
    Ok(handle)
}

/// Initialize tracing (logging) from the application config.
///
/// `RUST_LOG` takes precedence over `logging.level`. Call this once at
/// process startup (before [`ServerHandle::start`]).
pub fn init_tracing(config: &AppConfig) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level));

    match config.logging.format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpStream;

    fn test_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.server.host = "127.0.0.1".to_string();
        config.server.port = 0;
        config.server.shutdown_timeout = 5;
        config.catalog.item_count = 25;
        config
    }

    async fn http_get(addr: SocketAddr, path: &str) -> String {
        let mut stream = TcpStream::connect(addr).await.unwrap();
        let request = format!(
            "GET {} HTTP/1.1\r\nHost: {}\r\nConnection: close\r\n\r\n",
            path, addr
        );
        stream.write_all(request.as_bytes()).await.unwrap();

        let mut response = String::new();
        stream.read_to_string(&mut response).await.unwrap();
        response
    }

    #[tokio::test]
    async fn serves_requests_until_shutdown() {
        let handle = ServerHandle::start(test_config()).await.unwrap();
        let addr = handle.local_addr();
        assert_ne!(addr.port(), 0);
        assert_eq!(handle.catalog.item_count(), 25);

        let health = http_get(addr, "/health").await;
        assert!(health.starts_with("HTTP/1.1 200"), "{}", health);
        assert!(health.contains(r#""status":"ok""#));

        let items = http_get(addr, "/items?page=3&page_size=10").await;
        assert!(items.starts_with("HTTP/1.1 200"), "{}", items);
        assert!(items.contains(r#""total_items":25"#));
        assert!(items.contains(r#""total_pages":3"#));

        assert!(handle.is_running());
        tokio::time::timeout(Duration::from_secs(10), handle.shutdown())
            .await
            .expect("server should stop");
    }

    #[test]
    fn concurrent_recorder_installs_share_one_handle() {
        let threads: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(prometheus_handle))
            .collect();

        for thread in threads {
            assert!(thread.join().unwrap().is_ok());
        }
    }

    #[tokio::test]
    async fn invalid_config_is_rejected() {
        let mut config = test_config();
        config.catalog.item_count = 0;
        let err = ServerHandle::start(config).await.err().unwrap();
        assert!(matches!(err, ServerError::Config(_)));
    }
}
