//! Test server harness.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use twist_judge::embedding::{SentenceConfig, SentenceEmbedder};
use twist_judge::gateway::{HandlerState, create_router_with_state};
use twist_judge::scoring::HybridScorer;

const STARTUP_WAIT_TIMEOUT_SECS: u64 = 5;
const STARTUP_POLL_INTERVAL_MS: u64 = 50;

/// Which embedder backs the spawned server.
#[derive(Debug, Clone, Default)]
pub enum TestEmbedder {
    /// Deterministic hashed bag of words.
    #[default]
    Stub,
    /// Every similarity query fails.
    Unavailable(String),
    /// Loaded from a model directory with the binary's startup fallback.
    ModelDir(PathBuf),
}

#[derive(Debug, Clone, Default)]
pub struct TestServerConfig {
    pub port: u16,
    pub embedder: TestEmbedder,
}

impl TestServerConfig {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            embedder: TestEmbedder::Unavailable(reason.into()),
            ..Default::default()
        }
    }

    pub fn model_dir(path: impl Into<PathBuf>) -> Self {
        Self {
            embedder: TestEmbedder::ModelDir(path.into()),
            ..Default::default()
        }
    }
}

pub struct TestServer {
    pub addr: SocketAddr,
    _server_handle: JoinHandle<()>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl TestServer {
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

pub async fn wait_for_server_ready(
    addr: SocketAddr,
    timeout: Duration,
    interval: Duration,
) -> Result<(), ServerStartupError> {
    let start = std::time::Instant::now();

    loop {
        if start.elapsed() > timeout {
            return Err(ServerStartupError::Timeout);
        }

        match tokio::net::TcpStream::connect(addr).await {
            Ok(_) => return Ok(()),
            Err(_) => {
                tokio::time::sleep(interval).await;
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ServerStartupError {
    #[error("Server failed to start within timeout")]
    Timeout,
    #[error("Failed to bind to address: {0}")]
    BindError(#[from] std::io::Error),
    #[error("Server startup failed: {0}")]
    StartupFailed(String),
}

/// Spawns a server on localhost with the default scoring policy.
///
/// No model files are needed: the embedder is the stub, permanently unavailable, or loaded from
/// a directory through [`SentenceEmbedder::load_or_unavailable`] like the binary does.
pub async fn spawn_test_server(config: TestServerConfig) -> Result<TestServer, ServerStartupError> {
    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    let listener = TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;

    let embedder = match config.embedder {
        TestEmbedder::Stub => SentenceEmbedder::stub()
            .map_err(|e| ServerStartupError::StartupFailed(e.to_string()))?,
        TestEmbedder::Unavailable(reason) => SentenceEmbedder::unavailable(reason),
        TestEmbedder::ModelDir(path) => {
            SentenceEmbedder::load_or_unavailable(SentenceConfig::new(path))
        }
    };
    let mode = embedder.mode();

    let scorer = Arc::new(HybridScorer::new(embedder));
    let app = create_router_with_state(HandlerState::new(scorer, mode));

    let (shutdown_tx, shutdown_rx) = oneshot::channel();

    let server_handle = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            })
            .await
            .unwrap();
    });

    wait_for_server_ready(
        local_addr,
        Duration::from_secs(STARTUP_WAIT_TIMEOUT_SECS),
        Duration::from_millis(STARTUP_POLL_INTERVAL_MS),
    )
    .await?;

    Ok(TestServer {
        addr: local_addr,
        _server_handle: server_handle,
        shutdown_tx: Some(shutdown_tx),
    })
}
