use thiserror::Error;

use crate::config::ConfigError;

/// Errors that can abort server startup
#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to install metrics recorder: {0}")]
    Metrics(String),

    #[error("HTTP server error: {0}")]
    Serve(#[source] std::io::Error),
}
