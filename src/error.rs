//! Fatal server errors surfaced from `main`.

/// Errors that abort server startup or shutdown.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// An environment variable held a value that could not be parsed.
    #[error("invalid {var}: {value:?}")]
    InvalidEnv { var: &'static str, value: String },

    /// `[package.metadata.leptos]` is missing or malformed.
    #[error("leptos configuration: {0}")]
    LeptosConfig(String),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}
