//! Startup and serve errors for the host process.

/// Anything that stops the server from starting or keeps it from serving.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// An environment variable held an unusable value.
    #[error("config: {0}")]
    Config(String),

    /// The Leptos site options could not be loaded.
    #[error("leptos configuration: {0}")]
    Leptos(String),

    /// The listener could not bind.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// The accept loop ended with an error.
    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}
