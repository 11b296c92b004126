use thiserror::Error;

/// Result type for Monoprice zone operations
pub type Result<T> = std::result::Result<T, MonopriceError>;

/// Errors that can occur while configuring or driving Monoprice zones
#[derive(Error, Debug)]
pub enum MonopriceError {
    /// Configuration is missing the `host` or `port` key
    #[error("Invalid config. Expected host and port")]
    MissingHostOrPort,

    /// Configuration contains a malformed entry
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Raw configuration text is not valid JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error reported by the controller transport
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Controller connection was closed
    #[error("Connection closed")]
    ConnectionClosed,

    /// Controller did not answer in time
    #[error("Request timeout")]
    Timeout,

    /// Controller rejected a command
    #[error("Controller error: {detail}")]
    Controller {
        /// Error detail reported by the controller client
        detail: String,
    },
}
