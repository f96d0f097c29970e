#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Protocol error: {0}")]
    Protocol(String),

    #[error("Missing DOM element: {0}")]
    DomMissing(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
