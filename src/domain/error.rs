#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Invalid amount")]
    InvalidAmount,

    #[error("Amount exceeds allowable limit")]
    AmountExceedsLimit,

    #[error("Insufficient funds")]
    InsufficientFunds,

    #[error("Ingestion failed with: {0}")]
    Ingestion(String),
}

impl Error {
    /// Recoverable errors are reported and the session carries on;
    /// anything else ends it.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Error::Io(_))
    }
}
