use thiserror::Error;

/// Client-side failure taxonomy.
///
/// Every operation surfaces one of these variants; nothing is swallowed. The
/// distinction matters to callers: `AlreadyExists` (the user already liked) is
/// a normal condition a UI handles quietly, while `InsufficientFunds` means
/// the wallet must be topped up before retrying.
#[derive(Debug, Error)]
pub enum ClientError {
    /// A record or account with the same deterministic identity already
    /// exists. Never retried: the same inputs produce the same identity.
    #[error("already exists: {0}")]
    AlreadyExists(String),

    /// The payer cannot cover the fee or transaction cost.
    #[error("insufficient funds: {0}")]
    InsufficientFunds(String),

    /// A referenced record or account is absent.
    #[error("not found: {0}")]
    NotFound(String),

    /// Input rejected before submission (empty or over-long fields, malformed
    /// documents at the read boundary).
    #[error("validation error: {0}")]
    Validation(String),

    /// The user has no bolts left for the current day window.
    #[error("daily like quota exhausted")]
    QuotaExhausted,

    /// Submission or confirmation failed for reasons unrelated to protocol
    /// logic. The whole operation may be retried from scratch.
    #[error("transient error: {0}")]
    Transient(String),
}

pub type Result<T> = std::result::Result<T, ClientError>;
