use crate::algorithm::SignatureAlgorithm;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid key identifier: {0}")]
    InvalidKeyIdentifier(String),
    #[error("unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),
    #[error("response key id mismatch: expected {expected}, got {}", .actual.as_deref().unwrap_or("<none>"))]
    ResponseKeyMismatch {
        expected: String,
        actual: Option<String>,
    },
    #[error("invalid server response: missing {0}")]
    InvalidServerResponse(&'static str),
    #[error("signature verification failed")]
    VerificationFailed,
    #[error("key is not a remote key vault key")]
    InvalidKeyType,
    #[error("digest for {algorithm} must be {expected} bytes, got {actual}")]
    InvalidDigestLength {
        algorithm: SignatureAlgorithm,
        expected: usize,
        actual: usize,
    },
    #[error("signing method already registered: {0}")]
    DuplicateSigningMethod(String),
    #[error("malformed base64url data: {0}")]
    Decode(#[from] base64::DecodeError),
    #[error("reading message: {0}")]
    Io(#[from] std::io::Error),
    #[error("remote call cancelled")]
    Cancelled,
    #[error("remote call deadline exceeded")]
    DeadlineExceeded,
    #[error(transparent)]
    Client(anyhow::Error),
}

impl Error {
    /// True when the remote service answered and rejected the signature,
    /// as opposed to the call itself failing.
    pub fn is_verification_failure(&self) -> bool {
        matches!(self, Error::VerificationFailed)
    }
}
