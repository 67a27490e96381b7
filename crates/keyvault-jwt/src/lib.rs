//! Sign and verify JWTs with keys that never leave Azure Key Vault.
//!
//! Messages are hashed locally; only the digest is sent to the vault, and the
//! vault's answer is checked against the requested key before use.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod method;
pub mod vault;

pub use algorithm::{
    DigestAlgorithm, SignatureAlgorithm, compute_digest, compute_digest_reader,
    digest_algorithm_for,
};
pub use config::RemoteKeyConfig;
pub use error::{Error, Result};
pub use method::{KeyVaultSigningMethod, SigningMethod, SigningMethods};
pub use vault::{CallContext, KeyLocator, KeyVaultClient, RemoteKey};
