use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::algorithm::SignatureAlgorithm;

/// Body of a Key Vault `sign` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeySignParameters {
    pub alg: SignatureAlgorithm,
    /// Base64url (unpadded) digest.
    pub value: String,
}

/// Body of a Key Vault `verify` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyVerifyParameters {
    pub alg: SignatureAlgorithm,
    /// Base64url (unpadded) digest.
    pub digest: String,
    /// Base64url (unpadded) signature.
    pub value: String,
}

/// Response to a `sign` request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyOperationResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Response to a `verify` request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyVerifyResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<bool>,
}

/// Remote operations a Key Vault client must provide.
///
/// Transport, authentication and retries are the implementor's business.
/// Errors are handed back to callers untouched.
#[async_trait]
pub trait KeyVaultClient: Send + Sync {
    async fn sign(
        &self,
        vault_base_url: &str,
        key_name: &str,
        key_version: &str,
        parameters: KeySignParameters,
    ) -> anyhow::Result<KeyOperationResult>;

    async fn verify(
        &self,
        vault_base_url: &str,
        key_name: &str,
        key_version: &str,
        parameters: KeyVerifyParameters,
    ) -> anyhow::Result<KeyVerifyResult>;
}
