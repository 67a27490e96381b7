use std::any::Any;

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use super::signing_method::SigningMethod;
use crate::algorithm::SignatureAlgorithm;
use crate::error::{Error, Result};
use crate::vault::RemoteKey;

/// Signing method that delegates to a [`RemoteKey`].
///
/// See <https://docs.microsoft.com/en-us/rest/api/keyvault/sign/sign#jsonwebkeysignaturealgorithm>
/// for the algorithms Key Vault accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyVaultSigningMethod {
    algorithm: SignatureAlgorithm,
}

pub const SIGNING_METHOD_ES256: KeyVaultSigningMethod =
    KeyVaultSigningMethod::new(SignatureAlgorithm::ES256);
pub const SIGNING_METHOD_ES256K: KeyVaultSigningMethod =
    KeyVaultSigningMethod::new(SignatureAlgorithm::ES256K);
pub const SIGNING_METHOD_ES384: KeyVaultSigningMethod =
    KeyVaultSigningMethod::new(SignatureAlgorithm::ES384);
pub const SIGNING_METHOD_ES512: KeyVaultSigningMethod =
    KeyVaultSigningMethod::new(SignatureAlgorithm::ES512);
pub const SIGNING_METHOD_PS256: KeyVaultSigningMethod =
    KeyVaultSigningMethod::new(SignatureAlgorithm::PS256);
pub const SIGNING_METHOD_PS384: KeyVaultSigningMethod =
    KeyVaultSigningMethod::new(SignatureAlgorithm::PS384);
pub const SIGNING_METHOD_PS512: KeyVaultSigningMethod =
    KeyVaultSigningMethod::new(SignatureAlgorithm::PS512);
pub const SIGNING_METHOD_RS256: KeyVaultSigningMethod =
    KeyVaultSigningMethod::new(SignatureAlgorithm::RS256);
pub const SIGNING_METHOD_RS384: KeyVaultSigningMethod =
    KeyVaultSigningMethod::new(SignatureAlgorithm::RS384);
pub const SIGNING_METHOD_RS512: KeyVaultSigningMethod =
    KeyVaultSigningMethod::new(SignatureAlgorithm::RS512);

impl KeyVaultSigningMethod {
    pub const fn new(algorithm: SignatureAlgorithm) -> Self {
        Self { algorithm }
    }

    pub fn algorithm(&self) -> SignatureAlgorithm {
        self.algorithm
    }
}

fn remote_key(key: &(dyn Any + Send + Sync)) -> Result<&RemoteKey> {
    key.downcast_ref::<RemoteKey>().ok_or(Error::InvalidKeyType)
}

#[async_trait]
impl SigningMethod for KeyVaultSigningMethod {
    fn alg(&self) -> &str {
        self.algorithm.as_str()
    }

    async fn sign(&self, signing_input: &str, key: &(dyn Any + Send + Sync)) -> Result<String> {
        let key = remote_key(key)?;
        let signature = key.sign(self.algorithm, signing_input.as_bytes()).await?;
        Ok(URL_SAFE_NO_PAD.encode(signature))
    }

    async fn verify(
        &self,
        signing_input: &str,
        signature: &str,
        key: &(dyn Any + Send + Sync),
    ) -> Result<()> {
        let key = remote_key(key)?;
        let signature = URL_SAFE_NO_PAD.decode(signature)?;
        key.verify(self.algorithm, signing_input.as_bytes(), &signature).await
    }
}
