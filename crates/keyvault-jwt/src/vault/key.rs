use std::fmt;
use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use tracing::debug;

use super::client::{KeySignParameters, KeyVaultClient, KeyVerifyParameters};
use super::context::CallContext;
use super::locator::KeyLocator;
use crate::algorithm::{SignatureAlgorithm, compute_digest};
use crate::config::RemoteKeyConfig;
use crate::error::{Error, Result};

/// A key held in Key Vault, addressed by its identifier.
///
/// The handle carries no key material. Every operation hashes locally, sends
/// only the digest, and checks the response before returning anything.
/// Clones share the client.
#[derive(Clone)]
pub struct RemoteKey {
    client: Arc<dyn KeyVaultClient>,
    context: CallContext,
    id: String,
    locator: KeyLocator,
}

impl RemoteKey {
    pub fn new(client: Arc<dyn KeyVaultClient>, key_id: &str) -> Result<Self> {
        Self::with_context(client, key_id, CallContext::default())
    }

    pub fn with_context(
        client: Arc<dyn KeyVaultClient>,
        key_id: &str,
        context: CallContext,
    ) -> Result<Self> {
        let locator = KeyLocator::parse(key_id)?;
        Ok(Self {
            client,
            context,
            id: key_id.to_string(),
            locator,
        })
    }

    pub fn from_config(client: Arc<dyn KeyVaultClient>, config: &RemoteKeyConfig) -> Result<Self> {
        Self::with_context(client, &config.key_id, config.call_context())
    }

    /// The identifier this key was created from, verbatim.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn locator(&self) -> &KeyLocator {
        &self.locator
    }

    pub fn context(&self) -> &CallContext {
        &self.context
    }

    /// Signs `message` and returns the raw signature bytes.
    pub async fn sign(&self, algorithm: SignatureAlgorithm, message: &[u8]) -> Result<Vec<u8>> {
        let digest = compute_digest(algorithm, message);
        self.sign_digest(algorithm, &digest).await
    }

    /// Signs `message` and returns the signature as unpadded base64url.
    pub async fn sign_to_base64(
        &self,
        algorithm: SignatureAlgorithm,
        message: &[u8],
    ) -> Result<String> {
        let digest = compute_digest(algorithm, message);
        self.sign_digest_to_base64(algorithm, &digest).await
    }

    /// Signs a precomputed digest. The digest length must match `algorithm`.
    pub async fn sign_digest(
        &self,
        algorithm: SignatureAlgorithm,
        digest: &[u8],
    ) -> Result<Vec<u8>> {
        let signature = self.request_signature(algorithm, digest).await?;
        Ok(URL_SAFE_NO_PAD.decode(signature)?)
    }

    pub async fn sign_digest_to_base64(
        &self,
        algorithm: SignatureAlgorithm,
        digest: &[u8],
    ) -> Result<String> {
        let signature = self.request_signature(algorithm, digest).await?;
        URL_SAFE_NO_PAD.decode(&signature)?;
        Ok(signature)
    }

    /// Verifies `signature` over `message`. A signature the vault rejects
    /// yields [`Error::VerificationFailed`].
    pub async fn verify(
        &self,
        algorithm: SignatureAlgorithm,
        message: &[u8],
        signature: &[u8],
    ) -> Result<()> {
        let digest = compute_digest(algorithm, message);
        self.verify_digest(algorithm, &digest, signature).await
    }

    pub async fn verify_digest(
        &self,
        algorithm: SignatureAlgorithm,
        digest: &[u8],
        signature: &[u8],
    ) -> Result<()> {
        check_digest_length(algorithm, digest)?;

        let parameters = KeyVerifyParameters {
            alg: algorithm,
            digest: URL_SAFE_NO_PAD.encode(digest),
            value: URL_SAFE_NO_PAD.encode(signature),
        };

        let KeyLocator { vault_base_url, name, version } = &self.locator;
        debug!(
            vault = %vault_base_url,
            key = %name,
            version = %version,
            alg = %algorithm,
            "verifying digest"
        );
        let response = self
            .context
            .run(self.client.verify(vault_base_url, name, version, parameters))
            .await?;

        match response.value {
            None => Err(Error::InvalidServerResponse("value")),
            Some(false) => Err(Error::VerificationFailed),
            Some(true) => Ok(()),
        }
    }

    /// Sends the digest for signing and returns the still-encoded signature
    /// once the response has been checked against this key.
    async fn request_signature(
        &self,
        algorithm: SignatureAlgorithm,
        digest: &[u8],
    ) -> Result<String> {
        check_digest_length(algorithm, digest)?;

        let parameters = KeySignParameters {
            alg: algorithm,
            value: URL_SAFE_NO_PAD.encode(digest),
        };

        let KeyLocator { vault_base_url, name, version } = &self.locator;
        debug!(
            vault = %vault_base_url,
            key = %name,
            version = %version,
            alg = %algorithm,
            "signing digest"
        );
        let response = self
            .context
            .run(self.client.sign(vault_base_url, name, version, parameters))
            .await?;

        if response.kid.as_deref() != Some(self.id.as_str()) {
            debug!(
                expected = %self.id,
                actual = ?response.kid,
                "vault answered with a different key"
            );
            return Err(Error::ResponseKeyMismatch {
                expected: self.id.clone(),
                actual: response.kid,
            });
        }
        response.value.ok_or(Error::InvalidServerResponse("value"))
    }
}

impl fmt::Debug for RemoteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteKey")
            .field("id", &self.id)
            .field("locator", &self.locator)
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}

fn check_digest_length(algorithm: SignatureAlgorithm, digest: &[u8]) -> Result<()> {
    let expected = algorithm.digest_algorithm().output_size();
    if digest.len() != expected {
        return Err(Error::InvalidDigestLength {
            algorithm,
            expected,
            actual: digest.len(),
        });
    }
    Ok(())
}
