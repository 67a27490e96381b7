use std::any::Any;

use async_trait::async_trait;

use crate::error::Result;

/// A pluggable JWT signing algorithm.
///
/// Token libraries hand over the JWS signing input (`header.claims`) and an
/// opaque key. Implementations decide which key types they accept and fail
/// with [`Error::InvalidKeyType`](crate::Error::InvalidKeyType) on anything else.
#[async_trait]
pub trait SigningMethod: Send + Sync {
    /// JWA name placed in the token's `alg` header (e.g. "RS256").
    fn alg(&self) -> &str;

    /// Sign the input. Returns the unpadded base64url signature segment.
    async fn sign(&self, signing_input: &str, key: &(dyn Any + Send + Sync)) -> Result<String>;

    /// Check an unpadded base64url signature segment against the input.
    async fn verify(
        &self,
        signing_input: &str,
        signature: &str,
        key: &(dyn Any + Send + Sync),
    ) -> Result<()>;
}
