use std::fmt;
use std::io::Read;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256, Sha384, Sha512};

use crate::error::{Error, Result};

/// JSON Web Key signature algorithms understood by Key Vault.
///
/// The string forms are the Key Vault REST vocabulary and are used as-is
/// on the wire and as JWT `alg` values.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignatureAlgorithm {
    ES256,
    ES256K,
    ES384,
    ES512,
    PS256,
    PS384,
    PS512,
    RS256,
    RS384,
    RS512,
}

/// Hash functions applied to the message before it is sent for signing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DigestAlgorithm {
    Sha256,
    Sha384,
    Sha512,
}

impl SignatureAlgorithm {
    pub const ALL: [SignatureAlgorithm; 10] = [
        SignatureAlgorithm::ES256,
        SignatureAlgorithm::ES256K,
        SignatureAlgorithm::ES384,
        SignatureAlgorithm::ES512,
        SignatureAlgorithm::PS256,
        SignatureAlgorithm::PS384,
        SignatureAlgorithm::PS512,
        SignatureAlgorithm::RS256,
        SignatureAlgorithm::RS384,
        SignatureAlgorithm::RS512,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SignatureAlgorithm::ES256 => "ES256",
            SignatureAlgorithm::ES256K => "ES256K",
            SignatureAlgorithm::ES384 => "ES384",
            SignatureAlgorithm::ES512 => "ES512",
            SignatureAlgorithm::PS256 => "PS256",
            SignatureAlgorithm::PS384 => "PS384",
            SignatureAlgorithm::PS512 => "PS512",
            SignatureAlgorithm::RS256 => "RS256",
            SignatureAlgorithm::RS384 => "RS384",
            SignatureAlgorithm::RS512 => "RS512",
        }
    }

    pub fn digest_algorithm(self) -> DigestAlgorithm {
        match self {
            SignatureAlgorithm::ES256
            | SignatureAlgorithm::ES256K
            | SignatureAlgorithm::PS256
            | SignatureAlgorithm::RS256 => DigestAlgorithm::Sha256,
            SignatureAlgorithm::ES384 | SignatureAlgorithm::PS384 | SignatureAlgorithm::RS384 => {
                DigestAlgorithm::Sha384
            }
            SignatureAlgorithm::ES512 | SignatureAlgorithm::PS512 | SignatureAlgorithm::RS512 => {
                DigestAlgorithm::Sha512
            }
        }
    }
}

impl fmt::Display for SignatureAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SignatureAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        SignatureAlgorithm::ALL
            .into_iter()
            .find(|alg| alg.as_str() == s)
            .ok_or_else(|| Error::UnsupportedAlgorithm(s.to_string()))
    }
}

impl DigestAlgorithm {
    /// Digest length in bytes.
    pub fn output_size(self) -> usize {
        match self {
            DigestAlgorithm::Sha256 => 32,
            DigestAlgorithm::Sha384 => 48,
            DigestAlgorithm::Sha512 => 64,
        }
    }
}

/// Looks up the digest algorithm for an algorithm name.
pub fn digest_algorithm_for(name: &str) -> Result<DigestAlgorithm> {
    name.parse::<SignatureAlgorithm>()
        .map(SignatureAlgorithm::digest_algorithm)
}

pub fn compute_digest(algorithm: SignatureAlgorithm, message: &[u8]) -> Vec<u8> {
    match algorithm.digest_algorithm() {
        DigestAlgorithm::Sha256 => Sha256::digest(message).to_vec(),
        DigestAlgorithm::Sha384 => Sha384::digest(message).to_vec(),
        DigestAlgorithm::Sha512 => Sha512::digest(message).to_vec(),
    }
}

/// Streams `reader` through the digest for `algorithm`.
pub fn compute_digest_reader<R: Read>(algorithm: SignatureAlgorithm, reader: R) -> Result<Vec<u8>> {
    match algorithm.digest_algorithm() {
        DigestAlgorithm::Sha256 => hash_reader::<Sha256, R>(reader),
        DigestAlgorithm::Sha384 => hash_reader::<Sha384, R>(reader),
        DigestAlgorithm::Sha512 => hash_reader::<Sha512, R>(reader),
    }
}

fn hash_reader<D, R>(mut reader: R) -> Result<Vec<u8>>
where
    D: Digest + std::io::Write,
    R: Read,
{
    let mut hasher = D::new();
    std::io::copy(&mut reader, &mut hasher)?;
    Ok(hasher.finalize().to_vec())
}
