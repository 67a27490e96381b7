#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use keyvault_jwt::SignatureAlgorithm;
use keyvault_jwt::vault::{
    KeyOperationResult, KeySignParameters, KeyVaultClient, KeyVerifyParameters, KeyVerifyResult,
};

pub const KEY_ID: &str = "https://vault.example/keys/mykey/abc123";

/// What the stub answers to `sign`.
pub enum SignReply {
    /// Echo the requested key id with this signature.
    Echo(Vec<u8>),
    /// Return exactly this body.
    Fixed(KeyOperationResult),
    Fail(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub operation: &'static str,
    pub vault_base_url: String,
    pub key_name: String,
    pub key_version: String,
    pub alg: SignatureAlgorithm,
    pub digest: String,
    pub signature: Option<String>,
}

pub struct StubClient {
    sign_reply: SignReply,
    verify_reply: Result<KeyVerifyResult, &'static str>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl StubClient {
    pub fn signing(reply: SignReply) -> Self {
        Self {
            sign_reply: reply,
            verify_reply: Err("verify not scripted"),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn verifying(value: Option<bool>) -> Self {
        Self {
            sign_reply: SignReply::Fail("sign not scripted"),
            verify_reply: Ok(KeyVerifyResult { value }),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_verify(message: &'static str) -> Self {
        Self {
            sign_reply: SignReply::Fail("sign not scripted"),
            verify_reply: Err(message),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: RecordedCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl KeyVaultClient for StubClient {
    async fn sign(
        &self,
        vault_base_url: &str,
        key_name: &str,
        key_version: &str,
        parameters: KeySignParameters,
    ) -> anyhow::Result<KeyOperationResult> {
        self.record(RecordedCall {
            operation: "sign",
            vault_base_url: vault_base_url.to_string(),
            key_name: key_name.to_string(),
            key_version: key_version.to_string(),
            alg: parameters.alg,
            digest: parameters.value,
            signature: None,
        });

        match &self.sign_reply {
            SignReply::Echo(signature) => Ok(KeyOperationResult {
                kid: Some(format!("{vault_base_url}/keys/{key_name}/{key_version}")),
                value: Some(URL_SAFE_NO_PAD.encode(signature)),
            }),
            SignReply::Fixed(result) => Ok(result.clone()),
            SignReply::Fail(message) => Err(anyhow::anyhow!(*message)),
        }
    }

    async fn verify(
        &self,
        vault_base_url: &str,
        key_name: &str,
        key_version: &str,
        parameters: KeyVerifyParameters,
    ) -> anyhow::Result<KeyVerifyResult> {
        self.record(RecordedCall {
            operation: "verify",
            vault_base_url: vault_base_url.to_string(),
            key_name: key_name.to_string(),
            key_version: key_version.to_string(),
            alg: parameters.alg,
            digest: parameters.digest,
            signature: Some(parameters.value),
        });

        self.verify_reply
            .clone()
            .map_err(|message| anyhow::anyhow!(message))
    }
}
