mod common;

use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use keyvault_jwt::method::{SIGNING_METHOD_ES256, SIGNING_METHOD_RS256};
use keyvault_jwt::{Error, KeyLocator, RemoteKey, SigningMethod, SigningMethods};

use common::{KEY_ID, SignReply, StubClient};

const SIGNATURE: &[u8] = b"remote-signature";

#[tokio::test]
async fn sign_returns_unpadded_base64url() {
    let client = Arc::new(StubClient::signing(SignReply::Echo(SIGNATURE.to_vec())));
    let key = RemoteKey::new(client.clone(), KEY_ID).unwrap();

    let signature = SIGNING_METHOD_RS256.sign("eyJhbGciOiJSUzI1NiJ9.e30", &key).await.unwrap();
    assert_eq!(signature, URL_SAFE_NO_PAD.encode(SIGNATURE));
    assert!(!signature.contains('='));
    assert_eq!(client.calls()[0].alg.as_str(), "RS256");
}

#[tokio::test]
async fn verify_decodes_signature_before_remote_call() {
    let client = Arc::new(StubClient::verifying(Some(true)));
    let key = RemoteKey::new(client.clone(), KEY_ID).unwrap();
    let encoded = URL_SAFE_NO_PAD.encode(SIGNATURE);

    SIGNING_METHOD_ES256
        .verify("eyJhbGciOiJFUzI1NiJ9.e30", &encoded, &key)
        .await
        .unwrap();

    // The vault sees the same bytes, re-encoded.
    assert_eq!(client.calls()[0].signature.as_deref(), Some(encoded.as_str()));
}

#[tokio::test]
async fn verify_maps_vault_rejection() {
    let client = Arc::new(StubClient::verifying(Some(false)));
    let key = RemoteKey::new(client, KEY_ID).unwrap();

    let result = SIGNING_METHOD_ES256
        .verify("a.b", &URL_SAFE_NO_PAD.encode(SIGNATURE), &key)
        .await;
    assert!(matches!(result, Err(Error::VerificationFailed)));
}

#[tokio::test]
async fn malformed_signature_is_a_decode_error() {
    let client = Arc::new(StubClient::verifying(Some(true)));
    let key = RemoteKey::new(client.clone(), KEY_ID).unwrap();

    let result = SIGNING_METHOD_ES256.verify("a.b", "%%%", &key).await;
    assert!(matches!(result, Err(Error::Decode(_))));
    assert!(client.calls().is_empty());
}

#[tokio::test]
async fn padded_signature_is_rejected() {
    let client = Arc::new(StubClient::verifying(Some(true)));
    let key = RemoteKey::new(client.clone(), KEY_ID).unwrap();

    let result = SIGNING_METHOD_ES256.verify("a.b", "c2lnbg==", &key).await;
    assert!(matches!(result, Err(Error::Decode(_))));
    assert!(client.calls().is_empty());
}

#[tokio::test]
async fn incompatible_key_types_never_reach_the_vault() {
    let client = Arc::new(StubClient::signing(SignReply::Echo(SIGNATURE.to_vec())));
    let key = RemoteKey::new(client.clone(), KEY_ID).unwrap();

    let locator = KeyLocator::parse(KEY_ID).unwrap();
    let shared_key = Arc::new(key);
    let raw_secret = b"hmac-secret".to_vec();

    for method in [&SIGNING_METHOD_RS256, &SIGNING_METHOD_ES256] {
        assert!(matches!(method.sign("a.b", &locator).await, Err(Error::InvalidKeyType)));
        assert!(matches!(method.sign("a.b", &shared_key).await, Err(Error::InvalidKeyType)));
        assert!(matches!(method.sign("a.b", &raw_secret).await, Err(Error::InvalidKeyType)));
        assert!(matches!(
            method.verify("a.b", "c2ln", &raw_secret).await,
            Err(Error::InvalidKeyType)
        ));
    }
    assert!(client.calls().is_empty());
}

#[tokio::test]
async fn registry_methods_drive_remote_key() {
    let client = Arc::new(StubClient::signing(SignReply::Echo(SIGNATURE.to_vec())));
    let key = RemoteKey::new(client.clone(), KEY_ID).unwrap();

    let method = SigningMethods::global().get("PS512").unwrap();
    assert_eq!(method.alg(), "PS512");
    method.sign("a.b", &key).await.unwrap();
    assert_eq!(client.calls()[0].alg.as_str(), "PS512");
}
