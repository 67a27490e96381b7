mod client;
mod context;
mod key;
mod locator;

pub use client::{
    KeyOperationResult, KeySignParameters, KeyVaultClient, KeyVerifyParameters, KeyVerifyResult,
};
pub use context::CallContext;
pub use key::RemoteKey;
pub use locator::KeyLocator;
