use std::time::Duration;

use serde::Deserialize;

use crate::vault::CallContext;

/// Settings for one remote signing key, meant to be embedded in an
/// application's own configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RemoteKeyConfig {
    /// Full key identifier, including the version segment.
    pub key_id: String,
    /// Upper bound for each remote call, in milliseconds.
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

impl RemoteKeyConfig {
    pub fn call_context(&self) -> CallContext {
        match self.timeout_ms {
            Some(ms) => CallContext::new().with_timeout(Duration::from_millis(ms)),
            None => CallContext::new(),
        }
    }
}
