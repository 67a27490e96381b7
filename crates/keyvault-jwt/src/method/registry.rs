use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use super::key_vault::KeyVaultSigningMethod;
use super::signing_method::SigningMethod;
use crate::algorithm::SignatureAlgorithm;
use crate::error::{Error, Result};

/// Signing methods indexed by their `alg` name.
#[derive(Default)]
pub struct SigningMethods {
    methods: HashMap<String, Arc<dyn SigningMethod>>,
}

impl SigningMethods {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding a Key Vault method for every supported algorithm.
    pub fn with_key_vault_methods() -> Self {
        let methods = SignatureAlgorithm::ALL
            .into_iter()
            .map(|alg| {
                let method: Arc<dyn SigningMethod> = Arc::new(KeyVaultSigningMethod::new(alg));
                (alg.as_str().to_string(), method)
            })
            .collect();
        Self { methods }
    }

    /// Process-wide registry of the Key Vault methods. Built on first use and
    /// never modified afterwards.
    pub fn global() -> &'static SigningMethods {
        static GLOBAL: OnceLock<SigningMethods> = OnceLock::new();
        GLOBAL.get_or_init(SigningMethods::with_key_vault_methods)
    }

    /// Adds `method`. An `alg` that is already taken is an error; existing
    /// entries are never replaced.
    pub fn register(&mut self, method: Arc<dyn SigningMethod>) -> Result<()> {
        let alg = method.alg().to_string();
        if self.methods.contains_key(&alg) {
            return Err(Error::DuplicateSigningMethod(alg));
        }
        self.methods.insert(alg, method);
        Ok(())
    }

    pub fn get(&self, alg: &str) -> Option<Arc<dyn SigningMethod>> {
        self.methods.get(alg).cloned()
    }

    pub fn algorithms(&self) -> impl Iterator<Item = &str> {
        self.methods.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}
