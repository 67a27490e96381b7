use url::Url;

use crate::error::{Error, Result};

/// A key identifier split into the parts the Key Vault API addresses.
///
/// Identifiers look like `https://<vault>.vault.azure.net/keys/<name>/<version>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyLocator {
    pub vault_base_url: String,
    pub name: String,
    pub version: String,
}

impl KeyLocator {
    pub fn parse(key_id: &str) -> Result<Self> {
        let invalid = || Error::InvalidKeyIdentifier(key_id.to_string());

        let url = Url::parse(key_id).map_err(|_| invalid())?;
        let host = url.host_str().filter(|h| !h.is_empty()).ok_or_else(invalid)?;

        // `Url` resolves dot segments and rewrites `\` to `/`; only the path as
        // written counts.
        if literal_path(key_id) != Some(url.path()) {
            return Err(invalid());
        }

        let parts: Vec<&str> = url.path().trim_start_matches('/').split('/').collect();
        let [kind, name, version] = parts.as_slice() else {
            return Err(invalid());
        };
        if *kind != "keys" || name.is_empty() || version.is_empty() {
            return Err(invalid());
        }
        if encodes_separator(name) || encodes_separator(version) {
            return Err(invalid());
        }

        let vault_base_url = match url.port() {
            Some(port) => format!("{}://{host}:{port}", url.scheme()),
            None => format!("{}://{host}", url.scheme()),
        };

        Ok(Self {
            vault_base_url,
            name: name.to_string(),
            version: version.to_string(),
        })
    }
}

/// The path of `key_id` as written: everything after the authority, up to the
/// query or fragment.
fn literal_path(key_id: &str) -> Option<&str> {
    let (_, rest) = key_id.split_once("://")?;
    let start = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    let path = &rest[start..];
    let end = path.find(['?', '#']).unwrap_or(path.len());
    Some(&path[..end])
}

fn encodes_separator(segment: &str) -> bool {
    let segment = segment.to_ascii_lowercase();
    segment.contains("%2f") || segment.contains("%5c")
}
