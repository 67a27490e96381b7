mod key_vault;
mod registry;
mod signing_method;

pub use key_vault::{
    KeyVaultSigningMethod, SIGNING_METHOD_ES256, SIGNING_METHOD_ES256K, SIGNING_METHOD_ES384,
    SIGNING_METHOD_ES512, SIGNING_METHOD_PS256, SIGNING_METHOD_PS384, SIGNING_METHOD_PS512,
    SIGNING_METHOD_RS256, SIGNING_METHOD_RS384, SIGNING_METHOD_RS512,
};
pub use registry::SigningMethods;
pub use signing_method::SigningMethod;
