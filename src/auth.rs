//! Request-signing authentication for the remote platform.
//!
//! The platform authenticates API callers with a one-way signature over the
//! caller's identity and a shared application secret. The signature is
//! computed once per process run and embedded in every RPC request body.

use serde::Serialize;
use sha1::{Digest, Sha1};

/// Authentication value sent with every remote call.
///
/// `UserKey` is the provider-qualified account name (`IDP\USERNAME`);
/// `AuthCode` is the signature binding that key to the target host.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AuthInfo {
    pub auth_code: String,
    pub user_key: String,
}

impl AuthInfo {
    /// Derive the authentication value for a service account.
    pub fn new(idp: &str, username: &str, server: &str, shared_secret: &str) -> Self {
        let user_key = format!("{idp}\\{username}");
        let auth_code = generate_auth_code(&user_key, server, shared_secret);
        Self {
            auth_code,
            user_key,
        }
    }
}

/// Compute the request-signing token for a user key on a given server.
///
/// SHA-1 over the UTF-8 bytes of `"{user_key}@{server}|{shared_secret}"`,
/// rendered as uppercase hex.
pub fn generate_auth_code(user_key: &str, server: &str, shared_secret: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(user_key.as_bytes());
    hasher.update(b"@");
    hasher.update(server.as_bytes());
    hasher.update(b"|");
    hasher.update(shared_secret.as_bytes());
    hex::encode_upper(hasher.finalize())
}
