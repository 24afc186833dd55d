// SPDX-License-Identifier: Apache-2.0

//! Token issue and verification.
//!
//! Tokens are `username.hexsig` where the signature is HMAC-SHA256 over the
//! username, keyed by the configured secret. Verification is server-side on
//! every admin route; there is no expiry (one admin account, demo scope).

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

fn signature(secret: &str, username: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("hmac accepts any key length");
    mac.update(username.as_bytes());
    hex(&mac.finalize().into_bytes())
}

#[must_use]
pub fn sign_token(secret: &str, username: &str) -> String {
    format!("{username}.{}", signature(secret, username))
}

/// Returns the username the token vouches for, or `None` for anything
/// malformed, unsigned, or signed with a different secret.
#[must_use]
pub fn verify_token(secret: &str, token: &str) -> Option<String> {
    let (username, sig) = token.split_once('.')?;
    if username.is_empty() || sig != signature(secret, username) {
        return None;
    }
    Some(username.to_string())
}

/// Pulls the bearer token out of an `Authorization` header value.
#[must_use]
pub fn bearer_token(header: &str) -> Option<&str> {
    let token = header.strip_prefix("Bearer ")?.trim();
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}
