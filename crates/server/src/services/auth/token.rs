//! Signed password-reset tokens.
//!
//! A token is `reset-<expiry-millis>-<hex(hmac_sha256(secret, email|expiry))>`.
//! The signature binds the token to the email it was issued for and to its
//! expiry instant, so a token cannot be replayed for another account or
//! after its window closes.

use chrono::{DateTime, TimeZone, Utc};
use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Issue a token for `email` valid until `expires_at`.
#[must_use]
pub fn issue(secret: &SecretString, email: &str, expires_at: DateTime<Utc>) -> String {
    let expiry_millis = expires_at.timestamp_millis();
    let signature = sign(secret, email, expiry_millis);
    format!("reset-{expiry_millis}-{signature}")
}

/// Verify a token against the email it is being used for.
///
/// Checks the `reset-` shape, the expiry against `now`, and the HMAC
/// binding to `email`. The signature check goes through
/// [`Mac::verify_slice`], which compares in constant time.
#[must_use]
pub fn verify(secret: &SecretString, email: &str, token: &str, now: DateTime<Utc>) -> bool {
    let Some(rest) = token.strip_prefix("reset-") else {
        return false;
    };
    let Some((expiry_part, signature)) = rest.split_once('-') else {
        return false;
    };
    let Ok(expiry_millis) = expiry_part.parse::<i64>() else {
        return false;
    };
    let Some(expires_at) = Utc.timestamp_millis_opt(expiry_millis).single() else {
        return false;
    };
    if now > expires_at {
        return false;
    }

    let Some(supplied) = decode_hex(signature) else {
        return false;
    };

    mac_over(secret, email, expiry_millis)
        .verify_slice(&supplied)
        .is_ok()
}

/// HMAC-SHA256 over `email|expiry`.
fn mac_over(secret: &SecretString, email: &str, expiry_millis: i64) -> HmacSha256 {
    let mut mac = HmacSha256::new_from_slice(secret.expose_secret().as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(email.as_bytes());
    mac.update(b"|");
    mac.update(expiry_millis.to_string().as_bytes());
    mac
}

/// Hex-encoded signature for a new token.
fn sign(secret: &SecretString, email: &str, expiry_millis: i64) -> String {
    let digest = mac_over(secret, email, expiry_millis).finalize().into_bytes();
    digest.iter().map(|b| format!("{b:02x}")).collect()
}

/// Decode a lowercase or uppercase hex string; `None` on any malformed input.
fn decode_hex(s: &str) -> Option<Vec<u8>> {
    if s.len() % 2 != 0 {
        return None;
    }

    (0..s.len())
        .step_by(2)
        .map(|i| {
            s.get(i..i + 2)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
        })
        .collect()
}
