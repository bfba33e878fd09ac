//! HMAC-SHA256 user signatures.
//!
//! When HMAC authentication is enabled on the Engagespot dashboard, every
//! `sdk/connect` call has to carry `hex(HMAC-SHA256(api_secret, user_id))`
//! so the service can tell the user id was vouched for by the secret holder.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Length of a hex-encoded SHA-256 MAC
pub const SIGNATURE_HEX_LEN: usize = 64;

fn keyed_mac(secret: &str) -> HmacSha256 {
    // HMAC pads or hashes the key, so no length is ever rejected
    HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts keys of any length")
}

/// Computes the lowercase hex HMAC-SHA256 of `user_id` keyed by `secret`
///
/// # Example
/// ```
/// use engagespot::utils::signature::compute_signature;
///
/// let signature = compute_signature("B", "hello@example.com");
/// assert_eq!(
///     signature,
///     "8c10fc039230663b3b1c074f16db7c7dbb3dd9da64b68965aba85d89acd3a8da"
/// );
/// ```
pub fn compute_signature(secret: &str, user_id: &str) -> String {
    let mut mac = keyed_mac(secret);
    mac.update(user_id.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Checks a hex signature against `user_id` in constant time.
///
/// Returns false for anything that is not valid hex of the right length.
pub fn verify_signature(secret: &str, user_id: &str, candidate: &str) -> bool {
    if candidate.len() != SIGNATURE_HEX_LEN {
        return false;
    }
    let Ok(bytes) = hex::decode(candidate) else {
        return false;
    };

    let mut mac = keyed_mac(secret);
    mac.update(user_id.as_bytes());
    mac.verify_slice(&bytes).is_ok()
}
