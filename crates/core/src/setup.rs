//! One-time admin setup token check.
//!
//! The setup endpoint is guarded by a shared secret sent in a header. The
//! comparison runs through HMAC-SHA256 and `verify_slice`, which compares
//! tags in constant time, so response timing does not reveal how much of a
//! guess matched.

use hmac::{Hmac, Mac};
use sha2::Sha256;

/// Header carrying the setup secret.
pub const SETUP_TOKEN_HEADER: &str = "x-setup-token";

type HmacSha256 = Hmac<Sha256>;

/// Fixed HMAC key; the secret itself is the message.
const COMPARE_KEY: &[u8] = b"sitecms-setup-token-compare";

/// Compare a presented token against the configured secret in constant time.
///
/// Empty secrets never match.
pub fn setup_token_matches(presented: &str, expected: &str) -> bool {
    if expected.is_empty() {
        return false;
    }
    let Ok(mut expected_mac) = HmacSha256::new_from_slice(COMPARE_KEY) else {
        return false;
    };
    expected_mac.update(expected.as_bytes());
    let expected_tag = expected_mac.finalize().into_bytes();

    let Ok(mut presented_mac) = HmacSha256::new_from_slice(COMPARE_KEY) else {
        return false;
    };
    presented_mac.update(presented.as_bytes());
    presented_mac.verify_slice(&expected_tag).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_tokens_match() {
        assert!(setup_token_matches("s3cret-value", "s3cret-value"));
    }

    #[test]
    fn different_tokens_do_not_match() {
        assert!(!setup_token_matches("s3cret-valuE", "s3cret-value"));
        assert!(!setup_token_matches("s3cret", "s3cret-value"));
        assert!(!setup_token_matches("", "s3cret-value"));
    }

    #[test]
    fn empty_secret_never_matches() {
        assert!(!setup_token_matches("", ""));
        assert!(!setup_token_matches("anything", ""));
    }
}
