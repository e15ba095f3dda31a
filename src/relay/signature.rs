//! Time-based request signing.
//!
//! # Responsibilities
//! - Derive a per-request nonce from wall-clock time
//! - Build the secret key (nonce concatenated with the caller's key)
//! - Compute the double-SHA256 digest over method + url + body
//! - Format the `HMAC-Authentication` header value
//!
//! # Design Decisions
//! - The digest is NOT standard HMAC-SHA256: it is
//!   `sha256(hex(sha256(secret)) + hex(sha256(secret + signature)))` with
//!   the inner digests rendered as lowercase hex before concatenation.
//!   Downstream verifiers implement exactly this chain, so it must not be
//!   replaced with a keyed HMAC
//! - The clock is a trait so tests can pin the nonce
//! - The nonce is fresh per request but only second-granular; two relays
//!   with the same key in the same second share a nonce

use std::time::{SystemTime, UNIX_EPOCH};

use sha2::{Digest, Sha256};

/// Name of the outbound signature header.
pub const HMAC_HEADER: &str = "HMAC-Authentication";

/// Signature scheme version carried in the header.
const HMAC_VERSION: u32 = 1;

/// Source of Unix timestamps for nonce derivation.
pub trait Clock: Send + Sync {
    /// Current Unix time in whole seconds.
    fn unix_now(&self) -> u64;
}

/// Wall-clock implementation used in production.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn unix_now(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    }
}

/// Compute the full header value using the given clock for the nonce.
pub fn sign(clock: &dyn Clock, key: &str, method: &str, url: &str, body: &str) -> String {
    header_value_at(clock.unix_now(), key, method, url, body)
}

/// Compute the header value for a fixed nonce: `1:<nonce+key>:<nonce>:<digest>`.
pub fn header_value_at(nonce: u64, key: &str, method: &str, url: &str, body: &str) -> String {
    let secret_key = format!("{nonce}{key}");
    let signature = format!("{method}{url}{body}");
    let digest = digest_for(&secret_key, &signature);
    format!("{HMAC_VERSION}:{secret_key}:{nonce}:{digest}")
}

/// The double-hash chain over hex-rendered inner digests.
fn digest_for(secret_key: &str, signature: &str) -> String {
    let inner_key = sha256_hex(secret_key.as_bytes());
    let inner_signed = sha256_hex(format!("{secret_key}{signature}").as_bytes());
    sha256_hex(format!("{inner_key}{inner_signed}").as_bytes())
}

fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fixed-time clock for deterministic signing in tests.
    pub struct FixedClock(pub u64);

    impl Clock for FixedClock {
        fn unix_now(&self) -> u64 {
            self.0
        }
    }

    #[test]
    fn test_known_vector() {
        // Verified against the reference hex-hash chain.
        let header = header_value_at(1000, "abc", "POST", "http://x/y/z", "{}");
        assert_eq!(
            header,
            "1:1000abc:1000:5bafd89b23be1b5c29b23f8756232023a01b4632871b7bb0087140c18432937c"
        );
    }

    #[test]
    fn test_second_vector() {
        let header = header_value_at(
            1_700_000_000,
            "relaykey",
            "GET",
            "http://api.example.com/users/list",
            "",
        );
        assert_eq!(
            header,
            "1:1700000000relaykey:1700000000:bc413da98dc3da4d65b8cc3d535d5e00e4076f65c396c1dd516a2b03c006fadf"
        );
    }

    #[test]
    fn test_sign_uses_clock_nonce() {
        let clock = FixedClock(1000);
        let signed = sign(&clock, "abc", "POST", "http://x/y/z", "{}");
        assert_eq!(signed, header_value_at(1000, "abc", "POST", "http://x/y/z", "{}"));
    }

    #[test]
    fn test_body_changes_digest_but_not_prefix() {
        let a = header_value_at(1000, "abc", "POST", "http://x/y/z", "{}");
        let b = header_value_at(1000, "abc", "POST", "http://x/y/z", "{\"k\":1}");
        assert_ne!(a, b);
        assert!(a.starts_with("1:1000abc:1000:"));
        assert!(b.starts_with("1:1000abc:1000:"));
    }

    #[test]
    fn test_digest_is_lowercase_hex() {
        let header = header_value_at(1, "k", "GET", "http://h/c/a", "");
        let digest = header.rsplit(':').next().unwrap();
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}
