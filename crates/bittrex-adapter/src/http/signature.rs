/*
[INPUT]:  Final request URI and configured API secret
[OUTPUT]: Hex-encoded HMAC-SHA512 signature for the apisign header
[POS]:    HTTP layer - request signing for credentialed endpoints
[UPDATE]: When changing signing algorithm or header format
*/

use hmac::{Hmac, Mac};
use sha2::Sha512;

type HmacSha512 = Hmac<Sha512>;

/// Header carrying the request signature.
pub const SIGNATURE_HEADER: &str = "apisign";

/// Compute the hex-encoded HMAC-SHA512 of `message` keyed by `secret`.
///
/// The upstream service recomputes this over the exact URI bytes it receives,
/// so the caller must pass the final URI string with every query parameter
/// already merged.
pub fn hmac_sha512_hex(message: &str, secret: &str) -> String {
    // HMAC accepts keys of any length, including empty; new_from_slice only
    // fails for fixed-key-length algorithms.
    let mut mac = HmacSha512::new_from_slice(secret.as_bytes())
        .unwrap_or_else(|_| unreachable!("HMAC accepts any key length"));
    mac.update(message.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rfc4231_case_2() {
        // RFC 4231 test case 2: key "Jefe", data "what do ya want for nothing?"
        let signature = hmac_sha512_hex("what do ya want for nothing?", "Jefe");
        assert_eq!(
            signature,
            "164b7a7bfcf819e2e395fbe73b56e0a387bd64222e831fd610270cd7ea250554\
             9758bf75c05a994a6d034f65f8f0e6fdcaeab1a34d4a6b4b636e070a38bce737"
        );
    }

    #[test]
    fn test_single_byte_change_alters_signature() {
        let base = hmac_sha512_hex("https://host/api?apikey=k&nonce=1", "secret");
        let tweaked = hmac_sha512_hex("https://host/api?apikey=k&nonce=2", "secret");
        assert_ne!(base, tweaked);
    }

    #[test]
    fn test_secret_change_alters_signature() {
        let uri = "https://host/api?apikey=k&nonce=1";
        assert_ne!(hmac_sha512_hex(uri, "secret"), hmac_sha512_hex(uri, "Secret"));
    }

    #[test]
    fn test_empty_secret_is_accepted() {
        let signature = hmac_sha512_hex("message", "");
        assert_eq!(signature.len(), 128);
    }
}
