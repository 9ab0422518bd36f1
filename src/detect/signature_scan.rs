//! Linear signature scan over the static `BT_SIGNATURES` table (§4.2).
//!
//! No index structure — the table is small enough that a byte-compare
//! linear scan is acceptable, with an early exit on the first hit and a
//! length pre-filter so a signature longer than the payload is never
//! compared.

use crate::signatures::BT_SIGNATURES;

/// True if `payload` contains any of the static BitTorrent signatures.
pub fn matches(payload: &[u8]) -> bool {
    BT_SIGNATURES
        .iter()
        .filter(|sig| sig.len() <= payload.len())
        .any(|sig| contains(payload, sig))
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    if needle.is_empty() {
        return true;
    }
    if needle.len() > haystack.len() {
        return false;
    }
    haystack.windows(needle.len()).any(|w| w == needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handshake_preamble_matches() {
        let mut payload = b"\x13BitTorrent protocol".to_vec();
        payload.extend_from_slice(&[0u8; 48]);
        assert!(matches(&payload));
    }

    #[test]
    fn signature_hidden_behind_noise_still_matches() {
        let mut payload = vec![0xAB; 40];
        payload.extend_from_slice(b"9:find_node");
        payload.extend_from_slice(&[0xCD; 10]);
        assert!(matches(&payload));
    }

    #[test]
    fn unrelated_payload_does_not_match() {
        let payload = b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n";
        assert!(!matches(payload));
    }

    #[test]
    fn payload_shorter_than_every_signature_never_matches() {
        let payload = b"hi";
        assert!(!matches(payload));
    }

    #[test]
    fn empty_payload_never_matches() {
        assert!(!matches(&[]));
    }
}
