//! SOCKS connection check (§4.4).
//!
//! Disabled by default — a payload merely being SOCKS-shaped doesn't
//! warrant blocking on its own, and legitimate proxy traffic would be
//! caught in the crossfire. Gated behind `DpiConfig::block_socks`.

const SOCKS4_VERSION: u8 = 0x04;
const SOCKS4_CONNECT: u8 = 0x01;
const SOCKS4_BIND: u8 = 0x02;
const SOCKS5_VERSION: u8 = 0x05;

/// True if `payload` looks like a SOCKS4 CONNECT/BIND request or a SOCKS5
/// greeting.
pub fn matches(payload: &[u8]) -> bool {
    is_socks4(payload) || is_socks5_greeting(payload)
}

fn is_socks4(payload: &[u8]) -> bool {
    payload.len() >= 2 && payload[0] == SOCKS4_VERSION && matches!(payload[1], SOCKS4_CONNECT | SOCKS4_BIND)
}

fn is_socks5_greeting(payload: &[u8]) -> bool {
    if payload.len() < 2 || payload[0] != SOCKS5_VERSION {
        return false;
    }
    let n = payload[1] as usize;
    payload.len() == n + 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn socks4_connect_matches() {
        assert!(matches(&[0x04, 0x01, 0, 0, 0, 0, 0, 0]));
    }

    #[test]
    fn socks4_bind_matches() {
        assert!(matches(&[0x04, 0x02]));
    }

    #[test]
    fn socks5_greeting_with_exact_length_matches() {
        // version, n methods = 2, then 2 method bytes
        assert!(matches(&[0x05, 0x02, 0x00, 0x01]));
    }

    #[test]
    fn socks5_greeting_with_wrong_length_does_not_match() {
        assert!(!matches(&[0x05, 0x02, 0x00]));
    }

    #[test]
    fn unrelated_payload_does_not_match() {
        assert!(!matches(b"not socks at all"));
    }
}
