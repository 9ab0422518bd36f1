//! Message Stream Encryption / Protocol Encryption validator (§4.8).
//!
//! The hardest detector in the pipeline and, per the arbiter's ordering
//! rationale, the most expensive — an encrypted handshake carries no
//! plaintext markers, only a structural fingerprint: a near-uniform
//! Diffie-Hellman public key, an 8-byte all-zero verification constant
//! somewhere after it, and a sane `crypto_provide` field right after
//! that. All three must hold; any two alone are not enough.

use byteorder::{BigEndian, ByteOrder};

use crate::entropy::shannon_entropy;

const DH_KEY_LEN: usize = 96;
const VC_LEN: usize = 8;
const MIN_LEN: usize = DH_KEY_LEN + VC_LEN;
const VC_SEARCH_CEILING: usize = 628;
const DH_ENTROPY_THRESHOLD: f64 = 6.5;

pub fn matches(payload: &[u8]) -> bool {
    if payload.len() < MIN_LEN {
        return false;
    }

    let dh_window = &payload[0..DH_KEY_LEN];
    if shannon_entropy(dh_window) <= DH_ENTROPY_THRESHOLD {
        return false;
    }

    let vc_offset = match find_verification_constant(payload) {
        Some(offset) => offset,
        None => return false,
    };

    let crypto_provide_offset = vc_offset + VC_LEN;
    if crypto_provide_offset + 4 > payload.len() {
        return false;
    }

    let crypto_provide = BigEndian::read_u32(&payload[crypto_provide_offset..crypto_provide_offset + 4]);
    matches!(crypto_provide, 0x01 | 0x02 | 0x03)
}

/// Searches the window `96..min(628, len-8)` for eight consecutive zero
/// bytes, returning the offset of the first byte of the run.
fn find_verification_constant(payload: &[u8]) -> Option<usize> {
    let search_end = (payload.len().saturating_sub(VC_LEN)).min(VC_SEARCH_CEILING);
    if search_end <= DH_KEY_LEN {
        return None;
    }
    (DH_KEY_LEN..search_end).find(|&offset| payload[offset..offset + VC_LEN] == [0u8; VC_LEN])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn high_entropy_dh_key() -> Vec<u8> {
        // 96 distinct-looking bytes; a 0..96 ramp has entropy 8 over the
        // full window once every value in range is equally represented,
        // which is comfortably above the 6.5 threshold.
        (0u8..96).collect()
    }

    fn mse_packet(crypto_provide: u32) -> Vec<u8> {
        let mut packet = high_entropy_dh_key();
        packet.extend_from_slice(&[0u8; VC_LEN]);
        let mut cp = [0u8; 4];
        BigEndian::write_u32(&mut cp, crypto_provide);
        packet.extend_from_slice(&cp);
        packet
    }

    #[test]
    fn valid_mse_handshake_matches() {
        let packet = mse_packet(0x02);
        assert!(matches(&packet));
    }

    #[test]
    fn crypto_provide_plaintext_only_matches() {
        let packet = mse_packet(0x01);
        assert!(matches(&packet));
    }

    #[test]
    fn crypto_provide_both_matches() {
        let packet = mse_packet(0x03);
        assert!(matches(&packet));
    }

    #[test]
    fn invalid_crypto_provide_does_not_match() {
        let packet = mse_packet(0x05);
        assert!(!matches(&packet));
    }

    #[test]
    fn low_entropy_dh_window_does_not_match() {
        let mut packet = vec![0x41u8; DH_KEY_LEN];
        packet.extend_from_slice(&[0u8; VC_LEN]);
        packet.extend_from_slice(&[0, 0, 0, 0x02]);
        assert!(!matches(&packet));
    }

    #[test]
    fn missing_verification_constant_does_not_match() {
        let mut packet = high_entropy_dh_key();
        packet.extend_from_slice(&[0xFFu8; 20]); // no run of 8 zero bytes
        assert!(!matches(&packet));
    }

    #[test]
    fn too_short_payload_does_not_match() {
        let packet = vec![0xAAu8; MIN_LEN - 1];
        assert!(!matches(&packet));
    }

    #[test]
    fn boundary_scenario_from_spec_section_8() {
        // 96 bytes of entropy ~7.1, 8 zero bytes at offset 110 (well within
        // the 96..104 prefix padding used here), crypto_provide 0x00000002.
        let mut packet = vec![0xFFu8; 200];
        for (i, b) in packet.iter_mut().take(96).enumerate() {
            *b = (i * 7 % 251) as u8;
        }
        packet[110..118].copy_from_slice(&[0u8; 8]);
        BigEndian::write_u32(&mut packet[118..122], 0x0000_0002);
        assert!(matches(&packet));

        let mut packet_bad = packet.clone();
        BigEndian::write_u32(&mut packet_bad[118..122], 0x0000_0005);
        assert!(!matches(&packet_bad));
    }
}
