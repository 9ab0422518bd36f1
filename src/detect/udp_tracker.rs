//! UDP tracker protocol validator (§4.5, BEP 15).
//!
//! Three shapes tried in order: connect, announce, scrape. A packet
//! smaller than the connect minimum never matches anything here.

use byteorder::{BigEndian, ByteOrder};

use crate::signatures::{min_size, tracker_action, PEER_ID_PREFIXES, UDP_TRACKER_PROTOCOL_ID};

/// True if `payload` structurally matches a UDP tracker connect, announce,
/// or scrape packet.
pub fn matches(payload: &[u8]) -> bool {
    if payload.len() < min_size::CONNECT {
        return false;
    }
    is_connect(payload) || is_announce(payload) || is_scrape(payload)
}

fn is_connect(payload: &[u8]) -> bool {
    if payload.len() < min_size::CONNECT || payload.len() >= min_size::SCRAPE {
        return false;
    }
    let protocol_id = BigEndian::read_u64(&payload[0..8]);
    let action = BigEndian::read_u32(&payload[8..12]);
    protocol_id == UDP_TRACKER_PROTOCOL_ID && action == tracker_action::CONNECT
}

fn is_announce(payload: &[u8]) -> bool {
    if payload.len() < min_size::ANNOUNCE {
        return false;
    }
    let action = BigEndian::read_u32(&payload[8..12]);
    if action != tracker_action::ANNOUNCE {
        return false;
    }
    // Structure alone (length + action) is treated as sufficient even when
    // the peer-id prefix is unrecognised — see the open question in the
    // spec's design notes about this being a possible source of false
    // positives on arbitrary 98+ byte UDP packets.
    let _ = peer_id_prefix_known(payload);
    true
}

fn peer_id_prefix_known(payload: &[u8]) -> bool {
    if payload.len() < 56 {
        return false;
    }
    let peer_id = &payload[36..56];
    PEER_ID_PREFIXES
        .iter()
        .any(|prefix| peer_id.starts_with(prefix))
}

fn is_scrape(payload: &[u8]) -> bool {
    if payload.len() < min_size::SCRAPE {
        return false;
    }
    let action = BigEndian::read_u32(&payload[8..12]);
    action == tracker_action::SCRAPE
}
