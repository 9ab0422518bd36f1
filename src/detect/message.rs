//! Generic BitTorrent peer-wire message framing validator (§4.12).
//!
//! Catches standard peer traffic on TCP that carries no signature
//! substring: a plausible 4-byte big-endian length prefix paired with a
//! message id in the valid peer-wire range. This is intentionally loose
//! compared to [`crate::detect::fast`] or [`crate::detect::extended`],
//! which check the exact declared length for their specific message ids.

use byteorder::{BigEndian, ByteOrder};

const MAX_MESSAGE_ID: u8 = 21;

pub fn matches(payload: &[u8]) -> bool {
    if payload.len() == 4 && payload == [0, 0, 0, 0] {
        // keep-alive: a valid message with no id byte at all.
        return true;
    }
    if payload.len() < 5 {
        return false;
    }

    let declared_len = BigEndian::read_u32(&payload[0..4]) as usize;
    let message_id = payload[4];

    // The length prefix counts the id byte plus whatever follows it; the
    // payload must be at least that long (it may carry more than one
    // coalesced message, or trailing bytes the capture layer appended).
    if declared_len == 0 || declared_len > payload.len() - 4 {
        return false;
    }

    message_id <= MAX_MESSAGE_ID
}
