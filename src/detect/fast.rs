//! FAST Extension validator (§4.11, BEP 6).

use byteorder::{BigEndian, ByteOrder};

const SUGGEST_PIECE: u8 = 13;
const HAVE_ALL: u8 = 14;
const HAVE_NONE: u8 = 15;
const REJECT_REQUEST: u8 = 16;
const ALLOWED_FAST: u8 = 17;

pub fn matches(payload: &[u8]) -> bool {
    if payload.len() < 5 {
        return false;
    }
    let message_id = payload[4];
    if !(SUGGEST_PIECE..=ALLOWED_FAST).contains(&message_id) {
        return false;
    }

    let expected_len = match message_id {
        SUGGEST_PIECE | ALLOWED_FAST => 5,
        HAVE_ALL | HAVE_NONE => 1,
        REJECT_REQUEST => 13,
        _ => unreachable!("message_id bounded to 13..=17 above"),
    };

    let declared_len = BigEndian::read_u32(&payload[0..4]);
    declared_len == expected_len
}
