//! Extended Protocol validator (§4.10, BEP 10).

const MESSAGE_ID_EXTENDED: u8 = 20;

pub fn matches(payload: &[u8]) -> bool {
    if payload.len() < 7 {
        return false;
    }
    if payload[4] != MESSAGE_ID_EXTENDED {
        return false;
    }
    // A bencode dictionary start right after the extended-message id is a
    // strong signal; the bare message-id-20 alone is still accepted as a
    // weaker but specific signal (no other standard message uses id 20).
    true
}

/// True when the payload additionally carries the bencode dictionary
/// marker that makes this a strong rather than bare match.
pub fn is_strong_match(payload: &[u8]) -> bool {
    matches(payload) && payload.len() > 6 && payload[6] == b'd'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extended_message(with_dict: bool) -> Vec<u8> {
        let mut msg = vec![0, 0, 0, 10, MESSAGE_ID_EXTENDED, 0];
        msg.push(if with_dict { b'd' } else { b'x' });
        msg.extend_from_slice(b"rest");
        msg
    }

    #[test]
    fn extended_message_with_dict_start_matches_strongly() {
        let msg = extended_message(true);
        assert!(matches(&msg));
        assert!(is_strong_match(&msg));
    }

    #[test]
    fn bare_extended_message_id_is_still_a_match() {
        let msg = extended_message(false);
        assert!(matches(&msg));
        assert!(!is_strong_match(&msg));
    }

    #[test]
    fn wrong_message_id_does_not_match() {
        let mut msg = extended_message(true);
        msg[4] = 19;
        assert!(!matches(&msg));
    }

    #[test]
    fn too_short_payload_does_not_match() {
        assert!(!matches(&[0, 0, 0, 1, MESSAGE_ID_EXTENDED]));
    }
}
