//! Bencode-DHT validator (§4.7, BEP 5).
//!
//! Deliberately not a recursive bencode parser — length-prefixed substring
//! matching (`9:find_node`) is both faster and harder to trip on truncated
//! or adversarial input than a full parse, and preserves the same
//! match/no-match outcomes the spec cares about (§9 design notes).

const DHT_QUERY_METHODS: &[&[u8]] = &[b"4:ping", b"9:find_node", b"9:get_peers", b"13:announce_peer"];

pub fn matches(payload: &[u8]) -> bool {
    if payload.len() < 8 {
        return false;
    }
    if payload[0] != b'd' || payload[payload.len() - 1] != b'e' {
        return false;
    }

    let is_query = contains(payload, b"1:y1:q");
    let is_response = contains(payload, b"1:y1:r");
    let is_error = contains(payload, b"1:y1:e");
    if !(is_query || is_response || is_error) {
        return false;
    }

    let has_dht_key =
        contains(payload, b"1:t") || contains(payload, b"5:nodes") || contains(payload, b"6:values");
    if !has_dht_key {
        return false;
    }

    // A `5:nodes` key with a declared length that fits neither the compact
    // IPv4 nor IPv6 node-info shape is adversarial/malformed; reject the
    // whole payload rather than block on an unverifiable node list.
    if let Some(idx) = find_subslice(payload, b"5:nodes") {
        match parse_nodes_length(&payload[idx + b"5:nodes".len()..]) {
            Some(declared_len) if nodes_length_is_valid(declared_len) => {}
            _ => return false,
        }
    }

    if is_query {
        return DHT_QUERY_METHODS.iter().any(|m| contains(payload, m));
    }

    true
}

/// Validates a `5:nodes<len>:` field's declared length is a multiple of
/// 26 (compact IPv4 node info) or 38 (compact IPv6 node info).
pub fn nodes_length_is_valid(declared_len: usize) -> bool {
    declared_len % 26 == 0 || declared_len % 38 == 0
}

/// Parses the decimal length prefix immediately following a `5:nodes` key,
/// i.e. the `<len>` in `5:nodes<len>:...`. `None` if there's no `:`
/// terminator, no digits before it, or the digits aren't a valid number.
fn parse_nodes_length(after_key: &[u8]) -> Option<usize> {
    let colon = after_key.iter().position(|&b| b == b':')?;
    if colon == 0 {
        return None;
    }
    let digits = &after_key[..colon];
    if !digits.iter().all(u8::is_ascii_digit) {
        return None;
    }
    std::str::from_utf8(digits).ok()?.parse().ok()
}

fn find_subslice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.len() > haystack.len() {
        return None;
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    find_subslice(haystack, needle).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ping_query_matches() {
        let payload = b"d1:ad2:id20:abcdefghij0123456789e1:q4:ping1:t2:aa1:y1:qe";
        assert!(matches(payload));
    }

    #[test]
    fn find_node_query_matches() {
        let payload = b"d1:ad2:id20:abcdefghij01234567899:find_node9:target_ide1:q9:find_node1:t2:aa1:y1:qe";
        assert!(matches(payload));
    }

    #[test]
    fn response_with_nodes_key_matches() {
        let payload = b"d1:rd2:id20:abcdefghij01234567895:nodes0:e1:t2:aa1:y1:re";
        assert!(matches(payload));
    }

    #[test]
    fn query_without_recognised_method_does_not_match() {
        // has 1:y1:q and 1:t but no recognised method name.
        let payload = b"d1:ad2:id20:abcdefghij0123456789e1:q7:unknown1:t2:aa1:y1:qe";
        assert!(!matches(payload));
    }

    #[test]
    fn generic_bencode_without_message_type_marker_does_not_match() {
        let payload = b"d3:foo3:bare";
        assert!(!matches(payload));
    }

    #[test]
    fn payload_not_wrapped_in_d_e_does_not_match() {
        let payload = b"l1:y1:qe";
        assert!(!matches(payload));
    }

    #[test]
    fn too_short_payload_does_not_match() {
        assert!(!matches(b"d1:ae"));
    }

    #[test]
    fn node_list_length_multiple_of_26_is_valid() {
        assert!(nodes_length_is_valid(26));
        assert!(nodes_length_is_valid(52));
    }

    #[test]
    fn node_list_length_multiple_of_38_is_valid() {
        assert!(nodes_length_is_valid(38));
    }

    #[test]
    fn node_list_length_that_fits_neither_shape_is_invalid() {
        assert!(!nodes_length_is_valid(30));
    }

    #[test]
    fn response_with_malformed_nodes_length_does_not_match() {
        // 25 is a valid decimal length prefix but fits neither the compact
        // IPv4 (26) nor IPv6 (38) node-info shape.
        let payload = b"d1:rd2:id20:abcdefghij01234567895:nodes25:e1:t2:aa1:y1:re";
        assert!(!matches(payload));
    }

    #[test]
    fn response_with_valid_nodes_length_matches() {
        let payload = b"d1:rd2:id20:abcdefghij01234567895:nodes26:e1:t2:aa1:y1:re";
        assert!(matches(payload));
    }
}
