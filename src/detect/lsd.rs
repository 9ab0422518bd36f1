//! Local Service Discovery validator (§4.9, BEP 14).
//!
//! The only detector that reads the flow tuple — everything else ignores
//! destination IP/port entirely.

use crate::signatures::{LSD_MULTICAST_V4, LSD_MULTICAST_V6, LSD_PORT};
use crate::types::FlowTuple;

pub fn matches(payload: &[u8], flow: &FlowTuple) -> bool {
    destination_is_lsd_multicast(flow)
        || contains(payload, b"BT-SEARCH * HTTP/1.1")
        || host_header_points_at_multicast(payload)
        || (contains(payload, b"Infohash:") && contains(payload, b"Port:"))
}

fn destination_is_lsd_multicast(flow: &FlowTuple) -> bool {
    let (Some(ip), Some(port)) = (flow.dst_ip.as_deref(), flow.dst_port) else {
        return false;
    };
    port == LSD_PORT && (ip == LSD_MULTICAST_V4 || ip == LSD_MULTICAST_V6)
}

fn host_header_points_at_multicast(payload: &[u8]) -> bool {
    let needle = format!("Host: {}:{}", LSD_MULTICAST_V4, LSD_PORT);
    contains(payload, needle.as_bytes())
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    needle.len() <= haystack.len() && haystack.windows(needle.len()).any(|w| w == needle)
}
