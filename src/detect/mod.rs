//! The eleven detectors (§4). Each module holds one cohesive protocol
//! concern and exposes a pure `matches(...) -> bool` (or, for LSD, a
//! `matches(payload, &FlowTuple) -> bool`) predicate with no shared
//! state and no heap allocation of its own.

pub mod dht;
pub mod extended;
pub mod fast;
pub mod http_bt;
pub mod lsd;
pub mod message;
pub mod mse;
pub mod signature_scan;
pub mod socks_connect;
pub mod udp_tracker;
pub mod utp;
