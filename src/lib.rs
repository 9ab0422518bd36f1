//! BitTorrent deep packet inspection core.
//!
//! A stateless, per-packet classifier: given a transport payload and a
//! minimal flow tuple, decide whether the packet carries BitTorrent-family
//! traffic and, if so, why. See `SPEC_FULL.md` at the repository root for
//! the full design; this crate implements exactly the pipeline described
//! there — packet capture, IP blocklist storage, and CLI/config plumbing
//! are the surrounding application's job, not this crate's.

pub mod arbiter;
pub mod config;
pub mod detect;
pub mod entropy;
pub mod preprocess;
pub mod signatures;
pub mod types;

pub use config::{ConfigError, DpiConfig};
pub use types::{AnalysisResult, FlowTuple, ReasonTag};

/// Classifies a single payload. See [`arbiter::analyze`] for the pipeline
/// this delegates to.
pub fn analyze(payload: &[u8], is_udp: bool, flow: &FlowTuple, config: &DpiConfig) -> AnalysisResult {
    arbiter::analyze(payload, is_udp, flow, config)
}
