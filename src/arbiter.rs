//! The arbiter: ordered evaluation of the detector set (§4.1).
//!
//! The UDP and TCP chains are separate, fixed orders chosen by
//! hit-rate x inverse-cost: cheap, high-yield structural checks run
//! before the linear signature scan, and the two most expensive
//! detectors (MSE, entropy) run last on each chain. First match wins —
//! the arbiter never re-classifies a payload that several detectors
//! would have matched.

use crate::config::DpiConfig;
use crate::detect;
use crate::entropy;
use crate::preprocess;
use crate::types::{AnalysisResult, FlowTuple, ReasonTag};

/// Runs `payload` through the classifier pipeline and returns a verdict.
///
/// `flow` carries the optional destination tuple; only the LSD detector
/// reads it. Absence of either field is "not applicable", never an error.
pub fn analyze(payload: &[u8], is_udp: bool, flow: &FlowTuple, config: &DpiConfig) -> AnalysisResult {
    if payload.is_empty() {
        return AnalysisResult::pass();
    }

    if is_udp {
        analyze_udp(payload, flow, config)
    } else {
        analyze_tcp(payload, config)
    }
}

fn analyze_udp(payload: &[u8], flow: &FlowTuple, config: &DpiConfig) -> AnalysisResult {
    // Unwrap first; the working payload for every subsequent stage is the
    // inner bytes if this succeeds, or the original payload otherwise.
    // The unwrap itself never produces a verdict (§9: not a positive
    // signal on its own).
    let working = match preprocess::strip_socks5_udp_header(payload) {
        Some(inner) => {
            log::trace!("arbiter: SOCKS5 UDP header stripped, {} bytes remain", inner.len());
            inner
        }
        None => {
            log::trace!("arbiter: no SOCKS5 UDP header, payload used as-is");
            payload
        }
    };

    log::trace!("arbiter: running LSD");
    if detect::lsd::matches(working, flow) {
        log::debug!("arbiter: LSD match");
        return AnalysisResult::block(ReasonTag::Lsd);
    }
    log::trace!("arbiter: running uTP");
    if detect::utp::matches(working) {
        log::debug!("arbiter: uTP match");
        return AnalysisResult::block(ReasonTag::UtpProtocol);
    }
    log::trace!("arbiter: running DHT bencode");
    if detect::dht::matches(working) {
        log::debug!("arbiter: DHT bencode match");
        return AnalysisResult::block(ReasonTag::DhtBencode);
    }
    log::trace!("arbiter: running UDP tracker");
    if detect::udp_tracker::matches(working) {
        log::debug!("arbiter: UDP tracker match");
        return AnalysisResult::block(ReasonTag::UdpTrackerProtocol);
    }
    log::trace!("arbiter: running signature scan (udp)");
    if detect::signature_scan::matches(working) {
        log::debug!("arbiter: signature scan match (udp)");
        return AnalysisResult::block(ReasonTag::BitTorrentSignature);
    }
    log::trace!("arbiter: running entropy fallback (udp)");
    if entropy::is_high_entropy(working, config.entropy_threshold, config.min_payload_size) {
        log::debug!("arbiter: entropy fallback match (udp)");
        return AnalysisResult::block(ReasonTag::HighEntropy);
    }

    AnalysisResult::pass()
}

fn analyze_tcp(payload: &[u8], config: &DpiConfig) -> AnalysisResult {
    log::trace!("arbiter: running FAST extension");
    if detect::fast::matches(payload) {
        log::debug!("arbiter: FAST extension match");
        return AnalysisResult::block(ReasonTag::FastExtension);
    }
    log::trace!("arbiter: running peer-wire message structure");
    if detect::message::matches(payload) {
        // Generic peer-wire framing is deliberately loose (§4.12) and
        // would otherwise shadow the more specific signature scan and
        // HTTP-BT checks below it; it's only consulted after those in
        // the real hit-rate x cost ordering described in §4.1... but the
        // spec places it second precisely because most peer traffic
        // carries no signature substring at all. Kept in the documented
        // order.
        log::debug!("arbiter: peer-wire message structure match");
        return AnalysisResult::block(ReasonTag::BitTorrentSignature);
    }
    log::trace!("arbiter: running extended protocol");
    if detect::extended::matches(payload) {
        log::debug!(
            "arbiter: extended protocol match (strong={})",
            detect::extended::is_strong_match(payload)
        );
        return AnalysisResult::block(ReasonTag::ExtendedProtocol);
    }
    log::trace!("arbiter: running HTTP-BitTorrent");
    if detect::http_bt::matches(payload) {
        log::debug!("arbiter: HTTP-BitTorrent match");
        return AnalysisResult::block(ReasonTag::HttpBitTorrent);
    }
    log::trace!("arbiter: running signature scan (tcp)");
    if detect::signature_scan::matches(payload) {
        log::debug!("arbiter: signature scan match (tcp)");
        return AnalysisResult::block(ReasonTag::BitTorrentSignature);
    }
    log::trace!("arbiter: running MSE");
    if detect::mse::matches(payload) {
        log::debug!("arbiter: MSE match");
        return AnalysisResult::block(ReasonTag::MseEncryption);
    }
    log::trace!("arbiter: running SOCKS connection (enabled={})", config.block_socks);
    if config.block_socks && detect::socks_connect::matches(payload) {
        log::debug!("arbiter: SOCKS connection match");
        return AnalysisResult::block(ReasonTag::SocksProxy);
    }
    log::trace!("arbiter: running entropy fallback (tcp)");
    if entropy::is_high_entropy(payload, config.entropy_threshold, config.min_payload_size) {
        log::debug!("arbiter: entropy fallback match (tcp)");
        return AnalysisResult::block(ReasonTag::HighEntropy);
    }

    AnalysisResult::pass()
}
