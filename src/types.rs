use std::fmt;

/// Tag naming which detector produced a positive verdict.
///
/// The arbiter never re-classifies: whichever detector matches first
/// owns the tag, even if a later detector in the chain would also have
/// matched the same payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReasonTag {
    BitTorrentSignature,
    UdpTrackerProtocol,
    UtpProtocol,
    DhtBencode,
    MseEncryption,
    Lsd,
    ExtendedProtocol,
    FastExtension,
    HttpBitTorrent,
    SocksProxy,
    HighEntropy,
    None,
}

impl ReasonTag {
    /// The literal tag string named in the spec, e.g. `"BitTorrent-Signature"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReasonTag::BitTorrentSignature => "BitTorrent-Signature",
            ReasonTag::UdpTrackerProtocol => "UDP-Tracker-Protocol",
            ReasonTag::UtpProtocol => "uTP-Protocol",
            ReasonTag::DhtBencode => "DHT-Bencode",
            ReasonTag::MseEncryption => "MSE-Encryption",
            ReasonTag::Lsd => "LSD",
            ReasonTag::ExtendedProtocol => "Extended-Protocol",
            ReasonTag::FastExtension => "FAST-Extension",
            ReasonTag::HttpBitTorrent => "HTTP-BitTorrent",
            ReasonTag::SocksProxy => "SOCKS-Proxy",
            ReasonTag::HighEntropy => "High-Entropy",
            ReasonTag::None => "None",
        }
    }
}

impl fmt::Display for ReasonTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verdict returned by [`crate::analyze`].
///
/// `reason` is `ReasonTag::None` if and only if `should_block` is false.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisResult {
    pub should_block: bool,
    pub reason: ReasonTag,
}

impl AnalysisResult {
    pub fn block(reason: ReasonTag) -> Self {
        debug_assert_ne!(reason, ReasonTag::None, "a blocking verdict needs a real reason");
        AnalysisResult {
            should_block: true,
            reason,
        }
    }

    pub fn pass() -> Self {
        AnalysisResult {
            should_block: false,
            reason: ReasonTag::None,
        }
    }
}

impl fmt::Display for AnalysisResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.should_block {
            write!(f, "block ({})", self.reason)
        } else {
            write!(f, "pass")
        }
    }
}

/// Destination tuple accompanying a payload; only the LSD detector reads it.
/// Absence of either field means "not applicable", never an error.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FlowTuple {
    pub dst_ip: Option<String>,
    pub dst_port: Option<u16>,
}

impl FlowTuple {
    pub fn new(dst_ip: Option<String>, dst_port: Option<u16>) -> Self {
        FlowTuple { dst_ip, dst_port }
    }

    pub fn none() -> Self {
        FlowTuple::default()
    }
}
