//! Static, process-wide signature tables.
//!
//! Everything here is a `const`/`static` table, built once at compile time
//! and read-only for the lifetime of the process — no initialisation order
//! to worry about, no locking to share it across threads.

/// Magic constant for the UDP tracker protocol (BEP 15).
pub const UDP_TRACKER_PROTOCOL_ID: u64 = 0x0000_0417_2710_1980;

/// UDP tracker action codes, as carried in the `action` field of every
/// connect/announce/scrape request and response.
pub mod tracker_action {
    pub const CONNECT: u32 = 0;
    pub const ANNOUNCE: u32 = 1;
    pub const SCRAPE: u32 = 2;
    pub const ERROR: u32 = 3;
}

/// Minimum wire sizes for the three UDP tracker packet shapes (§4.5).
pub mod min_size {
    pub const CONNECT: usize = 16;
    pub const SCRAPE: usize = 36;
    pub const ANNOUNCE: usize = 98;
}

/// STUN magic cookie, checked at offset 4 of every modern STUN packet.
/// Used here purely as a negative signal: any UDP payload carrying it is
/// never uTP and never MSE, full stop (§4.6, §4.9 exclusion is absolute).
pub const STUN_MAGIC_COOKIE: [u8; 4] = [0x21, 0x12, 0xa4, 0x42];
pub const STUN_MAGIC_COOKIE_OFFSET: usize = 4;

/// Local Service Discovery multicast endpoints (BEP 14).
pub const LSD_MULTICAST_V4: &str = "239.192.152.143";
pub const LSD_MULTICAST_V6: &str = "ff15::efc0:988f";
pub const LSD_PORT: u16 = 6771;

/// Default whitelist ports, consumed by the upstream gate — documented
/// here for completeness, not read by any detector in this crate.
pub const DEFAULT_WHITELIST_PORTS: &[u16] = &[22, 53, 80, 443, 853, 5222, 5269];

/// Byte-string signatures scanned for by the linear signature scan
/// (§4.2). Order only matters for performance (earlier entries are
/// slightly more likely to be hit first on typical traffic), never for
/// semantics — any matching entry produces the same `BitTorrent-Signature`
/// verdict.
///
/// Deliberately excludes overly generic strings like `"info_hash"` — the
/// teacher repo's own `serde_bencode` field names would otherwise produce
/// false positives on nearly every torrent-adjacent binary protocol.
pub const BT_SIGNATURES: &[&[u8]] = &[
    // Peer-wire handshake preamble.
    b"\x13BitTorrent protocol",
    // Bencode dictionary keys, length-prefixed the way they appear on
    // the wire rather than bare words (`9:find_node`, not `find_node`) —
    // this is what keeps the table specific instead of generic.
    b"d1:ad2:id20:",
    b"9:find_node",
    b"9:get_peers",
    b"13:announce_peer",
    b"4:ping",
    b"1:q4:ping",
    b"1:rd2:id20:",
    b"5:nodes",
    b"6:values",
    b"1:t",
    b"1:y1:q",
    b"1:y1:r",
    b"1:y1:e",
    // BEP 3 / magnet-adjacent fragments.
    b"announce_peer",
    b"compact",
    b"8:peer id20:",
    b"8:uploaded",
    b"10:downloaded",
    b"4:left",
    b"6:events",
    b"4:portL",
    // BEP 9 metadata exchange / BEP 10 extended handshake keys.
    b"ut_metadata",
    b"ut_pex",
    b"metadata_size",
    b"11:upload_only",
    b"1:md11:ut_metadata",
    // BitTorrent v2 (BEP 52) keys.
    b"12:piece layers",
    b"9:meta veri",
    b"file tree",
    // Magnet / URL fragments that show up in HTTP and DHT traffic alike.
    b"magnet:?xt=urn:btih:",
    b"xt=urn:btih:",
    b"urn:btmh:",
    // HTTP BitTorrent client/user-agent prefixes (§4.13 complements this
    // with structural checks; the raw strings still catch plain GETs the
    // structural check doesn't special-case).
    b"User-Agent: Azureus",
    b"User-Agent: BitTorrent",
    b"User-Agent: BTWebClient",
    b"User-Agent: Shareaza",
    b"User-Agent: FlashGet",
    b"GET /webseed?info_hash=",
    b"GET /announce?info_hash=",
    b"GET /scrape?info_hash=",
    b"GET /data?fid=",
    // LSD (BEP 14) literal lines.
    b"BT-SEARCH * HTTP/1.1",
    b"Infohash:",
    b"Port:",
    // Common tracker error strings seen across implementations.
    b"d14:failure reason",
    b"15:warning message",
];

/// Known client peer-id prefixes (Azureus `-XX####-` style plus legacy
/// non-Azureus forms). A strong but not required signal inside the UDP
/// tracker announce validator (§4.5).
pub const PEER_ID_PREFIXES: &[&[u8]] = &[
    // Azureus-style two-letter client codes.
    b"-AZ", b"-UT", b"-TR", b"-DE", b"-LT", b"-qB", b"-BC", b"-KT", b"-BT",
    b"-TS", b"-WW", b"-SD", b"-XL", b"-QD", b"-FC", b"-FD", b"-LP", b"-lt",
    b"-UL", b"-UM", b"-UW", b"-VG", b"-WT", b"-XF", b"-XT", b"-XX", b"-ZO",
    b"-A2", b"-AG", b"-AR", b"-AX", b"-BB", b"-BF", b"-BG", b"-BI", b"-BN",
    b"-BOW", b"-CD", b"-CT", b"-DP", b"-EB", b"-ES", b"-FT", b"-G3", b"-GR",
    b"-GS", b"-HK", b"-HL", b"-HN", b"-JS", b"-KG", b"-LC", b"-LH", b"-ML",
    b"-MR", b"-NX", b"-OS", b"-PD", b"-PI", b"-RT",
    // Non-Azureus legacy forms.
    b"M4-", b"exbc", b"XBT", b"OP", b"-G2",
];
