//! HTTP-BitTorrent validator (§4.13).
//!
//! Payload must start with a plain `GET `. Parsed with `httparse` the way
//! a genuine HTTP request would be, rather than hand-rolled line
//! splitting, so the request line and headers are read the same way a
//! real HTTP-speaking peer would see them.

const USER_AGENT_PREFIXES: &[&str] =
    &["Azureus", "BitTorrent", "BTWebClient", "Shareaza", "FlashGet"];

pub fn matches(payload: &[u8]) -> bool {
    if !payload.starts_with(b"GET ") {
        return false;
    }

    let mut headers = [httparse::EMPTY_HEADER; 32];
    let mut req = httparse::Request::new(&mut headers);
    // Parsing can fail on a truncated capture while still having read the
    // request line; `req.path` is populated as soon as that line parses,
    // regardless of the overall result, so it's read unconditionally below.
    let _ = req.parse(payload);

    if let Some(path) = req.path {
        if path.contains("/webseed?info_hash=") {
            return true;
        }
        if path.contains("/data?fid=") && path.contains("&size=") {
            return true;
        }
    } else {
        // httparse refused to parse (e.g. a truncated capture); fall back
        // to a raw substring check over the request line itself so a
        // malformed-but-recognisable capture still gets a verdict.
        if contains(payload, b"GET /webseed?info_hash=")
            || (contains(payload, b"GET /data?fid=") && contains(payload, b"&size="))
        {
            return true;
        }
    }

    req.headers
        .iter()
        .filter(|h| h.name.eq_ignore_ascii_case("User-Agent"))
        .any(|h| {
            let value = std::str::from_utf8(h.value).unwrap_or("");
            USER_AGENT_PREFIXES.iter().any(|p| value.starts_with(p))
        })
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    needle.len() <= haystack.len() && haystack.windows(needle.len()).any(|w| w == needle)
}
