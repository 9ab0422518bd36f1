//! Shannon entropy over a byte window (§4.14).
//!
//! Used both as a standalone last-resort detector (threshold 7.6 over the
//! full payload) and as a sub-predicate inside the MSE validator
//! (threshold 6.5 over a 96-byte Diffie-Hellman public key window).

/// Shannon entropy of `data`, in bits per byte, domain `[0, 8]`.
///
/// Empty input has zero entropy by convention (there's nothing to be
/// uncertain about). The 256-entry histogram lives on the stack; this
/// function allocates nothing on the heap.
pub fn shannon_entropy(data: &[u8]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }

    let mut histogram = [0u32; 256];
    for &byte in data {
        histogram[byte as usize] += 1;
    }

    let len = data.len() as f64;
    histogram
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / len;
            -p * p.log2()
        })
        .sum()
}

/// Standalone entropy detector: blocks if `data.len() >= min_payload_size`
/// and the payload's entropy exceeds `threshold`. Below the minimum size
/// the fallback is skipped entirely to avoid amplifying noise from short
/// payloads (a 4-byte payload can trivially read as "high entropy").
pub fn is_high_entropy(data: &[u8], threshold: f64, min_payload_size: usize) -> bool {
    if data.len() < min_payload_size {
        return false;
    }
    shannon_entropy(data) > threshold
}
