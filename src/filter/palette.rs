//! Maps addresses to highlight colors.
//!
//! The color is a function of the address segments, so every occurrence of
//! the same address renders in the same color and different addresses tend
//! to get visibly different colors.

/// Lowest value any channel may take. Keeps derived colors clear of the
/// near-black range where the underline would be hard to see.
const CHANNEL_MIN: u32 = 70;
const CHANNEL_RANGE: u32 = 185;

/// Derives the color for a dot-separated decimal IPv4 address.
pub fn ipv4_color(addr: &str) -> (u8, u8, u8) {
    let segments: Vec<u32> = addr
        .split('.')
        .filter_map(|seg| seg.parse().ok())
        .collect();
    color_for_segments(&segments)
}

/// Derives the color for a colon-separated hexadecimal IPv6 address.
pub fn ipv6_color(addr: &str) -> (u8, u8, u8) {
    let segments: Vec<u32> = addr
        .split(':')
        .filter_map(|seg| u32::from_str_radix(seg, 16).ok())
        .collect();
    color_for_segments(&segments)
}

/// Folds the address segments into the three RGB channels round-robin.
/// The segment position participates in the fold so that permutations of
/// the same segments do not collapse onto one color.
fn color_for_segments(segments: &[u32]) -> (u8, u8, u8) {
    let mut acc = [0u32; 3];
    for (i, &seg) in segments.iter().enumerate() {
        acc[i % 3] = acc[i % 3].wrapping_add(seg + i as u32);
    }

    let channel = |sum: u32| (sum % CHANNEL_RANGE + CHANNEL_MIN) as u8;
    (channel(acc[0]), channel(acc[1]), channel(acc[2]))
}
