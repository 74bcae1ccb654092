use super::engine::FilterOptions;
use super::palette;
use colored::Colorize;
use regex::bytes::{Captures, Regex};

/// Substring match, no range validation: `99:99:99` is a timestamp.
const TIMESTAMP_PATTERN: &str = r"\d{2}:\d{2}:\d{2}";
const IPV4_PATTERN: &str = r"\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}";
/// Exact eight-group form only; compressed `::` notation is not recognized.
const IPV6_PATTERN: &str = r"[0-9A-Fa-f]{1,4}(?::[0-9A-Fa-f]{1,4}){7}";

/// Composite content matcher over the enabled patterns.
///
/// The enabled patterns are combined into a single alternation with named
/// groups, so one left-to-right scan both decides whether the line is kept
/// and tells which pattern produced each match for styling purposes. A line
/// is kept if at least one enabled pattern matches anywhere in it.
pub struct LineMatcher {
    pattern: Regex,
}

impl LineMatcher {
    /// Builds the matcher for the enabled content filters, or `None` when no
    /// content filter is enabled (lines pass through untouched).
    pub fn from_options(opts: &FilterOptions) -> Option<Self> {
        let mut alternatives = Vec::new();
        if opts.timestamps {
            alternatives.push(format!("(?P<ts>{TIMESTAMP_PATTERN})"));
        }
        if opts.ipv4 {
            alternatives.push(format!("(?P<ipv4>{IPV4_PATTERN})"));
        }
        if opts.ipv6 {
            alternatives.push(format!("(?P<ipv6>{IPV6_PATTERN})"));
        }

        if alternatives.is_empty() {
            return None;
        }

        let pattern =
            Regex::new(&alternatives.join("|")).expect("valid composite filter regex");
        Some(LineMatcher { pattern })
    }

    /// Renders a line through the matcher: `None` if no enabled pattern
    /// matched (the line is dropped), otherwise the line with every address
    /// match wrapped in its highlight. Timestamp matches select the line but
    /// are left unstyled.
    pub fn render(&self, line: &[u8]) -> Option<Vec<u8>> {
        let mut out = Vec::with_capacity(line.len());
        let mut tail_start = 0;
        let mut matched = false;

        for caps in self.pattern.captures_iter(line) {
            let whole = caps.get(0).expect("group 0 is always present");
            matched = true;
            out.extend_from_slice(&line[tail_start..whole.start()]);
            out.extend_from_slice(&style_match(&caps, whole.as_bytes()));
            tail_start = whole.end();
        }

        if !matched {
            return None;
        }

        out.extend_from_slice(&line[tail_start..]);
        Some(out)
    }
}

fn style_match(caps: &Captures<'_>, text: &[u8]) -> Vec<u8> {
    // The address patterns only match ASCII, so this cannot fail for the
    // styled branches; anything else passes through as-is.
    let Ok(text_str) = std::str::from_utf8(text) else {
        return text.to_vec();
    };

    let color = if caps.name("ipv4").is_some() {
        palette::ipv4_color(text_str)
    } else if caps.name("ipv6").is_some() {
        palette::ipv6_color(text_str)
    } else {
        return text.to_vec();
    };

    let (r, g, b) = color;
    text_str
        .truecolor(r, g, b)
        .underline()
        .to_string()
        .into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher(timestamps: bool, ipv4: bool, ipv6: bool) -> LineMatcher {
        let opts = FilterOptions {
            timestamps,
            ipv4,
            ipv6,
            ..FilterOptions::default()
        };
        LineMatcher::from_options(&opts).expect("at least one filter enabled")
    }

    fn render_plain(m: &LineMatcher, line: &[u8]) -> Option<Vec<u8>> {
        colored::control::set_override(false);
        m.render(line)
    }

    #[test]
    fn test_no_content_filter_means_no_matcher() {
        assert!(LineMatcher::from_options(&FilterOptions::default()).is_none());
    }

    #[test]
    fn test_timestamp_matches_as_substring() {
        let m = matcher(true, false, false);
        let line = b"worker restarted at 12:43:00 cleanly";
        assert_eq!(render_plain(&m, line), Some(line.to_vec()));
    }

    #[test]
    fn test_timestamp_has_no_range_validation() {
        let m = matcher(true, false, false);
        assert!(render_plain(&m, b"bogus clock 99:99:99 accepted").is_some());
    }

    #[test]
    fn test_line_without_timestamp_is_dropped() {
        let m = matcher(true, false, false);
        assert_eq!(render_plain(&m, b"no clock here 12:43"), None);
    }

    #[test]
    fn test_ipv4_match_boundaries_are_exact() {
        let m = matcher(false, true, false);
        colored::control::set_override(false);
        let rendered = m.render(b"connect from 10.0.0.1 failed").expect("line kept");
        // With colors disabled the highlight collapses to the bare address.
        assert_eq!(rendered, b"connect from 10.0.0.1 failed".to_vec());
    }

    #[test]
    fn test_ipv4_groups_are_not_range_validated() {
        let m = matcher(false, true, false);
        assert!(render_plain(&m, b"odd address 999.999.999.999 seen").is_some());
    }

    #[test]
    fn test_ipv6_full_form_matches() {
        let m = matcher(false, false, true);
        assert!(
            render_plain(&m, b"fe80:0000:0000:0000:0204:61ff:fe9d:f156 up").is_some()
        );
    }

    #[test]
    fn test_ipv6_compressed_form_is_not_recognized() {
        let m = matcher(false, false, true);
        assert_eq!(render_plain(&m, b"loopback ::1 up"), None);
        assert_eq!(render_plain(&m, b"fe80::1 also compressed"), None);
    }

    #[test]
    fn test_filters_or_combine() {
        let m = matcher(true, true, false);
        assert!(render_plain(&m, b"only a clock 01:02:03").is_some());
        assert!(render_plain(&m, b"only an address 10.0.0.1").is_some());
        assert_eq!(render_plain(&m, b"neither of the two"), None);
    }

    #[test]
    fn test_every_occurrence_is_matched() {
        let m = matcher(false, true, false);
        let line = b"hop 10.0.0.1 then 192.168.1.9 done";
        assert_eq!(render_plain(&m, line), Some(line.to_vec()));
    }

    #[test]
    fn test_invalid_utf8_around_match_passes_through() {
        let m = matcher(false, true, false);
        let line = b"from 10.0.0.1 \xff\xfe raw bytes";
        assert_eq!(render_plain(&m, line), Some(line.to_vec()));
    }
}
