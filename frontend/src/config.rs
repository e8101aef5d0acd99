// Site-wide settings. Timings can be overridden at build time, e.g.
// `VIBE_AUTOPLAY_MS=3000 trunk build`.

const DEFAULT_AUTOPLAY_MS: u32 = 5_000;
const DEFAULT_QUIET_MS: u32 = 10_000;

/// How often the testimonial carousel advances on its own.
pub fn autoplay_interval_ms() -> u32 {
    parse_ms(option_env!("VIBE_AUTOPLAY_MS"), DEFAULT_AUTOPLAY_MS)
}

/// How long the carousel stays paused after the visitor navigates manually.
pub fn quiet_period_ms() -> u32 {
    parse_ms(option_env!("VIBE_QUIET_MS"), DEFAULT_QUIET_MS)
}

pub fn header_scroll_threshold() -> f64 {
    10.0
}

pub fn mobile_breakpoint() -> f64 {
    768.0
}

/// Room left above an anchor target so the fixed header doesn't cover it.
pub fn anchor_scroll_offset() -> f64 {
    100.0
}

pub fn count_up_duration_ms() -> u32 {
    2_000
}

fn parse_ms(raw: Option<&str>, default: u32) -> u32 {
    raw.and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|ms| *ms > 0)
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ms_override() {
        assert_eq!(parse_ms(Some("3000"), DEFAULT_AUTOPLAY_MS), 3000);
        assert_eq!(parse_ms(Some(" 250 "), DEFAULT_AUTOPLAY_MS), 250);
    }

    #[test]
    fn test_parse_ms_falls_back() {
        assert_eq!(parse_ms(None, DEFAULT_QUIET_MS), DEFAULT_QUIET_MS);
        assert_eq!(parse_ms(Some("soon"), DEFAULT_QUIET_MS), DEFAULT_QUIET_MS);
        assert_eq!(parse_ms(Some("0"), DEFAULT_QUIET_MS), DEFAULT_QUIET_MS);
    }
}
