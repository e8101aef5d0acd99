//! Arithmetic behind the page's animations. Components turn these numbers
//! into inline styles; the browser does the actual interpolation.

/// Delay (seconds) for the `index`-th element of a staggered group.
pub fn stagger_delay(index: usize, step_secs: f64) -> f64 {
    index as f64 * step_secs
}

/// Inline style for a fade-and-rise reveal.
pub fn reveal_style(visible: bool, delay_secs: f64, duration_secs: f64, rise_px: f64) -> String {
    let (opacity, offset) = if visible { (1.0, 0.0) } else { (0.0, rise_px) };
    format!(
        "opacity: {}; transform: translateY({}px); transition: opacity {d}s ease {delay}s, transform {d}s ease {delay}s;",
        opacity,
        offset,
        d = duration_secs,
        delay = delay_secs,
    )
}

/// How far (0..=1) a section has scrolled past the top of the viewport,
/// given its bounding-rect `top` and `height`.
pub fn scroll_progress(top: f64, height: f64) -> f64 {
    if height <= 0.0 {
        return 0.0;
    }
    (-top / height).clamp(0.0, 1.0)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parallax {
    pub offset_y: f64,
    pub opacity: f64,
}

/// Hero parallax: content drifts down up to 150px over the full progress and
/// fades out over the first half.
pub fn parallax(progress: f64) -> Parallax {
    let progress = progress.clamp(0.0, 1.0);
    Parallax {
        offset_y: progress * 150.0,
        opacity: (1.0 - progress / 0.5).clamp(0.0, 1.0),
    }
}

/// Exponential ease-out normalised so that `ease_out_expo(1.0) == 1.0`.
pub fn ease_out_expo(t: f64) -> f64 {
    if t <= 0.0 {
        0.0
    } else if t >= 1.0 {
        1.0
    } else {
        (1.0 - 2f64.powf(-10.0 * t)) * 1024.0 / 1023.0
    }
}

/// Counter value `elapsed_ms` into a count-up of `duration_ms`.
pub fn count_up_value(target: u64, elapsed_ms: u32, duration_ms: u32) -> u64 {
    if duration_ms == 0 || elapsed_ms >= duration_ms {
        return target;
    }
    let t = f64::from(elapsed_ms) / f64::from(duration_ms);
    let value = (target as f64 * ease_out_expo(t)).round() as u64;
    value.min(target)
}

/// Seconds for a marquee track `track_px` wide to scroll by at `speed`
/// pixels per second.
pub fn marquee_duration_secs(track_px: f64, speed: f64) -> f64 {
    if speed <= 0.0 {
        return 0.0;
    }
    track_px / speed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_delay() {
        assert_eq!(stagger_delay(0, 0.15), 0.0);
        assert!((stagger_delay(2, 0.15) - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_reveal_style_hidden_and_visible() {
        let hidden = reveal_style(false, 0.1, 0.5, 20.0);
        assert!(hidden.starts_with("opacity: 0; transform: translateY(20px)"));
        let shown = reveal_style(true, 0.1, 0.5, 20.0);
        assert!(shown.starts_with("opacity: 1; transform: translateY(0px)"));
        assert!(shown.contains("opacity 0.5s ease 0.1s"));
    }

    #[test]
    fn test_scroll_progress_clamps() {
        assert_eq!(scroll_progress(100.0, 800.0), 0.0);
        assert_eq!(scroll_progress(-400.0, 800.0), 0.5);
        assert_eq!(scroll_progress(-2000.0, 800.0), 1.0);
        assert_eq!(scroll_progress(-10.0, 0.0), 0.0);
    }

    #[test]
    fn test_parallax_endpoints() {
        assert_eq!(parallax(0.0), Parallax { offset_y: 0.0, opacity: 1.0 });
        assert_eq!(parallax(0.25).opacity, 0.5);
        assert_eq!(parallax(0.5).opacity, 0.0);
        assert_eq!(parallax(1.0).offset_y, 150.0);
    }

    #[test]
    fn test_ease_out_expo_endpoints_and_monotonic() {
        assert_eq!(ease_out_expo(0.0), 0.0);
        assert_eq!(ease_out_expo(1.0), 1.0);
        let mut last = 0.0;
        for step in 1..=10 {
            let v = ease_out_expo(step as f64 / 10.0);
            assert!(v >= last);
            last = v;
        }
    }

    #[test]
    fn test_count_up_value() {
        assert_eq!(count_up_value(89, 0, 2000), 0);
        assert_eq!(count_up_value(89, 2000, 2000), 89);
        assert_eq!(count_up_value(89, 5000, 2000), 89);
        let mid = count_up_value(89, 1000, 2000);
        assert!(mid > 44 && mid < 89, "ease-out should be ahead of linear, got {}", mid);
    }

    #[test]
    fn test_marquee_duration() {
        assert_eq!(marquee_duration_secs(900.0, 30.0), 30.0);
        assert_eq!(marquee_duration_secs(900.0, 0.0), 0.0);
    }
}
