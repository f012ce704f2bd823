//! Smooth-scroll maths: anchor parsing, destination offsets and easing.

use std::f64::consts::PI;

/// Extract the same-page anchor id from an `href` attribute.
///
/// Only fragment-only links (`#section1`) point into the current page.
/// Links carrying a path or URL before the fragment navigate elsewhere, and
/// a bare `#` has no target.
#[must_use]
pub fn anchor_target(href: &str) -> Option<&str> {
    let fragment = href.trim().strip_prefix('#')?.trim();
    if fragment.is_empty() {
        None
    } else {
        Some(fragment)
    }
}

/// Vertical scroll position that puts `target_top` just below a fixed
/// navigation bar of `navbar_height` pixels.
#[must_use]
pub fn scroll_destination(target_top: f64, navbar_height: f64) -> f64 {
    (target_top - navbar_height).max(0.0)
}

/// Pixel value of a computed CSS length such as `8px` or `12.5px`.
///
/// Computed styles always resolve lengths to pixels; anything else
/// (`auto`, empty) reads as zero.
#[must_use]
pub fn css_pixels(value: &str) -> f64 {
    value
        .trim()
        .strip_suffix("px")
        .and_then(|number| number.trim().parse::<f64>().ok())
        .filter(|px| px.is_finite())
        .unwrap_or(0.0)
}

/// Content-box height from a `clientHeight` and the vertical paddings.
#[must_use]
pub fn content_height(client_height: f64, padding_top: f64, padding_bottom: f64) -> f64 {
    (client_height - padding_top - padding_bottom).max(0.0)
}

/// "Swing" easing: slow start, fast middle, slow finish.
///
/// `progress` is clamped to `0.0..=1.0`.
#[must_use]
pub fn swing(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    0.5 - (p * PI).cos() / 2.0
}

/// A single eased scroll from one vertical position to another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollPlan {
    pub from: f64,
    pub to: f64,
    pub duration_ms: f64,
}

impl ScrollPlan {
    #[must_use]
    pub fn new(from: f64, to: f64, duration_ms: u32) -> Self {
        Self {
            from,
            to,
            duration_ms: f64::from(duration_ms),
        }
    }

    /// Fraction of the animation completed after `elapsed_ms`.
    #[must_use]
    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Scroll position to apply `elapsed_ms` after the animation started.
    #[must_use]
    pub fn position_at(&self, elapsed_ms: f64) -> f64 {
        let progress = self.progress(elapsed_ms);
        if progress >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * swing(progress)
    }

    #[must_use]
    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        self.progress(elapsed_ms) >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_target_reads_fragment() {
        assert_eq!(anchor_target("#section1"), Some("section1"));
        assert_eq!(anchor_target(" #about "), Some("about"));
    }

    #[test]
    fn anchor_target_rejects_links_to_other_pages() {
        assert_eq!(anchor_target("other.html#about"), None);
        assert_eq!(anchor_target("https://example.com/docs#intro"), None);
        assert_eq!(anchor_target("/#top"), None);
    }

    #[test]
    fn anchor_target_ignores_links_without_fragment() {
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("/contact"), None);
        assert_eq!(anchor_target(""), None);
    }

    #[test]
    fn destination_subtracts_navbar_height() {
        assert!((scroll_destination(1200.0, 64.0) - 1136.0).abs() < f64::EPSILON);
    }

    #[test]
    fn destination_never_goes_above_page_top() {
        assert!(scroll_destination(20.0, 64.0).abs() < f64::EPSILON);
    }

    #[test]
    fn css_pixels_reads_computed_lengths() {
        assert!((css_pixels("8px") - 8.0).abs() < f64::EPSILON);
        assert!((css_pixels(" 12.5px") - 12.5).abs() < f64::EPSILON);
        assert!(css_pixels("auto").abs() < f64::EPSILON);
        assert!(css_pixels("").abs() < f64::EPSILON);
    }

    #[test]
    fn content_height_drops_padding() {
        assert!((content_height(66.0, 8.0, 8.0) - 50.0).abs() < f64::EPSILON);
        assert!(content_height(4.0, 8.0, 8.0).abs() < f64::EPSILON);
    }

    #[test]
    fn swing_hits_endpoints_and_midpoint() {
        assert!(swing(0.0).abs() < 1e-12);
        assert!((swing(0.5) - 0.5).abs() < 1e-12);
        assert!((swing(1.0) - 1.0).abs() < 1e-12);
        assert!((swing(4.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn plan_lands_exactly_on_destination() {
        let plan = ScrollPlan::new(0.0, 836.0, 300);
        assert!(plan.position_at(0.0).abs() < f64::EPSILON);
        assert!((plan.position_at(300.0) - 836.0).abs() < f64::EPSILON);
        assert!((plan.position_at(1_000.0) - 836.0).abs() < f64::EPSILON);
        assert!(plan.is_finished(300.0));
        assert!(!plan.is_finished(299.0));
    }

    #[test]
    fn plan_moves_monotonically_upwards_too() {
        let plan = ScrollPlan::new(900.0, 100.0, 300);
        let mut last = plan.position_at(0.0);
        for step in 1..=30 {
            let next = plan.position_at(f64::from(step) * 10.0);
            assert!(next <= last);
            last = next;
        }
        assert!((last - 100.0).abs() < f64::EPSILON);
    }
}
