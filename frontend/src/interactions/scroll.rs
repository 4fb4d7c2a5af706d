/// Scroll position and extents of the page, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub document_height: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    /// Fraction of the scrollable distance covered, in `[0, 1]`. A page
    /// that does not scroll reports 0.
    pub fn progress(&self) -> f64 {
        let scrollable = self.document_height - self.viewport_height;
        if scrollable <= 0.0 || !scrollable.is_finite() {
            return 0.0;
        }
        (self.scroll_top / scrollable).clamp(0.0, 1.0)
    }
}

pub fn navbar_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

pub fn scroll_top_visible(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Selector of the element a same-page link points to, or `None` for a
/// bare `#` and links that are not fragments.
pub fn fragment_target(href: &str) -> Option<&str> {
    match href {
        "#" => None,
        h if h.starts_with('#') => Some(h),
        _ => None,
    }
}

/// Window offset that puts the target right below the fixed navbar.
pub fn anchor_offset(target_offset_top: f64, navbar_height: f64) -> f64 {
    (target_offset_top - navbar_height).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_page_reports_zero_progress() {
        let metrics = ScrollMetrics {
            scroll_top: 0.0,
            document_height: 800.0,
            viewport_height: 800.0,
        };
        assert_eq!(metrics.progress(), 0.0);
    }

    #[test]
    fn progress_is_scroll_over_scrollable_height() {
        let metrics = ScrollMetrics {
            scroll_top: 300.0,
            document_height: 2000.0,
            viewport_height: 800.0,
        };
        assert!((metrics.progress() - 0.25).abs() < 1e-9);
    }

    #[test]
    fn overscroll_is_clamped() {
        let bounce = ScrollMetrics {
            scroll_top: -40.0,
            document_height: 2000.0,
            viewport_height: 800.0,
        };
        assert_eq!(bounce.progress(), 0.0);
        let past_end = ScrollMetrics {
            scroll_top: 1300.0,
            ..bounce
        };
        assert_eq!(past_end.progress(), 1.0);
    }

    #[test]
    fn thresholds_are_exclusive() {
        assert!(!navbar_scrolled(100.0, 100.0));
        assert!(navbar_scrolled(100.5, 100.0));
        assert!(!scroll_top_visible(500.0, 500.0));
        assert!(scroll_top_visible(501.0, 500.0));
    }

    #[test]
    fn fragments() {
        assert_eq!(fragment_target("#"), None);
        assert_eq!(fragment_target("#features"), Some("#features"));
        assert_eq!(fragment_target("/about"), None);
    }

    #[test]
    fn anchor_offset_accounts_for_navbar() {
        assert_eq!(anchor_offset(1200.0, 80.0), 1120.0);
        assert_eq!(anchor_offset(40.0, 80.0), 0.0);
    }
}
