use serde::Deserialize;

/// What asked the carousel to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideTrigger {
    /// A click on an indicator dot.
    Manual,
    Autoplay,
    /// Re-aligning the current slide after the viewport changed size.
    Reposition,
}

/// How autoplay reacts to manual navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AutoplayPolicy {
    /// Restart the autoplay interval so the next automatic advance comes a
    /// full interval after the user's choice.
    #[default]
    RestartOnManual,
    /// Keep ticking on the original schedule.
    KeepRunning,
}

impl AutoplayPolicy {
    pub fn restarts_after(self, trigger: SlideTrigger) -> bool {
        matches!(
            (self, trigger),
            (AutoplayPolicy::RestartOnManual, SlideTrigger::Manual)
        )
    }
}

/// Horizontal scroll offset of a slide inside the track.
pub fn slide_offset(index: usize, slide_width: f64, gap: f64) -> f64 {
    index as f64 * (slide_width + gap)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_includes_gap_per_preceding_slide() {
        assert_eq!(slide_offset(0, 320.0, 24.0), 0.0);
        assert_eq!(slide_offset(1, 320.0, 24.0), 344.0);
        assert_eq!(slide_offset(3, 320.0, 24.0), 1032.0);
    }

    #[test]
    fn unmeasured_slides_only_shift_by_gap() {
        assert_eq!(slide_offset(2, 0.0, 24.0), 48.0);
    }

    #[test]
    fn only_manual_navigation_restarts_autoplay() {
        let policy = AutoplayPolicy::RestartOnManual;
        assert!(policy.restarts_after(SlideTrigger::Manual));
        assert!(!policy.restarts_after(SlideTrigger::Autoplay));
        assert!(!policy.restarts_after(SlideTrigger::Reposition));
        assert!(!AutoplayPolicy::KeepRunning.restarts_after(SlideTrigger::Manual));
    }
}
