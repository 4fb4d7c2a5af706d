use serde::Deserialize;

use crate::error::Error;
use crate::interactions::carousel::AutoplayPolicy;
use crate::interactions::language::Language;

/// Id of the optional `<script type="application/json">` element that
/// overrides the defaults below.
pub const CONFIG_ELEMENT_ID: &str = "renalflow-config";

/// Timings, thresholds and identifiers used by the interaction layer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Scroll offset past which the navbar gets its `scrolled` style.
    pub navbar_scroll_threshold: f64,
    /// Scroll offset past which the scroll-to-top button is shown.
    pub scroll_top_threshold: f64,
    pub scroll_throttle_ms: f64,
    pub progress_throttle_ms: f64,
    pub resize_debounce_ms: u32,
    /// Space between two slides, matching `--spacing-xl` in the stylesheet.
    pub carousel_gap_px: f64,
    pub carousel_autoplay_ms: u32,
    /// Upper bound for the transition lock when `scrollend` never fires.
    pub carousel_settle_ms: u32,
    pub autoplay_policy: AutoplayPolicy,
    pub stats_duration_ms: u32,
    pub stats_steps: u32,
    pub stats_threshold: f64,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub modal_close_delay_ms: u32,
    pub storage_key: String,
    pub default_language: Language,
    pub farewell_title: String,
    /// Substring identifying download links gated by the consent modal.
    pub download_pattern: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            navbar_scroll_threshold: 100.0,
            scroll_top_threshold: 500.0,
            scroll_throttle_ms: 50.0,
            progress_throttle_ms: 10.0,
            resize_debounce_ms: 250,
            carousel_gap_px: 24.0,
            carousel_autoplay_ms: 5000,
            carousel_settle_ms: 500,
            autoplay_policy: AutoplayPolicy::default(),
            stats_duration_ms: 2000,
            stats_steps: 60,
            stats_threshold: 0.5,
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -100px 0px".to_string(),
            modal_close_delay_ms: 500,
            storage_key: "renalflow-lang".to_string(),
            default_language: Language::Arabic,
            farewell_title: "نفتقدك! عد لـ RenalFlow 🏥".to_string(),
            download_pattern: "app-release.apk".to_string(),
        }
    }
}

impl Config {
    pub fn from_json(raw: &str) -> Result<Self, Error> {
        let config: Config = serde_json::from_str(raw)?;
        Ok(config.sanitized())
    }

    /// Reads the embedded configuration element, falling back to defaults
    /// when it is absent or malformed.
    pub fn from_document() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match raw {
            Some(raw) if !raw.trim().is_empty() => Self::from_json(&raw).unwrap_or_else(|e| {
                log::warn!("Ignoring page configuration: {}", e);
                Self::default()
            }),
            _ => Self::default(),
        }
    }

    /// Step interval of the stat counter animation.
    pub fn stats_step_ms(&self) -> u32 {
        (self.stats_duration_ms / self.stats_steps).max(1)
    }

    fn sanitized(mut self) -> Self {
        if self.stats_steps == 0 {
            self.stats_steps = Self::default().stats_steps;
        }
        self.stats_threshold = self.stats_threshold.clamp(0.0, 1.0);
        self.reveal_threshold = self.reveal_threshold.clamp(0.0, 1.0);
        self
    }
}
