//! Carousel settings - per-carousel timing and gesture configuration.
//!
//! Settings are plain serde structs. A `SettingsFile` maps carousel names
//! (`"pricing_plans"`, `"event_types"`, `"photo_gallery"`, or any host name)
//! to settings and is stored as JSON.

use crate::constants::{DEFAULT_AUTO_ADVANCE_MS, PRICING_AUTO_ADVANCE_MS};
use crate::error::{CarouselError, CarouselResult, SettingsResult};
use crate::gesture::SwipeThreshold;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

/// Name of the pricing plans preset
pub const PRICING_PLANS: &str = "pricing_plans";
/// Name of the event-type showcase preset
pub const EVENT_TYPES: &str = "event_types";
/// Name of the photo gallery preset
pub const PHOTO_GALLERY: &str = "photo_gallery";

/// Behavior of one carousel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselSettings {
    /// Start advancing on construction
    pub auto_advance: bool,
    /// Interval between automatic advances
    pub auto_advance_interval_ms: u64,
    /// Distance a drag must exceed to navigate
    pub swipe_threshold: SwipeThreshold,
    /// Restart the auto-advance cadence after a settled native scroll
    pub resume_after_scroll: bool,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            auto_advance: true,
            auto_advance_interval_ms: DEFAULT_AUTO_ADVANCE_MS,
            swipe_threshold: SwipeThreshold::default(),
            resume_after_scroll: true,
        }
    }
}

impl CarouselSettings {
    /// Pricing plans carousel: slower cadence, restarts after manual scroll.
    pub fn pricing_plans() -> Self {
        Self {
            auto_advance_interval_ms: PRICING_AUTO_ADVANCE_MS,
            ..Self::default()
        }
    }

    /// Event-type showcase: a manual scroll does not restart the cadence.
    pub fn event_types() -> Self {
        Self {
            resume_after_scroll: false,
            ..Self::default()
        }
    }

    /// Swipeable photo stack: never advances on its own.
    pub fn photo_gallery() -> Self {
        Self {
            auto_advance: false,
            resume_after_scroll: false,
            ..Self::default()
        }
    }

    /// Built-in preset by name
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            PRICING_PLANS => Some(Self::pricing_plans()),
            EVENT_TYPES => Some(Self::event_types()),
            PHOTO_GALLERY => Some(Self::photo_gallery()),
            _ => None,
        }
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.auto_advance_interval_ms)
    }

    pub fn validate(&self) -> CarouselResult<()> {
        if self.auto_advance_interval_ms == 0 {
            return Err(CarouselError::invalid("auto-advance interval must be positive"));
        }
        if !self.swipe_threshold.is_valid() {
            return Err(CarouselError::invalid(format!(
                "swipe threshold must be positive and finite, got {:?}",
                self.swipe_threshold
            )));
        }
        Ok(())
    }
}

/// On-disk collection of named carousel settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SettingsFile {
    #[serde(default)]
    pub carousels: BTreeMap<String, CarouselSettings>,
}

impl SettingsFile {
    /// Load and validate settings from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> SettingsResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let file: SettingsFile = serde_json::from_str(&raw)?;
        for settings in file.carousels.values() {
            settings.validate()?;
        }
        debug!(path = %path.display(), carousels = file.carousels.len(), "settings loaded");
        Ok(file)
    }

    /// Load settings, falling back to built-in defaults on any failure.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(file) => file,
            Err(e) => {
                warn!(path = %path.display(), "Failed to load carousel settings: {}", e);
                Self::default()
            }
        }
    }

    /// Write settings as pretty JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> SettingsResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Settings for `name`: the file entry, then the built-in preset, then
    /// the default.
    pub fn settings_for(&self, name: &str) -> CarouselSettings {
        self.carousels
            .get(name)
            .cloned()
            .or_else(|| CarouselSettings::preset(name))
            .unwrap_or_default()
    }
}

/// Default settings location: `<config dir>/carousel/settings.json`
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("carousel").join("settings.json"))
}
