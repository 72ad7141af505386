use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use crate::planet::DecorativeElement;
use crate::section::{Section, SectionError, SectionId, SectionList};
use crate::tracker::{SectionTracker, DEFAULT_ACTIVATION_RATIO};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid site config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("activation ratio must be in (0, 1], got {0}")]
    InvalidRatio(f64),
    #[error("mobile breakpoint must be positive, got {0}")]
    InvalidBreakpoint(f64),
    #[error(transparent)]
    Sections(#[from] SectionError),
}

/// Tunables for the main page. Every field falls back to its default when
/// missing from the JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteConfig {
    pub sections: Vec<Section>,
    pub focus_section: SectionId,
    pub activation_ratio: f64,
    pub mobile_breakpoint_px: f64,
    pub typing_speed_ms: u64,
    pub dropdown_close_delay_ms: u32,
    pub section_jump_delay_ms: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            sections: vec![
                Section::new("top", 0, "Home"),
                Section::new("services", 1, "Services"),
                Section::new("AboutUs", 2, "About"),
                Section::new("Founder", 3, "Founder"),
                Section::new("Feedback", 4, "Feedback"),
                Section::new("FAQ", 5, "FAQ"),
            ],
            focus_section: SectionId::new("services"),
            activation_ratio: DEFAULT_ACTIVATION_RATIO,
            mobile_breakpoint_px: 1025.0,
            typing_speed_ms: 20,
            dropdown_close_delay_ms: 250,
            section_jump_delay_ms: 100,
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// The `site.json` shipped with the crate.
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_json(include_str!("../data/site.json"))
    }

    pub fn validate(&self) -> Result<SectionList, ConfigError> {
        if !(self.activation_ratio > 0.0 && self.activation_ratio <= 1.0) {
            return Err(ConfigError::InvalidRatio(self.activation_ratio));
        }
        if !(self.mobile_breakpoint_px > 0.0) {
            return Err(ConfigError::InvalidBreakpoint(self.mobile_breakpoint_px));
        }

        let sections = SectionList::new(self.sections.clone())?;
        if !sections.contains(&self.focus_section) {
            return Err(SectionError::UnknownFocus(self.focus_section.clone()).into());
        }
        Ok(sections)
    }

    pub fn build_tracker<D: DecorativeElement>(
        &self,
        element: D,
    ) -> Result<SectionTracker<D>, ConfigError> {
        let sections = self.validate()?;
        let tracker = SectionTracker::new(sections, self.focus_section.clone(), element)?;
        Ok(tracker.with_activation_ratio(self.activation_ratio))
    }

    pub fn typing_speed(&self) -> Duration {
        Duration::from_millis(self.typing_speed_ms)
    }

    pub fn is_mobile(&self, viewport_width: f64) -> bool {
        viewport_width < self.mobile_breakpoint_px
    }
}
