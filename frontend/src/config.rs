use arcane_core::content::{site_content, SiteContent};
use arcane_core::SiteConfig;
use once_cell::sync::Lazy;

static EMPTY_CONTENT: Lazy<SiteContent> = Lazy::new(SiteContent::default);

static CONFIG: Lazy<SiteConfig> = Lazy::new(|| {
    SiteConfig::embedded().unwrap_or_else(|e| {
        log::warn!("{}, using defaults", e);
        SiteConfig::default()
    })
});

/// Site tunables, falling back to the built-in defaults when the embedded
/// file is invalid.
pub fn site_config() -> &'static SiteConfig {
    &CONFIG
}

/// Page copy. Renders empty pages rather than panicking if the embedded
/// JSON is broken.
pub fn content() -> &'static SiteContent {
    match site_content() {
        Ok(content) => content,
        Err(e) => {
            log::error!("Failed to load site content: {}", e);
            &EMPTY_CONTENT
        }
    }
}
