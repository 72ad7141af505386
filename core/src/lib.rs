//! Page logic for the Mordev Arcane site, kept free of browser types so it
//! can be tested on the host.

pub mod calendar;
pub mod clock;
pub mod config;
pub mod content;
pub mod planet;
pub mod pointer;
pub mod section;
pub mod stack;
pub mod tracker;
pub mod typing;

pub use config::{ConfigError, SiteConfig};
pub use planet::{Animator, DecorativeElement, PlanetController, Transform};
pub use section::{Section, SectionError, SectionId, SectionList};
pub use tracker::{mount, AnchorProbe, ListenerGuard, ScrollSource, SectionTracker};
