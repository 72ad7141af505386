use arcane_core::planet::{scrubbed_transform, SCRUB_PATH};
use arcane_core::section::{Section, SectionId};
use arcane_core::{mount, PlanetController};
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

use crate::browser::{listen_window, StyleAnimator, WindowScroll};
use crate::components::brands_marquee::BrandsMarquee;
use crate::components::footer::Footer;
use crate::components::planet::Planet;
use crate::components::story_scroll::StoryScroll;
use crate::config::site_config;
use crate::pages::about_us::AboutUs;
use crate::pages::faq::Faq;
use crate::pages::feedback::Feedback;
use crate::pages::founder::Founder;
use crate::pages::homepage::Homepage;
use crate::pages::services::Services;

/// The long scrolling landing page. Owns the section tracker: the rail
/// highlight and the planet both follow it.
#[function_component(MainPage)]
pub fn main_page() -> Html {
    let config = site_config();
    let sections = use_memo(
        |_| match config.validate() {
            Ok(list) => list.iter().cloned().collect::<Vec<Section>>(),
            Err(e) => {
                log::error!("Invalid section configuration: {}", e);
                Vec::new()
            }
        },
        (),
    );
    let active = use_state(|| {
        sections
            .first()
            .map(|s| s.id.clone())
            .unwrap_or_else(|| SectionId::new("top"))
    });
    let planet_ref = use_node_ref();

    {
        let planet_ref = planet_ref.clone();
        let active = active.clone();
        use_effect_with_deps(
            move |_| -> Box<dyn FnOnce()> {
                let planet = Rc::new(PlanetController::new(StyleAnimator::new(planet_ref)));
                let mut tracker = match config.build_tracker(planet.clone()) {
                    Ok(tracker) => tracker,
                    Err(e) => {
                        log::error!("Section tracker not started: {}", e);
                        return Box::new(|| ());
                    }
                };
                tracker.on_change(move |section| active.set(section.id.clone()));

                let tracker = Rc::new(RefCell::new(tracker));
                let source = Rc::new(WindowScroll);
                let guard = mount(&tracker, &source);

                // registered after the tracker so a reset in the same scroll
                // event is followed by the scrubbed position
                let scrub = move || planet.scrub(scrubbed_transform(&SCRUB_PATH, &WindowScroll));
                scrub();
                let scrub_guard = listen_window("scroll", Box::new(scrub));
                log::debug!("Section tracker mounted");

                Box::new(move || {
                    drop(scrub_guard);
                    drop(guard);
                    drop(tracker);
                    drop(source);
                    log::debug!("Section tracker unmounted");
                })
            },
            (),
        );
    }

    html! {
        <div class="main-page">
            <StoryScroll sections={(*sections).clone()} active={(*active).clone()} />

            <section id="top"><Homepage /></section>
            <section id="services"><Services /></section>
            <section id="AboutUs"><AboutUs /></section>
            <section id="Founder"><Founder /></section>
            <section id="Feedback"><Feedback /></section>
            <section id="Brand"><BrandsMarquee /></section>
            <section id="FAQ"><Faq /></section>
            <section id="footer"><Footer /></section>

            <Planet {planet_ref} mobile_breakpoint_px={config.mobile_breakpoint_px} />
        </div>
    }
}
