use arcane_core::planet::{Animator, Easing, Transform};
use arcane_core::section::SectionId;
use arcane_core::tracker::{AnchorProbe, ListenerGuard, ScrollSource};
use std::time::Duration;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement};
use yew::prelude::*;

use crate::config::site_config;

/// Adds a window event listener for as long as the returned guard lives.
pub fn listen_window(event: &'static str, handler: Box<dyn Fn()>) -> ListenerGuard {
    let Some(window) = window() else {
        return ListenerGuard::noop();
    };

    let callback = Closure::<dyn Fn()>::new(move || handler());
    if let Err(e) = window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
        log::error!("Failed to add {} listener: {:?}", event, e);
        return ListenerGuard::noop();
    }

    ListenerGuard::new(move || {
        if let Some(win) = web_sys::window() {
            if let Err(e) =
                win.remove_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            {
                log::warn!("Failed to remove {} listener: {:?}", event, e);
            }
        }
    })
}

pub fn viewport_width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub fn scroll_to_top() {
    if let Some(window) = window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

pub fn scroll_to_section(id: &str) {
    match window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(id))
    {
        Some(element) => element.scroll_into_view_with_bool(true),
        None => log::debug!("No element #{} to scroll to", id),
    }
}

pub fn alert(message: &str) {
    if let Some(window) = window() {
        if let Err(e) = window.alert_with_message(message) {
            log::warn!("Failed to show alert: {:?}", e);
        }
    }
}

/// The browser window as a scroll source; anchors are looked up by DOM id.
pub struct WindowScroll;

impl AnchorProbe for WindowScroll {
    fn viewport_height(&self) -> f64 {
        window()
            .and_then(|w| w.inner_height().ok())
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0)
    }

    fn anchor_top(&self, id: &SectionId) -> Option<f64> {
        let element = window()?.document()?.get_element_by_id(id.as_str())?;
        Some(element.get_bounding_client_rect().top())
    }
}

impl ScrollSource for WindowScroll {
    fn subscribe(&self, handler: Box<dyn Fn()>) -> ListenerGuard {
        listen_window("scroll", handler)
    }
}

/// Plays transforms through inline CSS transitions on a referenced element.
pub struct StyleAnimator {
    target: NodeRef,
}

impl StyleAnimator {
    pub fn new(target: NodeRef) -> Self {
        Self { target }
    }

    fn apply(&self, transition: &str, to: &Transform) {
        // unmounted target: nothing to animate
        let Some(element) = self.target.cast::<HtmlElement>() else {
            return;
        };
        let style = element.style();
        if let Err(e) = style
            .set_property("transition", transition)
            .and_then(|_| style.set_property("transform", &to.to_css()))
        {
            log::warn!("Failed to apply transform: {:?}", e);
        }
    }
}

impl Animator for StyleAnimator {
    fn tween(&self, to: Transform, duration: Duration, easing: Easing) {
        let transition = format!("transform {}s {}", duration.as_secs_f64(), easing.css());
        self.apply(&transition, &to);
    }

    fn set(&self, to: Transform) {
        self.apply("none", &to);
    }
}

#[hook]
pub fn use_viewport_width() -> f64 {
    let width = use_state_eq(viewport_width);
    {
        let width = width.clone();
        use_effect_with_deps(
            move |_| {
                let guard = listen_window("resize", Box::new(move || width.set(viewport_width())));
                move || drop(guard)
            },
            (),
        );
    }
    *width
}

#[hook]
pub fn use_is_mobile() -> bool {
    site_config().is_mobile(use_viewport_width())
}

/// True once the page has scrolled away from the very top.
#[hook]
pub fn use_scrolled() -> bool {
    let scrolled = use_state_eq(|| scroll_y() > 0.0);
    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let guard = listen_window(
                    "scroll",
                    Box::new(move || scrolled.set(scroll_y() > 0.0)),
                );
                move || drop(guard)
            },
            (),
        );
    }
    *scrolled
}
