//! Maps the continuous scroll position to one active page section.
//!
//! The active section is the last one in scan order whose anchor top has
//! crossed `activation_ratio * viewport_height`; the first section is the
//! fallback. Side effects are edge-triggered: the decorative element and
//! the change observers only hear about actual transitions.

use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, trace, warn};

use crate::planet::DecorativeElement;
use crate::section::{Section, SectionError, SectionId, SectionList};

/// Read-only view of the current layout.
pub trait AnchorProbe {
    fn viewport_height(&self) -> f64;
    /// Top edge of the anchor relative to the viewport, `None` when the
    /// anchor is not mounted.
    fn anchor_top(&self, id: &SectionId) -> Option<f64>;
}

/// A probe that can also push scroll notifications.
pub trait ScrollSource: AnchorProbe {
    fn subscribe(&self, handler: Box<dyn Fn()>) -> ListenerGuard;
}

/// Keeps a listener registered. Dropping it unregisters.
#[must_use = "dropping the guard unregisters the listener"]
pub struct ListenerGuard {
    release: Option<Box<dyn FnOnce()>>,
}

impl ListenerGuard {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Guard for a registration that never happened (no window, etc).
    pub fn noop() -> Self {
        Self { release: None }
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    EnterFocused,
    Reset,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    /// `None` for the mount-time transition.
    pub from: Option<SectionId>,
    pub to: SectionId,
    pub command: Command,
}

pub const DEFAULT_ACTIVATION_RATIO: f64 = 0.5;

/// True once an anchor's top edge is at or above `ratio` of the viewport.
pub fn has_crossed(anchor_top: f64, viewport_height: f64, ratio: f64) -> bool {
    anchor_top <= viewport_height * ratio
}

pub struct SectionTracker<D: DecorativeElement> {
    sections: SectionList,
    focus: SectionId,
    activation_ratio: f64,
    // None until the first evaluation
    current: Option<usize>,
    element: D,
    observers: Vec<Box<dyn Fn(&Section)>>,
}

impl<D: DecorativeElement> SectionTracker<D> {
    pub fn new(sections: SectionList, focus: SectionId, element: D) -> Result<Self, SectionError> {
        if !sections.contains(&focus) {
            return Err(SectionError::UnknownFocus(focus));
        }

        Ok(Self {
            sections,
            focus,
            activation_ratio: DEFAULT_ACTIVATION_RATIO,
            current: None,
            element,
            observers: Vec::new(),
        })
    }

    pub fn with_activation_ratio(mut self, ratio: f64) -> Self {
        self.activation_ratio = ratio;
        self
    }

    /// Registers a navigation-indicator style observer, called after the
    /// decorative element on every transition.
    pub fn on_change(&mut self, observer: impl Fn(&Section) + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn sections(&self) -> &SectionList {
        &self.sections
    }

    pub fn focus(&self) -> &SectionId {
        &self.focus
    }

    pub fn active(&self) -> &Section {
        self.current
            .and_then(|index| self.sections.get(index))
            .unwrap_or_else(|| self.sections.first())
    }

    pub fn is_active(&self, id: &SectionId) -> bool {
        &self.active().id == id
    }

    /// Index of the section the given layout would make active.
    pub fn candidate<P: AnchorProbe + ?Sized>(&self, probe: &P) -> usize {
        let viewport = probe.viewport_height();
        let mut candidate = 0;
        for (index, section) in self.sections.iter().enumerate() {
            match probe.anchor_top(&section.id) {
                Some(top) if has_crossed(top, viewport, self.activation_ratio) => candidate = index,
                Some(_) => {}
                None => trace!("anchor {} not mounted, skipping", section.id),
            }
        }
        candidate
    }

    /// Re-evaluates the active section. Returns the transition when the
    /// active section changed, after dispatching its side effects.
    pub fn evaluate<P: AnchorProbe + ?Sized>(&mut self, probe: &P) -> Option<Transition> {
        let candidate = self.candidate(probe);
        if self.current == Some(candidate) {
            return None;
        }

        let from = self
            .current
            .and_then(|index| self.sections.get(index))
            .map(|section| section.id.clone());
        self.current = Some(candidate);

        let section = self.active();
        let command = if section.id == self.focus {
            Command::EnterFocused
        } else {
            Command::Reset
        };
        debug!(
            "active section {} -> {} ({:?})",
            from.as_ref().map(SectionId::as_str).unwrap_or("none"),
            section.id,
            command
        );

        match command {
            Command::EnterFocused => self.element.enter_focused_state(),
            Command::Reset => self.element.reset_state(),
        }
        for observer in &self.observers {
            observer(section);
        }

        Some(Transition {
            from,
            to: section.id.clone(),
            command,
        })
    }
}

/// Subscribes `tracker` to `source` and runs the mount-time evaluation.
///
/// The returned guard owns the registration; keep it for the lifetime of
/// the view. The listener is released even if the initial evaluation
/// panics.
pub fn mount<S, D>(tracker: &Rc<RefCell<SectionTracker<D>>>, source: &Rc<S>) -> ListenerGuard
where
    S: ScrollSource + 'static,
    D: DecorativeElement + 'static,
{
    let handler = {
        let tracker = Rc::downgrade(tracker);
        let source = Rc::downgrade(source);
        move || {
            let (Some(tracker), Some(source)) = (tracker.upgrade(), source.upgrade()) else {
                return;
            };
            match tracker.try_borrow_mut() {
                Ok(mut tracker) => {
                    tracker.evaluate(&*source);
                }
                Err(_) => warn!("scroll notification during evaluation, skipped"),
            };
        }
    };

    let guard = source.subscribe(Box::new(handler));
    tracker.borrow_mut().evaluate(&**source);
    guard
}

/// Fixed layout used by tests across the crate.
#[cfg(test)]
pub(crate) struct StaticProbe {
    viewport: f64,
    offsets: std::collections::HashMap<String, f64>,
}

#[cfg(test)]
impl StaticProbe {
    pub(crate) fn new(viewport: f64) -> Self {
        Self {
            viewport,
            offsets: Default::default(),
        }
    }

    pub(crate) fn with(mut self, id: &str, top: f64) -> Self {
        self.offsets.insert(id.to_string(), top);
        self
    }
}

#[cfg(test)]
impl AnchorProbe for StaticProbe {
    fn viewport_height(&self) -> f64 {
        self.viewport
    }

    fn anchor_top(&self, id: &SectionId) -> Option<f64> {
        self.offsets.get(id.as_str()).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planet::MockDecorativeElement;
    use mockall::Sequence;
    use std::cell::Cell;
    use std::collections::HashMap;

    fn sections() -> SectionList {
        SectionList::new(vec![
            Section::new("top", 0, "Home"),
            Section::new("services", 1, "Services"),
            Section::new("about", 2, "About"),
        ])
        .unwrap()
    }

    fn tracker(element: MockDecorativeElement) -> SectionTracker<MockDecorativeElement> {
        SectionTracker::new(sections(), SectionId::new("services"), element).unwrap()
    }

    /// Page laid out as three 800px sections in an 800px viewport.
    fn page_at(scroll_y: f64) -> StaticProbe {
        StaticProbe::new(800.0)
            .with("top", -scroll_y)
            .with("services", 800.0 - scroll_y)
            .with("about", 1600.0 - scroll_y)
    }

    #[test]
    fn crossing_is_inclusive_of_the_line() {
        assert!(has_crossed(400.0, 800.0, 0.5));
        assert!(has_crossed(-20.0, 800.0, 0.5));
        assert!(!has_crossed(400.5, 800.0, 0.5));
        assert!(has_crossed(640.0, 800.0, 0.8));
    }

    #[test]
    fn unknown_focus_is_rejected() {
        let result = SectionTracker::new(
            sections(),
            SectionId::new("pricing"),
            MockDecorativeElement::new(),
        );
        assert!(matches!(result, Err(SectionError::UnknownFocus(id)) if id == "pricing"));
    }

    #[test]
    fn mount_evaluation_dispatches_once() {
        let mut element = MockDecorativeElement::new();
        element.expect_reset_state().times(1).return_const(());
        element.expect_enter_focused_state().never();

        let mut tracker = tracker(element);
        let transition = tracker.evaluate(&page_at(0.0)).unwrap();
        assert_eq!(transition.from, None);
        assert_eq!(transition.to, "top");
        assert_eq!(transition.command, Command::Reset);

        // same layout again is a no-op
        assert_eq!(tracker.evaluate(&page_at(0.0)), None);
        assert_eq!(tracker.evaluate(&page_at(120.0)), None);
        assert_eq!(tracker.active().id, "top");
    }

    #[test]
    fn last_crossed_section_wins() {
        let mut element = MockDecorativeElement::new();
        element.expect_reset_state().return_const(());

        let mut tracker = tracker(element);
        // services and about both crossed, top not mounted
        let probe = StaticProbe::new(800.0)
            .with("services", -200.0)
            .with("about", 350.0);
        tracker.evaluate(&probe);
        assert_eq!(tracker.active().id, "about");
    }

    #[test]
    fn falls_back_to_first_section() {
        let mut element = MockDecorativeElement::new();
        element.expect_reset_state().times(1).return_const(());

        let mut tracker = tracker(element);
        let probe = StaticProbe::new(800.0)
            .with("top", 500.0)
            .with("services", 1300.0)
            .with("about", 2100.0);
        tracker.evaluate(&probe);
        assert_eq!(tracker.active().id, "top");

        // nothing mounted at all keeps the default without side effects
        assert_eq!(tracker.evaluate(&StaticProbe::new(800.0)), None);
        assert_eq!(tracker.active().id, "top");
    }

    #[test]
    fn threshold_is_inclusive() {
        let mut element = MockDecorativeElement::new();
        element.expect_reset_state().return_const(());
        element.expect_enter_focused_state().times(1).return_const(());

        let mut tracker = tracker(element);
        tracker.evaluate(&page_at(0.0));
        // services top exactly at the viewport midpoint
        let transition = tracker.evaluate(&page_at(400.0)).unwrap();
        assert_eq!(transition.to, "services");
        assert_eq!(transition.command, Command::EnterFocused);
    }

    #[test]
    fn custom_activation_ratio_moves_the_threshold() {
        let mut element = MockDecorativeElement::new();
        element.expect_reset_state().return_const(());

        let tracker = tracker(element).with_activation_ratio(0.25);
        // services at 300 is above the midpoint but below the quarter line
        assert_eq!(tracker.candidate(&page_at(500.0)), 0);
        assert_eq!(tracker.candidate(&page_at(600.0)), 1);
    }

    #[test]
    fn non_focus_to_non_focus_still_resets() {
        let mut element = MockDecorativeElement::new();
        element.expect_reset_state().times(2).return_const(());
        element.expect_enter_focused_state().never();

        let mut tracker = tracker(element);
        tracker.evaluate(&page_at(0.0));
        // jump straight from top to about
        let transition = tracker.evaluate(&page_at(1300.0)).unwrap();
        assert_eq!(transition.from, Some(SectionId::new("top")));
        assert_eq!(transition.to, "about");
        assert_eq!(transition.command, Command::Reset);
    }

    #[test]
    fn round_trip_dispatch_is_path_independent() {
        let mut seq = Sequence::new();
        let mut element = MockDecorativeElement::new();
        element.expect_reset_state().times(1).in_sequence(&mut seq).return_const(());
        element.expect_enter_focused_state().times(1).in_sequence(&mut seq).return_const(());
        element.expect_reset_state().times(1).in_sequence(&mut seq).return_const(());
        element.expect_enter_focused_state().times(1).in_sequence(&mut seq).return_const(());
        element.expect_reset_state().times(1).in_sequence(&mut seq).return_const(());

        let mut tracker = tracker(element);
        let mut visited = Vec::new();
        for scroll_y in [0.0, 500.0, 550.0, 1300.0, 1250.0, 500.0, 0.0] {
            if let Some(t) = tracker.evaluate(&page_at(scroll_y)) {
                visited.push(t.to.to_string());
            }
        }
        assert_eq!(visited, vec!["top", "services", "about", "services", "top"]);
    }

    #[test]
    fn exactly_one_section_active_at_any_scroll() {
        let mut element = MockDecorativeElement::new();
        element.expect_reset_state().return_const(());
        element.expect_enter_focused_state().return_const(());

        let mut tracker = tracker(element);
        for step in 0..60 {
            let scroll_y = step as f64 * 37.0;
            tracker.evaluate(&page_at(scroll_y));
            let active: Vec<_> = tracker
                .sections()
                .iter()
                .filter(|s| tracker.is_active(&s.id))
                .collect();
            assert_eq!(active.len(), 1, "scroll_y = {scroll_y}");
        }
    }

    #[test]
    fn observers_follow_transitions_only() {
        let mut element = MockDecorativeElement::new();
        element.expect_reset_state().return_const(());
        element.expect_enter_focused_state().return_const(());

        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut tracker = tracker(element);
        {
            let seen = seen.clone();
            tracker.on_change(move |section| seen.borrow_mut().push(section.label.clone()));
        }

        for scroll_y in [0.0, 10.0, 500.0, 510.0, 1300.0] {
            tracker.evaluate(&page_at(scroll_y));
        }
        assert_eq!(*seen.borrow(), vec!["Home", "Services", "About"]);
    }

    /// In-memory window: anchor offsets plus a listener registry.
    struct FakeWindow {
        scroll_y: Cell<f64>,
        listeners: Rc<RefCell<HashMap<usize, Rc<dyn Fn()>>>>,
        next_id: Cell<usize>,
    }

    impl FakeWindow {
        fn new() -> Rc<Self> {
            Rc::new(Self {
                scroll_y: Cell::new(0.0),
                listeners: Rc::new(RefCell::new(HashMap::new())),
                next_id: Cell::new(0),
            })
        }

        fn scroll_to(&self, y: f64) {
            self.scroll_y.set(y);
            let handlers: Vec<_> = self.listeners.borrow().values().cloned().collect();
            for handler in handlers {
                handler();
            }
        }

        fn listener_count(&self) -> usize {
            self.listeners.borrow().len()
        }
    }

    impl AnchorProbe for FakeWindow {
        fn viewport_height(&self) -> f64 {
            800.0
        }

        fn anchor_top(&self, id: &SectionId) -> Option<f64> {
            page_at(self.scroll_y.get()).anchor_top(id)
        }
    }

    impl ScrollSource for FakeWindow {
        fn subscribe(&self, handler: Box<dyn Fn()>) -> ListenerGuard {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.listeners.borrow_mut().insert(id, Rc::from(handler));

            let listeners = self.listeners.clone();
            ListenerGuard::new(move || {
                listeners.borrow_mut().remove(&id);
            })
        }
    }

    #[test]
    fn mount_subscribes_and_unmount_releases() {
        let mut element = MockDecorativeElement::new();
        element.expect_reset_state().times(2).return_const(());
        element.expect_enter_focused_state().times(1).return_const(());

        let window = FakeWindow::new();
        let tracker = Rc::new(RefCell::new(tracker(element)));

        let guard = mount(&tracker, &window);
        assert_eq!(window.listener_count(), 1);
        assert_eq!(tracker.borrow().active().id, "top");

        window.scroll_to(500.0);
        assert_eq!(tracker.borrow().active().id, "services");

        drop(guard);
        assert_eq!(window.listener_count(), 0);

        // no longer listening
        window.scroll_to(1300.0);
        assert_eq!(tracker.borrow().active().id, "services");

        // a direct evaluation still works on the owned tracker
        tracker.borrow_mut().evaluate(&*window);
        assert_eq!(tracker.borrow().active().id, "about");
    }

    struct Exploding;

    impl DecorativeElement for Exploding {
        fn enter_focused_state(&self) {}

        fn reset_state(&self) {
            panic!("animation backend blew up");
        }
    }

    #[test]
    fn failed_mount_still_releases_listener() {
        let window = FakeWindow::new();
        let tracker = Rc::new(RefCell::new(
            SectionTracker::new(sections(), SectionId::new("services"), Exploding).unwrap(),
        ));

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = mount(&tracker, &window);
        }));
        assert!(result.is_err());
        assert_eq!(window.listener_count(), 0);
    }
}
