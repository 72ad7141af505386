//! The decorative planet floating behind the main page.
//!
//! Two drivers move the same transform: the section tracker issues the
//! focus/reset commands through [`DecorativeElement`], and the scroll
//! scrub path in [`scrubbed_transform`] maps anchor positions to a
//! continuous transform fed through [`PlanetController::scrub`]. While
//! focused, the focus transform wins over the scrub until the next reset.
//! Playback itself belongs to an [`Animator`].

use serde::Serialize;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;
use tracing::debug;

use crate::tracker::AnchorProbe;
use crate::section::SectionId;

/// Transform in viewport-relative units so it survives resizes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Transform {
    pub x_vw: f64,
    pub y_vh: f64,
    pub scale: f64,
    pub rotation_deg: f64,
}

impl Transform {
    pub const NEUTRAL: Transform = Transform {
        x_vw: 0.0,
        y_vh: 0.0,
        scale: 1.0,
        rotation_deg: 0.0,
    };

    pub const fn at(x_vw: f64, y_vh: f64, scale: f64) -> Self {
        Self {
            x_vw,
            y_vh,
            scale,
            rotation_deg: 0.0,
        }
    }

    pub fn lerp(&self, to: &Transform, t: f64) -> Transform {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: f64, b: f64| a + (b - a) * t;
        Transform {
            x_vw: mix(self.x_vw, to.x_vw),
            y_vh: mix(self.y_vh, to.y_vh),
            scale: mix(self.scale, to.scale),
            rotation_deg: mix(self.rotation_deg, to.rotation_deg),
        }
    }

    pub fn to_css(&self) -> String {
        format!(
            "translate({}vw, {}vh) scale({}) rotate({}deg)",
            self.x_vw, self.y_vh, self.scale, self.rotation_deg
        )
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    Power3Out,
    SineInOut,
}

impl Easing {
    pub fn css(&self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::Power3Out => "cubic-bezier(0.215, 0.61, 0.355, 1)",
            Easing::SineInOut => "cubic-bezier(0.37, 0, 0.63, 1)",
        }
    }
}

/// Playback backend for one animated target.
///
/// Implementations must treat an unmounted target as a no-op.
#[cfg_attr(test, mockall::automock)]
pub trait Animator {
    fn tween(&self, to: Transform, duration: Duration, easing: Easing);
    fn set(&self, to: Transform);
}

/// Command receiver driven by the section tracker.
#[cfg_attr(test, mockall::automock)]
pub trait DecorativeElement {
    fn enter_focused_state(&self);
    fn reset_state(&self);
}

impl<T: DecorativeElement + ?Sized> DecorativeElement for Rc<T> {
    fn enter_focused_state(&self) {
        (**self).enter_focused_state()
    }

    fn reset_state(&self) {
        (**self).reset_state()
    }
}

pub const FOCUSED: Transform = Transform::at(25.0, 0.0, 0.8);
pub const FOCUS_DURATION: Duration = Duration::from_secs(1);
pub const FOCUS_EASING: Easing = Easing::Power3Out;

pub const IDLE_SPIN: Duration = Duration::from_secs(20);
pub const IDLE_FLOAT: Duration = Duration::from_secs(3);
pub const IDLE_FLOAT_PX: f64 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanetState {
    Neutral,
    Focused,
}

pub struct PlanetController<A: Animator> {
    animator: A,
    state: Cell<PlanetState>,
}

impl<A: Animator> PlanetController<A> {
    pub fn new(animator: A) -> Self {
        Self {
            animator,
            state: Cell::new(PlanetState::Neutral),
        }
    }

    pub fn state(&self) -> PlanetState {
        self.state.get()
    }

    /// Applies a scrubbed transform unless the planet is held focused.
    pub fn scrub(&self, to: Transform) {
        if self.state.get() == PlanetState::Neutral {
            self.animator.set(to);
        }
    }
}

impl<A: Animator> DecorativeElement for PlanetController<A> {
    fn enter_focused_state(&self) {
        debug!("planet: focusing");
        self.animator.tween(FOCUSED, FOCUS_DURATION, FOCUS_EASING);
        self.state.set(PlanetState::Focused);
    }

    fn reset_state(&self) {
        debug!("planet: reset");
        self.animator.set(Transform::NEUTRAL);
        self.state.set(PlanetState::Neutral);
    }
}

/// A scroll-bound leg of the planet's path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Waypoint {
    pub anchor: &'static str,
    pub target: Transform,
}

pub const SCRUB_PATH: [Waypoint; 6] = [
    Waypoint { anchor: "services", target: Transform::at(25.0, 0.0, 0.8) },
    Waypoint { anchor: "AboutUs", target: Transform::at(-33.0, 0.0, 0.8) },
    Waypoint { anchor: "Founder", target: Transform::at(0.0, 0.0, 1.0) },
    Waypoint { anchor: "Feedback", target: Transform::at(-50.0, 0.0, 0.8) },
    Waypoint { anchor: "FAQ", target: Transform::at(50.0, 0.0, 0.8) },
    Waypoint { anchor: "footer", target: Transform::at(50.0, -100.0, 0.8) },
];

/// 0 while the anchor's top is at or below the viewport bottom, 1 once it
/// reaches the viewport top.
pub fn scrub_progress(anchor_top: f64, viewport_height: f64) -> f64 {
    if viewport_height <= 0.0 {
        return 0.0;
    }
    ((viewport_height - anchor_top) / viewport_height).clamp(0.0, 1.0)
}

/// Each leg interpolates from the previous waypoint; the last leg in path
/// order with non-zero progress decides the transform.
pub fn scrubbed_transform<P: AnchorProbe + ?Sized>(path: &[Waypoint], probe: &P) -> Transform {
    let viewport = probe.viewport_height();
    let mut from = Transform::NEUTRAL;
    let mut current = Transform::NEUTRAL;

    for waypoint in path {
        let id = SectionId::new(waypoint.anchor);
        if let Some(top) = probe.anchor_top(&id) {
            let progress = scrub_progress(top, viewport);
            if progress > 0.0 {
                current = from.lerp(&waypoint.target, progress);
            }
        }
        from = waypoint.target;
    }

    current
}

pub fn planet_visible(viewport_width: f64, breakpoint_px: f64, hide_on_mobile: bool) -> bool {
    !(hide_on_mobile && viewport_width < breakpoint_px)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::StaticProbe;
    use mockall::predicate::eq;

    #[test]
    fn focus_tweens_to_the_focused_transform() {
        let mut animator = MockAnimator::new();
        animator
            .expect_tween()
            .with(eq(FOCUSED), eq(Duration::from_secs(1)), eq(Easing::Power3Out))
            .times(1)
            .return_const(());
        animator.expect_set().never();

        let planet = PlanetController::new(animator);
        planet.enter_focused_state();
        assert_eq!(planet.state(), PlanetState::Focused);
    }

    #[test]
    fn reset_snaps_back_without_tweening() {
        let mut animator = MockAnimator::new();
        animator.expect_tween().times(1).return_const(());
        animator
            .expect_set()
            .with(eq(Transform::NEUTRAL))
            .times(1)
            .return_const(());

        let planet = PlanetController::new(animator);
        assert_eq!(planet.state(), PlanetState::Neutral);
        planet.enter_focused_state();
        planet.reset_state();
        assert_eq!(planet.state(), PlanetState::Neutral);
    }

    #[test]
    fn repeated_focus_is_harmless() {
        let mut animator = MockAnimator::new();
        animator.expect_tween().times(2).return_const(());

        let planet = PlanetController::new(animator);
        planet.enter_focused_state();
        planet.enter_focused_state();
        assert_eq!(planet.state(), PlanetState::Focused);
    }

    /// Keeps the last transform written, like a styled DOM node.
    #[derive(Default)]
    struct RenderedNode {
        transform: Cell<Transform>,
    }

    impl Animator for Rc<RenderedNode> {
        fn tween(&self, to: Transform, _duration: Duration, _easing: Easing) {
            self.transform.set(to);
        }

        fn set(&self, to: Transform) {
            self.transform.set(to);
        }
    }

    #[test]
    fn focus_lands_on_the_absolute_focused_transform() {
        let node = Rc::new(RenderedNode::default());
        let planet = PlanetController::new(node.clone());

        // services half way in: the scrub has already moved the planet
        let probe = StaticProbe::new(800.0).with("services", 400.0);
        planet.scrub(scrubbed_transform(&SCRUB_PATH, &probe));
        assert_ne!(node.transform.get(), Transform::NEUTRAL);

        planet.enter_focused_state();
        assert_eq!(node.transform.get(), FOCUSED);

        // further scrolling does not drag the focused planet along
        let probe = StaticProbe::new(800.0).with("services", 0.0);
        planet.scrub(scrubbed_transform(&SCRUB_PATH, &probe));
        assert_eq!(node.transform.get(), FOCUSED);
    }

    #[test]
    fn scrub_resumes_after_reset() {
        let node = Rc::new(RenderedNode::default());
        let planet = PlanetController::new(node.clone());
        planet.enter_focused_state();
        planet.reset_state();
        assert_eq!(node.transform.get(), Transform::NEUTRAL);

        let probe = StaticProbe::new(800.0).with("services", -800.0).with("AboutUs", 400.0);
        let scrubbed = scrubbed_transform(&SCRUB_PATH, &probe);
        planet.scrub(scrubbed);
        assert_eq!(node.transform.get(), scrubbed);
    }

    #[test]
    fn progress_spans_bottom_to_top_edge() {
        assert_eq!(scrub_progress(1000.0, 800.0), 0.0);
        assert_eq!(scrub_progress(800.0, 800.0), 0.0);
        assert_eq!(scrub_progress(400.0, 800.0), 0.5);
        assert_eq!(scrub_progress(0.0, 800.0), 1.0);
        assert_eq!(scrub_progress(-300.0, 800.0), 1.0);
        assert_eq!(scrub_progress(10.0, 0.0), 0.0);
    }

    #[test]
    fn scrub_starts_neutral_before_services() {
        let probe = StaticProbe::new(800.0).with("services", 900.0).with("AboutUs", 1700.0);
        assert_eq!(scrubbed_transform(&SCRUB_PATH, &probe), Transform::NEUTRAL);
    }

    #[test]
    fn scrub_interpolates_from_previous_waypoint() {
        // services fully reached, about us half way
        let probe = StaticProbe::new(800.0)
            .with("services", -800.0)
            .with("AboutUs", 400.0)
            .with("Founder", 1200.0);
        let t = scrubbed_transform(&SCRUB_PATH, &probe);
        assert!((t.x_vw - (25.0 + (-33.0 - 25.0) * 0.5)).abs() < 1e-9);
        assert!((t.scale - 0.8).abs() < 1e-9);
    }

    #[test]
    fn scrub_skips_missing_anchors() {
        let probe = StaticProbe::new(800.0).with("services", -100.0).with("FAQ", 600.0);
        let t = scrubbed_transform(&SCRUB_PATH, &probe);
        // FAQ leg runs from the Feedback waypoint even though Feedback is absent
        let expected = Transform::at(-50.0, 0.0, 0.8).lerp(&Transform::at(50.0, 0.0, 0.8), 0.25);
        assert_eq!(t, expected);
    }

    #[test]
    fn css_transform_uses_viewport_units() {
        assert_eq!(
            FOCUSED.to_css(),
            "translate(25vw, 0vh) scale(0.8) rotate(0deg)"
        );
    }

    #[test]
    fn hidden_below_breakpoint_only_when_requested() {
        assert!(!planet_visible(800.0, 1025.0, true));
        assert!(planet_visible(800.0, 1025.0, false));
        assert!(planet_visible(1440.0, 1025.0, true));
    }
}
