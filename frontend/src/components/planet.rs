use arcane_core::planet::{planet_visible, IDLE_FLOAT, IDLE_FLOAT_PX, IDLE_SPIN};
use yew::prelude::*;

use crate::browser::use_viewport_width;

fn planet_css() -> String {
    format!(
        r#"
        .planet-wrapper {{
            position: fixed;
            top: 50%;
            left: 50%;
            transform: translate(-50%, -50%);
            pointer-events: none;
            z-index: 10;
        }}
        .planet-float {{
            animation: planet-float {float}s ease-in-out infinite alternate;
        }}
        .planet-spin {{
            display: block;
            width: 50vw;
            animation: planet-spin {spin}s linear infinite;
        }}
        @keyframes planet-float {{
            from {{ transform: translateY(0); }}
            to {{ transform: translateY({float_px}px); }}
        }}
        @keyframes planet-spin {{
            from {{ transform: rotate(0deg); }}
            to {{ transform: rotate(360deg); }}
        }}
        "#,
        float = IDLE_FLOAT.as_secs_f64(),
        spin = IDLE_SPIN.as_secs_f64(),
        float_px = IDLE_FLOAT_PX,
    )
}

#[derive(Properties, PartialEq)]
pub struct PlanetProps {
    /// Layer carrying the scroll scrub and the focus/reset commands.
    pub planet_ref: NodeRef,
    pub mobile_breakpoint_px: f64,
    #[prop_or(true)]
    pub hide_on_mobile: bool,
}

/// Decorative planet behind the main page. The idle float and spin run on
/// their own layers around the animated one.
#[function_component(Planet)]
pub fn planet(props: &PlanetProps) -> Html {
    let width = use_viewport_width();

    if !planet_visible(width, props.mobile_breakpoint_px, props.hide_on_mobile) {
        return html! {};
    }

    html! {
        <div class="planet-wrapper">
            <style>{planet_css()}</style>
            <div class="planet-float">
                <div ref={props.planet_ref.clone()}>
                    <img class="planet-spin" src="/assets/white_planet.png" alt="Planet" />
                </div>
            </div>
        </div>
    }
}
