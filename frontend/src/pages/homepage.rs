use arcane_core::pointer::{glow_gradient, LocalPoint};
use web_sys::Element;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::typing_text::TypingText;
use crate::config::{content, site_config};
use crate::Route;

const HERO_CSS: &str = r#"
    .hero {
        position: relative;
        width: 100vw;
        height: 100vh;
        overflow: hidden;
        background: #000;
    }
    .hero-content {
        position: relative;
        z-index: 20;
        display: flex;
        flex-direction: column;
        align-items: flex-start;
        justify-content: center;
        height: 100%;
        padding: 0 3rem;
    }
    .hero-title {
        background: linear-gradient(to bottom right, #fff, #00caeb);
        -webkit-background-clip: text;
        background-clip: text;
        color: transparent;
        font-weight: 600;
        line-height: 0.9;
        font-size: 72px;
        margin: 0;
        animation: hero-in 1s cubic-bezier(0.215, 0.61, 0.355, 1) both;
    }
    .hero-typing {
        margin-top: 1.5rem;
        max-width: 600px;
        min-height: 160px;
        animation: hero-in 1s cubic-bezier(0.215, 0.61, 0.355, 1) 0.5s both;
    }
    .typing-text {
        color: rgba(255, 255, 255, 0.9);
        font-size: 1.25rem;
        white-space: pre-wrap;
    }
    .typing-cursor {
        display: inline-block;
        margin-left: 0.25rem;
        width: 0.25rem;
        height: 1.5rem;
        background: #fff;
        animation: blink 1s step-end infinite;
    }
    .hero-cta {
        margin-top: 2.5rem;
        animation: hero-in 0.8s cubic-bezier(0.215, 0.61, 0.355, 1) 1s both;
    }
    .glow-button {
        position: relative;
        overflow: hidden;
        padding: 1rem 2.5rem;
        border-radius: 9999px;
        border: 1px solid #00caeb;
        background: #000;
        color: #fff;
        font-size: 1rem;
        cursor: pointer;
    }
    .glow-circle {
        position: absolute;
        inset: 0;
        pointer-events: none;
        transition: opacity 0.3s;
    }
    .glow-button span.label {
        position: relative;
        z-index: 10;
    }
    @keyframes hero-in {
        from { opacity: 0; transform: translateY(40px); }
        to { opacity: 1; transform: translateY(0); }
    }
    @keyframes blink {
        50% { opacity: 0; }
    }
    @media (max-width: 640px) {
        .hero-content { padding: 0 1rem; }
        .hero-title { font-size: 32px; }
        .hero-typing { min-height: 120px; }
    }
"#;

fn pointer_in(e: &MouseEvent) -> Option<LocalPoint> {
    let target = e.current_target()?.dyn_into::<Element>().ok()?;
    let rect = target.get_bounding_client_rect();
    Some(LocalPoint::from_client(
        f64::from(e.client_x()),
        f64::from(e.client_y()),
        rect.left(),
        rect.top(),
    ))
}

#[function_component(Homepage)]
pub fn homepage() -> Html {
    let navigator = use_navigator();
    let hover = use_state(|| false);
    let pointer = use_state(LocalPoint::default);
    let speed = site_config().typing_speed();

    let on_move = {
        let pointer = pointer.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(point) = pointer_in(&e) {
                pointer.set(point);
            }
        })
    };
    let on_enter = {
        let hover = hover.clone();
        Callback::from(move |_: MouseEvent| hover.set(true))
    };
    let on_leave = {
        let hover = hover.clone();
        Callback::from(move |_: MouseEvent| hover.set(false))
    };
    let on_click = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Contact);
        }
    });

    let glow_style = format!(
        "background: {}; opacity: {};",
        glow_gradient(*pointer, "#00caeb"),
        if *hover { 1 } else { 0 }
    );
    let company = &content().company;

    html! {
        <div class="hero">
            <style>{HERO_CSS}</style>
            <div class="hero-content">
                <h1 class="hero-title">{&company.name}</h1>
                <div class="hero-typing">
                    <TypingText text={company.tagline.clone()} {speed} />
                </div>
                <div class="hero-cta">
                    <button
                        class="glow-button"
                        onmousemove={on_move}
                        onmouseenter={on_enter}
                        onmouseleave={on_leave}
                        onclick={on_click}
                    >
                        <span class="glow-circle" style={glow_style} />
                        <span class="label">{"Contact Us"}</span>
                    </button>
                </div>
            </div>
        </div>
    }
}
