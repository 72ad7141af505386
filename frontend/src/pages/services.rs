use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::reveal::Reveal;
use crate::config::content;
use crate::Route;

const SERVICES_CSS: &str = r#"
    .services-section {
        position: relative;
        width: 100%;
        min-height: 100vh;
        display: flex;
        flex-direction: column;
        justify-content: center;
        padding: 4rem 6rem;
        color: #fff;
        background: #000 url("/assets/service_bg.png") center / cover no-repeat;
        box-sizing: border-box;
    }
    .services-section .overlay {
        position: absolute;
        inset: 0;
        background: rgba(0, 0, 0, 0.7);
    }
    .services-content {
        position: relative;
        z-index: 1;
        max-width: 42rem;
    }
    .services-content h2 {
        font-size: 3.75rem;
        font-weight: 700;
        margin-bottom: 3rem;
    }
    .services-content h3 {
        font-size: 1.875rem;
        font-weight: 600;
        color: #d1d5db;
    }
    .services-content p {
        min-height: 160px;
        max-width: 600px;
        color: #9ca3af;
        font-size: 1.25rem;
        line-height: 1.6;
    }
    .view-details {
        padding: 0.75rem 1.5rem;
        border: none;
        border-radius: 0.5rem;
        background: #00caeb;
        color: #fff;
        font-weight: 600;
        cursor: pointer;
        transition: transform 0.2s;
    }
    .view-details:hover {
        transform: translateY(-4px) scale(1.05);
    }
    .slide-dots {
        display: flex;
        gap: 1rem;
        margin-top: 1.5rem;
    }
    .slide-dots span {
        width: 0.75rem;
        height: 0.75rem;
        border-radius: 50%;
        background: rgba(255, 255, 255, 0.3);
        cursor: pointer;
        transition: all 0.2s;
    }
    .slide-dots span.current {
        background: #00caeb;
        transform: scale(1.25);
    }
    @media (max-width: 768px) {
        .services-section { padding: 3rem 1rem; }
        .services-content h2 { font-size: 2rem; }
    }
"#;

/// Carousel of service summaries with a link to each detail page.
#[function_component(Services)]
pub fn services() -> Html {
    let services = &content().services;
    let current = use_state(|| 0usize);
    let navigator = use_navigator();

    let slide = services.get(*current);

    let view_details = {
        let id = slide.map(|s| s.id.clone());
        Callback::from(move |_: MouseEvent| {
            if let (Some(navigator), Some(id)) = (&navigator, &id) {
                navigator.push(&Route::Service { id: id.clone() });
            }
        })
    };

    html! {
        <div class="services-section">
            <style>{SERVICES_CSS}</style>
            <div class="overlay" />
            <Reveal class={classes!("services-content")}>
                <h2>{"Services"}</h2>
                <h3>{slide.map(|s| s.title.clone()).unwrap_or_default()}</h3>
                <p>{slide.map(|s| s.short_desc.clone()).unwrap_or_default()}</p>
                <button class="view-details" onclick={view_details}>{"View Details"}</button>
                <div class="slide-dots">
                    { for (0..services.len()).map(|index| {
                        let onclick = {
                            let current = current.clone();
                            Callback::from(move |_: MouseEvent| current.set(index))
                        };
                        html! {
                            <span key={index} class={classes!((*current == index).then_some("current"))} {onclick} />
                        }
                    })}
                </div>
            </Reveal>
        </div>
    }
}
