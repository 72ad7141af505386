use arcane_core::content::AboutPage;
use arcane_core::stack::CardStack;
use yew::prelude::*;

use crate::browser::use_is_mobile;
use crate::components::reveal::Reveal;
use crate::config::content;

const ABOUT_CSS: &str = r#"
    .about-section {
        position: relative;
        width: 100%;
        height: 100vh;
        overflow: hidden;
        color: #fff;
        background: #000 url("/assets/about_bg.png") center / cover no-repeat;
    }
    .about-section .overlay {
        position: absolute;
        inset: 0;
        background: rgba(0, 0, 0, 0.7);
    }
    .about-stage {
        position: relative;
        z-index: 10;
        height: 100%;
        display: flex;
        align-items: center;
        justify-content: flex-end;
        padding-right: 6rem;
    }
    .about-stage.mobile {
        justify-content: center;
        padding: 0 1rem;
    }
    .about-cards {
        position: relative;
        width: 720px;
        height: 100%;
        display: flex;
        align-items: center;
        justify-content: inherit;
    }
    .about-card {
        position: absolute;
        width: 700px;
        height: 520px;
        border-radius: 1.5rem;
        background: #fff;
        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
        transition: all 0.5s ease-out;
        padding: 3rem;
        box-sizing: border-box;
        display: flex;
        flex-direction: column;
        justify-content: space-between;
    }
    .about-card .label,
    .about-card .hint {
        font-size: 0.875rem;
        text-transform: uppercase;
        letter-spacing: 0.05em;
        color: #9ca3af;
    }
    .about-card h3 {
        font-size: 2.25rem;
        color: #000;
        margin: 0 0 1rem;
    }
    .about-card p {
        color: #4b5563;
        font-size: 1.125rem;
        line-height: 1.6;
    }
    .about-card ul {
        list-style: none;
        padding: 0;
        color: #374151;
    }
    .about-card li::before {
        content: "";
        display: inline-block;
        width: 0.5rem;
        height: 0.5rem;
        margin-right: 0.75rem;
        border-radius: 50%;
        background: #00caeb;
    }
    @media (max-width: 1024px) {
        .about-cards { width: 100%; }
        .about-card { width: 100%; height: 420px; padding: 1.5rem; }
    }
"#;

fn about_card(page: &AboutPage) -> Html {
    html! {
        <>
            <span class="label">{&page.label}</span>
            <div>
                <h3>{&page.title}</h3>
                <p>{&page.description}</p>
                <ul>
                    { for page.points.iter().map(|point| html! { <li>{point}</li> }) }
                </ul>
            </div>
            <span class="hint">{"Click to bring forward"}</span>
        </>
    }
}

#[function_component(AboutUs)]
pub fn about_us() -> Html {
    let pages = &content().about;
    let stack = use_state(|| CardStack::new(pages.len()));
    let is_mobile = use_is_mobile();

    let bring_forward = |card: usize| {
        let stack = stack.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*stack).clone();
            next.bring_forward(card);
            stack.set(next);
        })
    };

    html! {
        <div class="about-section">
            <style>{ABOUT_CSS}</style>
            <div class="overlay" />
            <div class={classes!("about-stage", is_mobile.then_some("mobile"))}>
                <Reveal class={classes!("about-cards")}>
                    { for stack.placements(is_mobile).filter_map(|(card, placement)| {
                        let page = pages.get(card)?;
                        Some(html! {
                            <div
                                key={page.id.clone()}
                                class="about-card"
                                style={placement.to_css()}
                                onclick={bring_forward(card)}
                            >
                                { about_card(page) }
                            </div>
                        })
                    })}
                </Reveal>
            </div>
        </div>
    }
}
