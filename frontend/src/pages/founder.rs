use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::config::content;

const FOUNDER_CSS: &str = r#"
    .founder-section {
        width: 100%;
        min-height: 100vh;
        display: flex;
        align-items: center;
        justify-content: center;
        background: #000;
        padding: 1.5rem 1rem;
        box-sizing: border-box;
    }
    .founder-card {
        position: relative;
        z-index: 50;
        max-width: 1100px;
        min-height: 560px;
        border-radius: 40px;
        display: flex;
        align-items: center;
        justify-content: center;
        gap: 4rem;
        padding: 0 5rem;
        color: #000;
        background: rgba(255, 255, 255, 0.9);
        backdrop-filter: blur(12px);
    }
    .founder-card img {
        width: 260px;
        object-fit: contain;
    }
    .founder-eyebrow {
        text-transform: uppercase;
        letter-spacing: 0.2em;
        font-size: 0.875rem;
        color: #0077a3;
    }
    .founder-card h1 {
        font-size: 3rem;
        margin: 1rem 0;
    }
    .founder-card p {
        font-size: 1.125rem;
        color: #1f2937;
        line-height: 1.6;
    }
    .founder-stats {
        display: flex;
        gap: 2.5rem;
        margin-top: 1rem;
    }
    .founder-stats h3 {
        font-size: 1.875rem;
        margin: 0;
    }
    @media (max-width: 640px) {
        .founder-card {
            flex-direction: column;
            gap: 2rem;
            padding: 2.5rem 1.5rem;
            text-align: center;
        }
        .founder-card img { width: 12rem; }
        .founder-stats { flex-direction: column; gap: 1rem; }
    }
"#;

#[function_component(Founder)]
pub fn founder() -> Html {
    let founder = &content().company.founder;

    html! {
        <div class="founder-section">
            <style>{FOUNDER_CSS}</style>
            <Reveal class={classes!("founder-card")}>
                <img src="/assets/founder.png" alt="Founder" />
                <div>
                    <span class="founder-eyebrow">{"Our Founder"}</span>
                    <h1>{&founder.name}</h1>
                    <p>{&founder.bio}</p>
                    <div class="founder-stats">
                        { for founder.stats.iter().map(|stat| html! {
                            <div key={stat.label.clone()}>
                                <h3>{&stat.value}</h3>
                                <p>{&stat.label}</p>
                            </div>
                        })}
                    </div>
                </div>
            </Reveal>
        </div>
    }
}
