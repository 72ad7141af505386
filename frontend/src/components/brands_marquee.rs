use yew::prelude::*;

use crate::config::content;

const MARQUEE_CSS: &str = r#"
    .brands-marquee {
        position: relative;
        left: 50%;
        right: 50%;
        margin-left: -50vw;
        width: 100vw;
        padding: 3.5rem 0;
        overflow: hidden;
        background: #fff;
    }
    .brands-marquee .overlay {
        position: absolute;
        inset: 0;
        background: rgba(0, 0, 0, 0.4);
    }
    .marquee-track {
        display: inline-flex;
        width: max-content;
        white-space: nowrap;
        animation: marquee 20s linear infinite;
    }
    .marquee-track span {
        color: #000;
        font-size: 1.125rem;
        font-weight: 500;
        margin: 0 2.5rem;
    }
    @keyframes marquee {
        0% { transform: translateX(0); }
        100% { transform: translateX(-50%); }
    }
"#;

/// Copies of the brand list laid end to end; the track scrolls by half its
/// width so the loop is seamless.
const COPIES: usize = 4;

#[function_component(BrandsMarquee)]
pub fn brands_marquee() -> Html {
    let brands = &content().company.brands;

    html! {
        <div class="brands-marquee">
            <style>{MARQUEE_CSS}</style>
            <div class="overlay" />
            <div class="marquee-track">
                { for (0..COPIES).flat_map(|set| brands.iter().enumerate().map(move |(i, brand)| html! {
                    <span key={format!("{}-{}", set, i)}>{brand}</span>
                }))}
            </div>
        </div>
    }
}
