use yew::prelude::*;

use crate::browser::scroll_to_section;
use crate::components::reveal::Reveal;
use crate::config::content;

const FAQ_CSS: &str = r#"
    .faq-section {
        position: relative;
        width: 100%;
        min-height: 100vh;
        color: #fff;
        background: url("/assets/FAQ_bg.jpg") center / cover no-repeat;
    }
    .faq-section .overlay {
        position: absolute;
        inset: 0;
        background: rgba(0, 0, 0, 0.4);
        backdrop-filter: blur(4px);
    }
    .faq-content {
        position: relative;
        z-index: 10;
        max-width: 56rem;
        margin: 0 auto;
        padding: 6rem 1rem;
    }
    .faq-header {
        text-align: center;
        margin-bottom: 3rem;
    }
    .faq-header h1 {
        font-size: 3rem;
        margin-bottom: 1rem;
    }
    .faq-header p {
        color: #d1d5db;
        font-size: 1.125rem;
    }
    .faq-item {
        margin-bottom: 1rem;
        border-radius: 1rem;
        background: rgba(255, 255, 255, 0.1);
        backdrop-filter: blur(12px);
    }
    .faq-question {
        width: 100%;
        display: flex;
        justify-content: space-between;
        align-items: center;
        padding: 1.25rem 1.5rem;
        background: none;
        border: none;
        color: #fff;
        font-size: 1.25rem;
        text-align: left;
        cursor: pointer;
    }
    .faq-answer {
        display: grid;
        grid-template-rows: 0fr;
        opacity: 0;
        transition: all 0.5s ease-in-out;
    }
    .faq-item.open .faq-answer {
        grid-template-rows: 1fr;
        opacity: 1;
    }
    .faq-answer > div {
        overflow: hidden;
        padding: 0 1.5rem;
    }
    .faq-item.open .faq-answer > div {
        padding-bottom: 1.25rem;
    }
    .faq-answer p {
        color: #d1d5db;
        font-size: 0.875rem;
        line-height: 1.6;
        margin: 0;
    }
    .scroll-to-footer {
        position: absolute;
        bottom: 2rem;
        left: 50%;
        transform: translateX(-50%);
        width: 3.5rem;
        height: 3.5rem;
        border: none;
        border-radius: 50%;
        background: rgba(255, 255, 255, 0.2);
        color: #fff;
        font-size: 1.5rem;
        cursor: pointer;
    }
    .scroll-to-footer i {
        animation: bounce 1s infinite;
    }
    @keyframes bounce {
        0%, 100% { transform: translateY(-25%); }
        50% { transform: translateY(0); }
    }
"#;

/// Accordion; at most one answer is open.
#[function_component(Faq)]
pub fn faq() -> Html {
    let open = use_state(|| None::<usize>);

    let toggle = |index: usize| {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| {
            open.set(if *open == Some(index) { None } else { Some(index) });
        })
    };

    html! {
        <div class="faq-section">
            <style>{FAQ_CSS}</style>
            <div class="overlay" />
            <Reveal class={classes!("faq-content")}>
                <div class="faq-header">
                    <h1>{"FAQs"}</h1>
                    <p>{"Have questions? We’ve got answers."}</p>
                </div>
                { for content().faqs.iter().enumerate().map(|(index, faq)| {
                    let is_open = *open == Some(index);
                    html! {
                        <div key={index} class={classes!("faq-item", is_open.then_some("open"))}>
                            <button class="faq-question" onclick={toggle(index)}>
                                <span>{&faq.question}</span>
                                <i class={if is_open { "fas fa-chevron-up" } else { "fas fa-chevron-down" }}></i>
                            </button>
                            <div class="faq-answer">
                                <div><p>{&faq.answer}</p></div>
                            </div>
                        </div>
                    }
                })}
            </Reveal>
            <button
                class="scroll-to-footer"
                aria-label="Scroll to footer"
                onclick={Callback::from(|_: MouseEvent| scroll_to_section("footer"))}
            >
                <i class="fas fa-chevron-down"></i>
            </button>
        </div>
    }
}
