use arcane_core::content::PrivacySection;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::browser::scroll_to_top;
use crate::components::footer::Footer;
use crate::config::content;

const PRIVACY_CSS: &str = r#"
    .privacy-page {
        min-height: 100vh;
        background: #000;
        color: #fff;
    }
    .privacy-body {
        display: flex;
        flex-direction: column;
        align-items: center;
        padding: 5rem 1.5rem;
    }
    .privacy-body .back-row {
        width: 100%;
        max-width: 64rem;
        margin-bottom: 1.5rem;
    }
    .privacy-card {
        max-width: 64rem;
        width: 100%;
        padding: 3.5rem;
        border-radius: 1.5rem;
        background: #111827;
        box-sizing: border-box;
        animation: card-in 0.8s cubic-bezier(0.215, 0.61, 0.355, 1) both;
    }
    .privacy-card h1 {
        color: #00caeb;
        font-size: 3rem;
        text-align: center;
        margin: 0 0 1rem;
    }
    .privacy-card .updated {
        color: #9ca3af;
        font-size: 0.875rem;
        text-align: center;
    }
    .privacy-scroll {
        max-height: 650px;
        overflow-y: auto;
        padding-right: 1rem;
        color: #d1d5db;
        scrollbar-width: thin;
        scrollbar-color: #0891b2 #1f2937;
    }
    .privacy-scroll h2 {
        color: #00caeb;
        font-size: 1.5rem;
    }
    .privacy-scroll a {
        color: #00caeb;
    }
    .back-button {
        padding: 0.5rem 1rem;
        border: none;
        border-radius: 0.5rem;
        background: #1f2937;
        color: #fff;
        cursor: pointer;
    }
    @keyframes card-in {
        from { opacity: 0; transform: translateY(50px); }
        to { opacity: 1; transform: translateY(0); }
    }
"#;

fn policy_section(section: &PrivacySection) -> Html {
    let body = if section.list.is_empty() {
        html! {
            <p>
                {section.content.clone().unwrap_or_default()}
                if let Some(email) = &section.link {
                    <a href={format!("mailto:{}", email)}>{email}</a>
                }
            </p>
        }
    } else {
        html! {
            <ul>
                { for section.list.iter().map(|item| html! { <li>{item}</li> }) }
            </ul>
        }
    };

    html! {
        <section>
            <h2>{&section.title}</h2>
            { body }
        </section>
    }
}

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    let navigator = use_navigator();
    let policy = &content().privacy;

    use_effect_with_deps(
        |_| {
            scroll_to_top();
            || ()
        },
        (),
    );

    let back = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = &navigator {
            navigator.back();
        }
    });

    html! {
        <div class="privacy-page">
            <style>{PRIVACY_CSS}</style>
            <section class="privacy-body">
                <div class="back-row">
                    <button class="back-button" onclick={back}>{"← Back"}</button>
                </div>
                <div class="privacy-card">
                    <h1>{"Privacy Policy"}</h1>
                    <p class="updated">{format!("Last updated: {}", policy.last_updated)}</p>
                    <div class="privacy-scroll">
                        { for policy.sections.iter().map(policy_section) }
                    </div>
                </div>
            </section>
            <Footer />
        </div>
    }
}
