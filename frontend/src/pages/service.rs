use yew::prelude::*;
use yew_router::prelude::*;

use crate::browser::scroll_to_top;
use crate::components::footer::Footer;
use crate::config::content;
use crate::Route;

const SERVICE_CSS: &str = r#"
    .service-page {
        display: flex;
        flex-direction: column;
        min-height: 100vh;
        background: #000;
        color: #fff;
    }
    .service-body {
        flex: 1;
        display: flex;
        flex-direction: column;
        align-items: center;
        padding: 5rem 1.5rem;
    }
    .service-body .back-row {
        width: 100%;
        max-width: 56rem;
        margin-bottom: 1.5rem;
    }
    .back-button {
        padding: 0.5rem 1rem;
        border: none;
        border-radius: 0.5rem;
        background: #1f2937;
        color: #fff;
        cursor: pointer;
    }
    .back-button:hover {
        background: #374151;
    }
    .service-card {
        max-width: 56rem;
        width: 100%;
        padding: 3.5rem;
        border-radius: 1.5rem;
        background: #111827;
        box-sizing: border-box;
        display: flex;
        flex-direction: column;
        gap: 1.5rem;
        animation: card-in 0.8s cubic-bezier(0.215, 0.61, 0.355, 1) both;
    }
    .service-card h1 {
        color: #00caeb;
        font-size: 3rem;
        margin: 0;
    }
    .service-card .rule {
        height: 0.25rem;
        width: 6rem;
        border-radius: 9999px;
        background: #00caeb;
    }
    .service-card p {
        color: #d1d5db;
        font-size: 1.25rem;
        line-height: 1.6;
    }
    .get-started {
        align-self: flex-start;
        padding: 0.75rem 1.5rem;
        border: none;
        border-radius: 0.5rem;
        background: #00caeb;
        color: #000;
        font-weight: 600;
        cursor: pointer;
    }
    .service-missing {
        flex: 1;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        gap: 1.5rem;
        font-size: 1.25rem;
    }
    @keyframes card-in {
        from { opacity: 0; transform: translateY(50px); }
        to { opacity: 1; transform: translateY(0); }
    }
"#;

#[derive(Properties, PartialEq)]
pub struct ServiceProps {
    pub id: String,
}

/// Detail page for one service, looked up by the `:id` route segment.
#[function_component(ServicePage)]
pub fn service_page(props: &ServiceProps) -> Html {
    let navigator = use_navigator();

    use_effect_with_deps(
        |_| {
            scroll_to_top();
            || ()
        },
        props.id.clone(),
    );

    let back = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = &navigator {
                navigator.back();
            }
        })
    };
    let get_started = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Contact);
        }
    });

    let Some(service) = content().service(&props.id) else {
        log::warn!("Unknown service id: {}", props.id);
        return html! {
            <div class="service-page">
                <style>{SERVICE_CSS}</style>
                <div class="service-missing">
                    <p>{"Service not found."}</p>
                    <button class="back-button" onclick={back}>{"← Back"}</button>
                </div>
                <Footer />
            </div>
        };
    };

    html! {
        <div class="service-page">
            <style>{SERVICE_CSS}</style>
            <section class="service-body">
                <div class="back-row">
                    <button class="back-button" onclick={back}>{"← Back"}</button>
                </div>
                <div class="service-card">
                    <h1>{&service.title}</h1>
                    <div class="rule" />
                    <p>{&service.full_desc}</p>
                    <button class="get-started" onclick={get_started}>{"Get Started"}</button>
                </div>
            </section>
            <Footer />
        </div>
    }
}
