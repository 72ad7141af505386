use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::browser::{scroll_to_section, use_scrolled};
use crate::config::{content, site_config};
use crate::Route;

const NAVBAR_CSS: &str = r#"
    .navbar {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        z-index: 99;
        transition: all 0.3s ease;
        background: transparent;
    }
    .navbar.scrolled {
        background: rgba(0, 0, 0, 0.3);
        backdrop-filter: blur(16px);
        box-shadow: 0 10px 20px rgba(0, 0, 0, 0.3);
    }
    .navbar-inner {
        max-width: 80rem;
        height: 4rem;
        margin: 0 auto;
        padding: 0 1.5rem;
        display: flex;
        align-items: center;
        justify-content: space-between;
    }
    .logo-flip-wrapper {
        width: 3rem;
        height: 3rem;
        perspective: 600px;
        cursor: pointer;
    }
    .logo-flip-inner {
        position: relative;
        width: 100%;
        height: 100%;
        transition: transform 0.6s;
        transform-style: preserve-3d;
    }
    .logo-flip-wrapper:hover .logo-flip-inner {
        transform: rotateY(180deg);
    }
    .logo-face {
        position: absolute;
        inset: 0;
        width: 100%;
        height: 100%;
        backface-visibility: hidden;
    }
    .logo-back {
        transform: rotateY(180deg);
    }
    .nav-links {
        display: flex;
        align-items: center;
        gap: 1.5rem;
    }
    .nav-link {
        background: none;
        border: none;
        color: #fff;
        letter-spacing: 0.1em;
        cursor: pointer;
    }
    .services-menu {
        position: relative;
    }
    .services-dropdown {
        position: absolute;
        left: 50%;
        top: 100%;
        margin-top: 1rem;
        transform: translateX(-50%);
        width: 720px;
        border-radius: 0.75rem;
        background: rgba(0, 0, 0, 0.9);
        border: 1px solid rgba(255, 255, 255, 0.1);
        color: #fff;
        opacity: 0;
        transition: opacity 250ms ease;
    }
    .services-dropdown.visible {
        opacity: 1;
    }
    .services-dropdown h3 {
        text-align: center;
        font-size: 0.875rem;
        letter-spacing: 0.2em;
        text-transform: uppercase;
        padding: 1rem 1.5rem;
        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
        margin: 0;
    }
    .services-columns {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 2.5rem;
        padding: 2rem;
        justify-items: center;
    }
    .services-columns ul {
        list-style: none;
        padding: 0;
        margin: 0;
        text-align: center;
    }
    .services-columns li {
        margin-bottom: 1rem;
        cursor: pointer;
        color: rgba(255, 255, 255, 0.7);
    }
    .services-columns li:hover {
        color: #fff;
    }
    .dropdown-footer {
        border-top: 1px solid rgba(255, 255, 255, 0.1);
        padding: 0.75rem;
        text-align: center;
    }
    .dropdown-footer button {
        background: none;
        border: none;
        font-size: 0.75rem;
        color: rgba(255, 255, 255, 0.6);
        cursor: pointer;
    }
    .contact-btn {
        padding: 0.5rem 1.25rem;
        border-radius: 9999px;
        border: 1px solid #00caeb;
        background: transparent;
        color: #fff;
        cursor: pointer;
    }
    .contact-btn:hover {
        background: #00caeb;
        color: #000;
    }
"#;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let config = site_config();
    let scrolled = use_scrolled();
    let navigator = use_navigator();
    let location = use_location();

    // `open` keeps the menu mounted while it fades out; `visible` drives the fade
    let open = use_state(|| false);
    let visible = use_state(|| false);
    let close_timer = use_mut_ref(|| None::<Timeout>);

    let open_dropdown = {
        let open = open.clone();
        let visible = visible.clone();
        let close_timer = close_timer.clone();
        Callback::from(move |_: MouseEvent| {
            // dropping a pending Timeout cancels it
            close_timer.borrow_mut().take();
            open.set(true);
            visible.set(true);
        })
    };

    let close_dropdown = {
        let open = open.clone();
        let visible = visible.clone();
        let close_timer = close_timer.clone();
        let delay = config.dropdown_close_delay_ms;
        Callback::from(move |_: ()| {
            visible.set(false);
            let open = open.clone();
            *close_timer.borrow_mut() = Some(Timeout::new(delay, move || open.set(false)));
        })
    };

    let navigate_to_section = {
        let navigator = navigator.clone();
        let on_home = location.map(|l| l.path() == "/").unwrap_or(true);
        let close_dropdown = close_dropdown.clone();
        let jump_delay = config.section_jump_delay_ms;
        Callback::from(move |(section, close): (&'static str, bool)| {
            if on_home {
                scroll_to_section(section);
            } else {
                match &navigator {
                    Some(navigator) => {
                        navigator.push(&Route::Home);
                        Timeout::new(jump_delay, move || scroll_to_section(section)).forget();
                    }
                    None => log::warn!("No router available, cannot jump to #{}", section),
                }
            }
            if close {
                close_dropdown.emit(());
            }
        })
    };

    let go = |section: &'static str, close: bool| {
        let navigate_to_section = navigate_to_section.clone();
        Callback::from(move |_: MouseEvent| navigate_to_section.emit((section, close)))
    };

    let open_service = |id: String| {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Service { id: id.clone() });
            }
        })
    };

    let open_contact = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Contact);
            }
        })
    };

    let on_leave = {
        let close_dropdown = close_dropdown.clone();
        Callback::from(move |_: MouseEvent| close_dropdown.emit(()))
    };
    let minimize = {
        let close_dropdown = close_dropdown.clone();
        Callback::from(move |_: MouseEvent| close_dropdown.emit(()))
    };

    html! {
        <nav class={classes!("navbar", scrolled.then_some("scrolled"))}>
            <style>{NAVBAR_CSS}</style>
            <div class="navbar-inner">
                <div class="logo-flip-wrapper" onclick={go("top", true)}>
                    <div class="logo-flip-inner">
                        <img src="/assets/logo1.png" alt="Logo front" class="logo-face" />
                        <img src="/assets/logo2.png" alt="Logo back" class="logo-face logo-back" />
                    </div>
                </div>

                <div class="nav-links">
                    <div class="services-menu" onmouseenter={open_dropdown} onmouseleave={on_leave}>
                        <button class="nav-link" onclick={go("services", false)}>{"SERVICES"}</button>
                        if *open {
                            <div class={classes!("services-dropdown", (*visible).then_some("visible"))}>
                                <h3>{"Services"}</h3>
                                <div class="services-columns">
                                    { for content().service_columns(3).into_iter().enumerate().map(|(col, services)| html! {
                                        <ul key={col}>
                                            { for services.into_iter().map(|service| html! {
                                                <li key={service.id.clone()} onclick={open_service(service.id.clone())}>
                                                    {&service.title}
                                                </li>
                                            })}
                                        </ul>
                                    })}
                                </div>
                                <div class="dropdown-footer">
                                    <button onclick={minimize}>{"Minimize"}</button>
                                </div>
                            </div>
                        }
                    </div>
                    <button class="nav-link" onclick={go("AboutUs", true)}>{"ABOUT US"}</button>
                    <button class="contact-btn" onclick={open_contact}>{"CONTACT"}</button>
                </div>
            </div>
        </nav>
    }
}
