use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::content;
use crate::Route;

const FOOTER_CSS: &str = r#"
    .site-footer {
        background: #000;
        color: #9ca3af;
    }
    .site-footer .divider {
        height: 1px;
        background: rgba(255, 255, 255, 0.3);
    }
    .footer-inner {
        max-width: 80rem;
        margin: 0 auto;
        padding: 4rem 1.5rem;
    }
    .footer-grid {
        display: grid;
        grid-template-columns: 1fr 2fr 1fr 1fr;
        gap: 3rem;
        font-size: 0.875rem;
    }
    .footer-grid h4 {
        color: #fff;
        font-weight: 500;
        margin-bottom: 1.5rem;
    }
    .footer-brand {
        display: flex;
        align-items: center;
        gap: 0.75rem;
        margin-bottom: 1rem;
        color: #fff;
        font-weight: 600;
        font-size: 1.125rem;
    }
    .footer-brand img {
        width: 1.75rem;
        height: 1.75rem;
    }
    .footer-services {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 0.75rem 2.5rem;
    }
    .footer-grid ul {
        list-style: none;
        padding: 0;
    }
    .footer-grid li {
        margin-bottom: 0.75rem;
    }
    .footer-grid a,
    .footer-services span {
        color: inherit;
        text-decoration: none;
        cursor: pointer;
    }
    .footer-grid a:hover,
    .footer-services span:hover {
        color: #fff;
    }
    .footer-highlight {
        color: #fff;
    }
    .footer-bottom {
        margin-top: 4rem;
        text-align: center;
        font-size: 0.75rem;
        color: #6b7280;
    }
    @media (max-width: 768px) {
        .footer-grid {
            grid-template-columns: 1fr;
        }
    }
"#;

fn social_icon(name: &str) -> &'static str {
    match name {
        "Facebook" => "fab fa-facebook-f",
        "Instagram" => "fab fa-instagram",
        "LinkedIn" => "fab fa-linkedin-in",
        "Twitter" => "fab fa-twitter",
        "YouTube" => "fab fa-youtube",
        _ => "fas fa-globe",
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let content = content();
    let company = &content.company;

    html! {
        <footer class="site-footer">
            <style>{FOOTER_CSS}</style>
            <div class="divider" />
            <div class="footer-inner">
                <div class="footer-grid">
                    <div>
                        <div class="footer-brand">
                            <img src="/assets/logo3.png" alt="Mordev logo" />
                            <span>{&company.name}</span>
                        </div>
                        <p>
                            { for company.address.iter().map(|line| html! { <>{line}<br /></> }) }
                        </p>
                        <p>{"Phone number"}<br /><span class="footer-highlight">{&company.phone}</span></p>
                        <p>{"Email"}<br /><span class="footer-highlight">{&company.email}</span></p>
                    </div>

                    <div>
                        <h4>{"Services"}</h4>
                        <div class="footer-services">
                            { for content.services.iter().map(|service| html! {
                                <Link<Route> key={service.id.clone()} to={Route::Service { id: service.id.clone() }}>
                                    <span>{&service.title}</span>
                                </Link<Route>>
                            })}
                        </div>
                    </div>

                    <div>
                        <h4>{"Social"}</h4>
                        <ul>
                            { for company.socials.iter().map(|social| html! {
                                <li key={social.clone()}>
                                    <i class={social_icon(social)}></i>{" "}{social}
                                </li>
                            })}
                        </ul>
                    </div>

                    <div>
                        <h4>{"Legal"}</h4>
                        <ul>
                            <li><Link<Route> to={Route::PrivacyPolicy}>{"Privacy Policy"}</Link<Route>></li>
                        </ul>
                    </div>
                </div>

                <div class="footer-bottom">
                    {format!("© {} {}. All rights reserved.", chrono::Local::now().format("%Y"), company.name)}
                </div>
            </div>
        </footer>
    }
}
