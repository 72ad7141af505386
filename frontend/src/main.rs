use yew::prelude::*;
use yew_router::prelude::*;

mod browser;
mod config;
mod components {
    pub mod brands_marquee;
    pub mod calendar;
    pub mod footer;
    pub mod galaxy_clock;
    pub mod navbar;
    pub mod planet;
    pub mod reveal;
    pub mod story_scroll;
    pub mod typing_text;
}
mod pages {
    pub mod about_us;
    pub mod contact;
    pub mod faq;
    pub mod feedback;
    pub mod founder;
    pub mod homepage;
    pub mod main_page;
    pub mod privacy_policy;
    pub mod service;
    pub mod services;
}

use components::footer::Footer;
use components::navbar::Navbar;
use pages::contact::Contact;
use pages::main_page::MainPage;
use pages::privacy_policy::PrivacyPolicy;
use pages::service::ServicePage;
use pages::services::Services;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/contact")]
    Contact,
    #[at("/services")]
    Services,
    #[at("/service/:id")]
    Service { id: String },
    #[at("/privacy-policy")]
    PrivacyPolicy,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    log::info!("Route: {}", routes.to_path());
    match routes {
        Route::Home => html! { <MainPage /> },
        Route::Contact => html! { <Contact /> },
        Route::Services => html! {
            <>
                <Services />
                <Footer />
            </>
        },
        Route::Service { id } => html! { <ServicePage {id} /> },
        Route::PrivacyPolicy => html! { <PrivacyPolicy /> },
        Route::NotFound => html! {
            <div class="not-found">
                <h1>{"404"}</h1>
                <p>{"This page drifted out of orbit."}</p>
                <Link<Route> to={Route::Home} classes="back-button">{"Back home"}</Link<Route>>
            </div>
        },
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Navbar />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Starting Mordev Arcane frontend");
    yew::Renderer::<App>::new().render();
}
