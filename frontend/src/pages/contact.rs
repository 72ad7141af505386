use yew::prelude::*;

use crate::browser::scroll_to_top;
use crate::components::calendar::Calendar;
use crate::components::footer::Footer;
use crate::components::galaxy_clock::GalaxyClock;

const CONTACT_CSS: &str = r#"
    .contact-page {
        display: flex;
        flex-direction: column;
        min-height: 100vh;
        background: #000;
    }
    .contact-widgets {
        flex: 1;
        display: flex;
        gap: 2.5rem;
        padding: 2.5rem;
        justify-content: center;
        align-items: center;
        overflow: hidden;
    }
    .contact-widgets > div {
        flex: 1;
        display: flex;
        justify-content: center;
        align-items: center;
        z-index: 20;
    }
    .contact-clock {
        height: 600px;
    }
    @media (max-width: 768px) {
        .contact-widgets { flex-direction: column; }
    }
"#;

#[function_component(Contact)]
pub fn contact() -> Html {
    use_effect_with_deps(
        |_| {
            scroll_to_top();
            || ()
        },
        (),
    );

    html! {
        <div class="contact-page">
            <style>{CONTACT_CSS}</style>
            <section class="contact-widgets">
                <div><Calendar /></div>
                <div class="contact-clock"><GalaxyClock /></div>
            </section>
            <Footer />
        </div>
    }
}
