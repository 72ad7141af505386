use arcane_core::tracker::{has_crossed, AnchorProbe};
use web_sys::Element;
use yew::prelude::*;

use crate::browser::{listen_window, WindowScroll};

const REVEAL_CSS: &str = r#"
    .reveal {
        opacity: 0;
        transform: translateY(40px);
        transition: opacity 0.8s ease-out, transform 0.8s ease-out;
    }
    .reveal.revealed {
        opacity: 1;
        transform: translateY(0);
    }
"#;

/// Fraction of the viewport an element's top must rise above before it
/// fades in.
pub const REVEAL_RATIO: f64 = 0.8;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Fades its children in the first time they scroll into view. Stays
/// revealed afterwards.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_state_eq(|| false);

    {
        let node = node.clone();
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |_| {
                let check = move || {
                    let Some(element) = node.cast::<Element>() else {
                        return;
                    };
                    let top = element.get_bounding_client_rect().top();
                    if has_crossed(top, WindowScroll.viewport_height(), REVEAL_RATIO) {
                        revealed.set(true);
                    }
                };
                check();
                let guard = listen_window("scroll", Box::new(check));
                move || drop(guard)
            },
            (),
        );
    }

    html! {
        <div ref={node} class={classes!("reveal", (*revealed).then_some("revealed"), props.class.clone())}>
            <style>{REVEAL_CSS}</style>
            { for props.children.iter() }
        </div>
    }
}
