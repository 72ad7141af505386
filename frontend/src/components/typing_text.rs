use arcane_core::typing::Typewriter;
use gloo_timers::callback::Timeout;
use std::time::Duration;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TypingTextProps {
    pub text: AttrValue,
    pub speed: Duration,
}

#[function_component(TypingText)]
pub fn typing_text(props: &TypingTextProps) -> Html {
    let typer = use_state(|| Typewriter::new(&props.text));

    // restart when the text changes
    {
        let typer = typer.clone();
        use_effect_with_deps(
            move |text: &AttrValue| {
                typer.set(Typewriter::new(text));
                || ()
            },
            props.text.clone(),
        );
    }

    // one Timeout per character; dropping it on re-render cancels the tick
    {
        let typer = typer.clone();
        let millis = u32::try_from(props.speed.as_millis()).unwrap_or(u32::MAX);
        let deps = (*typer).clone();
        use_effect_with_deps(
            move |current: &Typewriter| {
                let mut next = current.clone();
                let handle = next.tick().then(|| Timeout::new(millis, move || typer.set(next)));
                move || drop(handle)
            },
            deps,
        );
    }

    html! {
        <p class="typing-text">
            { typer.displayed() }
            if typer.show_cursor() {
                <span class="typing-cursor"></span>
            }
        </p>
    }
}
