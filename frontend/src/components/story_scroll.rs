use arcane_core::section::{Section, SectionId};
use yew::prelude::*;

use crate::browser::scroll_to_section;

const RAIL_CSS: &str = r#"
    .story-rail {
        position: fixed;
        right: 2rem;
        top: 50%;
        transform: translateY(-50%);
        z-index: 999;
        display: flex;
        flex-direction: column;
        gap: 1.5rem;
    }
    .story-rail button {
        width: 2.25rem;
        height: 2.25rem;
        border-radius: 50%;
        border: none;
        display: flex;
        align-items: center;
        justify-content: center;
        background: rgba(255, 255, 255, 0.1);
        color: #fff;
        cursor: pointer;
        transition: all 0.3s ease;
    }
    .story-rail button:hover {
        background: rgba(0, 202, 235, 0.3);
    }
    .story-rail button.active {
        background: #00caeb;
        color: #000;
        transform: scale(1.1);
        box-shadow: 0 0 12px #00caeb;
    }
    @media (max-width: 768px) {
        .story-rail {
            right: 0.75rem;
        }
    }
"#;

fn icon_for(id: &SectionId) -> &'static str {
    match id.as_str() {
        "top" => "fas fa-house",
        "services" => "fas fa-layer-group",
        "AboutUs" => "fas fa-circle-info",
        "Founder" => "fas fa-user",
        "Feedback" => "fas fa-message",
        "FAQ" => "fas fa-circle-question",
        _ => "fas fa-circle",
    }
}

#[derive(Properties, PartialEq)]
pub struct StoryScrollProps {
    pub sections: Vec<Section>,
    pub active: SectionId,
}

/// Side navigation rail. Highlighting follows the section tracker; a click
/// only scrolls, the tracker picks up the new position on its own.
#[function_component(StoryScroll)]
pub fn story_scroll(props: &StoryScrollProps) -> Html {
    html! {
        <nav class="story-rail">
            <style>{RAIL_CSS}</style>
            { for props.sections.iter().map(|section| {
                let id = section.id.clone();
                let onclick = Callback::from(move |_: MouseEvent| scroll_to_section(id.as_str()));
                html! {
                    <button
                        key={section.id.to_string()}
                        title={section.label.clone()}
                        class={classes!((section.id == props.active).then_some("active"))}
                        {onclick}
                    >
                        <i class={icon_for(&section.id)}></i>
                    </button>
                }
            })}
        </nav>
    }
}
