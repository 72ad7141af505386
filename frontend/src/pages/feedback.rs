use arcane_core::content::Feedback as Review;
use yew::prelude::*;

use crate::browser::use_is_mobile;
use crate::components::reveal::Reveal;
use crate::config::content;

const FEEDBACK_CSS: &str = r#"
    .feedback-section {
        position: relative;
        width: 100%;
        min-height: 85vh;
        display: flex;
        align-items: center;
        justify-content: center;
        padding: 6rem 1.5rem;
        box-sizing: border-box;
        background: url("/assets/feedback_bg.jpg") center / cover;
    }
    .feedback-section .overlay {
        position: absolute;
        inset: 0;
        background: rgba(0, 0, 0, 0.4);
    }
    .feedback-panel {
        position: relative;
        z-index: 10;
        max-width: 80rem;
        width: 100%;
        display: flex;
        align-items: flex-start;
        gap: 4rem;
        padding: 5rem 3.5rem;
        border-radius: 1.5rem;
        background: rgba(255, 255, 255, 0.1);
        backdrop-filter: blur(24px);
        box-sizing: border-box;
    }
    .feedback-panel.mobile {
        flex-direction: column;
        align-items: center;
        gap: 2rem;
        text-align: center;
    }
    .quote-badge {
        position: absolute;
        top: -2.5rem;
        left: -2.5rem;
        width: 5rem;
        height: 5rem;
        border-radius: 50%;
        background: #fff;
        color: #000;
        display: flex;
        align-items: center;
        justify-content: center;
        font-size: 1.875rem;
    }
    .feedback-intro {
        flex: 1;
        max-width: 28rem;
        color: #fff;
    }
    .feedback-intro h2 {
        font-size: 3rem;
        line-height: 1.1;
        margin: 0;
    }
    .feedback-intro p {
        color: #d1d5db;
        margin-top: 1.5rem;
    }
    .feedback-cards {
        display: flex;
        gap: 2.5rem;
    }
    .feedback-panel.mobile .feedback-cards {
        flex-direction: column;
        align-items: center;
        width: 100%;
    }
    .feedback-card {
        width: 18rem;
        min-height: 320px;
        padding: 1.5rem;
        border-radius: 1.5rem;
        background: #fff;
        box-sizing: border-box;
        display: flex;
        flex-direction: column;
        justify-content: space-between;
        text-align: left;
    }
    .feedback-card .quote-mark {
        width: 2.75rem;
        height: 2.75rem;
        border-radius: 50%;
        background: #000;
        color: #fff;
        display: flex;
        align-items: center;
        justify-content: center;
    }
    .feedback-card h3 {
        color: #000;
        font-size: 1.125rem;
    }
    .feedback-card p {
        color: #374151;
        font-size: 0.875rem;
        line-height: 1.6;
    }
    .feedback-card footer {
        display: flex;
        justify-content: space-between;
        align-items: center;
    }
    .feedback-card .role {
        font-size: 0.75rem;
        color: #6b7280;
    }
    .stars {
        color: #facc15;
    }
"#;

#[derive(Properties, PartialEq)]
struct FeedbackCardProps {
    review: Review,
}

#[function_component(FeedbackCard)]
fn feedback_card(props: &FeedbackCardProps) -> Html {
    let review = &props.review;
    html! {
        <div class="feedback-card">
            <div class="quote-mark"><i class="fas fa-quote-left"></i></div>
            <div>
                <h3>{&review.title}</h3>
                <p>{format!("“{}”", review.message)}</p>
            </div>
            <footer>
                <div>
                    <p><strong>{&review.name}</strong></p>
                    <p class="role">{&review.role}</p>
                </div>
                <span class="stars">{("★").repeat(usize::from(review.stars))}</span>
            </footer>
        </div>
    }
}

#[function_component(Feedback)]
pub fn feedback() -> Html {
    let is_mobile = use_is_mobile();

    html! {
        <div class="feedback-section">
            <style>{FEEDBACK_CSS}</style>
            <div class="overlay" />
            <Reveal class={classes!("feedback-panel", is_mobile.then_some("mobile"))}>
                <div class="quote-badge"><i class="fas fa-quote-left"></i></div>
                <div class="feedback-intro">
                    <h2>{"What Our"}<br />{"Customers Say"}</h2>
                    <p>{"Real experiences from people who trusted our process and results."}</p>
                </div>
                <div class="feedback-cards">
                    { for content().feedback.iter().enumerate().map(|(i, review)| html! {
                        <FeedbackCard key={i} review={review.clone()} />
                    })}
                </div>
            </Reveal>
        </div>
    }
}
