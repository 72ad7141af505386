use arcane_core::clock::{digital_time, short_date, HandAngles};
use chrono::Local;
use gloo_timers::callback::Interval;
use yew::prelude::*;

const CLOCK_CSS: &str = r#"
    .galaxy-clock {
        position: relative;
        width: 18rem;
        height: 18rem;
        margin: 0 auto 3rem;
    }
    .clock-face {
        position: relative;
        width: 100%;
        height: 100%;
        border-radius: 50%;
        background: rgba(0, 0, 0, 0.4);
        backdrop-filter: blur(24px);
        border: 4px solid #22d3ee;
        box-shadow: 0 0 50px rgba(0, 255, 255, 0.3);
    }
    .clock-center {
        position: absolute;
        top: 50%;
        left: 50%;
        width: 1rem;
        height: 1rem;
        transform: translate(-50%, -50%);
        border-radius: 50%;
        background: #fff;
        z-index: 20;
    }
    .clock-digital {
        position: absolute;
        top: 50%;
        left: 50%;
        transform: translate(-50%, 1.5rem);
        font-family: monospace;
        font-size: 0.875rem;
        color: #fff;
        z-index: 20;
    }
    .clock-hand {
        position: absolute;
        left: 50%;
        bottom: 50%;
        border-radius: 0.25rem;
        transform-origin: bottom;
    }
    .clock-hand.hour { width: 0.5rem; height: 5rem; background: #fff; box-shadow: 0 0 25px cyan; }
    .clock-hand.minute { width: 0.375rem; height: 7rem; background: #22d3ee; box-shadow: 0 0 30px cyan; }
    .clock-hand.second { width: 0.25rem; height: 8rem; background: #a855f7; box-shadow: 0 0 35px purple; }
    .clock-date {
        position: absolute;
        bottom: -2.5rem;
        width: 100%;
        text-align: center;
        font-family: monospace;
        font-size: 1.125rem;
        color: #d1d5db;
    }
"#;

/// Redraw period; short enough for the sweeping second hand.
const TICK_MS: u32 = 50;

fn hand(class: &'static str, degrees: f64) -> Html {
    html! {
        <div
            class={classes!("clock-hand", class)}
            style={format!("transform: translateX(-50%) rotate({}deg);", degrees)}
        />
    }
}

#[function_component(GalaxyClock)]
pub fn galaxy_clock() -> Html {
    let now = use_state(|| Local::now().naive_local());

    {
        let now = now.clone();
        use_effect_with_deps(
            move |_| {
                let interval = Interval::new(TICK_MS, move || now.set(Local::now().naive_local()));
                move || drop(interval)
            },
            (),
        );
    }

    let angles = HandAngles::at(&*now);

    html! {
        <div class="galaxy-clock">
            <style>{CLOCK_CSS}</style>
            <div class="clock-face">
                <div class="clock-center" />
                <div class="clock-digital">{digital_time(&*now)}</div>
                { hand("hour", angles.hours) }
                { hand("minute", angles.minutes) }
                { hand("second", angles.seconds) }
            </div>
            <div class="clock-date">{short_date(&now)}</div>
        </div>
    }
}
