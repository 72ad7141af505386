use arcane_core::calendar::{hour_options, minute_options, DayTimePicker, WEEKDAY_LABELS};
use arcane_core::pointer::{LocalPoint, Tilt};
use chrono::{Local, NaiveDateTime};
use web_sys::{HtmlElement, HtmlSelectElement};
use yew::prelude::*;

use crate::browser::alert;

const CALENDAR_CSS: &str = r#"
    .perspective-wrapper {
        perspective: 1000px;
        max-width: 28rem;
        margin: 0 auto;
        color: #fff;
    }
    .calendar-3d-card {
        border-radius: 1rem;
        transition: transform 0.1s ease-out;
        transform-style: preserve-3d;
    }
    .calendar-inner-card {
        border-radius: 1rem;
        border: 1px solid rgba(255, 255, 255, 0.1);
        padding: 1.5rem;
        background-color: rgba(11, 13, 26, 0.9);
        backdrop-filter: blur(10px);
    }
    .calendar-header {
        display: flex;
        align-items: center;
        justify-content: space-between;
        margin-bottom: 0.75rem;
        font-weight: 600;
        font-size: 1.125rem;
    }
    .calendar-header button {
        padding: 0.25rem 0.5rem;
        background: #374151;
        border: none;
        border-radius: 0.25rem;
        color: #fff;
        cursor: pointer;
    }
    .calendar-grid {
        display: grid;
        grid-template-columns: repeat(7, 1fr);
        gap: 0.25rem;
        text-align: center;
    }
    .calendar-weekday {
        font-weight: 600;
        color: #d1d5db;
    }
    .calendar-day {
        padding: 0.5rem;
        border-radius: 0.5rem;
        cursor: pointer;
        transition: all 0.2s;
    }
    .calendar-day:hover {
        background: #374151;
    }
    .calendar-day.selected {
        background: #3b82f6;
        box-shadow: 0 4px 12px rgba(59, 130, 246, 0.5);
    }
    .calendar-time {
        display: flex;
        gap: 1rem;
        justify-content: center;
        margin-top: 0.5rem;
    }
    .calendar-time select {
        background: #1f2937;
        color: #fff;
        padding: 0.25rem;
        border-radius: 0.25rem;
    }
    .calendar-submit {
        width: 100%;
        margin-top: 0.5rem;
        padding: 0.5rem;
        border: none;
        border-radius: 0.5rem;
        background: #2563eb;
        color: #fff;
        font-weight: 600;
        cursor: pointer;
    }
"#;

#[derive(Properties, PartialEq)]
pub struct CalendarProps {
    #[prop_or_default]
    pub on_select: Option<Callback<NaiveDateTime>>,
    /// Called with the zero-padded hour whenever the hour select changes.
    #[prop_or_default]
    pub on_time_change: Option<Callback<String>>,
}

fn time_option(value: String, current: &str) -> Html {
    let selected = value == current;
    let label = value.clone();
    html! { <option {selected} {value}>{label}</option> }
}

#[function_component(Calendar)]
pub fn calendar(props: &CalendarProps) -> Html {
    let picker = use_state(|| DayTimePicker::new(Local::now().date_naive()));
    let card_ref = use_node_ref();

    let update = |apply: fn(&mut DayTimePicker)| {
        let picker = picker.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*picker).clone();
            apply(&mut next);
            picker.set(next);
        })
    };
    let prev_month = update(DayTimePicker::prev_month);
    let next_month = update(DayTimePicker::next_month);

    let select_day = |day: u32| {
        let picker = picker.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*picker).clone();
            next.select_day(day);
            picker.set(next);
        })
    };

    let on_hour = {
        let picker = picker.clone();
        let on_time_change = props.on_time_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*picker).clone();
            next.set_hour(&select.value());
            if let Some(on_time_change) = &on_time_change {
                on_time_change.emit(next.hour());
            }
            picker.set(next);
        })
    };
    let on_minute = {
        let picker = picker.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*picker).clone();
            next.set_minute(&select.value());
            picker.set(next);
        })
    };

    let on_submit = {
        let picker = picker.clone();
        let on_select = props.on_select.clone();
        Callback::from(move |_: MouseEvent| match picker.submit() {
            Ok(selected) => {
                log::info!("Calendar selection: {}", selected);
                if let Some(on_select) = &on_select {
                    on_select.emit(selected);
                }
                alert(&format!("Selected: {}", selected.format("%a %b %-d %Y %H:%M")));
            }
            Err(e) => alert(&e.to_string()),
        })
    };

    let tilt_card = |card: &NodeRef, tilt: Tilt| {
        if let Some(card) = card.cast::<HtmlElement>() {
            if let Err(e) = card.style().set_property("transform", &tilt.to_css()) {
                log::warn!("Failed to tilt calendar card: {:?}", e);
            }
        }
    };

    let on_mouse_move = {
        let card_ref = card_ref.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(card) = card_ref.cast::<HtmlElement>() else {
                return;
            };
            let rect = card.get_bounding_client_rect();
            let point = LocalPoint::from_client(
                f64::from(e.client_x()),
                f64::from(e.client_y()),
                rect.left(),
                rect.top(),
            );
            tilt_card(&card_ref, Tilt::toward(point, rect.width(), rect.height()));
        })
    };
    let on_mouse_leave = {
        let card_ref = card_ref.clone();
        Callback::from(move |_: MouseEvent| tilt_card(&card_ref, Tilt::FLAT))
    };

    let month = picker.month();
    let selected = picker.selected_day();
    let hour = picker.hour();
    let minute = picker.minute();

    html! {
        <div class="perspective-wrapper">
            <style>{CALENDAR_CSS}</style>
            <div
                ref={card_ref}
                class="calendar-3d-card card-border-animation purple"
                onmousemove={on_mouse_move}
                onmouseleave={on_mouse_leave}
            >
                <div class="calendar-inner-card">
                    <div class="calendar-header">
                        <button onclick={prev_month}><i class="fas fa-arrow-left"></i></button>
                        <span>{month.title()}</span>
                        <button onclick={next_month}><i class="fas fa-arrow-right"></i></button>
                    </div>

                    <div class="calendar-grid">
                        { for WEEKDAY_LABELS.iter().map(|day| html! {
                            <div key={*day} class="calendar-weekday">{*day}</div>
                        })}
                        { for month.grid().into_iter().enumerate().map(|(cell, day)| match day {
                            Some(day) => html! {
                                <div
                                    key={cell}
                                    class={classes!("calendar-day", (selected == Some(day)).then_some("selected"))}
                                    onclick={select_day(day)}
                                >
                                    {day}
                                </div>
                            },
                            None => html! { <div key={cell}></div> },
                        })}
                    </div>

                    <div class="calendar-time">
                        <div>
                            <label>{"Hour"}</label>
                            <select onchange={on_hour}>
                                { for hour_options().into_iter().map(|h| time_option(h, &hour)) }
                            </select>
                        </div>
                        <div>
                            <label>{"Minute"}</label>
                            <select onchange={on_minute}>
                                { for minute_options().into_iter().map(|m| time_option(m, &minute)) }
                            </select>
                        </div>
                    </div>

                    <button class="calendar-submit" onclick={on_submit}>{"Save Selection"}</button>
                </div>
            </div>
        </div>
    }
}
