//! Timer Panel Component
//!
//! Countdown display with start/pause, reset and the minutes input.

use leptos::prelude::*;

use crate::context::{duration_minutes, AppContext};
use crate::timer::format_clock;

/// Countdown timer panel
#[component]
pub fn TimerPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let timer = ctx.timer_state;
    let minutes = duration_minutes(timer);

    view! {
        <section class="panel timer-panel">
            <h2>"Timer"</h2>
            <div class="timer-clock">{move || format_clock(timer.get().remaining_secs)}</div>
            <div class="timer-controls">
                <button on:click=move |_| ctx.toggle_timer()>
                    {move || if timer.get().active { "Pause" } else { "Start" }}
                </button>
                <button class="outline" on:click=move |_| ctx.reset_timer()>"Reset"</button>
            </div>
            // Applies on the next reset
            <label class="timer-duration">
                "Minutes"
                <input
                    type="number"
                    min="1"
                    step="1"
                    prop:value=move || minutes.get().to_string()
                    on:change=move |ev| ctx.set_timer_minutes(&event_target_value(&ev))
                />
            </label>
        </section>
    }
}
