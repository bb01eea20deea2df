//! Sound Panel Component
//!
//! One row per ambient channel with play/pause and a volume slider.

use leptos::prelude::*;

use crate::context::{channel_field, AppContext};
use crate::models::SoundMode;

/// Single channel row; state is read by position from the context
#[component]
fn SoundRow(index: usize, id: String, name: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let playing = channel_field(ctx.channels, index, |c| c.playing);
    let volume = channel_field(ctx.channels, index, |c| c.volume);
    let label = format!("{} volume", name);
    let toggle_id = id.clone();

    view! {
        <div class="sound-row">
            <span class="sound-name">{name}</span>
            <div class="sound-controls">
                <button
                    class=move || if playing.get() { "sound-btn playing" } else { "sound-btn" }
                    on:click=move |_| ctx.toggle_sound(&toggle_id)
                >
                    {move || if playing.get() { "Pause" } else { "Play" }}
                </button>
                <input
                    type="range"
                    min="0"
                    max="1"
                    step="0.01"
                    aria-label=label
                    prop:value=move || volume.get().to_string()
                    on:input=move |ev| {
                        if let Ok(value) = event_target_value(&ev).parse::<f64>() {
                            ctx.set_sound_volume(&id, value);
                        }
                    }
                />
            </div>
        </div>
    }
}

/// Ambient sounds panel
#[component]
pub fn SoundPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    // The track set is fixed for the lifetime of the view
    let rows = ctx.channels.get_untracked();

    view! {
        <section class="panel sound-panel">
            <h2>"Ambient Sounds"</h2>
            <Show when=move || ctx.sound_mode == SoundMode::Single>
                <p class="hint">"One sound at a time"</p>
            </Show>
            <div class="sound-list">
                {rows.into_iter().enumerate().map(|(index, channel)| view! {
                    <SoundRow index=index id=channel.id name=channel.name />
                }).collect_view()}
            </div>
        </section>
    }
}
