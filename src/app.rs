//! Productivity Oasis App
//!
//! Main application component: background layer behind a two-column
//! layout of tasks/timer and sounds/backgrounds.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{BackgroundPanel, SoundPanel, TaskPanel, TimerPanel, VideoBackground};
use crate::config::OasisConfig;
use crate::context::AppContext;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App(config: OasisConfig, state: AppState) -> impl IntoView {
    // Store for plain data, context for the timer and sound units
    let store = Store::new(state);
    provide_context(store);
    let ctx = AppContext::new(&config);
    provide_context(ctx);
    on_cleanup(move || ctx.teardown());

    log::info!(
        "[APP] mounted with {} sounds, {} backgrounds, {} videos",
        config.sounds.tracks.len(),
        config.backgrounds.len(),
        config.videos.len()
    );

    let root_class = move || match store.background().read().style_class() {
        Some(class) => format!("oasis {}", class),
        None => "oasis".to_string(),
    };
    let embed = Memo::new(move |_| store.background().read().embed_url());

    view! {
        <div class=root_class>
            {move || embed.get().map(|src| view! { <VideoBackground src=src /> })}

            <div class="oasis-content">
                <h1>{config.title.clone()}</h1>
                <div class="oasis-grid">
                    <div class="oasis-column">
                        <TaskPanel />
                        <TimerPanel />
                    </div>
                    <div class="oasis-column">
                        <SoundPanel />
                        <BackgroundPanel />
                    </div>
                </div>
            </div>
        </div>
    }
}
