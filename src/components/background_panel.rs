//! Background Panel Component
//!
//! Background select plus, in video mode, the thumbnail video picker.

use leptos::prelude::*;

use crate::store::{store_select_background, store_select_video, use_app_store, AppStateStoreFields};

/// Background chooser panel
#[component]
pub fn BackgroundPanel() -> impl IntoView {
    let store = use_app_store();
    let (backgrounds, videos) = {
        let selector = store.background().read_untracked();
        (selector.backgrounds().to_vec(), selector.videos().to_vec())
    };

    let current_id = move || store.background().read().current().id.clone();
    let is_video = move || store.background().read().is_video_mode();
    let video_id = move || store.background().read().video_id().to_string();

    let on_select = move |ev: web_sys::Event| {
        if let Err(err) = store_select_background(&store, &event_target_value(&ev)) {
            log::debug!("[BACKGROUND] {}", err);
        }
    };

    view! {
        <section class="panel background-panel">
            <h2>"Backgrounds"</h2>
            <select class="background-select" on:change=on_select>
                {backgrounds.into_iter().map(|bg| {
                    let id = bg.id.clone();
                    view! {
                        <option value=bg.id prop:selected=move || current_id() == id>
                            {bg.name}
                        </option>
                    }
                }).collect_view()}
            </select>

            <Show when=is_video>
                <Show when=move || video_id().is_empty()>
                    <p class="hint">"Choose a video"</p>
                </Show>
                <div class="video-picker">
                    {videos.iter().map(|video| {
                        let id = video.id.clone();
                        let active_id = video.id.clone();
                        view! {
                            <button
                                type="button"
                                class=move || if video_id() == active_id { "video-thumb active" } else { "video-thumb" }
                                on:click=move |_| {
                                    if let Err(err) = store_select_video(&store, &id) {
                                        log::debug!("[BACKGROUND] {}", err);
                                    }
                                }
                            >
                                <img src=video.thumbnail.clone() alt=format!("Thumbnail for {}", video.id) />
                            </button>
                        }
                    }).collect_view()}
                </div>
            </Show>
        </section>
    }
}
