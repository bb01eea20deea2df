//! Video Background Component
//!
//! Full-bleed embedded video behind the content. Not interactive.

use leptos::prelude::*;

#[component]
pub fn VideoBackground(#[prop(into)] src: String) -> impl IntoView {
    view! {
        <div class="video-background">
            <iframe
                src=src
                title="Background video"
                allow="autoplay; encrypted-media; fullscreen"
                allowfullscreen=true
                tabindex="-1"
            ></iframe>
        </div>
    }
}
