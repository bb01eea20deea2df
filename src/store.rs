//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity over the task
//! list and the background selector.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::background::BackgroundSelector;
use crate::config::OasisConfig;
use crate::error::OasisError;
use crate::tasks::TaskList;

/// Plain-data UI state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct AppState {
    /// Checklist in insertion order
    pub tasks: TaskList,
    /// Current background and video choice
    pub background: BackgroundSelector,
}

impl AppState {
    pub fn new(config: &OasisConfig) -> Result<Self, OasisError> {
        Ok(Self {
            tasks: TaskList::new(),
            background: BackgroundSelector::new(
                config.backgrounds.clone(),
                config.videos.clone(),
                config.embed.host.clone(),
            )?,
        })
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_add_task(store: &AppStore, text: &str) -> Result<(), OasisError> {
    store.tasks().write().add_task(text).map(|_| ())
}

pub fn store_toggle_task(store: &AppStore, index: usize) {
    store.tasks().write().toggle_task(index);
}

pub fn store_select_background(store: &AppStore, id: &str) -> Result<(), OasisError> {
    let field = store.background();
    let mut background = field.write();
    let selected = background.select_background(id)?;
    log::info!("[BACKGROUND] {}", selected.name);
    Ok(())
}

pub fn store_select_video(store: &AppStore, video_id: &str) -> Result<(), OasisError> {
    store.background().write().select_video(video_id)
}
